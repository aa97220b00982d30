use std::path::PathBuf;


/// One file part received in a multipart request, before validation.
#[derive(Debug, Clone)]
pub struct FileData {
    pub field_name: String,
    pub content: Vec<u8>,
    pub filename: String,
    pub mime_type: String,
}

impl FileData {
    pub fn new(
        field_name: impl Into<String>,
        content: Vec<u8>,
        filename: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            content,
            filename: filename.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// Everything a client sent in one upload request.
#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    pub files: Vec<FileData>,
}

impl UploadRequest {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Names of file fields other than `expected`, in arrival order.
    pub fn unexpected_fields<'a>(&'a self, expected: &'a str) -> impl Iterator<Item = &'a str> {
        self.files
            .iter()
            .map(|f| f.field_name.as_str())
            .filter(move |name| *name != expected)
    }
}

/// A file that has been written to the upload directory.
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub original_filename: String,
    pub storage_name: String,
    pub size: u64,
    pub mime_type: String,
    pub path: PathBuf,
}

/// A regular file found while enumerating the upload directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEntry {
    pub name: String,
    pub size: u64,
}
