pub const DEFAULT_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;
pub const DEFAULT_MAX_FILES: usize = 5;
pub const DEFAULT_MIME_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "application/pdf", "text/plain"];

/// Upload policy applied to every incoming file.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadLimits {
    pub mime_types: Vec<String>,
    pub max_size: u64,
    pub max_files: usize,
}

impl UploadLimits {
    /// Upper bound for a whole multipart body: every allowed file at full
    /// size plus room for boundaries and headers.
    pub fn request_body_limit(&self) -> usize {
        let files = self.max_files.max(1) as u64;
        let limit = self
            .max_size
            .saturating_mul(files)
            .saturating_add(1024 * 1024);
        usize::try_from(limit).unwrap_or(usize::MAX)
    }
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            mime_types: DEFAULT_MIME_TYPES.iter().map(|m| m.to_string()).collect(),
            max_size: DEFAULT_MAX_FILE_SIZE,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}
