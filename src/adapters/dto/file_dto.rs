use serde::Deserialize;

use crate::domain::models::{
    file::FileMetadata,
    listing::{FileSummary, Preview},
};

/// Path of the download endpoint for a storage name.
pub fn download_url(storage_name: &str) -> String {
    format!("/download/{}", urlencoding::encode(storage_name))
}

pub fn delete_url(storage_name: &str) -> String {
    format!("/delete/{}", urlencoding::encode(storage_name))
}

/// Path under which the stored bytes are served inline.
pub fn inline_url(storage_name: &str) -> String {
    format!("/uploads/{}", urlencoding::encode(storage_name))
}

/// `/` carrying `message` as the banner text.
pub fn listing_url(message: &str) -> String {
    format!("/?message={}", urlencoding::encode(message))
}

/// One accepted file as shown on the upload summary page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFileView {
    pub storage_name: String,
    pub size: u64,
    pub mime_type: String,
    pub download_url: String,
}

impl From<FileMetadata> for UploadedFileView {
    fn from(metadata: FileMetadata) -> Self {
        Self {
            download_url: download_url(&metadata.storage_name),
            storage_name: metadata.storage_name,
            size: metadata.size,
            mime_type: metadata.mime_type,
        }
    }
}

/// One row of the directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntryView {
    pub name: String,
    pub size_kib: u64,
    pub download_url: String,
    pub delete_url: String,
    pub preview: PreviewView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewView {
    Image { src: String },
    Text(String),
    None,
}

impl From<FileSummary> for FileEntryView {
    fn from(summary: FileSummary) -> Self {
        let size_kib = summary.size_kib();
        let preview = match summary.preview {
            Preview::Image => PreviewView::Image {
                src: inline_url(&summary.name),
            },
            Preview::Text(text) => PreviewView::Text(text),
            Preview::None => PreviewView::None,
        };

        Self {
            download_url: download_url(&summary.name),
            delete_url: delete_url(&summary.name),
            name: summary.name,
            size_kib,
            preview,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct ListingQuery {
    pub message: Option<String>,
}
