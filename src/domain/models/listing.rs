use std::path::Path;

use crate::domain::models::file::StoredEntry;

pub const TEXT_PREVIEW_CHARS: usize = 200;
pub const TRUNCATION_MARKER: &str = "...";

const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// What the listing shows next to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Image,
    Text(String),
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    Image,
    Text,
    None,
}

impl PreviewKind {
    pub fn for_name(name: &str) -> Self {
        let extension = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some(ext) if IMAGE_EXTENSIONS.contains(&ext) => PreviewKind::Image,
            Some("txt") => PreviewKind::Text,
            _ => PreviewKind::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub name: String,
    pub size: u64,
    pub preview: Preview,
}

impl FileSummary {
    pub fn new(entry: StoredEntry, preview: Preview) -> Self {
        Self {
            name: entry.name,
            size: entry.size,
            preview,
        }
    }

    /// Size in KiB, rounded to the nearest integer.
    pub fn size_kib(&self) -> u64 {
        (self.size + 512) / 1024
    }
}

/// First [`TEXT_PREVIEW_CHARS`] characters of `bytes` followed by the
/// truncation marker, which is appended even when nothing was cut.
pub fn text_preview(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let mut preview: String = text.chars().take(TEXT_PREVIEW_CHARS).collect();
    preview.push_str(TRUNCATION_MARKER);
    preview
}
