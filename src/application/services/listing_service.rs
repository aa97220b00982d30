use std::sync::Arc;

use tracing::warn;

use crate::{
    application::{error::ApplicationError, services::StorageService},
    domain::models::listing::{text_preview, FileSummary, Preview, PreviewKind, TEXT_PREVIEW_CHARS},
};

/// Bytes needed to hold the text preview even if every character is four
/// bytes long in UTF-8.
const TEXT_PREVIEW_BYTES: usize = TEXT_PREVIEW_CHARS * 4;

pub struct ListingService {
    storage: Arc<dyn StorageService>,
}

impl ListingService {
    pub fn new(storage: Arc<dyn StorageService>) -> Self {
        Self { storage }
    }

    /// Every stored file sorted by name, with its preview.
    pub async fn list_files(&self) -> Result<Vec<FileSummary>, ApplicationError> {
        let mut entries = self.storage.list().await?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let mut summaries = Vec::with_capacity(entries.len());
        for entry in entries {
            let preview = match PreviewKind::for_name(&entry.name) {
                PreviewKind::Image => Preview::Image,
                PreviewKind::Text => {
                    match self.storage.read_prefix(&entry.name, TEXT_PREVIEW_BYTES).await {
                        Ok(bytes) => Preview::Text(text_preview(&bytes)),
                        Err(e) => {
                            warn!("Cannot read preview for {}: {}", entry.name, e);
                            Preview::None
                        }
                    }
                }
                PreviewKind::None => Preview::None,
            };
            summaries.push(FileSummary::new(entry, preview));
        }

        Ok(summaries)
    }
}
