use std::sync::Arc;

use tracing::{error, info, warn};

use crate::{
    application::{
        error::ApplicationError,
        services::{filename_generator, StorageService, UploadValidator},
    },
    domain::{
        config::UploadLimits,
        models::file::{FileMetadata, UploadRequest},
    },
};

/// Turns an [`UploadRequest`] into stored files.
///
/// A batch is all-or-nothing: every file is validated before the first one is
/// written, and if a write fails the files already stored by the same batch
/// are removed again.
pub struct UploadService {
    storage: Arc<dyn StorageService>,
    validator: UploadValidator,
}

impl UploadService {
    pub fn new(storage: Arc<dyn StorageService>, limits: &UploadLimits) -> Self {
        Self {
            storage,
            validator: UploadValidator::new(limits),
        }
    }

    /// Store the files sent under `field`. `max_files` of `None` means no
    /// limit on the number of files.
    pub async fn accept(
        &self,
        request: UploadRequest,
        field: &str,
        max_files: Option<usize>,
    ) -> Result<Vec<FileMetadata>, ApplicationError> {
        if let Some(unexpected) = request.unexpected_fields(field).next() {
            return Err(ApplicationError::BadRequest(format!(
                "Unexpected field '{}'.",
                unexpected
            )));
        }

        if request.is_empty() {
            return Err(ApplicationError::NoFileProvided);
        }

        if let Some(max) = max_files {
            if request.files.len() > max {
                return Err(ApplicationError::TooManyFiles(max));
            }
        }

        for file in &request.files {
            self.validator
                .validate(&file.mime_type, file.size())
                .map_err(|rejection| {
                    warn!(
                        "Rejected upload '{}' ({}, {} bytes): {:?}",
                        file.filename,
                        file.mime_type,
                        file.size(),
                        rejection
                    );
                    ApplicationError::from(rejection)
                })?;
        }

        let mut stored = Vec::with_capacity(request.files.len());
        for file in &request.files {
            let storage_name = filename_generator::generate_name(&file.field_name, &file.filename);

            match self.storage.upload(&storage_name, file).await {
                Ok(metadata) => {
                    info!(
                        "Stored '{}' as {} ({} bytes)",
                        metadata.original_filename, metadata.storage_name, metadata.size
                    );
                    stored.push(metadata);
                }
                Err(e) => {
                    error!("Failed to store '{}': {}", file.filename, e);
                    self.rollback(&stored).await;
                    return Err(e);
                }
            }
        }

        Ok(stored)
    }

    async fn rollback(&self, stored: &[FileMetadata]) {
        for metadata in stored {
            if let Err(e) = self.storage.delete(&metadata.storage_name).await {
                error!(
                    "Failed to remove {} after aborted batch: {}",
                    metadata.storage_name, e
                );
            }
        }
    }
}
