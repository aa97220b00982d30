use async_trait::async_trait;

use crate::{
    application::error::ApplicationError,
    domain::models::file::{FileData, FileMetadata, StoredEntry},
};

/// Flat store of uploaded files addressed by storage name.
#[async_trait]
pub trait StorageService: Send + Sync {
    /// Create the backing location if it is missing. Idempotent.
    async fn ensure_directory(&self) -> Result<(), ApplicationError>;

    /// Persist `file_data` under `storage_name`. Never overwrites an
    /// existing file.
    async fn upload(
        &self,
        storage_name: &str,
        file_data: &FileData,
    ) -> Result<FileMetadata, ApplicationError>;

    async fn download(&self, storage_name: &str) -> Result<Vec<u8>, ApplicationError>;

    /// Read at most `max_bytes` from the start of the file.
    async fn read_prefix(
        &self,
        storage_name: &str,
        max_bytes: usize,
    ) -> Result<Vec<u8>, ApplicationError>;

    async fn delete(&self, storage_name: &str) -> Result<(), ApplicationError>;

    /// Regular files in the store, in no particular order.
    async fn list(&self) -> Result<Vec<StoredEntry>, ApplicationError>;
}
