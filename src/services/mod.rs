mod error;
mod local_storage;

pub use error::StorageError;
pub use local_storage::LocalStorageService;

use std::sync::Arc;

use crate::{
    application::{error::ApplicationError, services::StorageService},
    domain::config::ServerConfig,
};

/// Build the storage backend for this server and make sure its directory is
/// usable. Fails with `StorageUnavailable` when the directory cannot be
/// created.
pub async fn create_storage_service(
    config: &ServerConfig,
) -> Result<Arc<dyn StorageService>, ApplicationError> {
    let service = LocalStorageService::new(config.upload_dir.clone());
    service.ensure_directory().await?;
    Ok(Arc::new(service))
}
