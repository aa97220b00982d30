use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    application::services::{ListingService, StorageService, UploadService},
    domain::config::AppConfig,
};

/// Shared, read-only request state.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub storage_service: Arc<dyn StorageService>,
    pub upload_service: Arc<UploadService>,
    pub listing_service: Arc<ListingService>,
}

impl AppState {
    pub fn new(config: AppConfig, storage_service: Arc<dyn StorageService>) -> Self {
        let upload_service = UploadService::new(storage_service.clone(), &config.limits);
        let listing_service = ListingService::new(storage_service.clone());

        Self {
            config: Arc::new(config),
            storage_service,
            upload_service: Arc::new(upload_service),
            listing_service: Arc::new(listing_service),
        }
    }
}
