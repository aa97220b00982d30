pub mod filename_generator;
pub mod listing_service;
pub mod storage_service;
pub mod upload_service;
pub mod upload_validator;

pub use listing_service::ListingService;
pub use storage_service::StorageService;
pub use upload_service::UploadService;
pub use upload_validator::{Rejection, UploadValidator};
