use std::io;

use thiserror::Error;

use crate::application::error::ApplicationError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage name: {0}")]
    InvalidName(String),

    #[error("File already exists: {0}")]
    AlreadyExists(String),

    #[error("Storage directory unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl StorageError {
    /// Classify an I/O failure on a single named file.
    pub fn from_io(name: &str, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => StorageError::NotFound(name.to_string()),
            io::ErrorKind::AlreadyExists => StorageError::AlreadyExists(name.to_string()),
            _ => StorageError::Io(error),
        }
    }
}

impl From<StorageError> for ApplicationError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::NotFound(_) | StorageError::InvalidName(_) => ApplicationError::NotFound,
            StorageError::Unavailable(msg) => ApplicationError::StorageUnavailable(msg),
            StorageError::AlreadyExists(name) => ApplicationError::InternalError(format!(
                "Storage error: generated name collided with existing file {}",
                name
            )),
            StorageError::Io(e) => ApplicationError::InternalError(format!("Storage error: {}", e)),
        }
    }
}
