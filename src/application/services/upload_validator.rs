use crate::{application::error::ApplicationError, domain::config::UploadLimits};

/// Why a file was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    InvalidType {
        mime_type: String,
        allowed: Vec<String>,
    },
    TooLarge { size: u64, limit: u64 },
}

impl From<Rejection> for ApplicationError {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::InvalidType { mime_type, allowed } => {
                ApplicationError::InvalidType { mime_type, allowed }
            }
            Rejection::TooLarge { size, limit } => ApplicationError::TooLarge { size, limit },
        }
    }
}

/// Checks the declared MIME type and the byte size of a single file. The
/// content itself is never inspected.
#[derive(Debug, Clone)]
pub struct UploadValidator {
    allowed_mime_types: Vec<String>,
    max_size: u64,
}

impl UploadValidator {
    pub fn new(limits: &UploadLimits) -> Self {
        Self {
            allowed_mime_types: limits.mime_types.clone(),
            max_size: limits.max_size,
        }
    }

    pub fn validate(&self, declared_mime_type: &str, byte_size: u64) -> Result<(), Rejection> {
        let mime = declared_mime_type.trim().to_ascii_lowercase();
        if !self.allowed_mime_types.iter().any(|allowed| *allowed == mime) {
            return Err(Rejection::InvalidType {
                mime_type: declared_mime_type.to_string(),
                allowed: self.allowed_mime_types.clone(),
            });
        }

        if byte_size > self.max_size {
            return Err(Rejection::TooLarge {
                size: byte_size,
                limit: self.max_size,
            });
        }

        Ok(())
    }
}
