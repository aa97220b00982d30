use thiserror::Error;

const MIB: u64 = 1024 * 1024;
const KIB: u64 = 1024;

/// Human form of a byte limit: whole MB or KB when exact, bytes otherwise.
fn format_limit(bytes: &u64) -> String {
    match *bytes {
        0 => "0 bytes".to_string(),
        b if b % MIB == 0 => format!("{}MB", b / MIB),
        b if b % KIB == 0 => format!("{}KB", b / KIB),
        b => format!("{} bytes", b),
    }
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Invalid file type '{mime_type}'. Allowed types: {}.", .allowed.join(", "))]
    InvalidType {
        mime_type: String,
        allowed: Vec<String>,
    },

    #[error("File is too large ({size} bytes). Maximum size is {}.", format_limit(.limit))]
    TooLarge { size: u64, limit: u64 },

    #[error("No file uploaded.")]
    NoFileProvided,

    #[error("Too many files. At most {0} files can be uploaded at once.")]
    TooManyFiles(usize),

    #[error("{0}")]
    BadRequest(String),

    #[error("The requested file does not exist.")]
    NotFound,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("{0}")]
    InternalError(String),
}
