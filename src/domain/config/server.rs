use std::path::PathBuf;

use serde::Serialize;

/// How a successful upload is answered.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    /// Render a page describing the files accepted by this request.
    #[default]
    #[serde(rename = "summary")]
    Summary,
    /// Redirect to the listing page with a banner message.
    #[serde(rename = "listing")]
    Listing,
}

impl ResponseMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "summary" => Some(ResponseMode::Summary),
            "listing" | "redirect" => Some(ResponseMode::Listing),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub upload_dir: PathBuf,
    pub response_mode: ResponseMode,
    pub cors_allowed_origins: Option<Vec<String>>,
}

pub const DEFAULT_PORT: u16 = 3000;

/// `uploads/` next to the running executable, or relative to the working
/// directory when the executable path is unknown.
pub fn default_upload_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("uploads")))
        .unwrap_or_else(|| PathBuf::from("uploads"))
}

impl ServerConfig {
    pub fn with_upload_dir(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            port: DEFAULT_PORT,
            upload_dir: upload_dir.into(),
            response_mode: ResponseMode::default(),
            cors_allowed_origins: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_upload_dir(default_upload_dir())
    }
}
