//! Process configuration, read once at startup from the environment.

pub mod limits;
pub mod server;

use std::path::PathBuf;

use thiserror::Error;

pub use limits::UploadLimits;
pub use server::{ResponseMode, ServerConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got '{value}'")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub limits: UploadLimits,
}

impl AppConfig {
    /// Build the configuration for a given upload directory with every other
    /// setting at its default.
    pub fn for_directory(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            server: ServerConfig::with_upload_dir(upload_dir),
            limits: UploadLimits::default(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source. Unset or
    /// blank variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = AppConfig::default();

        if let Some(port) = get("PORT") {
            config.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                expected: "a valid u16",
                value: port.clone(),
            })?;
        }

        if let Some(dir) = get("UPLOAD_DIR") {
            config.server.upload_dir = PathBuf::from(dir);
        }

        if let Some(mode) = get("RESPONSE_MODE") {
            config.server.response_mode =
                ResponseMode::parse(&mode).ok_or_else(|| ConfigError::InvalidValue {
                    key: "RESPONSE_MODE",
                    expected: "'summary' or 'listing'",
                    value: mode.clone(),
                })?;
        }

        if let Some(origins) = get("CORS_ALLOWED_ORIGINS") {
            config.server.cors_allowed_origins = Some(split_list(&origins));
        }

        if let Some(size) = get("MAX_FILE_SIZE") {
            config.limits.max_size = size.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "MAX_FILE_SIZE",
                expected: "a byte count",
                value: size.clone(),
            })?;
        }

        if let Some(files) = get("MAX_FILES") {
            config.limits.max_files = files
                .trim()
                .parse()
                .ok()
                .filter(|n: &usize| *n > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: "MAX_FILES",
                    expected: "a positive integer",
                    value: files.clone(),
                })?;
        }

        if let Some(types) = get("ALLOWED_MIME_TYPES") {
            config.limits.mime_types = split_list(&types)
                .into_iter()
                .map(|t| t.to_ascii_lowercase())
                .collect();
        }

        Ok(config)
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.response_mode, ResponseMode::Summary);
        assert!(config.server.upload_dir.ends_with("uploads"));
        assert_eq!(config.limits.max_size, 5_242_880);
        assert_eq!(config.limits.max_files, 5);
        assert_eq!(
            config.limits.mime_types,
            vec!["image/jpeg", "image/png", "application/pdf", "text/plain"]
        );
    }

    #[test]
    fn test_overrides_from_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "8081"),
            ("UPLOAD_DIR", "/tmp/depot"),
            ("RESPONSE_MODE", "listing"),
            ("MAX_FILE_SIZE", "1024"),
            ("MAX_FILES", "2"),
            ("ALLOWED_MIME_TYPES", "text/plain, Image/GIF"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test,http://b.test"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.upload_dir, PathBuf::from("/tmp/depot"));
        assert_eq!(config.server.response_mode, ResponseMode::Listing);
        assert_eq!(config.limits.max_size, 1024);
        assert_eq!(config.limits.max_files, 2);
        assert_eq!(config.limits.mime_types, vec!["text/plain", "image/gif"]);
        assert_eq!(
            config.server.cors_allowed_origins,
            Some(vec!["http://a.test".to_string(), "http://b.test".to_string()])
        );
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup(&[("PORT", "  "), ("MAX_FILES", "")])).unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.limits.max_files, 5);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(AppConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("RESPONSE_MODE", "json")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("MAX_FILES", "0")])).is_err());

        let err = AppConfig::from_lookup(lookup(&[("MAX_FILE_SIZE", "big")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "MAX_FILE_SIZE must be a byte count, got 'big'"
        );
    }

    #[test]
    fn test_request_body_limit_covers_a_full_batch() {
        let limits = UploadLimits::default();
        assert_eq!(limits.request_body_limit(), 5 * 5_242_880 + 1024 * 1024);
    }
}
