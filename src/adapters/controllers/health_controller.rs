use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use sysinfo::System;
use tracing::{info, warn};

use crate::{
    application::services::StorageService,
    domain::config::{AppConfig, ResponseMode},
};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(rename = "uploadDir")]
    pub upload_dir: String,
    #[serde(rename = "storedFiles")]
    pub stored_files: Option<usize>,
    pub config: HealthConfigInfo,
    pub metrics: SystemMetrics,
}

#[derive(Debug, Serialize)]
pub struct HealthConfigInfo {
    #[serde(rename = "maxSize")]
    pub max_size: u64,
    #[serde(rename = "maxFiles")]
    pub max_files: usize,
    #[serde(rename = "allowedMimeTypes")]
    pub allowed_mime_types: Vec<String>,
    #[serde(rename = "responseMode")]
    pub response_mode: ResponseMode,
}

#[derive(Debug, Serialize)]
pub struct SystemMetrics {
    #[serde(rename = "cpuUsagePercent")]
    pub cpu_usage_percent: f32,
    #[serde(rename = "memoryUsedBytes")]
    pub memory_used_bytes: u64,
    #[serde(rename = "memoryTotalBytes")]
    pub memory_total_bytes: u64,
    #[serde(rename = "memoryUsagePercent")]
    pub memory_usage_percent: f32,
}

pub struct HealthController;

impl HealthController {
    /// GET /health
    ///
    /// Reports `degraded` when the upload directory cannot be listed.
    pub async fn health_check(
        State(config): State<Arc<AppConfig>>,
        State(storage_service): State<Arc<dyn StorageService>>,
    ) -> Json<HealthResponse> {
        info!("Health check requested");

        let stored_files = match storage_service.list().await {
            Ok(entries) => Some(entries.len()),
            Err(e) => {
                warn!("Health check cannot list uploads: {}", e);
                None
            }
        };

        let config_info = HealthConfigInfo {
            max_size: config.limits.max_size,
            max_files: config.limits.max_files,
            allowed_mime_types: config.limits.mime_types.clone(),
            response_mode: config.server.response_mode,
        };

        let mut sys = System::new();
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        let memory_used = sys.used_memory();
        let memory_total = sys.total_memory();
        let memory_usage_percent = if memory_total > 0 {
            (memory_used as f32 / memory_total as f32) * 100.0
        } else {
            0.0
        };

        let metrics = SystemMetrics {
            cpu_usage_percent: sys.global_cpu_usage(),
            memory_used_bytes: memory_used,
            memory_total_bytes: memory_total,
            memory_usage_percent,
        };

        let status = if stored_files.is_some() {
            "healthy"
        } else {
            "degraded"
        };

        Json(HealthResponse {
            status: status.to_string(),
            upload_dir: config.server.upload_dir.display().to_string(),
            stored_files,
            config: config_info,
            metrics,
        })
    }
}
