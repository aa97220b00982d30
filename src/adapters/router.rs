use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::warn;

use crate::adapters::{
    controllers::{
        file_controller::FileController, health_controller::HealthController,
        page_controller::PageController,
    },
    state::AppState,
};

/// Allow-list CORS when origins are configured, permissive otherwise.
fn cors_layer(allowed_origins: Option<&[String]>) -> CorsLayer {
    match allowed_origins {
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!("Ignoring invalid CORS origin '{}'", origin);
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => CorsLayer::permissive(),
    }
}

pub fn create_router(app_state: AppState) -> Router {
    let server = &app_state.config.server;
    let cors = cors_layer(server.cors_allowed_origins.as_deref());
    let uploads = ServeDir::new(&server.upload_dir);
    let body_limit = app_state.config.limits.request_body_limit();

    Router::new()
        .route("/", get(PageController::index))
        .route("/upload", post(FileController::upload_file))
        .route("/upload-multiple", post(FileController::upload_multiple))
        .route("/download/{filename}", get(FileController::download_file))
        .route("/delete/{filename}", get(FileController::delete_file))
        .route("/health", get(HealthController::health_check))
        .nest_service("/uploads", uploads)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
