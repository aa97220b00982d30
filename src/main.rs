use file_depot::{
    adapters::{router::create_router, state::AppState},
    domain::config::AppConfig,
    services,
};
use tokio::signal;
use tracing_subscriber::EnvFilter;

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = AppConfig::from_env().expect("ERROR: Invalid configuration");
    let port = config.server.port;

    tracing::info!(
        "Starting file-depot (response mode: {:?}, max size: {} bytes, max files: {})",
        config.server.response_mode,
        config.limits.max_size,
        config.limits.max_files
    );

    let storage_service = match services::create_storage_service(&config.server).await {
        Ok(service) => service,
        Err(e) => {
            tracing::error!(
                "ERROR: Upload directory {} is not usable: {}",
                config.server.upload_dir.display(),
                e
            );
            std::process::exit(1);
        }
    };

    tracing::info!("Upload directory: {}", config.server.upload_dir.display());

    let router = create_router(AppState::new(config, storage_service));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .expect("Failed to bind to port");

    tracing::info!("Server listening on http://0.0.0.0:{}", port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Failed to start server");
}
