//! Life Calendar Service
//!
//! Serves the life calendar page on `PORT` (default 8080) and exposes
//! request latency metrics at `/metrics`.

use lc_service::config::Config;
use lc_service::observability::metrics::PrometheusMetrics;
use lc_service::routes::{self, AppState};
use lc_service::templates::TemplateEngine;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lc_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Life Calendar service");

    // Load configuration
    let config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!(
        port = config.port,
        bind_address = %config.bind_address,
        "Configuration loaded successfully"
    );

    // Register the embedded page template
    let renderer = TemplateEngine::new().map_err(|e| {
        error!("Failed to load page template: {}", e);
        e
    })?;

    // Metrics recorder owned by this router, not installed globally
    let request_metrics = Arc::new(PrometheusMetrics::new().map_err(|e| {
        error!("Failed to initialize metrics: {}", e);
        e
    })?);
    let metrics_handle = request_metrics.handle();

    let state = Arc::new(AppState {
        renderer: Arc::new(renderer),
    });

    let app = routes::build_routes(state, request_metrics, metrics_handle);

    let addr: SocketAddr = config.bind_address.parse().map_err(|e| {
        error!("Invalid bind address: {}", e);
        e
    })?;

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        e
    })?;

    info!("Life Calendar listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Life Calendar shutdown complete");

    Ok(())
}

/// Listens for shutdown signals (SIGTERM, SIGINT).
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT, starting graceful shutdown..."),
            Err(e) => error!("Failed to listen for SIGINT: {}", e),
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received SIGTERM, starting graceful shutdown...");
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
