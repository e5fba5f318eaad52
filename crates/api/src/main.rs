use std::net::SocketAddr;
use std::path::Path;

use edicfg_core::error::CoreError;
use edicfg_core::store::InMemoryStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use edicfg_api::config::ServerConfig;
use edicfg_api::router::build_app_router;
use edicfg_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "edicfg_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Record store ---
    let store = match &config.seed_path {
        Some(path) => match load_seed(path) {
            Ok(store) => {
                tracing::info!(path = %path.display(), "Seed records loaded");
                store
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to load seed records");
                std::process::exit(1);
            }
        },
        None => {
            tracing::info!("No SEED_PATH set, starting with an empty record store");
            InMemoryStore::new()
        }
    };

    // --- App state & router ---
    let state = AppState::new(config.clone(), store);
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

fn load_seed(path: &Path) -> Result<InMemoryStore, CoreError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        CoreError::Validation(format!("cannot read seed file {}: {e}", path.display()))
    })?;
    InMemoryStore::from_json(&raw)
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
