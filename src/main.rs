//! Crewhub auth service — server entry point.
//!
//! Wires configuration, logging, the database pool, and the auth
//! components together and starts the HTTP server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use crewhub_api::state::AppState;
use crewhub_auth::gate::access::AccessGate;
use crewhub_auth::gate::fallback::DemoIdentity;
use crewhub_auth::gate::store::{DatabaseIdentityStore, IdentityStore};
use crewhub_auth::jwt::issuer::TokenIssuer;
use crewhub_auth::jwt::verifier::TokenVerifier;
use crewhub_core::config::AppConfig;
use crewhub_core::error::AppError;
use crewhub_database::DatabasePool;

#[tokio::main]
async fn main() {
    let env = std::env::var("CREWHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Crewhub auth service v{}", env!("CARGO_PKG_VERSION"));

    let pool = DatabasePool::connect(&config.database)?;

    let verifier = TokenVerifier::new(&config.auth);
    let issuer = Arc::new(TokenIssuer::new(&config.auth));
    let store: Arc<dyn IdentityStore> = Arc::new(DatabaseIdentityStore::new(pool.clone()));
    let fallback = Arc::new(DemoIdentity::new(&config.demo));
    let gate = Arc::new(AccessGate::new(
        verifier.clone(),
        Arc::clone(&store),
        fallback,
    ));

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState {
        config: Arc::new(config),
        gate,
        issuer,
        verifier: Arc::new(verifier),
        store,
    };
    let app = crewhub_api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
    tracing::info!(%addr, "Listening for connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    pool.close().await;
    Ok(())
}

/// Resolves when the process receives a shutdown signal.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install shutdown signal handler");
        return;
    }
    tracing::info!("Shutdown signal received; draining connections");
}
