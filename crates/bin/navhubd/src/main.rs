//! # navhubd — navhub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`navhub.toml` plus env overrides) and set up logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use navhub_adapter_http_axum::auth::StaticTokenVerifier;
use navhub_adapter_http_axum::state::AppState;
use navhub_adapter_storage_sqlite_sqlx::{
    Config as DbConfig, SqliteCategoryRepository, SqliteServiceRepository,
    SqliteSettingsRepository,
};
use navhub_app::services::category_service::CategoryService;
use navhub_app::services::directory_service::DirectoryService;
use navhub_app::services::settings_service::SettingsService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Database
    let db = DbConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let service_repo = SqliteServiceRepository::new(pool.clone());
    let category_repo = SqliteCategoryRepository::new(pool.clone());
    let settings_repo = SqliteSettingsRepository::new(pool.clone());

    // Services
    let directory = DirectoryService::new(service_repo, SqliteCategoryRepository::new(pool));
    let categories = CategoryService::new(category_repo);
    let settings = SettingsService::new(settings_repo);

    let token = config.admin.token().unwrap_or_default();
    if token.is_empty() {
        tracing::warn!("no admin token configured, the admin API rejects every request");
    }
    let verifier = StaticTokenVerifier::new(token);

    // HTTP
    let state = AppState::new(directory, categories, settings, verifier);
    let app = navhub_adapter_http_axum::router::build(state, config.server.assets_dir.as_deref());

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "navhubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("navhubd stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async { listened("ctrl-c", tokio::signal::ctrl_c().await).await };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => listened("SIGTERM", Err(err)).await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

/// A listener that could not be registered never fires.
async fn listened<E: std::fmt::Display>(signal: &str, outcome: Result<(), E>) {
    if let Err(err) = outcome {
        tracing::error!(error = %err, signal, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_keep_serving_when_signal_listener_fails() {
        let fired = tokio::select! {
            biased;
            () = listened("ctrl-c", Err::<(), _>("no signal driver")) => true,
            () = std::future::ready(()) => false,
        };
        assert!(!fired);
    }

    #[tokio::test]
    async fn should_fire_once_signal_arrives() {
        let fired = tokio::select! {
            biased;
            () = listened("ctrl-c", Ok::<(), &str>(())) => true,
            () = std::future::ready(()) => false,
        };
        assert!(fired);
    }
}
