//! Tally - HTTP Server Entry Point

mod config;
mod telemetry;

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

use config::ServerConfig;
use tally_api_http::{AppState, HttpServer};
use tally_core::application::MaintenanceScheduler;
use tally_core::port::time_provider::SystemTimeProvider;
use tally_core::port::TimeProvider;
use tally_infra_sqlite::{create_pool, run_migrations, SqliteMaintenance, SqliteStore};
use tally_infra_system::{Argon2PasswordHasher, RandomTokenProvider};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let config = ServerConfig::from_env().context("Invalid configuration")?;

    // 2. Initialize logging
    telemetry::init(config.log_format)?;
    info!("Tally v{} starting...", VERSION);

    // 3. Initialize database
    if let Some(parent) = Path::new(&config.db_path).parent() {
        if !config.db_path.contains(":memory:") && !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    info!(db_path = %config.db_path, "Initializing database...");
    let pool = create_pool(&config.db_path)
        .await
        .context("DB pool creation failed")?;
    run_migrations(&pool).await.context("Migration failed")?;

    // 4. Setup dependencies (DI wiring)
    let time_provider: Arc<dyn TimeProvider> = Arc::new(SystemTimeProvider);
    let store = Arc::new(SqliteStore::new(pool.clone()));
    let state = AppState::from_store(
        store,
        Arc::new(Argon2PasswordHasher::new()),
        Arc::new(RandomTokenProvider::new()),
        time_provider.clone(),
        &config.session,
    );

    // 5. Operator bootstrap
    if let Some(bootstrap) = &config.bootstrap {
        let profile = state
            .auth
            .ensure_user(
                &bootstrap.email,
                &bootstrap.user_name,
                &bootstrap.name,
                &bootstrap.password,
            )
            .await
            .context("Bootstrap user provisioning failed")?;
        info!(user_id = profile.id, email = %profile.email, "Bootstrap user ready");
    }

    // 6. Start maintenance scheduler
    let maintenance = Arc::new(SqliteMaintenance::new(pool.clone()));
    let scheduler =
        MaintenanceScheduler::new(maintenance, time_provider, config.maintenance_interval);
    let maintenance_handle = tokio::spawn(scheduler.run());

    // 7. Serve HTTP until Ctrl+C
    info!("Press Ctrl+C to shutdown");
    let server = HttpServer::new(config.http.clone(), state);
    let result = server.run(shutdown_signal()).await;

    // 8. Graceful shutdown
    maintenance_handle.abort();
    pool.close().await;
    telemetry::shutdown();

    match result {
        Ok(()) => {
            info!("Shutdown complete.");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "HTTP server failed");
            Err(e.into())
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received. Exiting gracefully..."),
        Err(e) => warn!(error = %e, "Failed to listen for Ctrl+C; shutting down"),
    }
}
