use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{info, warn};

use ag_api::{app::create_app, telemetry::init_tracing, AppState};
use ag_core::repositories::{AuditLogRepository, RevocationRepository, UserRepository};
use ag_core::services::token::RevocationReaper;
use ag_infra::database::{
    DatabasePool, MySqlAuditLogRepository, MySqlRevocationRepository, MySqlUserRepository,
};
use ag_infra::memory::{
    InMemoryAuditLogRepository, InMemoryRevocationRepository, InMemoryUserRepository,
};
use ag_shared::config::{AppConfig, StorageBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    init_tracing(&config.logging).context("failed to initialise tracing")?;
    config.validate().context("invalid configuration")?;

    info!(
        environment = %config.environment,
        backend = ?config.database.backend,
        "Starting AuthGate API server"
    );

    match config.database.backend {
        StorageBackend::MySql => {
            let pool = DatabasePool::new(&config.database).await?;
            pool.run_migrations().await?;
            let db = pool.get_pool().clone();

            let result = serve(
                &config,
                Arc::new(MySqlUserRepository::new(db.clone())),
                Arc::new(MySqlRevocationRepository::new(db.clone())),
                Arc::new(MySqlAuditLogRepository::new(db)),
            )
            .await;

            pool.close().await;
            result
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; accounts and revocations are lost on restart");
            serve(
                &config,
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryRevocationRepository::new()),
                Arc::new(InMemoryAuditLogRepository::new()),
            )
            .await
        }
    }
}

/// Run the HTTP server and the revocation reaper until shutdown
async fn serve<U, R, A>(
    config: &AppConfig,
    users: Arc<U>,
    revocations: Arc<R>,
    audit_log: Arc<A>,
) -> anyhow::Result<()>
where
    U: UserRepository + 'static,
    R: RevocationRepository + 'static,
    A: AuditLogRepository + 'static,
{
    let state = AppState::build(config, users, Arc::clone(&revocations), audit_log)
        .context("failed to assemble services")?;
    let state = web::Data::new(state);

    let reaper = if config.auth.reaper.enabled {
        let reaper = RevocationReaper::new(
            revocations,
            Duration::from_secs(config.auth.reaper.interval_seconds),
        );
        Some(Arc::new(reaper).start())
    } else {
        info!("Revocation reaper disabled");
        None
    };

    let bind_address = config.server.bind_address();
    info!(%bind_address, "Server will bind");

    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &app_config));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let result = server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {bind_address}"))?
        .run()
        .await;

    if let Some(handle) = reaper {
        handle.abort();
        info!("Revocation reaper stopped");
    }

    result.context("server error")
}
