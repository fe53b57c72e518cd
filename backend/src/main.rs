//! Employee service entry-point: loads settings, prepares storage and serves
//! the REST endpoints.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use employeemgt::inbound::http::health::HealthState;
use employeemgt::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{AppSettings, ServerConfig, create_server, shutdown, shutdown_signal};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;

    let mut config = ServerConfig::new(settings.bind_addr());
    if let Some(database_url) = settings.database_url() {
        config = config.with_db_pool(connect(database_url, settings.db_max_connections()).await?);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let handle = server.handle();
    actix_web::rt::spawn(async move {
        if let Err(error) = shutdown_signal().await {
            warn!(%error, "signal handlers unavailable; graceful shutdown disabled");
            return;
        }
        shutdown(health_state, handle).await;
    });
    server.await
}

/// Apply pending migrations, then open the connection pool.
async fn connect(database_url: &str, max_connections: u32) -> io::Result<DbPool> {
    run_pending_migrations(database_url)
        .await
        .map_err(|error| io::Error::other(format!("apply migrations: {error}")))?;

    DbPool::new(PoolConfig::new(database_url).with_max_size(max_connections))
        .await
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))
}
