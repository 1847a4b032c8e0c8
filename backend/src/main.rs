//! Bookstore entry point: loads settings, builds the database pool and serves
//! the REST API on port 8080.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use bookstore::config::DatabaseSettings;
use bookstore::inbound::http::health::HealthState;
use bookstore::outbound::persistence::{DbPool, DieselBookRepository, PoolConfig};
use bookstore::server::{ServerConfig, create_server, mark_unhealthy_on};

const LISTEN_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 8080);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = DatabaseSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let database_url = settings.database_url().map_err(std::io::Error::other)?;

    info!(
        host = %settings.db_host,
        port = settings.db_port,
        database = %settings.db_name,
        "connecting to database"
    );
    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(|e| std::io::Error::other(format!("cannot connect to database: {e}")))?;

    let books = Arc::new(DieselBookRepository::new(pool, Arc::new(DefaultClock)));
    let health_state = web::Data::new(HealthState::new());
    let bind_addr = SocketAddr::from(LISTEN_ADDR);
    let server = create_server(health_state.clone(), ServerConfig::new(bind_addr, books))?;
    tokio::spawn(mark_unhealthy_on(health_state, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "cannot listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }));

    info!(%bind_addr, "serving bookstore API");
    server.await
}
