//! Entry point for the Bankline JSON API server.
//!
//! Initializes logging, loads configuration from the environment, picks
//! the store (`PostgreSQL` when `DATABASE_URL` is set, in-memory
//! otherwise), and serves until the process is killed.

use anyhow::Context;
use bankline_api::{ApiConfig, ApiServer};
use bankline_db::{MemoryStore, PostgresStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("bankline starting");

    let config = ApiConfig::from_env().context("loading configuration")?;
    info!(
        listen_addr = %config.listen_addr,
        postgres = config.database.is_some(),
        "configuration loaded"
    );

    if let Some(db) = &config.database {
        let store = PostgresStore::connect(db)
            .await
            .context("connecting to PostgreSQL")?;
        store
            .run_migrations()
            .await
            .context("running migrations")?;
        ApiServer::new(config.listen_addr, store).run().await?;
    } else {
        info!("no DATABASE_URL set, using in-memory store");
        ApiServer::new(config.listen_addr, MemoryStore::new())
            .run()
            .await?;
    }

    Ok(())
}
