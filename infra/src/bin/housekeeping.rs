//! Sweeps members that never completed phone verification.
//!
//! `mc-housekeeping --once` runs a single sweep and exits; without the flag it
//! keeps sweeping on the configured interval until Ctrl-C.

use std::sync::Arc;

use anyhow::Context;

use mc_core::services::housekeeping::RegistrationSweeper;
use mc_infra::database::{DatabasePool, MySqlMemberRepository};
use mc_infra::{load_config, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config();
    logging::init_tracing(&config.logging).context("failed to initialize logging")?;

    let once = std::env::args().skip(1).any(|arg| arg == "--once");

    let database = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;
    let members = Arc::new(MySqlMemberRepository::new(database.get_pool().clone()));
    let sweeper = Arc::new(RegistrationSweeper::new(members, config.housekeeping.clone()));

    if once {
        let removed = sweeper.run_once().await.context("registration sweep failed")?;
        tracing::info!(removed, "Single sweep finished");
    } else if let Some(handle) = sweeper.spawn() {
        tokio::signal::ctrl_c()
            .await
            .context("failed to listen for shutdown signal")?;
        tracing::info!("Shutdown signal received");
        handle.abort();
    }

    database.close().await;
    Ok(())
}
