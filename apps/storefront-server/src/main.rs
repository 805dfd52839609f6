//! Storefront HTTP server.
//!
//! ```text
//! storefront-server --config config/storefront.yaml serve
//! storefront-server --config config/storefront.yaml migrate
//! ```

mod config;
mod logging;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use storefront::Storefront;
use storefront::infra::storage;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "storefront-server", version, about = "Storefront e-commerce backend")]
struct Cli {
    /// YAML configuration file. `STOREFRONT__*` environment variables override it.
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Command {
    /// Apply migrations and serve HTTP (default).
    Serve,
    /// Apply pending migrations and exit.
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;
    logging::init(&config.logging)?;

    let db = storage::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    storage::run_migrations(&db)
        .await
        .context("failed to apply migrations")?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Migrate => {
            info!("Migrations complete");
            Ok(())
        }
        Command::Serve => {
            let module = Storefront::new(db, &config.storefront, &config.auth)?;
            serve(&config.server.bind_addr, module.router()).await
        }
    }
}

async fn serve(bind_addr: &str, app: axum::Router) -> anyhow::Result<()> {
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    info!(addr = %listener.local_addr()?, "Storefront listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Storefront stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {err}");
    }
    info!("Shutdown signal received");
}
