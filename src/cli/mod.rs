//! CLI module for the API key dashboard
//!
//! - `serve`: run the HTTP server
//! - `check`: verify the configured store is reachable

pub mod check;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// API key dashboard - issue, list, edit, revoke and validate API keys
#[derive(Parser)]
#[command(name = "api-key-dashboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Test the connection to the configured key store
    Check,
}

/// Load `.env` and layered config, then install logging
pub(crate) fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging)?;

    Ok(config)
}
