//! attendash library root.
//! Exposes the CLI parser, the high-level run() function and the modules
//! behind them: API access, derivations, rendering and report export.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg).await,
        Commands::Watch { .. } => cli::commands::watch::handle(&cli.command, cfg).await,
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg).await,
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg).await,
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init();

    let config_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);

    let mut cfg = Config::load(Some(&config_path))?;

    if let Some(url) = &cli.api_url {
        cfg.api_base_url = url.clone();
    }

    tracing::debug!(config = %config_path.display(), api = %cfg.api_base_url, "starting");

    dispatch(&cli, &cfg, &config_path).await
}
