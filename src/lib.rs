//! toggl-tools library root.
//! Exposes the CLI parsers, the two run functions used by the binaries,
//! and the join/aggregation modules behind them.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;

use clap::Parser;
use cli::parser::{CombineCli, DailySumCli};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Load config once and apply the verbose switch from either side.
fn setup(config_path: Option<&Path>, verbose: bool) -> AppResult<Config> {
    let cfg = Config::load(config_path)?;
    ui::messages::set_verbose(verbose || cfg.verbose);
    Ok(cfg)
}

/// Entry point of toggl-combine
pub fn run_combine() -> AppResult<()> {
    let cli = CombineCli::parse();
    let cfg = setup(cli.config.as_deref(), cli.verbose)?;
    cli::commands::combine::handle(&cli, &cfg)
}

/// Entry point of toggl-daily-sum
pub fn run_daily_sum() -> AppResult<()> {
    let cli = DailySumCli::parse();
    let cfg = setup(cli.config.as_deref(), cli.verbose)?;
    cli::commands::daily::handle(&cli, &cfg)
}
