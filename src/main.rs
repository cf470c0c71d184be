mod cli;
mod config;
mod models;
mod prayer_times;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    match cli.command {
        Some(Commands::Times { city }) => {
            handlers::handle_times(&config, city.as_deref())?;
        }
        Some(Commands::Next { city }) => {
            handlers::handle_next(&config, city.as_deref())?;
        }
        Some(Commands::Cities) => {
            handlers::handle_cities(&config)?;
        }
        Some(Commands::Config { init }) => {
            handlers::handle_config(&config, init)?;
        }

        // No subcommand → launch TUI
        None => {
            tui::app::run(config)?;
        }
    }

    Ok(())
}
