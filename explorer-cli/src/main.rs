use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use log::{debug, info};
use std::sync::Arc;

mod api;
mod cli;
mod config;
mod services;
mod views;

use api::CountriesClient;
use cli::{AppContext, Cli};
use config::{Config, FileStore};

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    debug!("Countries API: {}", config.api.countries_url);

    let client = CountriesClient::new(&config.api).context("Failed to create HTTP client")?;
    let storage = Arc::new(FileStore::new(config.storage.dir.clone()));
    info!("Using storage directory {}", storage.dir().display());
    let ctx = AppContext::new(Arc::new(client), storage);

    cli::commands::dispatch(cli.command, &ctx).await
}

#[tokio::main]
async fn main() {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
