//! Command-line surface: argument definitions and the shared handler context

pub mod commands;
pub mod render;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

use crate::api::CountryRepository;
use crate::config::{KeyValueStore, ThemePreference};
use crate::services::favorites::FavoritesStore;

#[derive(Parser)]
#[command(name = "explorer-cli")]
#[command(about = "Browse countries, compare them and keep a list of favorites")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List countries with search, region and population filters
    List(commands::list::ListArgs),
    /// Show the details of one country, with weather at its capital
    Show {
        /// ISO 3166-1 alpha-3 code, e.g. PER
        code: String,

        /// Add or remove the country from favorites before printing
        #[arg(long)]
        toggle_favorite: bool,
    },
    /// Compare two countries side by side
    Compare {
        /// First country, by code or by part of its name
        first: String,
        /// Second country, by code or by part of its name
        second: String,
    },
    /// Manage favorite countries
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommands,
    },
    /// Show or change the light/dark theme
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeArg>,
    },
}

#[derive(Subcommand)]
pub enum FavoritesCommands {
    /// List favorite countries
    List,
    /// Add or remove a country
    Toggle {
        /// Country code
        code: String,
    },
    /// Print how many favorites are stored
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

/// Everything a handler needs, built once in `main`
pub struct AppContext {
    pub repo: Arc<dyn CountryRepository>,
    pub storage: Arc<dyn KeyValueStore>,
    pub favorites: Arc<FavoritesStore>,
    pub theme: ThemePreference,
}

impl AppContext {
    pub fn new(repo: Arc<dyn CountryRepository>, storage: Arc<dyn KeyValueStore>) -> Self {
        let favorites = Arc::new(FavoritesStore::load(storage.clone()));
        let theme = ThemePreference::load(storage.as_ref());
        Self {
            repo,
            storage,
            favorites,
            theme,
        }
    }
}
