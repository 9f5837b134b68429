//! `list` command

use anyhow::Result;
use clap::Args;

use super::{load_error, toggle_error};
use crate::cli::{AppContext, render};
use crate::services::favorites::normalize_code;
use crate::services::filter::{FilterSpec, PopulationBucket, SortKey};
use crate::views::ListView;

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Case-insensitive substring of the country name
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show these regions (repeatable)
    #[arg(short, long, value_name = "REGION")]
    pub region: Vec<String>,

    /// Population bucket
    #[arg(short, long, value_parser = ["any", "small", "medium", "large"])]
    pub population: Option<String>,

    /// Sort order
    #[arg(
        long,
        value_parser = ["name", "name-asc", "name-desc", "population", "population-asc", "population-desc"]
    )]
    pub sort: Option<String>,

    /// Shared query string to start from, e.g. "regions=europe&sort=population-desc"
    #[arg(short, long, value_name = "QUERY")]
    pub query: Option<String>,

    /// Drop the regions, population and sort taken from `--query`, keeping its search
    #[arg(long)]
    pub clear_filters: bool,

    /// Add or remove a listed country from favorites before printing
    #[arg(long, value_name = "CODE")]
    pub toggle_favorite: Option<String>,
}

impl ListArgs {
    /// Filter seeded from `--query`, with explicit flags taking precedence
    pub fn to_spec(&self) -> FilterSpec {
        let mut spec = self
            .query
            .as_deref()
            .map(FilterSpec::from_query_string)
            .unwrap_or_default();
        if self.clear_filters {
            spec.clear_filters();
        }

        if let Some(search) = &self.search {
            spec = spec.with_search(search);
        }
        if !self.region.is_empty() {
            spec.regions.clear();
            for region in &self.region {
                spec = spec.with_region(region);
            }
        }
        if let Some(population) = &self.population {
            spec = spec.with_population(PopulationBucket::from_param(population));
        }
        if let Some(sort) = &self.sort {
            spec = spec.with_sort(SortKey::from_param(sort));
        }

        spec
    }
}

pub async fn handle_list_command(args: ListArgs, ctx: &AppContext) -> Result<()> {
    let spec = args.to_spec();
    let mut view = ListView::load(ctx.repo.as_ref(), ctx.favorites.clone(), spec)
        .await
        .map_err(|e| load_error(e, "countries"))?;

    if let Some(code) = &args.toggle_favorite {
        let added = view.toggle_favorite(code).map_err(toggle_error)?;
        render::print_favorite_status(&normalize_code(code), added);
        view.sync_favorites();
    }

    render::print_list(&view, ctx.theme);
    Ok(())
}
