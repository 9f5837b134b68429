//! `favorites` subcommands

use anyhow::Result;

use super::{load_error, toggle_error};
use crate::cli::{AppContext, FavoritesCommands, render};
use crate::services::favorites::normalize_code;
use crate::views::{FavoritesView, count_sentence};

pub async fn handle_favorites_command(command: FavoritesCommands, ctx: &AppContext) -> Result<()> {
    match command {
        FavoritesCommands::List => {
            let view = FavoritesView::load(ctx.repo.as_ref(), ctx.favorites.clone())
                .await
                .map_err(|e| load_error(e, "countries"))?;
            render::print_favorites(&view, ctx.theme);
        }
        FavoritesCommands::Toggle { code } => {
            let code = normalize_code(&code);
            if code.is_empty() {
                anyhow::bail!("Country code must not be empty");
            }

            let mut view = FavoritesView::load(ctx.repo.as_ref(), ctx.favorites.clone())
                .await
                .map_err(|e| load_error(e, "countries"))?;
            let added = view.toggle_favorite(&code).map_err(toggle_error)?;

            let label = view.name_of(&code).unwrap_or(code.as_str()).to_string();
            render::print_favorite_status(&label, added);

            if view.sync_favorites() {
                println!();
                render::print_favorites(&view, ctx.theme);
            }
        }
        FavoritesCommands::Count => {
            println!("{}", count_sentence(ctx.favorites.count()));
        }
    }

    Ok(())
}
