//! `show` command

use anyhow::{Context, Result};

use super::load_error;
use crate::cli::{AppContext, render};
use crate::views::DetailView;

pub async fn handle_show_command(code: &str, toggle_favorite: bool, ctx: &AppContext) -> Result<()> {
    let mut view = DetailView::load(ctx.repo.as_ref(), &ctx.favorites, code)
        .await
        .map_err(|e| load_error(e, "country details"))?;

    if toggle_favorite {
        let added = view
            .toggle_favorite(&ctx.favorites)
            .context("Failed to save favorites")?;
        render::print_favorite_status(view.country.common_name(), added);
        println!();
    }

    render::print_detail(&view, ctx.theme);
    Ok(())
}
