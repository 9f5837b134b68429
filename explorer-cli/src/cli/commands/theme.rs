//! `theme` command

use anyhow::{Context, Result};

use crate::cli::{AppContext, ThemeArg, render};
use crate::config::ThemePreference;

/// Preference after applying `action` to `current`
pub fn resolve_theme(current: ThemePreference, action: ThemeArg) -> ThemePreference {
    match action {
        ThemeArg::Light => ThemePreference::Light,
        ThemeArg::Dark => ThemePreference::Dark,
        ThemeArg::Toggle => current.toggled(),
    }
}

pub fn handle_theme_command(action: Option<ThemeArg>, ctx: &AppContext) -> Result<()> {
    let Some(action) = action else {
        println!("Theme: {}", render::accent(ctx.theme.as_str(), ctx.theme));
        return Ok(());
    };

    let theme = resolve_theme(ctx.theme, action);
    theme
        .save(ctx.storage.as_ref())
        .context("Failed to save theme preference")?;

    println!("Theme set to {}", render::accent(theme.as_str(), theme));
    Ok(())
}
