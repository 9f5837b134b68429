//! Command handlers

pub mod compare;
pub mod favorites;
pub mod list;
pub mod show;
pub mod theme;

use anyhow::{Result, anyhow};
use log::debug;

use super::{AppContext, Commands};
use crate::api::ApiError;
use crate::views::ToggleError;

/// Route a parsed command to its handler
pub async fn dispatch(command: Commands, ctx: &AppContext) -> Result<()> {
    match command {
        Commands::List(args) => list::handle_list_command(args, ctx).await,
        Commands::Show {
            code,
            toggle_favorite,
        } => show::handle_show_command(&code, toggle_favorite, ctx).await,
        Commands::Compare { first, second } => {
            compare::handle_compare_command(&first, &second, ctx).await
        }
        Commands::Favorites { command } => favorites::handle_favorites_command(command, ctx).await,
        Commands::Theme { action } => theme::handle_theme_command(action, ctx),
    }
}

/// Turn a repository failure into the message shown to the user.
/// The detailed cause only goes to the debug log.
pub fn load_error(err: ApiError, what: &str) -> anyhow::Error {
    debug!("Failed to load {}: {}", what, err);
    match err {
        ApiError::NotFound { code } => anyhow!("No country found with code \"{}\".", code),
        ApiError::UpstreamUnavailable { .. } | ApiError::Decode { .. } => {
            anyhow!("Failed to load {}. Please try again later.", what)
        }
    }
}

/// User-facing message for a failed favorite toggle
pub fn toggle_error(err: ToggleError) -> anyhow::Error {
    match err {
        ToggleError::UnknownCode(code) => load_error(ApiError::not_found(&code), "countries"),
        ToggleError::Storage(e) => anyhow::Error::new(e).context("Failed to save favorites"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageError;

    #[test]
    fn test_load_error_messages() {
        let err = load_error(ApiError::upstream("https://x/all", "HTTP 500"), "countries");
        assert_eq!(err.to_string(), "Failed to load countries. Please try again later.");

        let err = load_error(ApiError::decode("https://x/all", "bad json"), "countries");
        assert_eq!(err.to_string(), "Failed to load countries. Please try again later.");

        let err = load_error(ApiError::not_found("XYZ"), "country details");
        assert_eq!(err.to_string(), "No country found with code \"XYZ\".");
    }

    #[test]
    fn test_toggle_error_messages() {
        let err = toggle_error(ToggleError::UnknownCode("QQQ".to_string()));
        assert_eq!(err.to_string(), "No country found with code \"QQQ\".");

        let err = toggle_error(ToggleError::Storage(StorageError::Serialize("boom".to_string())));
        assert_eq!(err.to_string(), "Failed to save favorites");
        assert!(format!("{:#}", err).contains("boom"));
    }
}
