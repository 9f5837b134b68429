//! Per-view controllers
//!
//! Each view owns its dataset snapshot and selection state for as long as it
//! is open. Nothing here is process-wide: a view is built on entry and
//! dropped on navigation, which also ends its favorites subscription.

pub mod compare;
pub mod detail;
pub mod favorites;
pub mod list;

pub use compare::{CompareSlot, CompareView};
pub use detail::DetailView;
pub use favorites::{FavoritesView, count_sentence};
pub use list::ListView;

use crate::api::CountrySummary;
use crate::config::StorageError;
use crate::services::favorites::{FavoritesStore, normalize_code};

/// Window title suffix shared by every view
pub const APP_TITLE: &str = "Global Explorer";

/// Failure of a favorite click
#[derive(Debug)]
pub enum ToggleError {
    /// The code is neither in the view's dataset nor a current favorite
    UnknownCode(String),
    Storage(StorageError),
}

impl std::fmt::Display for ToggleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToggleError::UnknownCode(code) => write!(f, "no country found with code '{}'", code),
            ToggleError::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ToggleError {}

/// Toggle `code` if the dataset knows it. Stale favorites outside the dataset
/// can still be removed.
fn toggle_known(
    favorites: &FavoritesStore,
    countries: &[CountrySummary],
    code: &str,
) -> Result<bool, ToggleError> {
    let code = normalize_code(code);
    let known = countries.iter().any(|c| c.code == code);
    if !known && !favorites.is_favorite(&code) {
        return Err(ToggleError::UnknownCode(code));
    }
    favorites.toggle(&code).map_err(ToggleError::Storage)
}
