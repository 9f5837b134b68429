//! Favorites view: the favorite subset of the summary dataset

use log::debug;
use std::sync::Arc;

use super::{ToggleError, toggle_known};
use crate::api::{ApiError, CountryRepository, CountrySummary};
use crate::services::favorites::{FavoritesStore, FavoritesSubscription};

/// "You have N favorite country/countries."
pub fn count_sentence(count: usize) -> String {
    let noun = if count == 1 { "country" } else { "countries" };
    format!("You have {} favorite {}.", count, noun)
}

pub struct FavoritesView {
    countries: Vec<CountrySummary>,
    /// Favorite records in dataset order, re-derived on sync
    shown: Vec<CountrySummary>,
    favorites: Arc<FavoritesStore>,
    subscription: FavoritesSubscription,
}

impl FavoritesView {
    pub async fn load(
        repo: &dyn CountryRepository,
        favorites: Arc<FavoritesStore>,
    ) -> Result<Self, ApiError> {
        let countries = repo.fetch_summary_list().await?;
        Ok(Self::from_dataset(countries, favorites))
    }

    pub fn from_dataset(countries: Vec<CountrySummary>, favorites: Arc<FavoritesStore>) -> Self {
        let subscription = favorites.subscribe();
        let mut view = Self {
            countries,
            shown: Vec::new(),
            favorites,
            subscription,
        };
        view.derive();
        view
    }

    fn derive(&mut self) {
        let codes = self.favorites.list();
        self.shown = self
            .countries
            .iter()
            .filter(|c| codes.contains(&c.code))
            .cloned()
            .collect();
    }

    /// Favorite records as of the last sync, in dataset order
    pub fn favorite_countries(&self) -> &[CountrySummary] {
        &self.shown
    }

    /// Common name of a dataset record
    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
            .map(|c| c.common_name())
    }

    pub fn count(&self) -> usize {
        self.favorites.count()
    }

    pub fn count_text(&self) -> String {
        count_sentence(self.count())
    }

    /// Remove (or re-add) a favorite from this view
    pub fn toggle_favorite(&self, code: &str) -> Result<bool, ToggleError> {
        toggle_known(&self.favorites, &self.countries, code)
    }

    /// Consume pending notifications and re-derive the shown records.
    /// Returns `true` when anything changed and the list must be re-rendered.
    pub fn sync_favorites(&mut self) -> bool {
        let events = self.subscription.drain();
        if events.is_empty() {
            return false;
        }
        debug!("Favorites view observed {} changes", events.len());
        self.derive();
        true
    }
}
