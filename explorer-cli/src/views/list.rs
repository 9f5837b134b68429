//! Searchable, filterable country list

use log::debug;
use std::sync::Arc;

use crate::api::{ApiError, CountryRepository, CountrySummary};
use super::{ToggleError, toggle_known};
use crate::services::favorites::{FavoritesStore, FavoritesSubscription};
use crate::services::filter::{self, ActiveFilter, FilterSpec};

/// One rendered list entry
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow<'a> {
    pub country: &'a CountrySummary,
    pub is_favorite: bool,
}

/// Controller for the home list
pub struct ListView {
    countries: Vec<CountrySummary>,
    spec: FilterSpec,
    results: Vec<CountrySummary>,
    /// Favorite flag per result, re-derived from the store on change
    favorite_flags: Vec<bool>,
    favorites: Arc<FavoritesStore>,
    subscription: FavoritesSubscription,
}

impl ListView {
    /// Fetch the summary dataset and apply the initial filter
    pub async fn load(
        repo: &dyn CountryRepository,
        favorites: Arc<FavoritesStore>,
        spec: FilterSpec,
    ) -> Result<Self, ApiError> {
        let countries = repo.fetch_summary_list().await?;
        Ok(Self::from_dataset(countries, favorites, spec))
    }

    pub fn from_dataset(
        countries: Vec<CountrySummary>,
        favorites: Arc<FavoritesStore>,
        spec: FilterSpec,
    ) -> Self {
        let subscription = favorites.subscribe();
        let mut view = Self {
            countries,
            spec,
            results: Vec::new(),
            favorite_flags: Vec::new(),
            favorites,
            subscription,
        };
        view.apply();
        view
    }

    /// Recompute the result from the current spec, replacing the previous one
    pub fn apply(&mut self) {
        self.results = filter::apply(&self.countries, &self.spec)
            .into_iter()
            .cloned()
            .collect();
        self.refresh_favorite_flags();
        debug!(
            "List view: {} of {} countries match '{}'",
            self.results.len(),
            self.countries.len(),
            self.spec.to_query_string()
        );
    }

    fn refresh_favorite_flags(&mut self) {
        self.favorite_flags = self
            .results
            .iter()
            .map(|c| self.favorites.is_favorite(&c.code))
            .collect();
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    pub fn results(&self) -> &[CountrySummary] {
        &self.results
    }

    /// Result rows with their favorite flag as of the last sync
    pub fn rows(&self) -> Vec<ListRow<'_>> {
        self.results
            .iter()
            .zip(&self.favorite_flags)
            .map(|(country, is_favorite)| ListRow {
                country,
                is_favorite: *is_favorite,
            })
            .collect()
    }

    pub fn results_summary(&self) -> String {
        filter::results_summary(self.results.len(), self.countries.len())
    }

    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        self.spec.active_filters()
    }

    /// Query string reproducing this view
    pub fn share_query(&self) -> String {
        self.spec.to_query_string()
    }

    /// Favorite click on a list entry. Codes outside the dataset can only be
    /// removed, never added.
    pub fn toggle_favorite(&self, code: &str) -> Result<bool, ToggleError> {
        toggle_known(&self.favorites, &self.countries, code)
    }

    /// Consume pending favorites notifications and re-derive the row flags.
    /// Returns `true` when anything changed and rows must be re-rendered.
    pub fn sync_favorites(&mut self) -> bool {
        let events = self.subscription.drain();
        for event in &events {
            debug!("List view observed {}", event);
        }
        if events.is_empty() {
            return false;
        }
        self.refresh_favorite_flags();
        true
    }
}
