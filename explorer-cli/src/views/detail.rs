//! Single-country detail view
//!
//! The country lookup is fatal; the weather lookup is optional and any
//! failure there only removes the weather section.

use log::{debug, warn};

use super::APP_TITLE;
use crate::api::{ApiError, Country, CountryRepository, WeatherSnapshot};
use crate::config::StorageError;
use crate::services::favorites::FavoritesStore;

#[derive(Debug, Clone)]
pub struct DetailView {
    pub country: Country,
    /// `None` when the capital has no coordinates, weather is disabled, or the lookup failed
    pub weather: Option<WeatherSnapshot>,
    pub is_favorite: bool,
}

impl DetailView {
    pub async fn load(
        repo: &dyn CountryRepository,
        favorites: &FavoritesStore,
        code: &str,
    ) -> Result<Self, ApiError> {
        let country = repo.fetch_by_code(code).await?;
        let weather = load_weather(repo, &country).await;
        let is_favorite = favorites.is_favorite(country.code());

        Ok(Self {
            country,
            weather,
            is_favorite,
        })
    }

    pub fn title(&self) -> String {
        format!("{} | {}", self.country.common_name(), APP_TITLE)
    }

    /// Flip the favorite flag of the shown country
    pub fn toggle_favorite(&mut self, favorites: &FavoritesStore) -> Result<bool, StorageError> {
        self.is_favorite = favorites.toggle(self.country.code())?;
        Ok(self.is_favorite)
    }
}

/// Best-effort weather for the capital; never fails the view
async fn load_weather(repo: &dyn CountryRepository, country: &Country) -> Option<WeatherSnapshot> {
    let Some((lat, lon)) = country.capital_latlng() else {
        debug!("{} has no capital coordinates, skipping weather", country.code());
        return None;
    };

    if !repo.weather_enabled() {
        debug!("Weather lookups disabled, skipping weather for {}", country.code());
        return None;
    }

    match repo.fetch_weather(lat, lon).await {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn!("Failed to fetch weather data for {}: {}", country.code(), e);
            None
        }
    }
}
