//! Repository contract consumed by the views

use async_trait::async_trait;

use super::error::ApiError;
use super::models::{Country, CountrySummary, WeatherSnapshot};

/// Source of country and weather data
///
/// `fetch_summary_list` and `fetch_by_code` failures are fatal for the view
/// that issued them. `fetch_weather` is best-effort: callers degrade to "no
/// weather" instead of propagating its error.
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// All records, summary projection only
    async fn fetch_summary_list(&self) -> Result<Vec<CountrySummary>, ApiError>;

    /// One complete record by alpha-3 code
    async fn fetch_by_code(&self, code: &str) -> Result<Country, ApiError>;

    /// Current conditions and forecast for a coordinate pair
    async fn fetch_weather(&self, lat: f64, lon: f64) -> Result<WeatherSnapshot, ApiError>;

    /// Whether weather lookups can be attempted at all (e.g. an API key is configured)
    fn weather_enabled(&self) -> bool {
        true
    }
}
