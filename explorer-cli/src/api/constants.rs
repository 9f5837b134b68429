//! Upstream endpoints and query constants

/// Default base URL of the REST Countries API (v3.1)
pub const DEFAULT_COUNTRIES_URL: &str = "https://restcountries.com/v3.1";

/// Default base URL of the OpenWeatherMap One Call API
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/3.0";

/// Fields requested for the payload-reduced summary projection
pub const SUMMARY_FIELDS: &[&str] = &[
    "name",
    "cca3",
    "capital",
    "region",
    "area",
    "population",
    "flags",
];

/// Parts of the One Call response we never consume
pub const WEATHER_EXCLUDE: &str = "minutely,hourly";

/// Unit system requested from the weather provider
pub const WEATHER_UNITS: &str = "imperial";

/// Number of forecast days kept from the weather response
pub const FORECAST_DAYS: usize = 5;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

pub const USER_AGENT: &str = concat!("explorer-cli/", env!("CARGO_PKG_VERSION"));
