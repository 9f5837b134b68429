//! In-memory repository for view tests

use async_trait::async_trait;
use std::sync::Mutex;

use super::error::ApiError;
use super::models::{
    CapitalInfo, Country, CountryName, CountrySummary, CurrentWeather, Flags, WeatherSnapshot,
};
use super::repository::CountryRepository;

/// Serves fixed records; can be told to fail list or weather lookups
#[derive(Debug, Default)]
pub struct FakeRepository {
    pub countries: Vec<Country>,
    pub fail_list: bool,
    pub fail_weather: bool,
    pub weather_disabled: bool,
    pub requested_codes: Mutex<Vec<String>>,
    pub weather_requests: Mutex<Vec<(f64, f64)>>,
}

impl FakeRepository {
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            countries,
            ..Default::default()
        }
    }

    pub fn requested_codes(&self) -> Vec<String> {
        self.requested_codes
            .lock()
            .map(|codes| codes.clone())
            .unwrap_or_default()
    }

    pub fn weather_request_count(&self) -> usize {
        self.weather_requests.lock().map(|r| r.len()).unwrap_or(0)
    }
}

#[async_trait]
impl CountryRepository for FakeRepository {
    async fn fetch_summary_list(&self) -> Result<Vec<CountrySummary>, ApiError> {
        if self.fail_list {
            return Err(ApiError::upstream("fake://all", "HTTP 503"));
        }
        Ok(self.countries.iter().map(|c| c.summary.clone()).collect())
    }

    async fn fetch_by_code(&self, code: &str) -> Result<Country, ApiError> {
        if let Ok(mut codes) = self.requested_codes.lock() {
            codes.push(code.to_string());
        }
        self.countries
            .iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .cloned()
            .ok_or_else(|| ApiError::not_found(code))
    }

    async fn fetch_weather(&self, lat: f64, lon: f64) -> Result<WeatherSnapshot, ApiError> {
        if let Ok(mut requests) = self.weather_requests.lock() {
            requests.push((lat, lon));
        }
        if self.fail_weather {
            return Err(ApiError::upstream("fake://onecall", "HTTP 401"));
        }
        Ok(WeatherSnapshot {
            current: CurrentWeather {
                temp: 68.0,
                feels_like: 67.0,
                humidity: 40,
                wind_speed: 5.0,
                description: "clear sky".to_string(),
                icon: "01d".to_string(),
            },
            forecast: Vec::new(),
        })
    }

    fn weather_enabled(&self) -> bool {
        !self.weather_disabled
    }
}

/// Minimal summary record for engine tests
pub fn summary(code: &str, name: &str, region: &str, population: u64) -> CountrySummary {
    CountrySummary {
        code: code.to_string(),
        name: CountryName {
            common: name.to_string(),
            official: format!("Official {}", name),
        },
        capital: vec![format!("{} City", name)],
        region: region.to_string(),
        population,
        area: 1000.0,
        flags: Flags::default(),
    }
}

/// Full record with a capital location
pub fn country(code: &str, name: &str, region: &str, population: u64) -> Country {
    Country {
        summary: summary(code, name, region, population),
        subregion: None,
        languages: Default::default(),
        currencies: Default::default(),
        borders: Vec::new(),
        timezones: vec!["UTC".to_string()],
        capital_info: Some(CapitalInfo {
            latlng: vec![10.0, 20.0],
        }),
        un_member: true,
        independent: Some(true),
        gini: Default::default(),
        car: None,
        tld: Vec::new(),
    }
}
