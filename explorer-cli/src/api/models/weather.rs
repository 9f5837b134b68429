//! OpenWeatherMap One Call models

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::api::constants::FORECAST_DAYS;

/// Current conditions plus a short daily forecast for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentWeather,
    /// At most five days, starting today
    pub forecast: Vec<ForecastDay>,
}

/// Current conditions (imperial units)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Fahrenheit
    pub temp: f64,
    pub feels_like: f64,
    /// Percent
    pub humidity: u8,
    /// Miles per hour
    pub wind_speed: f64,
    pub description: String,
    pub icon: String,
}

/// One forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub temp_min: f64,
    pub temp_max: f64,
    pub description: String,
    pub icon: String,
}

/// Raw `/onecall` response, only the parts we consume
#[derive(Debug, Clone, Deserialize)]
pub struct OneCallResponse {
    pub current: OneCallCurrent,
    #[serde(default)]
    pub daily: Vec<OneCallDaily>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OneCallCurrent {
    pub temp: f64,
    #[serde(default)]
    pub feels_like: f64,
    #[serde(default)]
    pub humidity: u8,
    #[serde(default)]
    pub wind_speed: f64,
    #[serde(default)]
    pub weather: Vec<OneCallCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OneCallDaily {
    /// Unix timestamp (UTC)
    pub dt: i64,
    pub temp: OneCallDailyTemp,
    #[serde(default)]
    pub weather: Vec<OneCallCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OneCallDailyTemp {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OneCallCondition {
    pub description: String,
    pub icon: String,
}

fn first_condition(conditions: &[OneCallCondition]) -> (String, String) {
    conditions
        .first()
        .map(|c| (c.description.clone(), c.icon.clone()))
        .unwrap_or_default()
}

impl From<OneCallResponse> for WeatherSnapshot {
    fn from(response: OneCallResponse) -> Self {
        let (description, icon) = first_condition(&response.current.weather);
        let current = CurrentWeather {
            temp: response.current.temp,
            feels_like: response.current.feels_like,
            humidity: response.current.humidity,
            wind_speed: response.current.wind_speed,
            description,
            icon,
        };

        let forecast = response
            .daily
            .iter()
            .take(FORECAST_DAYS)
            .filter_map(|day| {
                // Out-of-range timestamps are dropped rather than failing the snapshot
                let date = DateTime::from_timestamp(day.dt, 0)?.date_naive();
                let (description, icon) = first_condition(&day.weather);
                Some(ForecastDay {
                    date,
                    temp_min: day.temp.min,
                    temp_max: day.temp.max,
                    description,
                    icon,
                })
            })
            .collect();

        WeatherSnapshot { current, forecast }
    }
}
