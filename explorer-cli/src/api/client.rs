//! HTTP implementation of the country repository

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::StatusCode;
use std::time::Duration;

use super::constants::{SUMMARY_FIELDS, USER_AGENT, WEATHER_EXCLUDE, WEATHER_UNITS};
use super::error::{ApiError, redact_url};
use super::models::{Country, CountrySummary, OneCallResponse, WeatherSnapshot};
use super::repository::CountryRepository;
use crate::config::ApiConfig;

/// REST Countries + OpenWeatherMap client
#[derive(Debug, Clone)]
pub struct CountriesClient {
    http: reqwest::Client,
    countries_url: String,
    weather_url: String,
    weather_key: Option<String>,
}

impl CountriesClient {
    /// Build a client from the `[api]` configuration section
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            countries_url: config.countries_url.trim_end_matches('/').to_string(),
            weather_url: config.weather_url.trim_end_matches('/').to_string(),
            weather_key: config.weather_key.clone().filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn summary_url(&self) -> String {
        format!("{}/all?fields={}", self.countries_url, SUMMARY_FIELDS.join(","))
    }

    pub fn alpha_url(&self, code: &str) -> String {
        format!("{}/alpha/{}", self.countries_url, urlencoding::encode(code))
    }

    /// `None` when no weather key is configured
    pub fn weather_request_url(&self, lat: f64, lon: f64) -> Option<String> {
        let key = self.weather_key.as_ref()?;
        Some(format!(
            "{}/onecall?lat={}&lon={}&exclude={}&units={}&appid={}",
            self.weather_url,
            lat,
            lon,
            WEATHER_EXCLUDE,
            WEATHER_UNITS,
            urlencoding::encode(key)
        ))
    }

    /// Issue a GET and read the body; transport errors map to `UpstreamUnavailable`
    async fn get(&self, url: &str) -> Result<(StatusCode, String), ApiError> {
        debug!("GET {}", redact_url(url));

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::upstream(url, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::upstream(url, e))?;

        debug!("GET {} -> {} ({} bytes)", redact_url(url), status, body.len());
        Ok((status, body))
    }
}

fn ensure_success(url: &str, status: StatusCode) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::upstream(url, format!("HTTP {}", status)))
    }
}

/// Decode the `/all` summary projection
pub fn parse_summary_list(url: &str, body: &str) -> Result<Vec<CountrySummary>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::decode(url, e))
}

/// Decode `/alpha/{code}`, which answers with a one-element array
pub fn parse_alpha(url: &str, code: &str, body: &str) -> Result<Country, ApiError> {
    let mut records: Vec<Country> = serde_json::from_str(body).map_err(|e| ApiError::decode(url, e))?;
    if records.len() > 1 {
        warn!(
            "Lookup for {} returned {} records, using the first",
            code,
            records.len()
        );
    }
    if records.is_empty() {
        return Err(ApiError::not_found(code));
    }
    Ok(records.swap_remove(0))
}

/// Interpret an `/all` response
pub fn summary_result(
    url: &str,
    status: StatusCode,
    body: &str,
) -> Result<Vec<CountrySummary>, ApiError> {
    ensure_success(url, status)?;
    parse_summary_list(url, body)
}

/// Interpret an `/alpha/{code}` response: 404 is `NotFound`, any other
/// failure status is `UpstreamUnavailable`
pub fn alpha_result(
    url: &str,
    code: &str,
    status: StatusCode,
    body: &str,
) -> Result<Country, ApiError> {
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::not_found(code));
    }
    ensure_success(url, status)?;
    parse_alpha(url, code, body)
}

/// Decode `/onecall` into a snapshot
pub fn parse_weather(url: &str, body: &str) -> Result<WeatherSnapshot, ApiError> {
    let response: OneCallResponse =
        serde_json::from_str(body).map_err(|e| ApiError::decode(url, e))?;
    Ok(response.into())
}

#[async_trait]
impl CountryRepository for CountriesClient {
    async fn fetch_summary_list(&self) -> Result<Vec<CountrySummary>, ApiError> {
        let url = self.summary_url();
        let (status, body) = self.get(&url).await?;
        let countries = summary_result(&url, status, &body)?;
        debug!("Fetched {} country summaries", countries.len());
        Ok(countries)
    }

    async fn fetch_by_code(&self, code: &str) -> Result<Country, ApiError> {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return Err(ApiError::not_found(&code));
        }

        let url = self.alpha_url(&code);
        let (status, body) = self.get(&url).await?;
        alpha_result(&url, &code, status, &body)
    }

    async fn fetch_weather(&self, lat: f64, lon: f64) -> Result<WeatherSnapshot, ApiError> {
        let Some(url) = self.weather_request_url(lat, lon) else {
            return Err(ApiError::upstream(
                &format!("{}/onecall", self.weather_url),
                "no weather API key configured",
            ));
        };

        let (status, body) = self.get(&url).await?;
        ensure_success(&url, status)?;
        parse_weather(&url, &body)
    }

    fn weather_enabled(&self) -> bool {
        self.weather_key.is_some()
    }
}
