//! Country Repository
//!
//! Thin async client over the REST Countries and OpenWeatherMap APIs. Every
//! lookup is a fresh round trip; nothing is cached between calls.

pub mod client;
pub mod constants;
pub mod error;
pub mod models;
pub mod repository;

#[cfg(test)]
pub mod fake;

pub use client::CountriesClient;
pub use error::ApiError;
pub use models::{Country, CountrySummary, WeatherSnapshot};
pub use repository::CountryRepository;
