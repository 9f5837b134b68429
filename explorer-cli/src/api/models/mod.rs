//! Country and weather models as returned by the upstream providers

pub mod country;
pub mod weather;

pub use country::{CapitalInfo, Car, Country, CountryName, CountrySummary, Currency, Flags};
pub use weather::{CurrentWeather, ForecastDay, OneCallResponse, WeatherSnapshot};
