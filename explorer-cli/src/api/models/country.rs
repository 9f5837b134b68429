//! REST Countries record models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Common and official display names
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// Flag image references
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flags {
    /// Raster image URL
    pub png: String,
    /// Vector image URL
    pub svg: String,
    /// Accessible description, missing for some records
    pub alt: Option<String>,
}

/// Summary projection of a country record, as served by `/all?fields=...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySummary {
    /// ISO 3166-1 alpha-3 code, the primary key for every lookup
    #[serde(rename = "cca3")]
    pub code: String,
    pub name: CountryName,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub population: u64,
    /// Square kilometres; fractional for small territories
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub flags: Flags,
}

impl CountrySummary {
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    /// Capitals joined for display, `None` when the record lists none
    pub fn capital_display(&self) -> Option<String> {
        if self.capital.is_empty() {
            None
        } else {
            Some(self.capital.join(", "))
        }
    }
}

/// Currency label and symbol
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub name: String,
    pub symbol: Option<String>,
}

impl Currency {
    pub fn display(&self) -> String {
        match &self.symbol {
            Some(symbol) if !symbol.is_empty() => format!("{} ({})", self.name, symbol),
            _ => self.name.clone(),
        }
    }
}

/// Capital coordinates, used to key the weather lookup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapitalInfo {
    pub latlng: Vec<f64>,
}

/// Driving information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Car {
    pub signs: Vec<String>,
    pub side: Option<String>,
}

/// Complete country record, as served by `/alpha/{code}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[serde(flatten)]
    pub summary: CountrySummary,
    #[serde(default)]
    pub subregion: Option<String>,
    /// Language code -> display label
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    /// Currency code -> label and symbol
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    /// Neighbouring country codes, never resolved records
    #[serde(default)]
    pub borders: Vec<String>,
    #[serde(default)]
    pub timezones: Vec<String>,
    #[serde(default)]
    pub capital_info: Option<CapitalInfo>,
    #[serde(default)]
    pub un_member: bool,
    #[serde(default)]
    pub independent: Option<bool>,
    /// Year -> Gini coefficient in percent
    #[serde(default)]
    pub gini: BTreeMap<String, f64>,
    #[serde(default)]
    pub car: Option<Car>,
    #[serde(default)]
    pub tld: Vec<String>,
}

impl Country {
    pub fn code(&self) -> &str {
        &self.summary.code
    }

    pub fn common_name(&self) -> &str {
        &self.summary.name.common
    }

    pub fn official_name(&self) -> &str {
        &self.summary.name.official
    }

    /// Capital latitude/longitude, if the provider knows them
    pub fn capital_latlng(&self) -> Option<(f64, f64)> {
        match self.capital_info.as_ref()?.latlng.as_slice() {
            [lat, lon] => Some((*lat, *lon)),
            _ => None,
        }
    }

    /// Most recent Gini measurement as `(year, percent)`
    pub fn latest_gini(&self) -> Option<(&str, f64)> {
        self.gini
            .iter()
            .max_by(|a, b| a.0.cmp(b.0))
            .map(|(year, value)| (year.as_str(), *value))
    }

    pub fn driving_side(&self) -> Option<&str> {
        self.car.as_ref()?.side.as_deref()
    }

    /// Languages joined for display, ordered by language code
    pub fn languages_display(&self) -> Option<String> {
        if self.languages.is_empty() {
            return None;
        }
        Some(self.languages.values().cloned().collect::<Vec<_>>().join(", "))
    }

    /// Currencies joined for display with their symbols
    pub fn currencies_display(&self) -> Option<String> {
        if self.currencies.is_empty() {
            return None;
        }
        Some(
            self.currencies
                .values()
                .map(Currency::display)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GERMANY: &str = r#"{
        "name": {"common": "Germany", "official": "Federal Republic of Germany"},
        "cca3": "DEU",
        "tld": [".de"],
        "independent": true,
        "unMember": true,
        "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
        "capital": ["Berlin"],
        "region": "Europe",
        "subregion": "Western Europe",
        "languages": {"deu": "German"},
        "borders": ["AUT", "BEL", "CZE"],
        "area": 357114.0,
        "population": 83240525,
        "gini": {"2016": 31.9},
        "car": {"signs": ["DY"], "side": "right"},
        "timezones": ["UTC+01:00"],
        "flags": {"png": "https://flagcdn.com/w320/de.png", "svg": "https://flagcdn.com/de.svg", "alt": "Black, red, gold"},
        "capitalInfo": {"latlng": [52.52, 13.4]}
    }"#;

    #[test]
    fn test_decode_full_record() {
        let country: Country = serde_json::from_str(GERMANY).unwrap();

        assert_eq!(country.code(), "DEU");
        assert_eq!(country.official_name(), "Federal Republic of Germany");
        assert_eq!(country.summary.population, 83_240_525);
        assert_eq!(country.capital_latlng(), Some((52.52, 13.4)));
        assert_eq!(country.latest_gini(), Some(("2016", 31.9)));
        assert_eq!(country.driving_side(), Some("right"));
        assert_eq!(country.currencies_display().as_deref(), Some("Euro (€)"));
        assert_eq!(country.languages_display().as_deref(), Some("German"));
        assert!(country.un_member);
        assert_eq!(country.independent, Some(true));
    }

    #[test]
    fn test_decode_sparse_record() {
        let json = r#"{"name": {"common": "Antarctica", "official": "Antarctica"}, "cca3": "ATA", "region": "Antarctic", "population": 1000, "area": 14000000}"#;
        let country: Country = serde_json::from_str(json).unwrap();

        assert!(country.summary.capital.is_empty());
        assert_eq!(country.summary.capital_display(), None);
        assert_eq!(country.capital_latlng(), None);
        assert_eq!(country.latest_gini(), None);
        assert_eq!(country.languages_display(), None);
        assert_eq!(country.independent, None);
    }

    #[test]
    fn test_latest_gini_picks_most_recent_year() {
        let json = r#"{"name": {"common": "X"}, "cca3": "XXX", "gini": {"2019": 30.0, "2021": 28.5, "2005": 35.1}}"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.latest_gini(), Some(("2021", 28.5)));
    }

    #[test]
    fn test_capital_latlng_requires_pair() {
        let json = r#"{"name": {"common": "X"}, "cca3": "XXX", "capitalInfo": {"latlng": [1.0]}}"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.capital_latlng(), None);
    }

    #[test]
    fn test_currency_without_symbol() {
        let currency = Currency {
            name: "Special drawing rights".to_string(),
            symbol: None,
        };
        assert_eq!(currency.display(), "Special drawing rights");
    }
}
