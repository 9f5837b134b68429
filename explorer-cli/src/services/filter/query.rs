//! Round-trip of a filter specification through a URL query string
//!
//! Parameters: `search`, `regions` (comma-joined), `population`, `sort`.
//! Defaults are left out so the unfiltered view has an empty query.

use log::debug;

use super::models::{FilterSpec, PopulationBucket, SortKey};

pub const PARAM_SEARCH: &str = "search";
pub const PARAM_REGIONS: &str = "regions";
pub const PARAM_POPULATION: &str = "population";
pub const PARAM_SORT: &str = "sort";

impl FilterSpec {
    /// Encode as `key=value&...` without a leading `?`
    pub fn to_query_string(&self) -> String {
        let mut params: Vec<String> = Vec::new();

        if !self.search.is_empty() {
            params.push(format!("{}={}", PARAM_SEARCH, urlencoding::encode(&self.search)));
        }

        if !self.regions.is_empty() {
            let regions: Vec<String> = self
                .regions
                .iter()
                .map(|r| urlencoding::encode(r).into_owned())
                .collect();
            params.push(format!("{}={}", PARAM_REGIONS, regions.join(",")));
        }

        if self.population != PopulationBucket::Any {
            params.push(format!("{}={}", PARAM_POPULATION, self.population.as_param()));
        }

        if self.sort != SortKey::NameAsc {
            params.push(format!("{}={}", PARAM_SORT, self.sort.as_param()));
        }

        params.join("&")
    }

    /// Decode a query string, with or without the leading `?`.
    ///
    /// Unknown parameters are ignored, unknown values fall back to defaults,
    /// and the first occurrence of a repeated parameter wins.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let mut spec = FilterSpec::default();
        let mut seen: Vec<String> = Vec::new();

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(raw_key);
            if seen.contains(&key) {
                continue;
            }
            let value = decode_component(raw_value);

            match key.as_str() {
                PARAM_SEARCH => spec.search = value.trim().to_string(),
                // Split before decoding so an escaped comma stays inside its region
                PARAM_REGIONS => {
                    spec.regions = raw_value
                        .split(',')
                        .map(|r| decode_component(r).trim().to_lowercase())
                        .filter(|r| !r.is_empty())
                        .collect();
                }
                PARAM_POPULATION => spec.population = PopulationBucket::from_param(&value),
                PARAM_SORT => spec.sort = SortKey::from_param(&value),
                other => {
                    debug!("Ignoring unknown query parameter '{}'", other);
                    continue;
                }
            }
            seen.push(key);
        }

        spec
    }
}

/// Form-style decoding: `+` is a space, then percent-decoding.
/// Invalid sequences are kept verbatim.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
