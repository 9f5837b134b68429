//! Two-country comparison view

use log::debug;

use crate::api::{ApiError, CountryRepository, CountrySummary};
use crate::services::compare::{Comparison, compare_countries};
use crate::services::filter::{self, FilterSpec, SortKey};

/// One of the two selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareSlot {
    First,
    Second,
}

impl CompareSlot {
    fn index(self) -> usize {
        match self {
            CompareSlot::First => 0,
            CompareSlot::Second => 1,
        }
    }
}

pub struct CompareView {
    /// Name-sorted selector dataset
    countries: Vec<CountrySummary>,
    selected: [Option<String>; 2],
}

impl CompareView {
    pub async fn load(repo: &dyn CountryRepository) -> Result<Self, ApiError> {
        let countries = repo.fetch_summary_list().await?;
        Ok(Self::from_dataset(countries))
    }

    pub fn from_dataset(mut countries: Vec<CountrySummary>) -> Self {
        filter::sort_records(&mut countries, SortKey::NameAsc);
        Self {
            countries,
            selected: [None, None],
        }
    }

    /// Selector entries whose name contains `query`, name order
    pub fn candidates(&self, query: &str) -> Vec<&CountrySummary> {
        filter::apply(&self.countries, &FilterSpec::new().with_search(query))
    }

    /// Choose a country for one side; the code must be in the dataset
    pub fn select(&mut self, slot: CompareSlot, code: &str) -> Result<(), ApiError> {
        let country = self
            .countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
            .ok_or_else(|| ApiError::not_found(code.trim()))?;

        debug!("Compare slot {:?} = {}", slot, country.code);
        self.selected[slot.index()] = Some(country.code.clone());
        Ok(())
    }

    /// Fetch both full records concurrently and compare them once both arrive.
    /// `None` until both slots are filled.
    pub async fn comparison(
        &self,
        repo: &dyn CountryRepository,
    ) -> Result<Option<Comparison>, ApiError> {
        let (Some(first), Some(second)) = (&self.selected[0], &self.selected[1]) else {
            return Ok(None);
        };

        let (left, right) =
            tokio::try_join!(repo.fetch_by_code(first), repo.fetch_by_code(second))?;
        Ok(Some(compare_countries(&left, &right)))
    }
}
