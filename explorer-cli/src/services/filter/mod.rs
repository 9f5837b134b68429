//! Filter-Sort engine
//!
//! Pure function of (dataset, [`FilterSpec`]) to an ordered view. No I/O and
//! no state; callers replace whatever they rendered before with the result.

pub mod collate;
pub mod models;
pub mod query;

pub use models::{ActiveFilter, FilterSpec, PopulationBucket, SortKey};

use std::cmp::Reverse;

use crate::api::{Country, CountrySummary};

/// Fields the engine reads from a record
pub trait CountryFields {
    fn common_name(&self) -> &str;
    fn region(&self) -> &str;
    fn population(&self) -> u64;
}

impl CountryFields for CountrySummary {
    fn common_name(&self) -> &str {
        &self.name.common
    }

    fn region(&self) -> &str {
        &self.region
    }

    fn population(&self) -> u64 {
        self.population
    }
}

impl CountryFields for Country {
    fn common_name(&self) -> &str {
        &self.summary.name.common
    }

    fn region(&self) -> &str {
        &self.summary.region
    }

    fn population(&self) -> u64 {
        self.summary.population
    }
}

impl<T: CountryFields> CountryFields for &T {
    fn common_name(&self) -> &str {
        (**self).common_name()
    }

    fn region(&self) -> &str {
        (**self).region()
    }

    fn population(&self) -> u64 {
        (**self).population()
    }
}

/// Whether a record passes every active predicate of the filter
pub fn matches<T: CountryFields>(record: &T, spec: &FilterSpec) -> bool {
    let search = spec.search.trim();
    if !search.is_empty()
        && !record
            .common_name()
            .to_lowercase()
            .contains(&search.to_lowercase())
    {
        return false;
    }

    if !spec.regions.is_empty() && !spec.regions.contains(&record.region().to_lowercase()) {
        return false;
    }

    spec.population.contains(record.population())
}

/// Stable sort in place; equal keys keep their relative order
pub fn sort_records<T: CountryFields>(records: &mut [T], sort: SortKey) {
    match sort {
        SortKey::NameAsc => records.sort_by_cached_key(|r| collate::collation_key(r.common_name())),
        SortKey::NameDesc => {
            records.sort_by_cached_key(|r| Reverse(collate::collation_key(r.common_name())))
        }
        SortKey::PopulationAsc => records.sort_by_key(|r| r.population()),
        SortKey::PopulationDesc => records.sort_by_key(|r| Reverse(r.population())),
    }
}

/// Filter then sort. Every returned record satisfies the filter and every
/// record that satisfies it is returned.
pub fn apply<'a, T: CountryFields>(dataset: &'a [T], spec: &FilterSpec) -> Vec<&'a T> {
    let mut retained: Vec<&T> = dataset.iter().filter(|r| matches(*r, spec)).collect();
    sort_records(&mut retained, spec.sort);
    retained
}

/// Result count sentence shown above a list
pub fn results_summary(shown: usize, total: usize) -> String {
    if shown == total {
        format!("Showing all {} countries", total)
    } else {
        format!("Showing {} of {} countries", shown, total)
    }
}
