use std::collections::BTreeSet;

/// Population size category, half-open on the small side:
/// small = [0, 1M), medium = [1M, 100M], large = (100M, ∞)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum PopulationBucket {
    #[default]
    Any,
    Small,
    Medium,
    Large,
}

pub const SMALL_UPPER_BOUND: u64 = 1_000_000;
pub const MEDIUM_UPPER_BOUND: u64 = 100_000_000;

impl PopulationBucket {
    pub fn contains(&self, population: u64) -> bool {
        match self {
            PopulationBucket::Any => true,
            PopulationBucket::Small => population < SMALL_UPPER_BOUND,
            PopulationBucket::Medium => {
                (SMALL_UPPER_BOUND..=MEDIUM_UPPER_BOUND).contains(&population)
            }
            PopulationBucket::Large => population > MEDIUM_UPPER_BOUND,
        }
    }

    /// Query-string token
    pub fn as_param(&self) -> &'static str {
        match self {
            PopulationBucket::Any => "any",
            PopulationBucket::Small => "small",
            PopulationBucket::Medium => "medium",
            PopulationBucket::Large => "large",
        }
    }

    /// Parse a query-string token; unknown values mean `Any`
    pub fn from_param(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "small" => PopulationBucket::Small,
            "medium" => PopulationBucket::Medium,
            "large" => PopulationBucket::Large,
            _ => PopulationBucket::Any,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PopulationBucket::Any => "Any",
            PopulationBucket::Small => "Less than 1M",
            PopulationBucket::Medium => "1M - 100M",
            PopulationBucket::Large => "More than 100M",
        }
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    PopulationAsc,
    PopulationDesc,
}

impl SortKey {
    /// Query-string token, as shared links have always spelled it
    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name",
            SortKey::NameDesc => "name-desc",
            SortKey::PopulationAsc => "population",
            SortKey::PopulationDesc => "population-desc",
        }
    }

    /// Parse a query-string token; unknown values mean `NameAsc`
    pub fn from_param(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "name-desc" => SortKey::NameDesc,
            "population" | "population-asc" => SortKey::PopulationAsc,
            "population-desc" => SortKey::PopulationDesc,
            _ => SortKey::NameAsc,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "Name (A to Z)",
            SortKey::NameDesc => "Name (Z to A)",
            SortKey::PopulationAsc => "Population (low to high)",
            SortKey::PopulationDesc => "Population (high to low)",
        }
    }
}

/// Declarative filter and sort selection for one view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSpec {
    /// Case-insensitive substring of the common name; empty accepts all
    pub search: String,
    /// Accepted regions, lower-case; empty accepts all
    pub regions: BTreeSet<String>,
    pub population: PopulationBucket,
    pub sort: SortKey,
}

/// One active (non-default) selection, for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFilter {
    pub label: &'static str,
    pub value: String,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl AsRef<str>) -> Self {
        self.search = search.as_ref().trim().to_string();
        self
    }

    pub fn with_region(mut self, region: impl AsRef<str>) -> Self {
        let region = region.as_ref().trim().to_lowercase();
        if !region.is_empty() {
            self.regions.insert(region);
        }
        self
    }

    pub fn with_population(mut self, population: PopulationBucket) -> Self {
        self.population = population;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Drop regions, bucket and sort but keep the free-text search
    pub fn clear_filters(&mut self) {
        self.regions.clear();
        self.population = PopulationBucket::Any;
        self.sort = SortKey::NameAsc;
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Non-default selections in display order: search, regions, population, sort
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut active = Vec::new();

        if !self.search.is_empty() {
            active.push(ActiveFilter {
                label: "Search",
                value: self.search.clone(),
            });
        }

        for region in &self.regions {
            active.push(ActiveFilter {
                label: "Region",
                value: capitalize(region),
            });
        }

        if self.population != PopulationBucket::Any {
            active.push(ActiveFilter {
                label: "Population",
                value: self.population.label().to_string(),
            });
        }

        if self.sort != SortKey::NameAsc {
            active.push(ActiveFilter {
                label: "Sort",
                value: self.sort.label().to_string(),
            });
        }

        active
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
