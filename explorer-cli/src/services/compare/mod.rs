//! Compare service
//!
//! Pairs two full country records field by field and marks the strictly
//! greater side of the numeric measures.

pub mod models;

pub use models::{Comparison, ComparisonRow, Highlight, NOT_APPLICABLE};

use std::cmp::Ordering;

use crate::api::Country;
use crate::services::format::{format_area, format_thousands};

pub const ROW_OFFICIAL_NAME: &str = "Official Name";
pub const ROW_CAPITAL: &str = "Capital";
pub const ROW_REGION: &str = "Region";
pub const ROW_SUBREGION: &str = "Subregion";
pub const ROW_POPULATION: &str = "Population";
pub const ROW_AREA: &str = "Area";
pub const ROW_LANGUAGES: &str = "Languages";
pub const ROW_CURRENCIES: &str = "Currencies";
pub const ROW_TIMEZONES: &str = "Timezones";
pub const ROW_DRIVING_SIDE: &str = "Driving Side";
pub const ROW_UN_MEMBER: &str = "UN Member";
pub const ROW_INDEPENDENT: &str = "Independent";
pub const ROW_BORDERS: &str = "Bordering Countries";
pub const ROW_TLD: &str = "Top-Level Domain";
pub const ROW_GINI: &str = "Gini Index";

/// Highlight the strictly greater value; equal or unordered values highlight neither
pub fn highlight_greater<T: PartialOrd>(left: T, right: T) -> Highlight {
    match left.partial_cmp(&right) {
        Some(Ordering::Greater) => Highlight::Left,
        Some(Ordering::Less) => Highlight::Right,
        _ => Highlight::None,
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn joined(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

fn yes_no(value: bool) -> String {
    let label = if value { "Yes" } else { "No" };
    label.to_string()
}

fn capitalized(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn gini(country: &Country) -> Option<String> {
    country
        .latest_gini()
        .map(|(year, value)| format!("{}% ({})", value, year))
}

/// Build the comparison of two complete records
pub fn compare_countries(left: &Country, right: &Country) -> Comparison {
    let rows = vec![
        ComparisonRow::text(
            ROW_OFFICIAL_NAME,
            non_empty(left.official_name()),
            non_empty(right.official_name()),
        ),
        ComparisonRow::text(
            ROW_CAPITAL,
            left.summary.capital_display(),
            right.summary.capital_display(),
        ),
        ComparisonRow::text(
            ROW_REGION,
            non_empty(&left.summary.region),
            non_empty(&right.summary.region),
        ),
        ComparisonRow::text(
            ROW_SUBREGION,
            left.subregion.as_deref().and_then(non_empty),
            right.subregion.as_deref().and_then(non_empty),
        ),
        ComparisonRow::text(
            ROW_POPULATION,
            Some(format_thousands(left.summary.population)),
            Some(format_thousands(right.summary.population)),
        )
        .with_highlight(highlight_greater(
            left.summary.population,
            right.summary.population,
        )),
        ComparisonRow::text(
            ROW_AREA,
            Some(format_area(left.summary.area)),
            Some(format_area(right.summary.area)),
        )
        .with_highlight(highlight_greater(left.summary.area, right.summary.area)),
        ComparisonRow::text(ROW_LANGUAGES, left.languages_display(), right.languages_display()),
        ComparisonRow::text(
            ROW_CURRENCIES,
            left.currencies_display(),
            right.currencies_display(),
        ),
        ComparisonRow::text(ROW_TIMEZONES, joined(&left.timezones), joined(&right.timezones)),
        ComparisonRow::text(
            ROW_DRIVING_SIDE,
            left.driving_side().map(capitalized),
            right.driving_side().map(capitalized),
        ),
        ComparisonRow::text(
            ROW_UN_MEMBER,
            Some(yes_no(left.un_member)),
            Some(yes_no(right.un_member)),
        ),
        ComparisonRow::text(
            ROW_INDEPENDENT,
            left.independent.map(yes_no),
            right.independent.map(yes_no),
        ),
        ComparisonRow::text(
            ROW_BORDERS,
            Some(left.borders.len().to_string()),
            Some(right.borders.len().to_string()),
        ),
        ComparisonRow::text(ROW_TLD, joined(&left.tld), joined(&right.tld)),
        ComparisonRow::text(ROW_GINI, gini(left), gini(right)),
    ];

    Comparison {
        left_code: left.code().to_string(),
        left_name: left.common_name().to_string(),
        right_code: right.code().to_string(),
        right_name: right.common_name().to_string(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::country;
    use crate::api::models::Currency;

    #[test]
    fn test_population_highlight_greater_side() {
        let left = country("AAA", "Small", "Europe", 100);
        let right = country("BBB", "Big", "Europe", 200);

        let comparison = compare_countries(&left, &right);
        assert_eq!(comparison.row(ROW_POPULATION).unwrap().highlight, Highlight::Right);

        let reversed = compare_countries(&right, &left);
        assert_eq!(reversed.row(ROW_POPULATION).unwrap().highlight, Highlight::Left);
    }

    #[test]
    fn test_equal_area_highlights_neither() {
        let left = country("AAA", "One", "Asia", 1);
        let right = country("BBB", "Two", "Asia", 2);
        assert_eq!(left.summary.area, right.summary.area);

        let comparison = compare_countries(&left, &right);
        assert_eq!(comparison.row(ROW_AREA).unwrap().highlight, Highlight::None);
    }

    #[test]
    fn test_missing_fields_render_not_applicable() {
        let mut left = country("AAA", "One", "Asia", 1);
        left.independent = None;
        let right = country("BBB", "Two", "Asia", 2);

        let comparison = compare_countries(&left, &right);

        let gini = comparison.row(ROW_GINI).unwrap();
        assert_eq!(gini.left, NOT_APPLICABLE);
        assert_eq!(gini.right, NOT_APPLICABLE);
        assert_eq!(comparison.row(ROW_SUBREGION).unwrap().left, NOT_APPLICABLE);
        assert_eq!(comparison.row(ROW_INDEPENDENT).unwrap().left, NOT_APPLICABLE);
        assert_eq!(comparison.row(ROW_INDEPENDENT).unwrap().right, "Yes");
        assert_eq!(comparison.row(ROW_DRIVING_SIDE).unwrap().left, NOT_APPLICABLE);
    }

    #[test]
    fn test_text_rows() {
        let mut left = country("DEU", "Germany", "Europe", 83_240_525);
        left.currencies.insert(
            "EUR".to_string(),
            Currency {
                name: "Euro".to_string(),
                symbol: Some("€".to_string()),
            },
        );
        left.languages.insert("deu".to_string(), "German".to_string());
        left.gini.insert("2016".to_string(), 31.9);
        left.borders = vec!["AUT".to_string(), "FRA".to_string()];
        left.timezones = vec!["UTC+01:00".to_string()];
        left.car = Some(crate::api::models::Car {
            signs: vec![],
            side: Some("right".to_string()),
        });
        let right = country("FRA", "France", "Europe", 67_000_000);

        let comparison = compare_countries(&left, &right);

        assert_eq!(comparison.left_name, "Germany");
        assert_eq!(comparison.right_code, "FRA");
        assert_eq!(comparison.row(ROW_POPULATION).unwrap().left, "83,240,525");
        assert_eq!(comparison.row(ROW_CURRENCIES).unwrap().left, "Euro (€)");
        assert_eq!(comparison.row(ROW_LANGUAGES).unwrap().left, "German");
        assert_eq!(comparison.row(ROW_GINI).unwrap().left, "31.9% (2016)");
        assert_eq!(comparison.row(ROW_BORDERS).unwrap().left, "2");
        assert_eq!(comparison.row(ROW_BORDERS).unwrap().right, "0");
        assert_eq!(comparison.row(ROW_DRIVING_SIDE).unwrap().left, "Right");
        assert_eq!(comparison.row(ROW_UN_MEMBER).unwrap().right, "Yes");
        assert_eq!(comparison.rows.len(), 15);
    }

    #[test]
    fn test_highlight_greater_unordered() {
        assert_eq!(highlight_greater(f64::NAN, 1.0), Highlight::None);
        assert_eq!(highlight_greater(3, 3), Highlight::None);
    }
}
