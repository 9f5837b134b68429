//! Terminal rendering for the views

use colored::*;
use unicode_width::UnicodeWidthStr;

use crate::api::{Country, WeatherSnapshot};
use crate::config::ThemePreference;
use crate::services::compare::{Comparison, Highlight, NOT_APPLICABLE};
use crate::services::format::{format_area, format_thousands};
use crate::views::{DetailView, FavoritesView, ListView};

const FAVORITE_MARKER: &str = "★";
const HIGHER_MARKER: &str = "▲";

/// Headings and key values in the theme's accent color
pub fn accent(text: &str, theme: ThemePreference) -> ColoredString {
    match theme {
        ThemePreference::Light => text.blue().bold(),
        ThemePreference::Dark => text.bright_cyan().bold(),
    }
}

/// Left-align `text` to `width` terminal columns
pub fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(UnicodeWidthStr::width)
        .chain(std::iter::once(UnicodeWidthStr::width(header)))
        .max()
        .unwrap_or(0)
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

fn non_empty(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|v| !v.is_empty())
}

/// One-line confirmation of a favorite toggle
pub fn print_favorite_status(label: &str, added: bool) {
    if added {
        println!("{} {} to favorites", "Added".green(), label.bold());
    } else {
        println!("{} {} from favorites", "Removed".yellow(), label.bold());
    }
}

pub fn print_list(view: &ListView, theme: ThemePreference) {
    println!("{}", accent("Countries", theme));

    let active = view.active_filters();
    if !active.is_empty() {
        let chips: Vec<String> = active
            .iter()
            .map(|f| format!("{}: {}", f.label, f.value))
            .collect();
        println!("{} {}", "Filters:".dimmed(), chips.join(" | "));
    }
    println!("{}", view.results_summary());
    println!();

    let rows = view.rows();
    if rows.is_empty() {
        println!("{}", "No countries match the current filters.".yellow());
    } else {
        let name_width = column_width("Name", rows.iter().map(|r| r.country.common_name()));
        let region_width = column_width("Region", rows.iter().map(|r| r.country.region.as_str()));

        println!(
            "  {}  {}  {}  {}",
            pad("Code", 4).bold(),
            pad("Name", name_width).bold(),
            pad("Region", region_width).bold(),
            "Population".bold()
        );

        for row in rows {
            let marker = if row.is_favorite {
                FAVORITE_MARKER.yellow()
            } else {
                " ".normal()
            };
            println!(
                "{} {}  {}  {}  {}",
                marker,
                pad(&row.country.code, 4),
                pad(row.country.common_name(), name_width),
                pad(&row.country.region, region_width),
                format_thousands(row.country.population)
            );
        }
    }

    if !view.spec().is_default() {
        println!();
        println!("{} ?{}", "Share:".dimmed(), view.share_query());
    }
}

pub fn print_detail(view: &DetailView, theme: ThemePreference) {
    let country = &view.country;
    let star = if view.is_favorite {
        format!(" {}", FAVORITE_MARKER.yellow())
    } else {
        String::new()
    };

    println!("{}{}", accent(&view.title(), theme), star);
    println!();

    for (label, value) in detail_fields(country) {
        println!("  {} {}", pad(&format!("{}:", label), 22).dimmed(), value);
    }

    if let Some(alt) = &country.summary.flags.alt {
        println!();
        println!("  {}", alt.italic());
    }

    if let Some(weather) = &view.weather {
        println!();
        print_weather(weather, country, theme);
    }
}

/// Label/value pairs of the detail page, absent values as "N/A"
pub fn detail_fields(country: &Country) -> Vec<(&'static str, String)> {
    let gini = country
        .latest_gini()
        .map(|(year, value)| format!("{}% ({})", value, year));
    let borders = if country.borders.is_empty() {
        None
    } else {
        Some(country.borders.join(", "))
    };

    vec![
        ("Official Name", country.official_name().to_string()),
        ("Capital", or_na(country.summary.capital_display())),
        ("Region", or_na(non_empty(&country.summary.region))),
        ("Subregion", or_na(country.subregion.as_deref().and_then(non_empty))),
        ("Population", format_thousands(country.summary.population)),
        ("Area", format_area(country.summary.area)),
        ("Languages", or_na(country.languages_display())),
        ("Currencies", or_na(country.currencies_display())),
        ("Timezones", or_na(Some(country.timezones.join(", ")).filter(|t| !t.is_empty()))),
        ("Driving Side", or_na(country.driving_side().map(str::to_string))),
        ("Bordering Countries", or_na(borders)),
        ("Gini Index", or_na(gini)),
    ]
}

fn print_weather(weather: &WeatherSnapshot, country: &Country, theme: ThemePreference) {
    let place = country
        .summary
        .capital_display()
        .unwrap_or_else(|| country.common_name().to_string());
    println!("{}", accent(&format!("Weather in {}", place), theme));

    let now = &weather.current;
    println!(
        "  {:.0}°F (feels like {:.0}°F), {}",
        now.temp, now.feels_like, now.description
    );
    println!(
        "  {} {}%   {} {:.0} mph",
        "Humidity".dimmed(),
        now.humidity,
        "Wind".dimmed(),
        now.wind_speed
    );

    if !weather.forecast.is_empty() {
        println!();
        for day in &weather.forecast {
            println!(
                "  {}  {:>4.0}° / {:<4.0}°  {}",
                pad(&day.date.format("%a %b %-d").to_string(), 10).bold(),
                day.temp_max,
                day.temp_min,
                day.description
            );
        }
    }
}

pub fn print_comparison(comparison: &Comparison, theme: ThemePreference) {
    let left_header = format!("{} ({})", comparison.left_name, comparison.left_code);
    let right_header = format!("{} ({})", comparison.right_name, comparison.right_code);

    let label_width = column_width("", comparison.rows.iter().map(|r| r.label));
    let left_width = column_width(
        &left_header,
        comparison.rows.iter().map(|r| r.left.as_str()),
    ) + 2;

    println!(
        "{}  {}  {}",
        pad("", label_width),
        accent(&pad(&left_header, left_width), theme),
        accent(&right_header, theme)
    );

    for row in &comparison.rows {
        let (left, right) = highlighted_cells(&row.left, &row.right, row.highlight);
        let left_cell = pad(&left, left_width);
        let (left_cell, right_cell) = match row.highlight {
            Highlight::Left => (left_cell.green().bold(), right.normal()),
            Highlight::Right => (left_cell.normal(), right.green().bold()),
            Highlight::None => (left_cell.normal(), right.normal()),
        };
        println!(
            "{}  {}  {}",
            pad(row.label, label_width).dimmed(),
            left_cell,
            right_cell
        );
    }
}

/// Cell texts with the higher-value marker appended to the highlighted side
pub fn highlighted_cells(left: &str, right: &str, highlight: Highlight) -> (String, String) {
    match highlight {
        Highlight::Left => (format!("{} {}", left, HIGHER_MARKER), right.to_string()),
        Highlight::Right => (left.to_string(), format!("{} {}", right, HIGHER_MARKER)),
        Highlight::None => (left.to_string(), right.to_string()),
    }
}

pub fn print_favorites(view: &FavoritesView, theme: ThemePreference) {
    println!("{}", accent("Favorites", theme));
    println!("{}", view.count_text());

    let countries = view.favorite_countries();
    if countries.is_empty() {
        println!();
        println!(
            "{}",
            "No favorites yet. Add one with `explorer-cli favorites toggle <CODE>`.".dimmed()
        );
        return;
    }

    println!();
    let name_width = column_width("", countries.iter().map(|c| c.common_name()));
    for country in countries {
        println!(
            "{} {}  {}  {}",
            FAVORITE_MARKER.yellow(),
            pad(&country.code, 4),
            pad(country.common_name(), name_width),
            or_na(country.capital_display()).dimmed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::country;
    use crate::api::models::Car;

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("abc", 5), "abc  ");
        assert_eq!(pad("Côte", 5), "Côte ");
        assert_eq!(pad("日本", 5), "日本 ");
        assert_eq!(pad("too long", 3), "too long");
    }

    #[test]
    fn test_highlighted_cells() {
        assert_eq!(
            highlighted_cells("10", "20", Highlight::Right),
            ("10".to_string(), "20 ▲".to_string())
        );
        assert_eq!(
            highlighted_cells("5", "5", Highlight::None),
            ("5".to_string(), "5".to_string())
        );
    }

    #[test]
    fn test_detail_fields_fill_missing_values() {
        let mut record = country("PER", "Peru", "Americas", 33_715_471);
        record.gini.insert("2019".to_string(), 41.5);
        record.car = Some(Car {
            signs: vec!["PE".to_string()],
            side: Some("right".to_string()),
        });

        let fields = detail_fields(&record);
        let get = |label: &str| {
            fields
                .iter()
                .find(|(l, _)| *l == label)
                .map(|(_, v)| v.clone())
                .unwrap()
        };

        assert_eq!(get("Population"), "33,715,471");
        assert_eq!(get("Subregion"), "N/A");
        assert_eq!(get("Bordering Countries"), "N/A");
        assert_eq!(get("Gini Index"), "41.5% (2019)");
        assert_eq!(get("Timezones"), "UTC");
        assert_eq!(get("Region"), "Americas");
    }

    #[test]
    fn test_detail_fields_blank_region() {
        let mut record = country("ATA", "Antarctica", "", 1_000);
        record.subregion = Some("  ".to_string());

        let fields = detail_fields(&record);
        let value = |label: &str| fields.iter().find(|(l, _)| *l == label).map(|(_, v)| v.as_str());
        assert_eq!(value("Region"), Some("N/A"));
        assert_eq!(value("Subregion"), Some("N/A"));
    }
}
