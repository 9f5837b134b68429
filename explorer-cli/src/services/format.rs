//! Display formatting for numeric measures

/// `83240525` -> `83,240,525`
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Square kilometres with at most two decimals, e.g. `357,114 km²` or `0.44 km²`
pub fn format_area(area: f64) -> String {
    if !area.is_finite() || area < 0.0 {
        return "N/A".to_string();
    }

    let hundredths = (area * 100.0).round() as u64;
    let whole = format_thousands(hundredths / 100);
    let fraction = hundredths % 100;

    let number = match fraction {
        0 => whole,
        f if f % 10 == 0 => format!("{}.{}", whole, f / 10),
        f => format!("{}.{:02}", whole, f),
    };
    format!("{} km²", number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(83_240_525), "83,240,525");
    }

    #[test]
    fn test_format_area() {
        assert_eq!(format_area(357_114.0), "357,114 km²");
        assert_eq!(format_area(0.44), "0.44 km²");
        assert_eq!(format_area(2.5), "2.5 km²");
        assert_eq!(format_area(f64::NAN), "N/A");
    }
}
