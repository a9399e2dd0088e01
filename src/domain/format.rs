// src/domain/format.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const INVALID_DATE: &str = "Invalid Date";

/// Formats a listing date as `M/D/YY`.
///
/// Accepts plain dates, RFC 3339 timestamps and naive timestamps.
/// Timestamps keep the calendar date of their own offset.
pub fn format_date(raw: &str) -> String {
    match parse_date(raw.trim()) {
        Some(date) => date.format("%-m/%-d/%y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

/// `$` followed by the en-US grouped amount, at most three fraction digits.
pub fn format_price(price: f64) -> String {
    format!("${}", group_thousands(price))
}

/// Fraction to whole percent: `0.234` becomes `23%`.
pub fn format_percentage(fraction: f64) -> String {
    let rounded = round_half_up(fraction * 100.0);
    if rounded == 0.0 {
        // avoid "-0%"
        return "0%".to_string();
    }
    format!("{rounded}%")
}

/// `0` is a studio, anything else is counted in bedrooms.
pub fn bedroom_label(bedrooms: Option<f64>) -> String {
    match bedrooms {
        Some(n) if n == 0.0 => "Studio".to_string(),
        Some(n) => format!("{n} Bedroom"),
        None => "Unknown".to_string(),
    }
}

/// Nearest integer, ties toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

fn group_thousands(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-05"), "3/5/25");
        assert_eq!(format_date("2020-01-01"), "1/1/20");
        assert_eq!(format_date("2025-01-10T08:30:00"), "1/10/25");
        assert_eq!(format_date("2024-12-31T23:00:00-08:00"), "12/31/24");
        assert_eq!(format_date("2005-11-20 00:00:00"), "11/20/05");
        assert_eq!(format_date("next tuesday"), INVALID_DATE);
        assert_eq!(format_date(""), INVALID_DATE);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1234.5), "$1,234.5");
        assert_eq!(format_price(2000.0), "$2,000");
        assert_eq!(format_price(999.0), "$999");
        assert_eq!(format_price(1234567.0), "$1,234,567");
        assert_eq!(format_price(12.3456), "$12.346");
        assert_eq!(format_price(-1500.0), "$-1,500");
        assert_eq!(format_price(0.0), "$0");
        assert_eq!(format_price(f64::NAN), "$NaN");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.234), "23%");
        assert_eq!(format_percentage(0.2), "20%");
        assert_eq!(format_percentage(0.125), "13%");
        assert_eq!(format_percentage(1.5), "150%");
        assert_eq!(format_percentage(-0.125), "-12%");
        assert_eq!(format_percentage(-0.001), "0%");
        assert_eq!(format_percentage(f64::NAN), "NaN%");
    }

    #[test]
    fn test_bedroom_label() {
        assert_eq!(bedroom_label(Some(0.0)), "Studio");
        assert_eq!(bedroom_label(Some(1.0)), "1 Bedroom");
        assert_eq!(bedroom_label(Some(4.0)), "4 Bedroom");
        assert_eq!(bedroom_label(None), "Unknown");
    }
}
