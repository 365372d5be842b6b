//! Best-effort coercion of raw cells into typed values
//!
//! Every function returns `None` instead of failing; callers count the
//! misses so a bad cell never aborts the load.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a date, trying RFC 3339 first and then each format in order
pub fn parse_date(value: &str, formats: &[String]) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }

    formats.iter().find_map(|format| {
        NaiveDateTime::parse_from_str(value, format)
            .map(|dt| dt.date())
            .or_else(|_| NaiveDate::parse_from_str(value, format))
            .ok()
    })
}

/// Parse a non-negative head count; integral floats such as `"100.0"` are accepted
pub fn parse_count(value: &str) -> Option<u64> {
    let cleaned = strip_thousands(value);
    if let Ok(count) = cleaned.parse::<u64>() {
        return Some(count);
    }

    let float = cleaned.parse::<f64>().ok()?;
    let representable = float.is_finite() && float >= 0.0 && float.fract() == 0.0 && float < u64::MAX as f64;
    representable.then(|| float as u64)
}

/// Parse a percentage in `[0, 100]`, with or without a trailing `%`
pub fn parse_percentage(value: &str) -> Option<f64> {
    let trimmed = value.strip_suffix('%').unwrap_or(value).trim_end();
    let float = trimmed.parse::<f64>().ok()?;
    (float.is_finite() && (0.0..=100.0).contains(&float)).then_some(float)
}

/// Parse a non-negative amount, with or without a leading `$`
pub fn parse_amount(value: &str) -> Option<f64> {
    let trimmed = value.strip_prefix('$').unwrap_or(value).trim_start();
    let float = strip_thousands(trimmed).parse::<f64>().ok()?;
    (float.is_finite() && float >= 0.0).then_some(float)
}

fn strip_thousands(value: &str) -> String {
    value.chars().filter(|c| *c != ',').collect()
}
