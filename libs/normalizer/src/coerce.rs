//! Lenient readers for the two fields the backend is least consistent about:
//! identifiers and timestamps.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Naive layouts the backend has been seen to emit. All are read as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Years a four-digit `%Y` can print and read back.
const YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

const OFFSET_FORMATS: [&str; 2] =
    ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Reads an integral id from a JSON number or a numeric string.
///
/// Returns `None` for anything else, including fractional and non-finite
/// numbers and blank strings.
pub fn coerce_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(integral)),
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
}

fn integral(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range)
        .then_some(value as i64)
}

/// Reads an instant from a timestamp string or a millisecond epoch number.
///
/// Falsy values (`null`, `false`, `0`, `""`), values of any other type and
/// instants outside the years 0 to 9999 yield `None`.
pub fn coerce_date(value: &Value) -> Option<DateTime<Utc>> {
    let at = match value {
        Value::String(text) if !text.is_empty() => parse_date(text),
        Value::Number(number) => {
            let millis = number
                .as_f64()
                .filter(|millis| millis.is_finite() && *millis != 0.0)?;
            DateTime::from_timestamp_millis(millis.trunc() as i64)
        }
        _ => None,
    }?;

    YEARS.contains(&at.year()).then_some(at)
}

fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    // Naive "YYYY-MM-DD HH:MM:SS" first, pinned to UTC.
    if !text.contains('T') {
        let candidate = format!("{}Z", text.replacen(' ', "T", 1));
        if let Ok(at) = DateTime::parse_from_rfc3339(&candidate) {
            return Some(at.with_timezone(&Utc));
        }
    }

    parse_as_is(text)
}

fn parse_as_is(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(text) {
        return Some(at.with_timezone(&Utc));
    }
    if let Ok(at) = DateTime::parse_from_rfc2822(text) {
        return Some(at.with_timezone(&Utc));
    }
    if let Some(at) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(text, format).ok())
    {
        return Some(at.with_timezone(&Utc));
    }
    if let Some(at) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
    {
        return Some(at.and_utc());
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|at| at.and_utc())
}
