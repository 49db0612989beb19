//! Tolerant field access over untyped property bags.
//!
//! Every entity constructor in this crate reads its input through these
//! helpers. The shared rule: a key that is absent, null or of the wrong
//! shape counts as missing and yields the caller-supplied default. Lookups
//! on a non-object bag behave like lookups on an empty one.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

pub fn str_or(bag: &Value, key: &str, default: &str) -> String {
    bag.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string())
}

pub fn opt_str(bag: &Value, key: &str) -> Option<String> {
    bag.get(key).and_then(Value::as_str).map(str::to_string)
}

pub fn uint_or(bag: &Value, key: &str, default: u64) -> u64 {
    bag.get(key).and_then(Value::as_u64).unwrap_or(default)
}

/// Raw integer lookup. Range validation needs to distinguish "absent or
/// wrong shape" (use the default) from "present but illegal" (error), so
/// this one keeps the Option.
pub fn int_opt(bag: &Value, key: &str) -> Option<i64> {
    bag.get(key).and_then(Value::as_i64)
}

pub fn bool_or(bag: &Value, key: &str, default: bool) -> bool {
    bag.get(key).and_then(Value::as_bool).unwrap_or(default)
}

pub fn opt_bool(bag: &Value, key: &str) -> Option<bool> {
    bag.get(key).and_then(Value::as_bool)
}

pub fn str_list(bag: &Value, key: &str) -> Vec<String> {
    bag.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

pub fn array<'a>(bag: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    bag.get(key).and_then(Value::as_array)
}

pub fn object<'a>(bag: &'a Value, key: &str) -> Option<&'a Value> {
    bag.get(key).filter(|v| v.is_object())
}

/// Parses the API's partial release dates: `YYYY`, `YYYY-MM` or
/// `YYYY-MM-DD`. Missing month and day components default to 1.
pub fn partial_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = match parts.next() {
        Some(m) => m.parse().ok()?,
        None => 1,
    };
    let day: u32 = match parts.next() {
        Some(d) => d.parse().ok()?,
        None => 1,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Partial date field, defaulting to 0001-01-01 when absent or unparsable.
pub fn date_or_default(bag: &Value, key: &str) -> NaiveDate {
    bag.get(key)
        .and_then(Value::as_str)
        .and_then(partial_date)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(1, 1, 1).unwrap())
}

/// RFC 3339 timestamp field (e.g. `added_at`).
pub fn datetime_opt(bag: &Value, key: &str) -> Option<DateTime<Utc>> {
    bag.get(key)
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Unix-millisecond timestamp field (the player's `timestamp`).
pub fn timestamp_ms_opt(bag: &Value, key: &str) -> Option<DateTime<Utc>> {
    bag.get(key)
        .and_then(Value::as_i64)
        .and_then(DateTime::from_timestamp_millis)
}
