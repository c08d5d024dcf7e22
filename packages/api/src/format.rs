//! Display helpers shared by the list pages.

use chrono::{DateTime, NaiveDateTime};

/// Render an API timestamp as `dd.mm.yyyy hh:mm`.
///
/// Accepts RFC 3339 (`2024-05-01T10:00:00Z`) and the naive ISO form the API
/// emits for columns without a timezone (`2024-05-01T10:00:00.123456`).
/// Anything else is shown as received.
pub fn timestamp(value: &str) -> String {
    const DISPLAY: &str = "%d.%m.%Y %H:%M";

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY).to_string();
    }
    value.to_string()
}

/// Money with two decimals.
pub fn amount(value: f64) -> String {
    format!("{value:.2}")
}
