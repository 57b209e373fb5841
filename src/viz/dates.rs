//! Date axis values: ISO-like date strings to epoch milliseconds and back to tick labels.

use std::fmt::Write;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const DAY_MS: f64 = 86_400_000.0;

/// Parse `2024`, `2024-03`, `2024-03-05`, `2024-03-05 10:30[:15[.250]]` (or with `T`) as UTC.
pub fn parse_date(text: &str) -> Option<f64> {
    let text = text.trim();
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt.and_utc().timestamp_millis() as f64);
        }
    }
    let date = match text.len() {
        4 => NaiveDate::from_ymd_opt(text.parse().ok()?, 1, 1),
        7 => NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d").ok(),
        _ => NaiveDate::parse_from_str(text, "%Y-%m-%d").ok(),
    }?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(midnight.and_utc().timestamp_millis() as f64)
}

/// Tick label for `ms`. An explicit strftime `format` wins; otherwise the label resolution
/// follows the visible `span_ms`.
pub fn format_date(ms: f64, span_ms: f64, format: Option<&str>) -> String {
    let Some(dt) = DateTime::from_timestamp_millis(ms.round() as i64) else {
        return String::new();
    };
    let auto = if span_ms > 2.0 * 365.0 * DAY_MS {
        "%Y"
    } else if span_ms > 60.0 * DAY_MS {
        "%b %Y"
    } else if span_ms > 2.0 * DAY_MS {
        "%b %d"
    } else if span_ms > 2.0 * 3_600_000.0 {
        "%b %d %H:%M"
    } else {
        "%H:%M:%S"
    };
    let mut out = String::new();
    if let Some(fmt) = format {
        // Invalid strftime items surface as fmt::Error here instead of a panic.
        if write!(out, "{}", dt.format(fmt)).is_ok() {
            return out;
        }
        out.clear();
    }
    let _ = write!(out, "{}", dt.format(auto));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_forms() {
        assert_eq!(parse_date("1970-01-02"), Some(DAY_MS));
        assert_eq!(parse_date("1970-01-01 00:00:01"), Some(1000.0));
        assert_eq!(parse_date("1970-01-01T00:01"), Some(60_000.0));
        assert_eq!(parse_date("1970"), Some(0.0));
        assert_eq!(parse_date("1970-02"), Some(31.0 * DAY_MS));
        assert_eq!(parse_date("Monday"), None);
        assert_eq!(parse_date("abcd"), None);
    }

    #[test]
    fn label_resolution_follows_span() {
        let ms = parse_date("2024-03-05 10:30").unwrap();
        assert_eq!(format_date(ms, 5.0 * 365.0 * DAY_MS, None), "2024");
        assert_eq!(format_date(ms, 90.0 * DAY_MS, None), "Mar 2024");
        assert_eq!(format_date(ms, 10.0 * DAY_MS, None), "Mar 05");
        assert_eq!(format_date(ms, DAY_MS, None), "Mar 05 10:30");
        assert_eq!(format_date(ms, DAY_MS, Some("%Y/%m")), "2024/03");
    }
}
