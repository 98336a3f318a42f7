//! Date-value parsing and formatting
//!
//! Widgets hand over dates in whatever shape the UI library produced:
//! RFC 3339 strings, `YYYY-MM-DD HH:mm[:ss]`, or bare dates. Parsing is
//! lenient; a value that matches none of the accepted shapes is reported
//! at `warn` and dropped by the caller.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Parse a raw date value into a naive local datetime.
///
/// Offsets in RFC 3339 input are kept as written (the wall time the user
/// picked), not converted.
pub fn parse_date_value(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(d.and_time(NaiveTime::MIN));
    }
    tracing::warn!(value = raw, "Unparseable date value, dropping");
    None
}

/// Parse and re-format a raw date value with a strftime pattern
pub fn format_date_value(raw: &str, strftime: &str) -> Option<String> {
    parse_date_value(raw).map(|dt| dt.format(strftime).to_string())
}
