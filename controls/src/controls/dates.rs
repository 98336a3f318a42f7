//! Date formats and dynamic default resolution
//!
//! Date controls persist a picker format (the UI library's token syntax)
//! and optionally a dynamic default, a rule computing the initial value
//! relative to the current moment. Resolution is parameterized over "now"
//! so callers pick the clock (and timezone) and tests stay deterministic.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// PICKER FORMATS
// ============================================================================

/// Date picker formats, tagged with the token strings the UI persists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DateFormat {
    #[default]
    #[serde(rename = "YYYY-MM-DD")]
    Date,
    #[serde(rename = "YYYY-MM-DD HH:mm:ss")]
    Datetime,
    #[serde(rename = "YYYY-MM-DD HH:mm")]
    DatetimeMinute,
    #[serde(rename = "YYYY-MM")]
    Month,
    #[serde(rename = "YYYY-ww")]
    Week,
    #[serde(rename = "YYYY")]
    Year,
}

impl DateFormat {
    /// The persisted token string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "YYYY-MM-DD",
            Self::Datetime => "YYYY-MM-DD HH:mm:ss",
            Self::DatetimeMinute => "YYYY-MM-DD HH:mm",
            Self::Month => "YYYY-MM",
            Self::Week => "YYYY-ww",
            Self::Year => "YYYY",
        }
    }

    /// The chrono strftime equivalent
    pub fn strftime(&self) -> &'static str {
        match self {
            Self::Date => "%Y-%m-%d",
            Self::Datetime => "%Y-%m-%d %H:%M:%S",
            Self::DatetimeMinute => "%Y-%m-%d %H:%M",
            Self::Month => "%Y-%m",
            Self::Week => "%Y-%W",
            Self::Year => "%Y",
        }
    }

    /// Whether the format carries a time-of-day component
    pub fn has_time(&self) -> bool {
        matches!(self, Self::Datetime | Self::DatetimeMinute)
    }
}

// ============================================================================
// DYNAMIC DEFAULTS
// ============================================================================

/// Dynamic default rules for date controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DynamicDefault {
    Today,
    Yesterday,
    /// Start of the current week
    Week,
    /// 7 days back from now
    Day7,
    LastWeek,
    /// Start of the current month
    Month,
    /// 30 days back from now
    Day30,
    LastMonth,
    /// Start of the current quarter
    Quarter,
    /// 90 days back from now
    Day90,
    LastQuarter,
    /// Start of the current year
    Year,
    /// 365 days back from now
    Day365,
    LastYear,
    /// Defer to the control's static default value
    Custom,
}

impl DynamicDefault {
    /// Resolve the rule against a caller-supplied "now".
    ///
    /// Start-of-period rules land on local midnight; fixed-offset rules keep
    /// the time of day. `Custom` returns `None`, and the caller falls back
    /// to the control's static default.
    pub fn resolve<Tz: TimeZone>(&self, now: DateTime<Tz>) -> Option<DateTime<Tz>> {
        match self {
            Self::Today => Some(now),
            Self::Yesterday => Some(now - Duration::days(1)),
            Self::Week => Some(start_of_week(now)),
            Self::Day7 => Some(now - Duration::days(7)),
            Self::LastWeek => Some(start_of_week(now - Duration::days(7))),
            Self::Month => Some(start_of_month(now)),
            Self::Day30 => Some(now - Duration::days(30)),
            Self::LastMonth => Some(start_of_month(now - Duration::days(30))),
            Self::Quarter => Some(start_of_quarter(now)),
            Self::Day90 => Some(now - Duration::days(90)),
            Self::LastQuarter => Some(start_of_quarter(now - Duration::days(90))),
            Self::Year => Some(start_of_year(now)),
            Self::Day365 => Some(now - Duration::days(365)),
            Self::LastYear => Some(start_of_year(now - Duration::days(365))),
            Self::Custom => None,
        }
    }

    /// Resolve against the system UTC clock
    pub fn resolve_utc(&self) -> Option<DateTime<Utc>> {
        self.resolve(Utc::now())
    }

    /// Resolve against the system clock in a dashboard-configured timezone
    pub fn resolve_in(&self, tz: chrono_tz::Tz) -> Option<DateTime<chrono_tz::Tz>> {
        self.resolve(Utc::now().with_timezone(&tz))
    }
}

fn at_local_midnight<Tz: TimeZone>(reference: DateTime<Tz>, date: NaiveDate) -> DateTime<Tz> {
    // A skipped local midnight (DST gap) falls back to the reference instant
    reference
        .timezone()
        .from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .unwrap_or(reference)
}

fn start_of_week<Tz: TimeZone>(dt: DateTime<Tz>) -> DateTime<Tz> {
    let back = dt.weekday().num_days_from_monday() as i64;
    let monday = dt.clone() - Duration::days(back);
    let date = monday.date_naive();
    at_local_midnight(monday, date)
}

fn start_of_month<Tz: TimeZone>(dt: DateTime<Tz>) -> DateTime<Tz> {
    match NaiveDate::from_ymd_opt(dt.year(), dt.month(), 1) {
        Some(date) => at_local_midnight(dt, date),
        None => dt,
    }
}

fn start_of_quarter<Tz: TimeZone>(dt: DateTime<Tz>) -> DateTime<Tz> {
    let quarter_month = ((dt.month() - 1) / 3) * 3 + 1;
    match NaiveDate::from_ymd_opt(dt.year(), quarter_month, 1) {
        Some(date) => at_local_midnight(dt, date),
        None => dt,
    }
}

fn start_of_year<Tz: TimeZone>(dt: DateTime<Tz>) -> DateTime<Tz> {
    match NaiveDate::from_ymd_opt(dt.year(), 1, 1) {
        Some(date) => at_local_midnight(dt, date),
        None => dt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Thursday, mid-quarter, mid-year
    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 8, 17, 15, 30, 0).unwrap()
    }

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_today_keeps_now() {
        assert_eq!(DynamicDefault::Today.resolve(fixed_now()), Some(fixed_now()));
    }

    #[test]
    fn test_yesterday() {
        assert_eq!(
            DynamicDefault::Yesterday.resolve(fixed_now()),
            Some(ymd_hms(2023, 8, 16, 15, 30, 0))
        );
    }

    #[test]
    fn test_week_starts_monday_midnight() {
        assert_eq!(
            DynamicDefault::Week.resolve(fixed_now()),
            Some(ymd_hms(2023, 8, 14, 0, 0, 0))
        );
    }

    #[test]
    fn test_day7_keeps_time_of_day() {
        assert_eq!(
            DynamicDefault::Day7.resolve(fixed_now()),
            Some(ymd_hms(2023, 8, 10, 15, 30, 0))
        );
    }

    #[test]
    fn test_last_week() {
        assert_eq!(
            DynamicDefault::LastWeek.resolve(fixed_now()),
            Some(ymd_hms(2023, 8, 7, 0, 0, 0))
        );
    }

    #[test]
    fn test_month_and_last_month() {
        assert_eq!(
            DynamicDefault::Month.resolve(fixed_now()),
            Some(ymd_hms(2023, 8, 1, 0, 0, 0))
        );
        // 30 days back of Aug 17 is Jul 18, so last month anchors to Jul 1
        assert_eq!(
            DynamicDefault::LastMonth.resolve(fixed_now()),
            Some(ymd_hms(2023, 7, 1, 0, 0, 0))
        );
    }

    #[test]
    fn test_quarter_and_last_quarter() {
        assert_eq!(
            DynamicDefault::Quarter.resolve(fixed_now()),
            Some(ymd_hms(2023, 7, 1, 0, 0, 0))
        );
        // 90 days back of Aug 17 is May 19, in Q2
        assert_eq!(
            DynamicDefault::LastQuarter.resolve(fixed_now()),
            Some(ymd_hms(2023, 4, 1, 0, 0, 0))
        );
    }

    #[test]
    fn test_year_and_last_year() {
        assert_eq!(
            DynamicDefault::Year.resolve(fixed_now()),
            Some(ymd_hms(2023, 1, 1, 0, 0, 0))
        );
        assert_eq!(
            DynamicDefault::LastYear.resolve(fixed_now()),
            Some(ymd_hms(2022, 1, 1, 0, 0, 0))
        );
    }

    #[test]
    fn test_week_rule_differs_from_day7() {
        let week = DynamicDefault::Week.resolve(fixed_now()).unwrap();
        let day7 = DynamicDefault::Day7.resolve(fixed_now()).unwrap();
        assert_ne!(week, day7);
    }

    #[test]
    fn test_custom_is_none() {
        assert_eq!(DynamicDefault::Custom.resolve(fixed_now()), None);
    }

    #[test]
    fn test_serde_tags() {
        assert_eq!(
            serde_json::to_string(&DynamicDefault::LastWeek).unwrap(),
            "\"lastWeek\""
        );
        assert_eq!(
            serde_json::from_str::<DynamicDefault>("\"day7\"").unwrap(),
            DynamicDefault::Day7
        );
    }

    #[test]
    fn test_format_tags_round_trip() {
        let fmt: DateFormat = serde_json::from_str("\"YYYY-MM-DD HH:mm\"").unwrap();
        assert_eq!(fmt, DateFormat::DatetimeMinute);
        assert_eq!(serde_json::to_string(&fmt).unwrap(), "\"YYYY-MM-DD HH:mm\"");
    }

    #[test]
    fn test_strftime_mapping() {
        assert_eq!(DateFormat::Date.strftime(), "%Y-%m-%d");
        assert_eq!(DateFormat::Month.strftime(), "%Y-%m");
        assert!(DateFormat::Datetime.has_time());
        assert!(!DateFormat::Date.has_time());
    }
}
