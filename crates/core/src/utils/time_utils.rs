use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};

use crate::constants::DATE_FORMAT;

/// Calendar date used as "today" when validating purchase dates.
///
/// Comparison is by calendar day, so a purchase dated today is valid at any
/// time of day.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a purchase date given either as `YYYY-MM-DD` or as an RFC 3339
/// timestamp. Timestamps keep their calendar date in the local zone, the same
/// zone [`today_local`] reads, so an instant is never later than today while
/// it is before local midnight.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    parse_calendar_date_in(input, &Local)
}

/// [`parse_calendar_date`] with timestamps resolved in `tz`.
pub fn parse_calendar_date_in<Tz: TimeZone>(input: &str, tz: &Tz) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.with_timezone(tz).date_naive())
}

pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Returns a timestamp strictly later than `previous`.
///
/// Falls back to `previous + 1ms` when the wall clock has not moved past it.
pub fn next_timestamp(previous: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let now = Utc::now();
    match previous {
        Some(prev) if now <= prev => prev + Duration::milliseconds(1),
        _ => now,
    }
}

/// Whole days from `start` to `end`; negative when `start` is later.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}
