//! Reading dates and times of birth from text.
//!
//! Dates are accepted as `dd/mm/yyyy` or `yyyy-mm-dd`, times as 24-hour
//! `HH:MM`.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use tracing::warn;

use crate::date::{Date, DateTime, Time};
use crate::error::{Error, Result};

const DATE_FORMATS: [&str; 2] = ["%d/%m/%Y", "%Y-%m-%d"];
const TIME_FORMAT: &str = "%H:%M";

/// Parses a date in either accepted format.
///
/// ```
/// use sizhu::input::parse_date;
///
/// assert_eq!(parse_date("02/02/1984"), parse_date("1984-02-02"));
/// assert!(parse_date("1984/02/02").is_err());
/// ```
pub fn parse_date(s: &str) -> Result<Date> {
    let s = s.trim();
    let naive = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| Error::UnrecognizedDate(s.to_owned()))?;
    Date::try_from_gregorian(naive.year(), naive.month() as i32, naive.day() as i32)
}

/// Parses a 24-hour `HH:MM` time.
pub fn parse_time(s: &str) -> Result<Time> {
    let s = s.trim();
    let naive = NaiveTime::parse_from_str(s, TIME_FORMAT)
        .map_err(|_| Error::UnrecognizedTime(s.to_owned()))?;
    Time::new(naive.hour(), naive.minute())
}

/// Parses a date with an optional time.
///
/// A missing time means midnight. An unreadable time is dropped with a
/// warning and midnight is used; an unreadable date is an error.
pub fn parse_datetime(date: &str, time: Option<&str>) -> Result<DateTime> {
    let date = parse_date(date)?;
    let time = match time.map(str::trim).filter(|t| !t.is_empty()) {
        None => Time::MIDNIGHT,
        Some(t) => parse_time(t).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring time of birth");
            Time::MIDNIGHT
        }),
    };
    Ok(DateTime::new(date, time))
}
