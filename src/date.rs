//! Civil date and wall-clock time.
//!
//! No timezone is modelled: every value is a local wall-clock reading.

use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{Error, Result};

/// Julian day number of 9999-12-31, the last supported date.
pub const MAX_JDN: i32 = 5373484;
/// Gregorian years accepted by [`Date::from_gregorian`]; the first days of
/// `MIN_YEAR` still fall before JDN 0 and are rejected.
pub const MIN_YEAR: i32 = -4713;
pub const MAX_YEAR: i32 = 9999;

/// A calendar-independant date, stored as a Julian day number.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar,
/// and ends on December 31, 9999, Gregorian calendar ([`MAX_JDN`]).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: i32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    ///
    /// Returns `None` outside `0..=MAX_JDN`.
    pub fn from_jdn(jdn: i32) -> Option<Self> {
        (0..=MAX_JDN).contains(&jdn).then_some(Self { jdn })
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> i32 {
        self.jdn
    }

    /// Creates a `Date` with a proleptic Gregorian calendar date.
    ///
    /// `year` is an astronomical year number, i.e. 1 BC is `0`, 2 BC is `-1`,
    /// etc.
    ///
    /// Returns `None` if the date does not exist (e.g. February 30) or is out
    /// of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use sizhu::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// assert_eq!(None, Date::from_gregorian(2023, 2, 29));
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year)
            || !(1..=12).contains(&month)
            || !(1..=days_in_month(year, month)).contains(&day)
        {
            return None;
        }
        let (y, m, d) = (year, month, day);
        let jdn = (1461 * (y + 4800 + (m - 14) / 12)) / 4
            + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
            - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
            + d
            - 32075;
        Self::from_jdn(jdn)
    }
    /// Like [`Date::from_gregorian`], but reports a nonexistent date as an
    /// [`Error::InvalidDate`].
    pub fn try_from_gregorian(year: i32, month: i32, day: i32) -> Result<Self> {
        Self::from_gregorian(year, month, day).ok_or(Error::InvalidDate { year, month, day })
    }
    /// Represents the date in Gregorian calendar, in `(year, month, day)`
    /// format.
    ///
    /// # Example
    ///
    /// ```
    /// use sizhu::Date;
    ///
    /// let date = Date::from_jdn(2451545).unwrap();
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = self.jdn;
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year, month, day)
    }
    /// Gregorian year of the date.
    pub fn year(&self) -> i32 {
        self.gregorian().0
    }
    /// Formats the date in ISO 8601 format.
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_gregorian())
    }
}

/// Saturates at either end of the supported range.
impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date {
            jdn: self.jdn.saturating_add(rhs).clamp(0, MAX_JDN),
        }
    }
}
/// Number of days from `rhs` to `self`.
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn - rhs.jdn
    }
}

/// Whether `year` is a leap year in Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && year % 100 != 0 || year % 400 == 0
}

fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Wall-clock time of day, minute precision.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Time {
    hour: u32,
    minute: u32,
}

impl Time {
    pub const MIDNIGHT: Time = Time { hour: 0, minute: 0 };

    /// Creates a time of day; `hour` in `0..=23`, `minute` in `0..=59`.
    ///
    /// ```
    /// use sizhu::Time;
    ///
    /// assert!(Time::new(23, 59).is_ok());
    /// assert!(Time::new(24, 0).is_err());
    /// ```
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour < 24 && minute < 60 {
            Ok(Self { hour, minute })
        } else {
            Err(Error::InvalidTime { hour, minute })
        }
    }
    pub fn hour(&self) -> u32 {
        self.hour
    }
    pub fn minute(&self) -> u32 {
        self.minute
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A date with a wall-clock time. Ordered chronologically.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DateTime {
    pub date: Date,
    pub time: Time,
}

impl DateTime {
    pub fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }
    /// The first instant of `date`.
    pub fn midnight(date: Date) -> Self {
        Self::new(date, Time::MIDNIGHT)
    }
    /// Builds a validated date-time from its civil components.
    ///
    /// ```
    /// use sizhu::DateTime;
    ///
    /// let dt = DateTime::from_civil(1984, 2, 2, 23, 30).unwrap();
    /// assert_eq!("1984-02-02 23:30", dt.to_string());
    /// ```
    pub fn from_civil(year: i32, month: i32, day: i32, hour: u32, minute: u32) -> Result<Self> {
        Ok(Self::new(
            Date::try_from_gregorian(year, month, day)?,
            Time::new(hour, minute)?,
        ))
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}
