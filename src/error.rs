//! Errors raised while building input values.
//!
//! The chart and burden computations themselves never fail; everything here
//! happens before a [`DateTime`](crate::DateTime) exists.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no such date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: i32, day: i32 },

    #[error("no such time of day: {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },

    #[error("unrecognized date {0:?}, use dd/mm/yyyy or yyyy-mm-dd")]
    UnrecognizedDate(String),

    #[error("unrecognized time {0:?}, use HH:MM")]
    UnrecognizedTime(String),

    #[error("unknown symbol {0:?}")]
    UnknownSymbol(String),
}

pub type Result<T> = std::result::Result<T, Error>;
