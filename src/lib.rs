//! Four-pillar (八字) charts of civil dates, and an elemental burden profile
//! derived from them.
//!
//! A date-time is resolved into year, month, day and hour pillars of the
//! sexagenary cycle. The year starts at Li Chun, looked up from a fixed table
//! covering 1900 through 2100; outside that range the calendar year is used
//! and the chart says so in [`Chart::year_boundary`].
//!
//! Everything here is pure: no I/O, no shared mutable state, and the same
//! input always gives the same chart and profile.
//!
//! # Examples
//!
//! Resolving a chart:
//!
//! ```
//! use sizhu::{Chart, DateTime};
//!
//! let chart = Chart::new(DateTime::from_civil(1984, 2, 2, 13, 0).unwrap());
//!
//! assert_eq!(["癸亥", "乙丑", "甲子", "辛未"], chart.codes());
//! ```
//!
//! Scoring it:
//!
//! ```
//! use sizhu::{BurdenProfile, Chart, DateTime, ganzhi::Element};
//!
//! let chart = Chart::new(DateTime::from_civil(1984, 2, 2, 0, 0).unwrap());
//! let profile = BurdenProfile::from_chart(&chart);
//!
//! assert_eq!(Some(Element::Wood), profile.dominant);
//! assert_eq!(8, profile.elements.get(Element::Wood));
//! ```

pub mod burden;
pub mod chart;
pub mod date;
pub mod error;
pub mod ganzhi;
pub mod input;

pub use burden::{BurdenProfile, ElementTally};
pub use chart::Chart;
pub use date::{Date, DateTime, Time};
pub use error::{Error, Result};
