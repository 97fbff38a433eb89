//! Four-pillar chart resolution.
//!
//! The pillars are resolved in dependency order: year, then month (which
//! needs the year stem), day (independent), then hour (which needs the day
//! stem).
//!
//! # Example
//!
//! ```
//! use sizhu::{Chart, DateTime};
//!
//! let chart = Chart::new(DateTime::from_civil(1984, 2, 2, 0, 0).unwrap());
//!
//! assert_eq!("癸亥", chart.year.to_string()); // before Li Chun on 02-04
//! assert_eq!("甲子", chart.day.to_string());
//! assert_eq!("甲", chart.day_master().symbol());
//! ```

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::date::{Date, DateTime, Time};
use crate::ganzhi::{Branch, Pillar, Stem, lichun};

/// How the year boundary was decided for a chart.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum YearBoundary {
    /// The year started at local midnight of Li Chun, `month`/`day` of the
    /// calendar year.
    SolarTerm { month: u8, day: u8 },
    /// The calendar year is outside the Li Chun table; the calendar year was
    /// used as is.
    Unadjusted,
}

impl YearBoundary {
    pub fn is_approximate(&self) -> bool {
        matches!(self, Self::Unadjusted)
    }
}

/// Determines the year a date-time belongs to, counting years from Li Chun.
///
/// Returns the resolved year and how its boundary was determined.
///
/// ```
/// use sizhu::DateTime;
/// use sizhu::chart::{YearBoundary, resolve_year};
///
/// let before = DateTime::from_civil(1984, 2, 3, 23, 59).unwrap();
/// assert_eq!(1983, resolve_year(before).0);
/// let on = DateTime::from_civil(1984, 2, 4, 0, 0).unwrap();
/// assert_eq!((1984, YearBoundary::SolarTerm { month: 2, day: 4 }), resolve_year(on));
/// ```
pub fn resolve_year(dt: DateTime) -> (i32, YearBoundary) {
    let year = dt.date.year();
    let Some(start) = lichun::lichun_date(year) else {
        warn!(year, "year outside the Li Chun table, boundary not adjusted");
        return (year, YearBoundary::Unadjusted);
    };
    let (_, month, day) = start.gregorian();
    let boundary = YearBoundary::SolarTerm {
        month: month as u8,
        day: day as u8,
    };
    if dt < DateTime::midnight(start) {
        (year - 1, boundary)
    } else {
        (year, boundary)
    }
}

/// Year pillar of an already resolved year; 1984 is 甲子.
pub fn year_pillar(resolved_year: i32) -> Pillar {
    let base = resolved_year - 4;
    Pillar::new(Stem::from_index(base), Branch::from_index(base))
}

/// Start `(month, day)` of each solar month, slot 1 (寅) first.
pub const MONTH_SLOT_STARTS: [(i32, i32); 12] = [
    (2, 4),
    (3, 6),
    (4, 5),
    (5, 6),
    (6, 6),
    (7, 7),
    (8, 8),
    (9, 8),
    (10, 8),
    (11, 7),
    (12, 7),
    (1, 6),
];

/// Branch of each solar month, slot 1 first.
pub const MONTH_SLOT_BRANCHES: [Branch; 12] = {
    use Branch::*;
    [Yin, Mao, Chen, Si, Wu, Wei, Shen, You, Xu, Hai, Zi, Chou]
};

/// Stem of slot 1 for each pair of year stems (甲己, 乙庚, 丙辛, 丁壬, 戊癸).
const MONTH_START_STEMS: [Stem; 5] = {
    use Stem::*;
    [Bing, Wu, Geng, Ren, Jia]
};

/// Classifies a date into its solar month slot, `1..=12`.
///
/// ```
/// use sizhu::Date;
/// use sizhu::chart::month_slot;
///
/// assert_eq!(1, month_slot(Date::from_gregorian(2000, 2, 4).unwrap()));
/// assert_eq!(11, month_slot(Date::from_gregorian(2000, 1, 5).unwrap()));
/// assert_eq!(12, month_slot(Date::from_gregorian(2000, 1, 6).unwrap()));
/// ```
pub fn month_slot(date: Date) -> u32 {
    let (_, m, d) = date.gregorian();
    let md = (m, d);
    for (slot, pair) in (1..).zip(MONTH_SLOT_STARTS.windows(2)) {
        let (start, end) = (pair[0], pair[1]);
        let within = if start <= end {
            start <= md && md < end
        } else {
            // 子 month runs across new year
            md >= start || md < end
        };
        if within {
            return slot;
        }
    }
    12
}

/// Month pillar of a date, given the year pillar it was resolved under.
pub fn month_pillar(date: Date, year: Pillar) -> Pillar {
    let slot = month_slot(date) as usize;
    let start = MONTH_START_STEMS[year.stem.index() % 5];
    Pillar::new(
        Stem::from_index((start.index() + slot - 1) as i32),
        MONTH_SLOT_BRANCHES[slot - 1],
    )
}

/// Julian day number of 1984-02-02, taken as day 甲子.
pub const DAY_REFERENCE_JDN: i32 = 2445733;

/// Day pillar of a date, counted in the sexagenary cycle from 1984-02-02.
///
/// ```
/// use sizhu::Date;
/// use sizhu::chart::day_pillar;
///
/// let date = Date::from_gregorian(1984, 2, 2).unwrap();
/// assert_eq!("甲子", day_pillar(date).to_string());
/// assert_eq!("甲子", day_pillar(date + 60).to_string());
/// assert_eq!("癸亥", day_pillar(date + -1).to_string());
/// ```
pub fn day_pillar(date: Date) -> Pillar {
    Pillar::from_cycle(date.jdn() - DAY_REFERENCE_JDN)
}

/// Branch of the two-hour window containing `time`; 子 spans 23:00 to 01:00.
pub fn hour_branch(time: Time) -> Branch {
    let index = match time.hour() {
        1..=2 => 1,
        3..=4 => 2,
        5..=6 => 3,
        7..=8 => 4,
        9..=10 => 5,
        11..=12 => 6,
        13..=14 => 7,
        15..=16 => 8,
        17..=18 => 9,
        19..=20 => 10,
        21..=22 => 11,
        // 23 and 0
        _ => 0,
    };
    Branch::ALL[index]
}

/// Hour pillar of a time, given the day pillar.
pub fn hour_pillar(time: Time, day: Pillar) -> Pillar {
    let branch = hour_branch(time);
    Pillar::new(
        Stem::from_index((2 * day.stem.index() + branch.index()) as i32),
        branch,
    )
}

/// A four-pillar chart.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Chart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    /// Year the chart was counted under, after the Li Chun adjustment.
    pub resolved_year: i32,
    pub year_boundary: YearBoundary,
}

impl Chart {
    /// Resolves the chart of a date-time.
    pub fn new(dt: DateTime) -> Self {
        let (resolved_year, year_boundary) = resolve_year(dt);
        let year = year_pillar(resolved_year);
        let month = month_pillar(dt.date, year);
        let day = day_pillar(dt.date);
        let hour = hour_pillar(dt.time, day);
        let chart = Chart {
            year,
            month,
            day,
            hour,
            resolved_year,
            year_boundary,
        };
        debug!(%dt, resolved_year, chart = %chart.codes().join(" "), "chart resolved");
        chart
    }

    /// The stem of the day pillar.
    pub fn day_master(&self) -> Stem {
        self.day.stem
    }

    /// Pillars in year, month, day, hour order.
    pub fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Text of the pillars in year, month, day, hour order.
    pub fn codes(&self) -> [String; 4] {
        self.pillars().map(|p| p.to_string())
    }
}

impl Serialize for Chart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Chart", 6)?;
        s.serialize_field("year", &self.year)?;
        s.serialize_field("month", &self.month)?;
        s.serialize_field("day", &self.day)?;
        s.serialize_field("hour", &self.hour)?;
        s.serialize_field("day_master", &self.day_master())?;
        s.serialize_field("year_boundary", &self.year_boundary)?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: i32, d: i32) -> Date {
        Date::from_gregorian(y, m, d).unwrap()
    }

    fn at(y: i32, m: i32, d: i32, h: u32, min: u32) -> DateTime {
        DateTime::from_civil(y, m, d, h, min).unwrap()
    }

    #[test]
    fn reference_jdn() {
        assert_eq!(DAY_REFERENCE_JDN, date(1984, 2, 2).jdn());
    }

    #[test]
    fn year_pillars() {
        for (std, year) in [("甲子", 1984), ("癸亥", 1983), ("庚辰", 2000), ("甲辰", 2024)] {
            assert_eq!(std, year_pillar(year).to_string());
        }
    }

    #[test]
    fn year_boundary() {
        let data = [
            (at(1984, 2, 2, 0, 0), 1983),
            (at(1984, 2, 3, 23, 59), 1983),
            (at(1984, 2, 4, 0, 0), 1984),
            (at(2021, 2, 3, 0, 0), 2021),
            (at(2021, 2, 2, 12, 0), 2020),
            (at(1960, 2, 4, 12, 0), 1959),
            (at(2000, 1, 1, 0, 0), 1999),
            (at(2000, 12, 31, 23, 0), 2000),
        ];
        for (dt, std) in data {
            assert_eq!(std, resolve_year(dt).0, "{dt}");
        }
    }

    #[test]
    fn out_of_table_year() {
        for dt in [at(1850, 1, 1, 0, 0), at(2200, 1, 1, 0, 0)] {
            let (year, boundary) = resolve_year(dt);
            assert_eq!(dt.date.year(), year);
            assert_eq!(YearBoundary::Unadjusted, boundary);
            assert!(boundary.is_approximate());
        }
    }

    #[test]
    fn month_slots() {
        let data = [
            ((2, 3), 12),
            ((2, 4), 1),
            ((3, 5), 1),
            ((3, 6), 2),
            ((4, 5), 3),
            ((5, 6), 4),
            ((6, 6), 5),
            ((7, 7), 6),
            ((8, 8), 7),
            ((9, 8), 8),
            ((10, 8), 9),
            ((11, 7), 10),
            ((12, 6), 10),
            ((12, 7), 11),
            ((12, 31), 11),
            ((1, 1), 11),
            ((1, 5), 11),
            ((1, 6), 12),
        ];
        for ((m, d), std) in data {
            assert_eq!(std, month_slot(date(2001, m, d)), "{m:02}-{d:02}");
        }
    }

    #[test]
    fn month_pillars() {
        let jia = year_pillar(1984);
        let data = [
            ((1984, 2, 10), "丙寅"),
            ((1984, 3, 10), "丁卯"),
            ((1984, 12, 10), "丙子"),
            ((1985, 1, 10), "丁丑"),
        ];
        for ((y, m, d), std) in data {
            assert_eq!(std, month_pillar(date(y, m, d), jia).to_string());
        }
        // 戊癸之年，甲寅為首
        assert_eq!("甲寅", month_pillar(date(1983, 2, 10), year_pillar(1983)).to_string());
        assert_eq!("乙丑", month_pillar(date(1984, 2, 2), year_pillar(1983)).to_string());
    }

    #[test]
    fn day_pillars() {
        let reference = date(1984, 2, 2);
        for (std, offset) in [("甲子", 0), ("乙丑", 1), ("癸亥", 59), ("甲子", 120), ("甲子", -60), ("癸亥", -1)] {
            assert_eq!(std, day_pillar(reference + offset).to_string(), "{offset}");
        }
    }

    #[test]
    fn hour_windows() {
        let data = [
            ((23, 30), Branch::Zi),
            ((0, 30), Branch::Zi),
            ((0, 59), Branch::Zi),
            ((1, 0), Branch::Chou),
            ((2, 59), Branch::Chou),
            ((3, 0), Branch::Yin),
            ((12, 0), Branch::Wu),
            ((22, 59), Branch::Hai),
        ];
        for ((h, m), std) in data {
            assert_eq!(std, hour_branch(Time::new(h, m).unwrap()), "{h:02}:{m:02}");
        }
    }

    #[test]
    fn hour_stems() {
        let jia_day = Pillar::from_cycle(0);
        let yi_day = Pillar::from_cycle(1);
        let data = [
            ((0, 0), jia_day, "甲子"),
            ((13, 0), jia_day, "辛未"),
            ((23, 0), yi_day, "丙子"),
            ((21, 0), yi_day, "丁亥"),
        ];
        for ((h, m), day, std) in data {
            assert_eq!(std, hour_pillar(Time::new(h, m).unwrap(), day).to_string());
        }
    }

    #[test]
    fn chart_before_lichun() {
        let chart = Chart::new(at(1984, 2, 2, 0, 0));
        assert_eq!(["癸亥", "乙丑", "甲子", "甲子"], chart.codes());
        assert_eq!(1983, chart.resolved_year);
        assert_eq!(Stem::Jia, chart.day_master());
        assert_eq!(chart.day.stem, chart.day_master());
        assert_eq!(YearBoundary::SolarTerm { month: 2, day: 4 }, chart.year_boundary);
    }

    #[test]
    fn serialized_chart() {
        let chart = Chart::new(at(1984, 2, 2, 0, 0));
        let json = serde_json::to_value(chart).unwrap();
        assert_eq!("癸亥", json["year"]);
        assert_eq!("甲子", json["day"]);
        assert_eq!("甲", json["day_master"]);
        assert_eq!(2, json["year_boundary"]["solar_term"]["month"]);
    }
}
