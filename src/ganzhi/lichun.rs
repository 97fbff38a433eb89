//! 立春日期表
//!
//! 以預製表代替天文計算，每年一項，記該年立春所在日期（北京時間）。表外年份無數據，
//! 調用方須自行決定如何處理，見 [`crate::chart::YearBoundary`]。
//!
//! 將來若改用天文曆表計算，只須替換 [`lichun`] 一函數。

use crate::date::Date;

/// 表首年份。
pub const FIRST_YEAR: i32 = 1900;
/// 表末年份（含）。
pub const LAST_YEAR: i32 = 2100;

/// 自 [`FIRST_YEAR`] 起逐年立春日期，格式為 `(月, 日)`。
pub static TABLE: [(u8, u8); (LAST_YEAR - FIRST_YEAR + 1) as usize] = [
    (2, 4), (2, 4), (2, 5), (2, 5), (2, 5), (2, 4), (2, 5), (2, 5), (2, 5), (2, 4),
    (2, 5), (2, 5), (2, 5), (2, 4), (2, 5), (2, 5), (2, 5), (2, 4), (2, 5), (2, 5),
    (2, 5), (2, 4), (2, 4), (2, 5), (2, 5), (2, 4), (2, 4), (2, 5), (2, 5), (2, 4),
    (2, 4), (2, 5), (2, 5), (2, 4), (2, 4), (2, 5), (2, 5), (2, 4), (2, 4), (2, 5),
    (2, 5), (2, 4), (2, 4), (2, 5), (2, 5), (2, 4), (2, 4), (2, 5), (2, 5), (2, 4),
    (2, 4), (2, 4), (2, 5), (2, 4), (2, 4), (2, 4), (2, 5), (2, 4), (2, 4), (2, 4),
    (2, 5), (2, 4), (2, 4), (2, 4), (2, 5), (2, 4), (2, 4), (2, 4), (2, 5), (2, 4),
    (2, 4), (2, 4), (2, 5), (2, 4), (2, 4), (2, 4), (2, 5), (2, 4), (2, 4), (2, 4),
    (2, 5), (2, 4), (2, 4), (2, 4), (2, 4), (2, 4), (2, 4), (2, 4), (2, 4), (2, 4),
    (2, 4), (2, 4), (2, 4), (2, 4), (2, 4), (2, 4), (2, 4), (2, 4), (2, 4), (2, 4),
    (2, 4), (2, 4), (2, 4), (2, 4), (2, 4), (2, 4), (2, 4), (2, 4), (2, 4), (2, 4),
    (2, 4), (2, 4), (2, 4), (2, 4), (2, 4), (2, 4), (2, 4), (2, 3), (2, 4), (2, 4),
    (2, 4), (2, 3), (2, 4), (2, 4), (2, 4), (2, 3), (2, 4), (2, 4), (2, 4), (2, 3),
    (2, 4), (2, 4), (2, 4), (2, 3), (2, 4), (2, 4), (2, 4), (2, 3), (2, 4), (2, 4),
    (2, 4), (2, 3), (2, 4), (2, 4), (2, 4), (2, 3), (2, 4), (2, 4), (2, 4), (2, 3),
    (2, 3), (2, 4), (2, 4), (2, 3), (2, 3), (2, 4), (2, 4), (2, 3), (2, 3), (2, 4),
    (2, 4), (2, 3), (2, 3), (2, 4), (2, 4), (2, 3), (2, 3), (2, 4), (2, 4), (2, 3),
    (2, 3), (2, 4), (2, 4), (2, 3), (2, 3), (2, 4), (2, 4), (2, 3), (2, 3), (2, 3),
    (2, 4), (2, 3), (2, 3), (2, 3), (2, 4), (2, 3), (2, 3), (2, 3), (2, 4), (2, 3),
    (2, 3), (2, 3), (2, 4), (2, 3), (2, 3), (2, 3), (2, 4), (2, 3), (2, 3), (2, 3),
    (2, 4),
];

/// 取得公元 `year` 年立春日期，格式為 `(月, 日)`。
///
/// 表外年份返回 `None`。
///
/// # 用例
///
/// ```
/// use sizhu::ganzhi::lichun;
///
/// assert_eq!(Some((2, 4)), lichun::lichun(1984));
/// assert_eq!(Some((2, 3)), lichun::lichun(2021));
/// assert_eq!(None, lichun::lichun(1899));
/// ```
pub fn lichun(year: i32) -> Option<(u8, u8)> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return None;
    }
    TABLE.get((year - FIRST_YEAR) as usize).copied()
}

/// 取得公元 `year` 年立春所在日。表外年份返回 `None`。
pub fn lichun_date(year: i32) -> Option<Date> {
    let (m, d) = lichun(year)?;
    Date::from_gregorian(year, m.into(), d.into())
}
