//! 干支文本形式及其解析

use std::str::FromStr;

use super::{Branch, Element, Pillar, Stem};
use crate::error::Error;

/// 十干文本，第 0 項為「甲」。
pub const STEMS: &[&str] = &["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
/// 十二支文本，第 0 項為「子」。
pub const BRANCHES: &[&str] = &[
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
pub const ELEMENT_NAMES: &[&str] = &["Wood", "Fire", "Earth", "Metal", "Water"];
pub const ELEMENT_SYMBOLS: &[&str] = &["木", "火", "土", "金", "水"];

fn position(table: &[&str], s: &str) -> Result<usize, Error> {
    table
        .iter()
        .position(|&sym| sym == s)
        .ok_or_else(|| Error::UnknownSymbol(s.to_owned()))
}

impl FromStr for Stem {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        position(STEMS, s).map(|i| Stem::ALL[i])
    }
}

impl FromStr for Branch {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        position(BRANCHES, s).map(|i| Branch::ALL[i])
    }
}

/// 解析兩字干支。
///
/// # 用例
///
/// ```
/// use sizhu::ganzhi::{Branch, Pillar, Stem};
///
/// let pillar: Pillar = "癸亥".parse().unwrap();
/// assert_eq!(Pillar::new(Stem::Gui, Branch::Hai), pillar);
/// assert!("甲".parse::<Pillar>().is_err());
/// ```
impl FromStr for Pillar {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.char_indices();
        let split = match (chars.next(), chars.next(), chars.next()) {
            (Some(_), Some((i, _)), None) => i,
            _ => return Err(Error::UnknownSymbol(s.to_owned())),
        };
        Ok(Pillar::new(s[..split].parse()?, s[split..].parse()?))
    }
}

/// 接受英文名（不分大小寫）或漢字名。
impl FromStr for Element {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ELEMENT_NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(s))
            .or_else(|| ELEMENT_SYMBOLS.iter().position(|&sym| sym == s))
            .map(|i| Element::ALL[i])
            .ok_or_else(|| Error::UnknownSymbol(s.to_owned()))
    }
}
