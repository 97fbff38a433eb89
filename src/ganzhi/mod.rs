//! 干支
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 天干十、地支十二，各有五行屬性，見 [`element`]。年柱判定所需立春日期取自預製表，見 [`lichun`]。

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

pub mod element;
pub mod fmt;
pub mod lichun;

pub use element::Element;

/// 天干，按序 `甲` 至 `癸`。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// 地支，按序 `子` 至 `亥`。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

impl Stem {
    /// 十干全表，依序號排列。
    pub const ALL: [Stem; 10] = {
        use Stem::*;
        [Jia, Yi, Bing, Ding, Wu, Ji, Geng, Xin, Ren, Gui]
    };

    /// 依序號取天干，序號按 10 取模（可為負）。
    ///
    /// # 用例
    ///
    /// ```
    /// use sizhu::ganzhi::Stem;
    ///
    /// assert_eq!(Stem::Gui, Stem::from_index(1979));
    /// assert_eq!(Stem::Gui, Stem::from_index(-1));
    /// ```
    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(10) as usize]
    }
    /// 序號，`甲` 為 0。
    pub fn index(self) -> usize {
        self as usize
    }
    pub fn symbol(self) -> &'static str {
        fmt::STEMS[self.index()]
    }
    pub fn element(self) -> Element {
        element::of_stem(self)
    }
}

impl Branch {
    /// 十二支全表，依序號排列。
    pub const ALL: [Branch; 12] = {
        use Branch::*;
        [Zi, Chou, Yin, Mao, Chen, Si, Wu, Wei, Shen, You, Xu, Hai]
    };

    /// 依序號取地支，序號按 12 取模（可為負）。
    ///
    /// # 用例
    ///
    /// ```
    /// use sizhu::ganzhi::Branch;
    ///
    /// assert_eq!(Branch::Hai, Branch::from_index(1979));
    /// ```
    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(12) as usize]
    }
    /// 序號，`子` 為 0。
    pub fn index(self) -> usize {
        self as usize
    }
    pub fn symbol(self) -> &'static str {
        fmt::BRANCHES[self.index()]
    }
    pub fn element(self) -> Element {
        element::of_branch(self)
    }
}

/// 一柱，干支各一。文本形式為兩字相連，如「甲子」。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }
    /// 依六十甲子序號取干支，序號 0 為「甲子」，天干地支同步遞進。
    ///
    /// # 用例
    ///
    /// ```
    /// use sizhu::ganzhi::Pillar;
    ///
    /// assert_eq!("甲子", Pillar::from_cycle(0).to_string());
    /// assert_eq!("癸亥", Pillar::from_cycle(59).to_string());
    /// assert_eq!("甲子", Pillar::from_cycle(-60).to_string());
    /// ```
    pub fn from_cycle(index: i32) -> Self {
        let index = index.rem_euclid(60);
        Self::new(Stem::from_index(index), Branch::from_index(index))
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.symbol(), self.branch.symbol())
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for Stem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}
