//! Elemental burden profile derived from a chart.
//!
//! Each pillar counts its stem twice and its branch once toward the stem's
//! and branch's elements; the day master is counted twice more. A complete
//! chart therefore always tallies 14. The spread between the strongest and
//! weakest element drives the score.
//!
//! # Example
//!
//! ```
//! use sizhu::{BurdenProfile, Chart, DateTime, ElementTally};
//!
//! let chart = Chart::new(DateTime::from_civil(1990, 6, 15, 8, 30).unwrap());
//! let tally = ElementTally::from_chart(&chart);
//! assert_eq!(14, tally.total());
//!
//! let profile = BurdenProfile::from_tally(tally);
//! assert!((10..=95).contains(&profile.score));
//! assert!((1..=9).contains(&profile.level));
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::chart::Chart;
use crate::ganzhi::{Element, Pillar};

pub mod text;

/// Weight of a pillar's stem.
pub const STEM_WEIGHT: u32 = 2;
/// Weight of a pillar's branch.
pub const BRANCH_WEIGHT: u32 = 1;
/// Extra weight of the day master on top of its day pillar count.
pub const DAY_MASTER_WEIGHT: u32 = 2;

/// Upper limit of the imbalance fed into the score.
pub const MAX_IMBALANCE: u32 = 10;
pub const BASE_SCORE: u32 = 40;
pub const SCORE_PER_IMBALANCE: u32 = 6;
pub const MIN_SCORE: u32 = 10;
pub const MAX_SCORE: u32 = 95;
/// Score reported when the tally is empty.
pub const NEUTRAL_SCORE: u32 = 50;
pub const INSUFFICIENT_LABEL: &str = "Insufficient data";

/// Weighted count per element.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct ElementTally {
    counts: [u32; 5],
}

impl ElementTally {
    /// Counts in Wood, Fire, Earth, Metal, Water order.
    pub fn from_counts(counts: [u32; 5]) -> Self {
        Self { counts }
    }

    pub fn from_chart(chart: &Chart) -> Self {
        let mut tally = Self::default();
        for Pillar { stem, branch } in chart.pillars() {
            tally.add(stem.element(), STEM_WEIGHT);
            tally.add(branch.element(), BRANCH_WEIGHT);
        }
        tally.add(chart.day_master().element(), DAY_MASTER_WEIGHT);
        tally
    }

    fn add(&mut self, element: Element, weight: u32) {
        self.counts[element.index()] += weight;
    }

    pub fn get(&self, element: Element) -> u32 {
        self.counts[element.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// `(element, count)` pairs in Wood, Fire, Earth, Metal, Water order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Element, u32)> {
        Element::ALL.into_iter().zip(self.counts)
    }

    /// Element with the highest count; ties go to the earliest element.
    pub fn dominant(&self) -> Element {
        self.iter()
            .rev()
            .max_by_key(|&(_, n)| n)
            .map_or(Element::Wood, |(e, _)| e)
    }

    /// Element with the lowest count; ties go to the earliest element.
    pub fn weak(&self) -> Element {
        self.iter()
            .min_by_key(|&(_, n)| n)
            .map_or(Element::Wood, |(e, _)| e)
    }

    /// Spread between the highest and lowest count, capped at
    /// [`MAX_IMBALANCE`].
    pub fn imbalance(&self) -> u32 {
        let max = self.counts.iter().max().copied().unwrap_or(0);
        let min = self.counts.iter().min().copied().unwrap_or(0);
        (max - min).min(MAX_IMBALANCE)
    }
}

/// Serializes as a map from element name to count.
impl Serialize for ElementTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (element, count) in self.iter() {
            map.serialize_entry(element.name(), &count)?;
        }
        map.end()
    }
}

/// Score from an imbalance, `10..=95`.
pub fn score(imbalance: u32) -> u32 {
    let raw = BASE_SCORE + SCORE_PER_IMBALANCE * imbalance.min(MAX_IMBALANCE);
    raw.clamp(MIN_SCORE, MAX_SCORE)
}

/// Level of a score: the score in tens, rounded half up, `1..=9`.
///
/// Half up is a choice made here, not banker's rounding: `45` gives 5. The
/// scorer only produces scores `40 + 6k` below the cap, none of which end in
/// 5, and the capped 95 clamps to 9 either way, so the tie rule never
/// changes a computed level.
///
/// ```
/// use sizhu::burden::level;
///
/// assert_eq!(6, level(58));
/// assert_eq!(5, level(45));
/// assert_eq!(9, level(95));
/// assert_eq!(1, level(10));
/// ```
pub fn level(score: u32) -> u32 {
    ((score + 5) / 10).clamp(1, 9)
}

/// Band used to pick the label and closing paragraph: the score in whole
/// tens, `1..=9`.
pub fn band(score: u32) -> u32 {
    (score / 10).clamp(1, 9)
}

/// Burden profile of one chart.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct BurdenProfile {
    pub score: u32,
    pub level: u32,
    pub label: &'static str,
    pub imbalance: u32,
    pub elements: ElementTally,
    /// `None` only for an empty tally.
    pub dominant: Option<Element>,
    pub weak: Option<Element>,
    /// Paragraphs: dominant element, weak element, closing.
    pub narrative: Vec<&'static str>,
    pub actions: Vec<&'static str>,
}

impl BurdenProfile {
    /// Scores a tally. An empty tally gives the neutral
    /// [`BurdenProfile::insufficient`] profile.
    ///
    /// ```
    /// use sizhu::{BurdenProfile, ElementTally};
    ///
    /// let profile = BurdenProfile::from_tally(ElementTally::from_counts([4, 4, 4, 1, 1]));
    /// assert_eq!((58, 6), (profile.score, profile.level));
    /// assert_eq!("Mixed lessons, steady growth", profile.label);
    /// ```
    pub fn from_tally(tally: ElementTally) -> Self {
        if tally.total() == 0 {
            warn!("empty element tally, reporting neutral profile");
            return Self::insufficient(tally);
        }
        let imbalance = tally.imbalance();
        let score = score(imbalance);
        let level = level(score);
        let band = band(score);
        let (dominant, weak) = (tally.dominant(), tally.weak());
        debug!(imbalance, score, level, ?dominant, ?weak, "burden scored");

        BurdenProfile {
            score,
            level,
            label: text::label(band),
            imbalance,
            elements: tally,
            dominant: Some(dominant),
            weak: Some(weak),
            narrative: vec![text::strong(dominant), text::weak(weak), text::closing(band)],
            actions: text::actions(dominant, weak),
        }
    }

    pub fn from_chart(chart: &Chart) -> Self {
        Self::from_tally(ElementTally::from_chart(chart))
    }

    /// Neutral profile for a tally that carries no information.
    pub fn insufficient(tally: ElementTally) -> Self {
        BurdenProfile {
            score: NEUTRAL_SCORE,
            level: level(NEUTRAL_SCORE),
            label: INSUFFICIENT_LABEL,
            imbalance: 0,
            elements: tally,
            dominant: None,
            weak: None,
            narrative: vec![text::INSUFFICIENT],
            actions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::DateTime;

    fn chart(y: i32, m: i32, d: i32, h: u32, min: u32) -> Chart {
        Chart::new(DateTime::from_civil(y, m, d, h, min).unwrap())
    }

    #[test]
    fn reference_chart_tally() {
        // 癸亥 乙丑 甲子 甲子
        let tally = ElementTally::from_chart(&chart(1984, 2, 2, 0, 0));
        assert_eq!(
            ElementTally::from_counts([8, 0, 1, 0, 5]),
            tally,
            "{:?}",
            tally
        );
        assert_eq!(14, tally.total());
    }

    #[test]
    fn tally_totals() {
        for (y, m, d, h) in [(1990, 6, 15, 8), (2000, 1, 1, 23), (1962, 11, 30, 12), (2039, 7, 4, 5)] {
            assert_eq!(14, ElementTally::from_chart(&chart(y, m, d, h, 0)).total());
        }
    }

    #[test]
    fn dominant_and_weak_ties() {
        let tally = ElementTally::from_counts([4, 4, 4, 1, 1]);
        assert_eq!(Element::Wood, tally.dominant());
        assert_eq!(Element::Metal, tally.weak());
        let tally = ElementTally::from_counts([1, 5, 2, 5, 1]);
        assert_eq!(Element::Fire, tally.dominant());
        assert_eq!(Element::Wood, tally.weak());
    }

    #[test]
    fn imbalance_is_capped() {
        assert_eq!(3, ElementTally::from_counts([4, 4, 4, 1, 1]).imbalance());
        assert_eq!(10, ElementTally::from_counts([14, 0, 0, 0, 0]).imbalance());
        assert_eq!(0, ElementTally::from_counts([2, 2, 2, 2, 2]).imbalance());
    }

    #[test]
    fn scores() {
        for (std, imbalance) in [(40, 0), (58, 3), (94, 9), (95, 10), (95, 14)] {
            assert_eq!(std, score(imbalance), "{imbalance}");
        }
    }

    #[test]
    fn rounding_rule_never_matters_for_scores() {
        for imbalance in 0..=MAX_IMBALANCE + 4 {
            let score = score(imbalance);
            let tens = score / 10;
            let half_even = match score % 10 {
                0..=4 => tens,
                5 if tens % 2 == 0 => tens,
                _ => tens + 1,
            };
            assert_eq!(half_even.clamp(1, 9), level(score), "{score}");
        }
    }

    #[test]
    fn imbalance_scenario() {
        let profile = BurdenProfile::from_tally(ElementTally::from_counts([4, 4, 4, 1, 1]));
        assert_eq!(3, profile.imbalance);
        assert_eq!(58, profile.score);
        assert_eq!(6, profile.level);
        assert_eq!("Mixed lessons, steady growth", profile.label);
        assert_eq!(Some(Element::Wood), profile.dominant);
        assert_eq!(Some(Element::Metal), profile.weak);
        assert_eq!(3, profile.narrative.len());
        assert_eq!(text::strong(Element::Wood), profile.narrative[0]);
        assert_eq!(text::weak(Element::Metal), profile.narrative[1]);
        assert_eq!(3, profile.actions.len());
    }

    #[test]
    fn labels_by_band() {
        let data = [
            ([3, 3, 3, 3, 2], "Mixed lessons, steady growth"),
            ([5, 3, 3, 3, 3], "Mixed lessons, steady growth"),
            ([7, 2, 2, 2, 1], "Deep ancestral homework"),
            ([10, 1, 1, 1, 1], "Intense soul contract this life"),
        ];
        for (counts, std) in data {
            assert_eq!(std, BurdenProfile::from_tally(ElementTally::from_counts(counts)).label);
        }
    }

    #[test]
    fn empty_tally() {
        let profile = BurdenProfile::from_tally(ElementTally::default());
        assert_eq!(NEUTRAL_SCORE, profile.score);
        assert_eq!(5, profile.level);
        assert_eq!(INSUFFICIENT_LABEL, profile.label);
        assert_eq!(None, profile.dominant);
        assert_eq!(None, profile.weak);
        assert!(profile.actions.is_empty());
    }

    #[test]
    fn serialized_profile() {
        let profile = BurdenProfile::from_tally(ElementTally::from_counts([4, 4, 4, 1, 1]));
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(58, json["score"]);
        assert_eq!(4, json["elements"]["Wood"]);
        assert_eq!(1, json["elements"]["Water"]);
        assert_eq!("Wood", json["dominant"]);
        assert_eq!("Metal", json["weak"]);
        assert_eq!(3, json["actions"].as_array().unwrap().len());
    }
}
