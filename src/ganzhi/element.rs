//! 五行

use serde::{Serialize, Serializer};

use super::{Branch, Stem};

/// 五行，依木火土金水排列。此序亦為評分時並列取捨之序。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const ALL: [Element; 5] = {
        use Element::*;
        [Wood, Fire, Earth, Metal, Water]
    };

    pub fn index(self) -> usize {
        self as usize
    }
    /// 英文名，如 `"Wood"`。
    pub fn name(self) -> &'static str {
        super::fmt::ELEMENT_NAMES[self.index()]
    }
    /// 漢字名，如「木」。
    pub fn symbol(self) -> &'static str {
        super::fmt::ELEMENT_SYMBOLS[self.index()]
    }
}

/// 天干五行：甲乙木、丙丁火、戊己土、庚辛金、壬癸水。
///
/// # 用例
///
/// ```
/// use sizhu::ganzhi::{element, Element, Stem};
///
/// assert_eq!(Element::Earth, element::of_stem(Stem::Ji));
/// ```
pub fn of_stem(stem: Stem) -> Element {
    Element::ALL[stem.index() / 2]
}

/// 地支五行：寅卯木、巳午火、申酉金、亥子水，辰戌丑未土。
pub fn of_branch(branch: Branch) -> Element {
    use Branch::*;
    use Element::*;
    match branch {
        Yin | Mao => Wood,
        Si | Wu => Fire,
        Chou | Chen | Wei | Xu => Earth,
        Shen | You => Metal,
        Zi | Hai => Water,
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems() {
        let stds = "木木火火土土金金水水";
        for (stem, std) in Stem::ALL.iter().zip(stds.chars()) {
            assert_eq!(std.to_string(), of_stem(*stem).symbol(), "{stem}");
        }
    }

    #[test]
    fn branches() {
        let stds = "水土木木土火火土金金土水";
        for (branch, std) in Branch::ALL.iter().zip(stds.chars()) {
            assert_eq!(std.to_string(), of_branch(*branch).symbol(), "{branch}");
        }
    }

    #[test]
    fn every_element_has_two_stems() {
        for element in Element::ALL {
            assert_eq!(2, Stem::ALL.iter().filter(|s| s.element() == element).count());
        }
    }
}
