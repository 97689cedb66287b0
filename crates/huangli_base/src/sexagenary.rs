//! Heavenly stems, earthly branches and the 60-pillar sexagenary cycle.
//!
//! A [`Pillar`] is stored as its position in the cycle, so only the 60 valid
//! stem/branch pairings can ever be represented.

/// The ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
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

/// All stems in order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const STEM_ELEMENTS: [Element; 10] = [
    Element::Wood,
    Element::Wood,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Water,
    Element::Water,
];

impl Stem {
    /// Chinese character of the stem.
    pub fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at `index` modulo 10.
    pub fn from_index(index: i64) -> Self {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    /// Five-element phase of the stem.
    pub fn element(self) -> Element {
        STEM_ELEMENTS[self.index() as usize]
    }
}

/// The twelve earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
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

/// All branches in order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const ANIMAL_NAMES: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

const BRANCH_ELEMENTS: [Element; 12] = [
    Element::Water,
    Element::Earth,
    Element::Wood,
    Element::Wood,
    Element::Earth,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Earth,
    Element::Water,
];

impl Branch {
    /// Chinese character of the branch.
    pub fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    /// Zodiac animal paired with the branch.
    pub fn animal(self) -> &'static str {
        ANIMAL_NAMES[self.index() as usize]
    }

    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at `index` modulo 12.
    pub fn from_index(index: i64) -> Self {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    /// Five-element phase of the branch.
    pub fn element(self) -> Element {
        BRANCH_ELEMENTS[self.index() as usize]
    }
}

/// The five phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Element {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
}

impl Element {
    /// Chinese character of the phase.
    pub fn name(self) -> &'static str {
        match self {
            Self::Metal => "金",
            Self::Wood => "木",
            Self::Water => "水",
            Self::Fire => "火",
            Self::Earth => "土",
        }
    }
}

/// Number of pillars in the sexagenary cycle.
pub const CYCLE_LEN: u8 = 60;

const PILLAR_NAMES: [&str; 60] = [
    "甲子", "乙丑", "丙寅", "丁卯", "戊辰", "己巳", "庚午", "辛未", "壬申", "癸酉", //
    "甲戌", "乙亥", "丙子", "丁丑", "戊寅", "己卯", "庚辰", "辛巳", "壬午", "癸未", //
    "甲申", "乙酉", "丙戌", "丁亥", "戊子", "己丑", "庚寅", "辛卯", "壬辰", "癸巳", //
    "甲午", "乙未", "丙申", "丁酉", "戊戌", "己亥", "庚子", "辛丑", "壬寅", "癸卯", //
    "甲辰", "乙巳", "丙午", "丁未", "戊申", "己酉", "庚戌", "辛亥", "壬子", "癸丑", //
    "甲寅", "乙卯", "丙辰", "丁巳", "戊午", "己未", "庚申", "辛酉", "壬戌", "癸亥", //
];

/// One position of the sexagenary cycle (甲子 = 0 .. 癸亥 = 59).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pillar(u8);

impl Pillar {
    /// Pillar at `index` modulo 60.
    pub fn from_index(index: i64) -> Self {
        Self(index.rem_euclid(CYCLE_LEN as i64) as u8)
    }

    /// Pillar combining `stem` and `branch`, if the pairing exists in the cycle.
    ///
    /// Only same-parity pairs (yang stem with yang branch, yin with yin) exist.
    pub fn from_parts(stem: Stem, branch: Branch) -> Option<Self> {
        let s = stem.index() as i64;
        let b = branch.index() as i64;
        if s % 2 != b % 2 {
            return None;
        }
        // Chinese remainder: i ≡ s (mod 10), i ≡ b (mod 12)
        Some(Self::from_index(6 * s - 5 * b))
    }

    /// Look a pillar up by its two-character name.
    pub fn from_name(name: &str) -> Option<Self> {
        PILLAR_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| Self(i as u8))
    }

    /// 0-based cycle index (0..59).
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Heavenly stem of the pillar.
    pub fn stem(self) -> Stem {
        ALL_STEMS[(self.0 % 10) as usize]
    }

    /// Earthly branch of the pillar.
    pub fn branch(self) -> Branch {
        ALL_BRANCHES[(self.0 % 12) as usize]
    }

    /// Two-character name, e.g. `丙寅`.
    pub fn name(self) -> &'static str {
        PILLAR_NAMES[self.0 as usize]
    }

    /// The pillar `n` steps later in the cycle.
    pub fn offset(self, n: i64) -> Self {
        Self::from_index(self.0 as i64 + n)
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_names_match_parts() {
        for i in 0..60 {
            let p = Pillar::from_index(i);
            let expected = format!("{}{}", p.stem().name(), p.branch().name());
            assert_eq!(p.name(), expected);
        }
    }

    #[test]
    fn from_parts_inverts_parts() {
        for i in 0..60 {
            let p = Pillar::from_index(i);
            assert_eq!(Pillar::from_parts(p.stem(), p.branch()), Some(p));
        }
    }

    #[test]
    fn mixed_parity_pair_does_not_exist() {
        assert_eq!(Pillar::from_parts(Stem::Jia, Branch::Chou), None);
    }

    #[test]
    fn from_name_lookup() {
        assert_eq!(Pillar::from_name("丙寅").map(Pillar::index), Some(2));
        assert_eq!(Pillar::from_name("癸亥").map(Pillar::index), Some(59));
        assert_eq!(Pillar::from_name("甲丑"), None);
    }

    #[test]
    fn negative_offsets_wrap() {
        assert_eq!(Pillar::from_index(-1).name(), "癸亥");
        assert_eq!(Pillar::from_index(0).offset(-61).name(), "癸亥");
    }

    #[test]
    fn elements_and_animals() {
        assert_eq!(Stem::Geng.element(), Element::Metal);
        assert_eq!(Branch::Chou.element(), Element::Earth);
        assert_eq!(Branch::Chen.animal(), "龙");
        assert_eq!(Element::Fire.name(), "火");
    }
}
