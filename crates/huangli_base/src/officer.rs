//! Twelve day officers (建除十二神) and the yellow/black path gods.
//!
//! Both cycles are keyed by a "month index" and the day branch. The month
//! index is the month pillar's branch by default; the lunar-month keyed
//! variant is kept for compatibility and is known to disagree with most
//! printed almanacs.

use crate::sexagenary::{Branch, Pillar};

/// How the month index of the day-officer cycle is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OfficerMode {
    /// Branch of the month pillar (solar-term months).
    #[default]
    MonthPillar,
    /// `(lunar month + 1) mod 12`. Not recommended.
    LunarMonth,
}

/// Month index used by the officer, path-god and rule tables.
pub fn officer_month_index(mode: OfficerMode, month_pillar: Pillar, lunar_month: u32) -> u8 {
    match mode {
        OfficerMode::MonthPillar => month_pillar.branch().index(),
        OfficerMode::LunarMonth => (lunar_month as i64 + 1).rem_euclid(12) as u8,
    }
}

/// The twelve day officers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum DayOfficer {
    Jian,
    Chu,
    Man,
    Ping,
    Ding,
    Zhi,
    Po,
    Wei,
    Cheng,
    Shou,
    Kai,
    Bi,
}

/// All officers in cycle order (index 0 = 建).
pub const ALL_DAY_OFFICERS: [DayOfficer; 12] = [
    DayOfficer::Jian,
    DayOfficer::Chu,
    DayOfficer::Man,
    DayOfficer::Ping,
    DayOfficer::Ding,
    DayOfficer::Zhi,
    DayOfficer::Po,
    DayOfficer::Wei,
    DayOfficer::Cheng,
    DayOfficer::Shou,
    DayOfficer::Kai,
    DayOfficer::Bi,
];

const DAY_OFFICER_NAMES: [&str; 12] = [
    "建", "除", "满", "平", "定", "执", "破", "危", "成", "收", "开", "闭",
];

impl DayOfficer {
    /// Single-character name, e.g. `建`.
    pub fn name(self) -> &'static str {
        DAY_OFFICER_NAMES[self.index() as usize]
    }

    /// 0-based index (建=0 .. 闭=11).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// The twelve gods of the yellow (auspicious) and black paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum PathGod {
    QingLong,
    MingTang,
    TianXing,
    ZhuQue,
    JinKui,
    TianDe,
    BaiHu,
    YuTang,
    TianLao,
    XuanWu,
    SiMing,
    GouChen,
}

/// All path gods in cycle order (index 0 = 青龙).
pub const ALL_PATH_GODS: [PathGod; 12] = [
    PathGod::QingLong,
    PathGod::MingTang,
    PathGod::TianXing,
    PathGod::ZhuQue,
    PathGod::JinKui,
    PathGod::TianDe,
    PathGod::BaiHu,
    PathGod::YuTang,
    PathGod::TianLao,
    PathGod::XuanWu,
    PathGod::SiMing,
    PathGod::GouChen,
];

const PATH_GOD_NAMES: [&str; 12] = [
    "青龙", "明堂", "天刑", "朱雀", "金匮", "天德", "白虎", "玉堂", "天牢", "玄武", "司命", "勾陈",
];

/// Branch of the 青龙 slot for each month (or day) branch.
const QING_LONG_OFFSET: [i64; 12] = [8, 10, 0, 2, 4, 6, 8, 10, 0, 2, 4, 6];

impl PathGod {
    /// Chinese name, e.g. `青龙`.
    pub fn name(self) -> &'static str {
        PATH_GOD_NAMES[self.index() as usize]
    }

    /// 0-based index (青龙=0 .. 勾陈=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Whether the god walks the yellow (auspicious) path.
    pub const fn is_yellow(self) -> bool {
        matches!(
            self,
            Self::QingLong | Self::MingTang | Self::JinKui | Self::TianDe | Self::YuTang | Self::SiMing
        )
    }

    /// God ruling `slot` when the cycle is keyed by `key_branch`.
    pub fn for_slot(key_branch: u8, slot: Branch) -> Self {
        let offset = QING_LONG_OFFSET[key_branch as usize % 12];
        ALL_PATH_GODS[(slot.index() as i64 - offset).rem_euclid(12) as usize]
    }
}

/// Officer and path god of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOfficerInfo {
    /// The day officer.
    pub officer: DayOfficer,
    /// The path god of the day.
    pub god: PathGod,
}

impl DayOfficerInfo {
    /// `黄道日` or `黑道日`.
    pub fn path_name(&self) -> &'static str {
        if self.god.is_yellow() { "黄道日" } else { "黑道日" }
    }
}

/// Officer and path god of a day with branch `day_branch` in month index `month_index`.
pub fn day_officer(month_index: u8, day_branch: Branch) -> DayOfficerInfo {
    let officer =
        ALL_DAY_OFFICERS[(day_branch.index() as i64 - month_index as i64).rem_euclid(12) as usize];
    DayOfficerInfo {
        officer,
        god: PathGod::for_slot(month_index, day_branch),
    }
}

/// Auspicious flags of the thirteen two-hour blocks shown for a day: the
/// twelve blocks of `day` followed by the 子 block of the next day.
pub fn lucky_hours(day: Pillar) -> [bool; 13] {
    let today = day.branch().index();
    let tomorrow = day.offset(1).branch().index();
    std::array::from_fn(|i| {
        if i < 12 {
            PathGod::for_slot(today, Branch::from_index(i as i64)).is_yellow()
        } else {
            PathGod::for_slot(tomorrow, Branch::Zi).is_yellow()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jian_day_matches_month_branch() {
        // 建 falls on the day whose branch equals the month branch.
        for b in 0..12 {
            let info = day_officer(b, Branch::from_index(b as i64));
            assert_eq!(info.officer, DayOfficer::Jian);
        }
    }

    #[test]
    fn officer_for_2026_01_29() {
        // month 己丑 (index 1), day 癸卯
        let info = day_officer(1, Branch::Mao);
        assert_eq!(info.officer.name(), "满");
    }

    #[test]
    fn qing_long_positions() {
        // 寅/申 months start 青龙 at 子.
        assert_eq!(PathGod::for_slot(2, Branch::Zi), PathGod::QingLong);
        assert_eq!(PathGod::for_slot(8, Branch::Zi), PathGod::QingLong);
        // 子/午 keys start at 申.
        assert_eq!(PathGod::for_slot(0, Branch::Shen), PathGod::QingLong);
        assert_eq!(PathGod::for_slot(6, Branch::Shen), PathGod::QingLong);
    }

    #[test]
    fn six_yellow_gods() {
        assert_eq!(ALL_PATH_GODS.iter().filter(|g| g.is_yellow()).count(), 6);
        let info = day_officer(2, Branch::Zi);
        assert_eq!(info.path_name(), "黄道日");
    }

    #[test]
    fn lunar_month_mode_index() {
        let month = Pillar::from_name("丙寅").unwrap();
        assert_eq!(officer_month_index(OfficerMode::MonthPillar, month, 12), 2);
        assert_eq!(officer_month_index(OfficerMode::LunarMonth, month, 12), 1);
        assert_eq!(officer_month_index(OfficerMode::LunarMonth, month, 1), 2);
    }

    #[test]
    fn zi_day_lucky_hours() {
        // 子 day: 青龙 at 申; yellow blocks 申 酉 子 丑 卯 午.
        let day = Pillar::from_name("甲子").unwrap();
        let flags = lucky_hours(day);
        let yellow: Vec<usize> = (0..12).filter(|&i| flags[i]).collect();
        assert_eq!(yellow, vec![0, 1, 3, 6, 8, 9]);
        // next day 乙丑: 青龙 at 戌, so 子 is 司命 (yellow)
        assert!(flags[12]);
    }
}
