//! The 24 solar terms and per-date term resolution.
//!
//! Terms are listed in civil-calendar order starting at 小寒, so term `i`
//! always falls in month `i / 2 + 1`.

use huangli_time::CivilDate;
use tracing::debug;

use crate::error::BaseError;
use crate::packed::{TERMS_PER_YEAR, year_solar_term_days};

/// The 24 solar terms, 小寒 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum SolarTerm {
    XiaoHan,
    DaHan,
    LiChun,
    YuShui,
    JingZhe,
    ChunFen,
    QingMing,
    GuYu,
    LiXia,
    XiaoMan,
    MangZhong,
    XiaZhi,
    XiaoShu,
    DaShu,
    LiQiu,
    ChuShu,
    BaiLu,
    QiuFen,
    HanLu,
    ShuangJiang,
    LiDong,
    XiaoXue,
    DaXue,
    DongZhi,
}

/// All terms in civil order (index 0 = 小寒).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
    SolarTerm::DongZhi,
];

const SOLAR_TERM_NAMES: [&str; 24] = [
    "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至",
    "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

/// The four "beginning of season" terms, in civil order.
pub const SEASON_STARTS: [SolarTerm; 4] = [
    SolarTerm::LiChun,
    SolarTerm::LiXia,
    SolarTerm::LiQiu,
    SolarTerm::LiDong,
];

/// The two equinoxes and two solstices, in civil order.
pub const SEASON_MIDPOINTS: [SolarTerm; 4] = [
    SolarTerm::ChunFen,
    SolarTerm::XiaZhi,
    SolarTerm::QiuFen,
    SolarTerm::DongZhi,
];

impl SolarTerm {
    /// Chinese name of the term.
    pub fn name(self) -> &'static str {
        SOLAR_TERM_NAMES[self.index() as usize]
    }

    /// 0-based index in civil order (小寒=0 .. 冬至=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Term at `index` modulo 24.
    pub fn from_index(index: i64) -> Self {
        ALL_SOLAR_TERMS[index.rem_euclid(24) as usize]
    }

    /// Civil month the term falls in.
    pub const fn month(self) -> u32 {
        self.index() as u32 / 2 + 1
    }
}

/// Dates of the 24 solar terms of one civil year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarTermTable {
    /// Civil year of the table.
    pub year: i32,
    /// Day-of-month of each term, indexed by [`SolarTerm::index`].
    pub days: [u8; TERMS_PER_YEAR],
}

impl SolarTermTable {
    /// Decode the table for civil `year`.
    pub fn for_year(year: i32) -> Result<Self, BaseError> {
        Ok(Self {
            year,
            days: year_solar_term_days(year)?,
        })
    }

    /// `(month, day)` of `term`.
    pub fn month_day(&self, term: SolarTerm) -> (u32, u32) {
        (term.month(), self.days[term.index() as usize] as u32)
    }

    /// Full civil date of `term`.
    pub fn date_of(&self, term: SolarTerm) -> CivilDate {
        let (month, day) = self.month_day(term);
        CivilDate {
            year: self.year,
            month,
            day,
        }
    }

    /// Terms with their `(month, day)`, in civil order.
    pub fn entries(&self) -> impl Iterator<Item = (SolarTerm, (u32, u32))> + '_ {
        ALL_SOLAR_TERMS.iter().map(|&t| (t, self.month_day(t)))
    }

    /// Number of terms dated on or before `(month, day)`.
    pub fn elapsed_by(&self, month_day: (u32, u32)) -> u8 {
        self.entries().take_while(|(_, md)| *md <= month_day).count() as u8
    }

    /// The term dated exactly on `(month, day)`, if any.
    pub fn term_on(&self, month_day: (u32, u32)) -> Option<SolarTerm> {
        self.entries()
            .find(|(_, md)| *md == month_day)
            .map(|(t, _)| t)
    }
}

/// Solar-term state of one civil date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarTermInfo {
    /// Term dated exactly on the request date.
    pub today: Option<SolarTerm>,
    /// Index of the next term (terms elapsed this year, modulo 24).
    pub next_index: u8,
    /// The next term strictly after the request date.
    pub next: SolarTerm,
    /// Civil date of `next` (may fall in the following year).
    pub next_date: CivilDate,
    /// Term table of the request's civil year.
    pub table: SolarTermTable,
}

impl SolarTermInfo {
    /// Name of today's term, or `无`.
    pub fn today_name(&self) -> &'static str {
        self.today.map_or("无", SolarTerm::name)
    }

    /// Civil year of the next term.
    pub fn next_year(&self) -> i32 {
        self.next_date.year
    }
}

/// Resolve today's term and the next term for `date`.
///
/// When `date` is on or after the year's last term the next term is looked
/// up in the following year's table; the current table is left untouched.
pub fn resolve_solar_terms(date: &CivilDate) -> Result<SolarTermInfo, BaseError> {
    let table = SolarTermTable::for_year(date.year)?;
    let today_md = date.month_day();
    let elapsed = table.elapsed_by(today_md);
    let next_index = elapsed % TERMS_PER_YEAR as u8;
    let next = SolarTerm::from_index(next_index as i64);

    let (last_month, last_day) = table.month_day(SolarTerm::DongZhi);
    let next_table = if date.month == last_month && date.day >= last_day {
        debug!(year = date.year + 1, "next solar term falls in the following year");
        SolarTermTable::for_year(date.year + 1)?
    } else {
        table
    };

    Ok(SolarTermInfo {
        today: table.term_on(today_md),
        next_index,
        next,
        next_date: next_table.date_of(next),
        table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    #[test]
    fn term_months() {
        assert_eq!(SolarTerm::XiaoHan.month(), 1);
        assert_eq!(SolarTerm::LiChun.month(), 2);
        assert_eq!(SolarTerm::DongZhi.month(), 12);
        assert_eq!(SolarTerm::QingMing.name(), "清明");
    }

    #[test]
    fn on_term_day_reports_following_term() {
        let info = resolve_solar_terms(&date(2024, 2, 4)).unwrap();
        assert_eq!(info.today, Some(SolarTerm::LiChun));
        assert_eq!(info.next, SolarTerm::YuShui);
        assert_eq!(info.next_date, date(2024, 2, 19));
        assert_eq!(info.next_index, 3);
    }

    #[test]
    fn between_terms() {
        let info = resolve_solar_terms(&date(2026, 1, 29)).unwrap();
        assert_eq!(info.today, None);
        assert_eq!(info.today_name(), "无");
        assert_eq!(info.next, SolarTerm::LiChun);
        assert_eq!(info.next_date, date(2026, 2, 4));
    }

    #[test]
    fn winter_solstice_rolls_into_next_year() {
        let info = resolve_solar_terms(&date(2024, 12, 21)).unwrap();
        assert_eq!(info.today, Some(SolarTerm::DongZhi));
        assert_eq!(info.next_index, 0);
        assert_eq!(info.next, SolarTerm::XiaoHan);
        assert_eq!(info.next_date, date(2025, 1, 5));
        assert_eq!(info.table.year, 2024);
    }

    #[test]
    fn before_first_term_of_year() {
        let info = resolve_solar_terms(&date(2024, 1, 1)).unwrap();
        assert_eq!(info.next_index, 0);
        assert_eq!(info.next_date, date(2024, 1, 6));
    }

    #[test]
    fn last_supported_day_uses_2101_table() {
        let info = resolve_solar_terms(&date(2100, 12, 31)).unwrap();
        assert_eq!(info.next, SolarTerm::XiaoHan);
        assert_eq!(info.next_year(), 2101);
    }
}
