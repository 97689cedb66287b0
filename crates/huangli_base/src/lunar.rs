//! Gregorian → Chinese lunar date resolution.
//!
//! The offset between a civil date and its civil year's lunar new year is
//! walked month by month through the packed month layout of the lunar year:
//! forward from 正月 when the date is on or after the new year, backward from
//! 腊月 of the previous lunar year otherwise.

use huangli_time::CivilDate;
use tracing::debug;

use crate::error::BaseError;
use crate::tables::calendar_data::{
    LUNAR_MONTH_DATA, LUNAR_MONTH_FIRST_YEAR, LUNAR_NEW_YEAR, NEW_YEAR_FIRST_YEAR,
};

const MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月", "腊月",
];

const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", //
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", //
    "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十", //
];

const DIGITS: [char; 10] = ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// Last lunar year covered by the month layout table.
pub const LUNAR_MONTH_LAST_YEAR: i32 = LUNAR_MONTH_FIRST_YEAR + LUNAR_MONTH_DATA.len() as i32 - 1;

/// Last civil year covered by the new-year anchor table.
pub const NEW_YEAR_LAST_YEAR: i32 = NEW_YEAR_FIRST_YEAR + LUNAR_NEW_YEAR.len() as i32 - 1;

/// Month layout of one lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarYearLayout {
    /// Lunar year number.
    pub year: i32,
    code: u32,
}

impl LunarYearLayout {
    /// Layout of lunar `year`.
    pub fn for_year(year: i32) -> Result<Self, BaseError> {
        if !(LUNAR_MONTH_FIRST_YEAR..=LUNAR_MONTH_LAST_YEAR).contains(&year) {
            return Err(BaseError::YearOutOfRange {
                year,
                min: LUNAR_MONTH_FIRST_YEAR,
                max: LUNAR_MONTH_LAST_YEAR,
            });
        }
        Ok(Self {
            year,
            code: LUNAR_MONTH_DATA[(year - LUNAR_MONTH_FIRST_YEAR) as usize],
        })
    }

    /// Days in ordinary month `month` (1..=12): 29 or 30.
    pub fn month_days(&self, month: u32) -> u32 {
        if self.code & (1 << (month - 1)) != 0 { 30 } else { 29 }
    }

    /// Number of the leap month (0 = no leap month this year).
    pub fn leap_month(&self) -> u32 {
        (self.code >> 13) & 0xf
    }

    /// Days in the leap month: 30 when bit 12 is set and a leap month exists.
    pub fn leap_days(&self) -> u32 {
        if self.leap_month() > 0 && self.code & (1 << 12) != 0 {
            30
        } else {
            29
        }
    }

    /// Days in the whole lunar year.
    pub fn total_days(&self) -> u32 {
        let ordinary: u32 = (1..=12).map(|m| self.month_days(m)).sum();
        if self.leap_month() > 0 {
            ordinary + self.leap_days()
        } else {
            ordinary
        }
    }
}

/// Civil date of the lunar new year falling in civil `year`.
pub fn lunar_new_year(year: i32) -> Result<CivilDate, BaseError> {
    if !(NEW_YEAR_FIRST_YEAR..=NEW_YEAR_LAST_YEAR).contains(&year) {
        return Err(BaseError::YearOutOfRange {
            year,
            min: NEW_YEAR_FIRST_YEAR,
            max: NEW_YEAR_LAST_YEAR,
        });
    }
    let code = LUNAR_NEW_YEAR[(year - NEW_YEAR_FIRST_YEAR) as usize];
    Ok(CivilDate::new(
        year,
        ((code >> 5) & 0x3) as u32,
        (code & 0x1f) as u32,
    )?)
}

/// A Chinese lunar calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDate {
    /// Lunar year number (the civil year its 正月 falls in).
    pub year: i32,
    /// Month 1..=12; a leap month carries the number of the month it follows.
    pub month: u32,
    /// Day 1..=30.
    pub day: u32,
    /// Whether `month` is the leap (intercalary) month.
    pub is_leap_month: bool,
    /// Length of this month: 29 (小) or 30 (大).
    pub month_days: u32,
}

impl LunarDate {
    /// Whether the month is a 30-day "big" month.
    pub fn is_big_month(&self) -> bool {
        self.month_days >= 30
    }

    /// Year digits in Chinese, e.g. `二零二六`.
    pub fn year_cn(&self) -> String {
        self.year
            .to_string()
            .chars()
            .filter_map(|c| c.to_digit(10).map(|d| DIGITS[d as usize]))
            .collect()
    }

    /// Month name with leap prefix and size suffix, e.g. `闰六月小`.
    pub fn month_cn(&self) -> String {
        let name = MONTH_NAMES[(self.month as i64 - 1).rem_euclid(12) as usize];
        let size = if self.is_big_month() { "大" } else { "小" };
        if self.is_leap_month {
            format!("闰{name}{size}")
        } else {
            format!("{name}{size}")
        }
    }

    /// Day name, e.g. `初一`.
    pub fn day_cn(&self) -> &'static str {
        DAY_NAMES[(self.day as i64 - 1).rem_euclid(30) as usize]
    }
}

/// Result of resolving a civil date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarResolution {
    /// The lunar date.
    pub date: LunarDate,
    /// Signed days from the civil year's lunar new year to the date.
    pub span_days: i64,
}

/// Convert a civil date to its lunar date.
pub fn resolve_lunar_date(date: &CivilDate) -> Result<LunarResolution, BaseError> {
    let new_year = lunar_new_year(date.year)?;
    let span_days = new_year.days_until(date);

    let lunar = if span_days >= 0 {
        walk_forward(date.year, span_days)?
    } else {
        debug!(span_days, "date precedes the lunar new year, walking back from 腊月");
        walk_backward(date.year - 1, span_days)?
    };
    Ok(LunarResolution {
        date: lunar,
        span_days,
    })
}

fn walk_forward(year: i32, span: i64) -> Result<LunarDate, BaseError> {
    let layout = LunarYearLayout::for_year(year)?;
    let leap = layout.leap_month();
    let mut span = span;
    let mut month = 1;
    let mut is_leap_month = false;
    let mut month_days = layout.month_days(month) as i64;
    while span >= month_days {
        span -= month_days;
        if month == leap {
            let leap_days = layout.leap_days() as i64;
            if span < leap_days {
                is_leap_month = true;
                month_days = leap_days;
                break;
            }
            span -= leap_days;
        }
        month += 1;
        if month > 12 {
            return Err(BaseError::MalformedTable("lunar year shorter than its civil span"));
        }
        month_days = layout.month_days(month) as i64;
    }
    Ok(LunarDate {
        year,
        month,
        day: (span + 1) as u32,
        is_leap_month,
        month_days: month_days as u32,
    })
}

fn walk_backward(year: i32, span: i64) -> Result<LunarDate, BaseError> {
    let layout = LunarYearLayout::for_year(year)?;
    let leap = layout.leap_month();
    let mut span = span;
    let mut month = 12;
    let mut is_leap_month = false;
    let mut month_days = layout.month_days(month) as i64;
    while span.abs() > month_days {
        span += month_days;
        month -= 1;
        if month == 0 {
            return Err(BaseError::MalformedTable("lunar year shorter than its civil span"));
        }
        if month == leap {
            let leap_days = layout.leap_days() as i64;
            if span.abs() <= leap_days {
                is_leap_month = true;
                month_days = leap_days;
                break;
            }
            span += leap_days;
        }
        month_days = layout.month_days(month) as i64;
    }
    Ok(LunarDate {
        year,
        month,
        day: (month_days + span + 1) as u32,
        is_leap_month,
        month_days: month_days as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunar(y: i32, m: u32, d: u32) -> LunarDate {
        resolve_lunar_date(&CivilDate::new(y, m, d).unwrap())
            .unwrap()
            .date
    }

    #[test]
    fn new_year_anchors() {
        assert_eq!(lunar_new_year(2024).unwrap().to_string(), "2024-02-10");
        assert_eq!(lunar_new_year(2025).unwrap().to_string(), "2025-01-29");
        assert_eq!(lunar_new_year(2026).unwrap().to_string(), "2026-02-17");
    }

    #[test]
    fn spring_festival_is_first_day() {
        let d = lunar(2024, 2, 10);
        assert_eq!((d.year, d.month, d.day, d.is_leap_month), (2024, 1, 1, false));
        assert_eq!(d.day_cn(), "初一");
    }

    #[test]
    fn day_before_new_year_walks_backward() {
        let d = lunar(2024, 2, 9);
        assert_eq!((d.year, d.month, d.day), (2023, 12, 30));
        assert!(d.is_big_month());
    }

    #[test]
    fn leap_month_2017() {
        // 闰六月 of 2017 began on 2017-07-23 and had 30 days.
        let first = lunar(2017, 7, 23);
        assert_eq!((first.month, first.day, first.is_leap_month), (6, 1, true));
        let last = lunar(2017, 8, 21);
        assert_eq!((last.month, last.day, last.is_leap_month), (6, 30, true));
        assert_eq!(last.month_cn(), "闰六月大");
        let after = lunar(2017, 8, 22);
        assert_eq!((after.month, after.day, after.is_leap_month), (7, 1, false));
    }

    #[test]
    fn leap_month_reached_walking_backward() {
        // 闰十一月 of lunar 2033 spans the civil new year.
        let d = lunar(2034, 1, 15);
        assert_eq!((d.year, d.month, d.day, d.is_leap_month), (2033, 11, 25, true));
        let d = lunar(2034, 1, 20);
        assert_eq!((d.year, d.month, d.day, d.is_leap_month), (2033, 12, 1, false));
    }

    #[test]
    fn first_supported_day() {
        let d = lunar(1901, 1, 1);
        assert_eq!((d.year, d.month, d.day), (1900, 11, 11));
    }

    #[test]
    fn chinese_renderings() {
        let d = lunar(2026, 1, 29);
        assert_eq!(d.year_cn(), "二零二五");
        assert_eq!(d.month_cn(), "腊月小");
        assert_eq!(d.day_cn(), "十一");
    }

    #[test]
    fn layout_totals() {
        assert_eq!(LunarYearLayout::for_year(2017).unwrap().leap_month(), 6);
        assert_eq!(LunarYearLayout::for_year(2024).unwrap().leap_month(), 0);
        let y = LunarYearLayout::for_year(2023).unwrap();
        let next = lunar_new_year(2024).unwrap();
        assert_eq!(
            lunar_new_year(2023).unwrap().days_until(&next),
            y.total_days() as i64
        );
    }

    #[test]
    fn out_of_range_years() {
        assert!(matches!(
            resolve_lunar_date(&CivilDate::new(1900, 6, 1).unwrap()),
            Err(BaseError::YearOutOfRange { year: 1900, .. })
        ));
        assert!(resolve_lunar_date(&CivilDate::new(2101, 1, 1).unwrap()).is_err());
    }
}
