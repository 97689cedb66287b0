//! Year, month, day and hour pillars (四柱).
//!
//! Day pillars count civil days from 2019-01-29 (丙寅). Month pillars advance
//! one step per pair of elapsed solar terms from the 2019 reference. The year
//! pillar follows the lunar year, optionally switched at 立春.

use huangli_time::{CivilDate, CivilDateTime};

use crate::sexagenary::Pillar;

/// Reference date of the day-pillar count.
pub const DAY_PILLAR_EPOCH: CivilDate = CivilDate {
    year: 2019,
    month: 1,
    day: 29,
};

/// Cycle index of the reference day's pillar (丙寅).
pub const DAY_PILLAR_EPOCH_INDEX: i64 = 2;

/// Reference civil year of the month-pillar count.
pub const MONTH_PILLAR_EPOCH_YEAR: i32 = 2019;

/// Two-hour block value of 23:00–23:59, which belongs to the next day's pillar.
pub const LATE_NIGHT_BLOCK: u8 = 12;

/// Where the year pillar changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum YearPillarMode {
    /// Change at the lunar new year.
    #[default]
    FixedYear,
    /// Change at 立春 (start of spring).
    SwitchAtSpring,
}

/// Two-hour block number ⌊(hour + 1) / 2⌋: 0 for 00:00–00:59, 12 for 23:00–23:59.
pub const fn two_hour_block(hour: u32) -> u8 {
    ((hour + 1) / 2) as u8
}

/// Correction subtracted from the lunar year when computing the year pillar.
///
/// Non-zero only in [`YearPillarMode::SwitchAtSpring`]: `-1` for dates before
/// the lunar new year but on or after 立春, `+1` for dates on or after the
/// lunar new year but before 立春. `next_term_index < 3` means 立春 has not
/// yet passed this civil year.
pub fn spring_adjustment(mode: YearPillarMode, span_days: i64, next_term_index: u8) -> i32 {
    if mode != YearPillarMode::SwitchAtSpring {
        return 0;
    }
    let before_lunar_new_year = span_days < 0;
    let before_spring = next_term_index < 3;
    match (before_lunar_new_year, before_spring) {
        (true, false) => -1,
        (false, true) => 1,
        _ => 0,
    }
}

/// The four pillars of one request plus the day's two-hour pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    /// Pillars of the thirteen two-hour blocks starting at 子 of this day
    /// (the last one is the next day's 子 block).
    pub hours: [Pillar; 13],
    /// Two-hour block of the request (0..=12).
    pub block: u8,
    /// Spring adjustment applied to the year pillar.
    pub spring_adjustment: i32,
}

/// Year pillar of lunar year `lunar_year` after `adjustment`.
pub fn year_pillar(lunar_year: i32, adjustment: i32) -> Pillar {
    Pillar::from_index((lunar_year - 4 - adjustment) as i64)
}

/// Month pillar from the civil year and the number of elapsed solar terms.
///
/// In December a wrapped count of zero means all 24 terms have passed.
pub fn month_pillar(civil_year: i32, civil_month: u32, next_term_index: u8) -> Pillar {
    let mut elapsed = next_term_index as i64;
    if elapsed == 0 && civil_month == 12 {
        elapsed = 24;
    }
    let steps = (elapsed + 1) / 2;
    Pillar::from_index((civil_year - MONTH_PILLAR_EPOCH_YEAR) as i64 * 12 + steps)
}

/// Day pillar of `date`, advanced by one in the late-night block.
pub fn day_pillar(date: &CivilDate, block: u8) -> Pillar {
    let days = DAY_PILLAR_EPOCH.days_until(date);
    let late = if block == LATE_NIGHT_BLOCK { 1 } else { 0 };
    Pillar::from_index(days + DAY_PILLAR_EPOCH_INDEX + late)
}

/// The thirteen two-hour pillars of a day (五鼠遁).
pub fn hour_pillars(day: Pillar) -> [Pillar; 13] {
    let begin = (day.index() as i64 * 12) % 60;
    std::array::from_fn(|i| Pillar::from_index(begin + i as i64))
}

/// Compute all pillars of `time`.
///
/// `lunar_year` and `span_days` come from the lunar resolver and
/// `next_term_index` from the solar term resolver.
pub fn compute_pillars(
    time: &CivilDateTime,
    lunar_year: i32,
    span_days: i64,
    next_term_index: u8,
    mode: YearPillarMode,
) -> Pillars {
    let block = two_hour_block(time.hour);
    let adjustment = spring_adjustment(mode, span_days, next_term_index);
    let day = day_pillar(&time.date(), block);
    let hours = hour_pillars(day);
    Pillars {
        year: year_pillar(lunar_year, adjustment),
        month: month_pillar(time.year, time.month, next_term_index),
        day,
        hour: hours[(block % 12) as usize],
        hours,
        block,
        spring_adjustment: adjustment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks() {
        assert_eq!(two_hour_block(0), 0);
        assert_eq!(two_hour_block(1), 1);
        assert_eq!(two_hour_block(2), 1);
        assert_eq!(two_hour_block(22), 11);
        assert_eq!(two_hour_block(23), 12);
    }

    #[test]
    fn reference_day() {
        assert_eq!(day_pillar(&DAY_PILLAR_EPOCH, 6).name(), "丙寅");
        assert_eq!(day_pillar(&DAY_PILLAR_EPOCH, LATE_NIGHT_BLOCK).name(), "丁卯");
    }

    #[test]
    fn spring_festival_2024_is_jiachen_day() {
        let d = CivilDate::new(2024, 2, 10).unwrap();
        assert_eq!(day_pillar(&d, 6).name(), "甲辰");
    }

    #[test]
    fn hour_window_starts_with_zi() {
        // 甲/己 days begin with 甲子, 乙/庚 days with 丙子.
        let jia = Pillar::from_name("甲辰").unwrap();
        assert_eq!(hour_pillars(jia)[0].name(), "甲子");
        let yi = Pillar::from_name("乙丑").unwrap();
        assert_eq!(hour_pillars(yi)[0].name(), "丙子");
        assert_eq!(hour_pillars(yi)[12].name(), "戊子");
    }

    #[test]
    fn december_after_solstice_keeps_zi_month() {
        // 2024-12-31: 24 terms elapsed, wraps to 0.
        assert_eq!(month_pillar(2024, 12, 0).name(), "丙子");
        assert_eq!(month_pillar(2024, 12, 23).name(), "丙子");
        assert_eq!(month_pillar(2024, 1, 0).name(), "甲子");
        assert_eq!(month_pillar(2024, 1, 1).name(), "乙丑");
    }

    #[test]
    fn spring_adjustment_cases() {
        use YearPillarMode::*;
        assert_eq!(spring_adjustment(FixedYear, -5, 3), 0);
        assert_eq!(spring_adjustment(SwitchAtSpring, -5, 3), -1);
        assert_eq!(spring_adjustment(SwitchAtSpring, -5, 2), 0);
        assert_eq!(spring_adjustment(SwitchAtSpring, 5, 2), 1);
        assert_eq!(spring_adjustment(SwitchAtSpring, 5, 3), 0);
    }

    #[test]
    fn year_pillars() {
        assert_eq!(year_pillar(2022, 0).name(), "壬寅");
        assert_eq!(year_pillar(2022, 1).name(), "辛丑");
        assert_eq!(year_pillar(2025, 0).name(), "乙巳");
    }
}
