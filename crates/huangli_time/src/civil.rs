//! Civil (Gregorian) date and minute-precision timestamp.
//!
//! `CivilDateTime` is the request type of the almanac: a wall-clock reading in
//! the calendar's own time zone, with no offset attached.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{
    MINUTES_PER_DAY, UNIX_EPOCH_JDN, calendar_to_jdn, days_in_month, jdn_to_calendar,
};

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// All weekdays in order (index 0 = Monday).
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

const WEEKDAY_NAMES: [&str; 7] = [
    "星期一",
    "星期二",
    "星期三",
    "星期四",
    "星期五",
    "星期六",
    "星期日",
];

impl Weekday {
    /// Chinese name (星期一 .. 星期日).
    pub fn name(self) -> &'static str {
        WEEKDAY_NAMES[self.index() as usize]
    }

    /// 0-based index (Monday=0 .. Sunday=6).
    pub const fn index(self) -> u8 {
        match self {
            Self::Monday => 0,
            Self::Tuesday => 1,
            Self::Wednesday => 2,
            Self::Thursday => 3,
            Self::Friday => 4,
            Self::Saturday => 5,
            Self::Sunday => 6,
        }
    }
}

/// A Gregorian calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    /// Validated constructor.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Julian Day Number of this date.
    pub fn jdn(&self) -> i64 {
        calendar_to_jdn(self.year, self.month, self.day)
    }

    /// Days since 1970-01-01 (negative before).
    pub fn day_number(&self) -> i64 {
        self.jdn() - UNIX_EPOCH_JDN
    }

    /// Inverse of [`day_number`](Self::day_number).
    pub fn from_day_number(days: i64) -> Self {
        let (year, month, day) = jdn_to_calendar(days + UNIX_EPOCH_JDN);
        Self { year, month, day }
    }

    /// Date `days` later (earlier when negative).
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_day_number(self.day_number() + days)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &CivilDate) -> i64 {
        other.day_number() - self.day_number()
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        // JDN 0 fell on a Monday.
        ALL_WEEKDAYS[self.jdn().rem_euclid(7) as usize]
    }

    /// `(month, day)` pair, the key solar-term and holiday tables use.
    pub fn month_day(&self) -> (u32, u32) {
        (self.month, self.day)
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Civil wall-clock time with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl CivilDateTime {
    /// Validated constructor.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, TimeError> {
        CivilDate::new(year, month, day)?;
        if hour > 23 || minute > 59 {
            return Err(TimeError::InvalidTime { hour, minute });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
        })
    }

    /// Midnight at the start of `date`.
    pub fn at_midnight(date: CivilDate) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
            hour: 0,
            minute: 0,
        }
    }

    /// The calendar day part.
    pub fn date(&self) -> CivilDate {
        CivilDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    /// Minutes since 1970-01-01T00:00.
    pub fn minute_number(&self) -> i64 {
        self.date().day_number() * MINUTES_PER_DAY + (self.hour * 60 + self.minute) as i64
    }
}

/// Signed minutes from `from` to `to`.
pub fn minutes_between(from: &CivilDateTime, to: &CivilDateTime) -> i64 {
    to.minute_number() - from.minute_number()
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s}")));
        }
        let year: i32 = parts[0].parse()?;
        let month: u32 = parts[1].parse()?;
        let day: u32 = parts[2].parse()?;
        Self::new(year, month, day)
    }
}

impl FromStr for CivilDateTime {
    type Err = TimeError;

    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DDThh:mm` and `YYYY-MM-DDThh:mm:ss`
    /// (seconds are ignored; a space may replace the `T`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (date_part, time_part) = match s.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (s, None),
        };
        let date: CivilDate = date_part.parse()?;
        let Some(time_part) = time_part else {
            return Ok(Self::at_midnight(date));
        };
        let time_parts: Vec<&str> = time_part.split(':').collect();
        if !(2..=3).contains(&time_parts.len()) {
            return Err(TimeError::Parse(format!("expected hh:mm, got {time_part}")));
        }
        let hour: u32 = time_parts[0].parse()?;
        let minute: u32 = time_parts[1].parse()?;
        Self::new(date.year, date.month, date.day, hour, minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_february_30() {
        assert_eq!(
            CivilDate::new(2024, 2, 30),
            Err(TimeError::InvalidDate {
                year: 2024,
                month: 2,
                day: 30
            })
        );
    }

    #[test]
    fn rejects_hour_24() {
        assert!(matches!(
            CivilDateTime::new(2024, 1, 1, 24, 0),
            Err(TimeError::InvalidTime { .. })
        ));
    }

    #[test]
    fn weekday_known_dates() {
        // 2019-01-17 was a Thursday, 2024-02-10 a Saturday.
        assert_eq!(CivilDate::new(2019, 1, 17).unwrap().weekday(), Weekday::Thursday);
        assert_eq!(CivilDate::new(2024, 2, 10).unwrap().weekday(), Weekday::Saturday);
        assert_eq!(Weekday::Sunday.name(), "星期日");
    }

    #[test]
    fn add_days_crosses_year() {
        let d = CivilDate::new(2024, 12, 31).unwrap();
        assert_eq!(d.add_days(1), CivilDate::new(2025, 1, 1).unwrap());
        assert_eq!(d.add_days(-366), CivilDate::new(2023, 12, 31).unwrap());
    }

    #[test]
    fn days_until_is_signed() {
        let a = CivilDate::new(2019, 1, 29).unwrap();
        let b = CivilDate::new(2019, 1, 17).unwrap();
        assert_eq!(a.days_until(&b), -12);
        assert_eq!(b.days_until(&a), 12);
    }

    #[test]
    fn parse_variants() {
        let t: CivilDateTime = "2026-01-29T01:30".parse().unwrap();
        assert_eq!(t, CivilDateTime::new(2026, 1, 29, 1, 30).unwrap());
        let t: CivilDateTime = "2026-01-29 01:30:59".parse().unwrap();
        assert_eq!(t.minute, 30);
        let t: CivilDateTime = "2026-01-29".parse().unwrap();
        assert_eq!((t.hour, t.minute), (0, 0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("2026/01/29".parse::<CivilDateTime>().is_err());
        assert!("2026-01-29T1".parse::<CivilDateTime>().is_err());
        assert!("2026-xx-29".parse::<CivilDateTime>().is_err());
    }

    #[test]
    fn display_format() {
        let t = CivilDateTime::new(2024, 3, 5, 7, 9).unwrap();
        assert_eq!(t.to_string(), "2024-03-05T07:09");
        assert_eq!(t.date().to_string(), "2024-03-05");
    }

    #[test]
    fn minutes_between_days() {
        let a = CivilDateTime::new(2024, 2, 3, 22, 0).unwrap();
        let b = CivilDateTime::new(2024, 2, 4, 0, 0).unwrap();
        assert_eq!(minutes_between(&a, &b), 120);
        assert_eq!(minutes_between(&b, &a), -120);
    }
}
