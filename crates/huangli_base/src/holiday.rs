//! Civil and lunar festivals of a date.

use huangli_time::CivilDate;

use crate::lunar::LunarDate;
use crate::solar_term::SolarTerm;
use crate::tables::holiday_data::{
    LEGAL_LUNAR_HOLIDAYS, LEGAL_SOLAR_HOLIDAYS, LEGAL_TERM_HOLIDAYS, NEW_YEARS_EVE,
    NTH_SUNDAY_HOLIDAYS, OTHER_LUNAR_HOLIDAYS, OTHER_SOLAR_HOLIDAYS,
};

/// Festivals of one date, each group joined with `,` when rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Holidays {
    /// Public holidays (term, civil date, lunar date, New Year's Eve).
    pub legal: Vec<&'static str>,
    /// Other civil observances.
    pub other: Vec<&'static str>,
    /// Other lunar festivals.
    pub lunar: Vec<&'static str>,
}

impl Holidays {
    /// Public holidays joined with `,`.
    pub fn legal_text(&self) -> String {
        self.legal.join(",")
    }

    /// Other civil observances joined with `,`.
    pub fn other_text(&self) -> String {
        self.other.join(",")
    }

    /// Other lunar festivals joined with `,`.
    pub fn lunar_text(&self) -> String {
        self.lunar.join(",")
    }

    /// Whether no festival falls on the date.
    pub fn is_empty(&self) -> bool {
        self.legal.is_empty() && self.other.is_empty() && self.lunar.is_empty()
    }
}

fn lookup<K: PartialEq>(table: &[(K, &'static str)], key: &K) -> Option<&'static str> {
    table.iter().find(|(k, _)| k == key).map(|(_, name)| *name)
}

/// Day of month of the `n`-th Sunday of `year`-`month`.
pub fn nth_sunday(year: i32, month: u32, n: u32) -> u32 {
    let first = CivilDate {
        year,
        month,
        day: 1,
    };
    // weekday index is Monday-first, so Sunday is 6
    let first_weekday = first.weekday().index() as u32;
    let first_sunday = 1 + (6 + 7 - first_weekday) % 7;
    first_sunday + (n - 1) * 7
}

/// Festivals of `date` with lunar date `lunar` and today's term `term`.
pub fn holidays(date: &CivilDate, lunar: &LunarDate, term: Option<SolarTerm>) -> Holidays {
    let mut out = Holidays::default();
    let md = date.month_day();
    let lunar_md = (lunar.month, lunar.day);

    if let Some(name) = term.and_then(|t| lookup(&LEGAL_TERM_HOLIDAYS, &t)) {
        out.legal.push(name);
    }
    if let Some(name) = lookup(&LEGAL_SOLAR_HOLIDAYS, &md) {
        out.legal.push(name);
    }
    if !lunar.is_leap_month {
        if let Some(name) = lookup(&LEGAL_LUNAR_HOLIDAYS, &lunar_md) {
            out.legal.push(name);
        }
        if lunar.month == 12 && lunar.day == lunar.month_days {
            out.legal.push(NEW_YEARS_EVE);
        }
    }

    for &(month, n, name) in &NTH_SUNDAY_HOLIDAYS {
        if date.month == month && date.day == nth_sunday(date.year, month, n) {
            out.other.push(name);
        }
    }
    if let Some(name) = lookup(&OTHER_SOLAR_HOLIDAYS, &md) {
        out.other.push(name);
    }

    if !lunar.is_leap_month {
        if let Some(name) = lookup(&OTHER_LUNAR_HOLIDAYS, &lunar_md) {
            out.lunar.push(name);
        }
    }
    out
}
