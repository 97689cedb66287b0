//! Julian Day Number ↔ Gregorian calendar conversions.
//!
//! Integer algorithm of Fliegel & Van Flandern (1968), valid for the
//! proleptic Gregorian calendar on all positive JDNs.

/// JDN of 1970-01-01, the epoch of [`day_number`](crate::CivilDate::day_number).
pub const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// Minutes in one civil day.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Convert a Gregorian calendar date to its Julian Day Number.
///
/// The JDN labels the day that begins at the preceding noon, so every civil
/// date maps to exactly one integer.
pub fn calendar_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let y = year as i64;
    let m = month as i64;
    let d = day as i64;
    let a = (14 - m) / 12;
    let y = y + 4800 - a;
    let m = m + 12 * a - 3;
    d + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32_045
}

/// Convert a Julian Day Number back to `(year, month, day)`.
pub fn jdn_to_calendar(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32_044;
    let b = (4 * a + 3) / 146_097;
    let c = a - 146_097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;
    (year as i32, month as u32, day as u32)
}

/// Whether `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month (0 for an invalid month).
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
