//! Fixed-width bit-field decoding of packed per-year tables.
//!
//! A packed solar-term word holds 24 fields of `width` bits. Reading starts at
//! the most significant field and each value is pushed to the front, so field
//! `i` of the output is `(packed >> (width * i)) & mask`: the least
//! significant field belongs to the first term (小寒).

use crate::error::BaseError;
use crate::tables::calendar_data::{SOLAR_TERM_DATA, SOLAR_TERM_FIRST_YEAR, TERM_OFFSET_VECTOR};

/// Number of solar terms per civil year.
pub const TERMS_PER_YEAR: usize = 24;

/// Default field width of the packed solar-term table.
pub const TERM_FIELD_BITS: u32 = 2;

/// Split `packed` into `count` unsigned fields of `width` bits each.
///
/// Output index `i` holds the field at bit offset `width * i`.
pub fn unpack_fields(packed: u64, count: usize, width: u32) -> Vec<u8> {
    let mask = if width >= 8 { 0xff } else { (1u64 << width) - 1 };
    (0..count)
        .map(|i| {
            let shift = width as u64 * i as u64;
            if shift >= 64 { 0 } else { ((packed >> shift) & mask) as u8 }
        })
        .collect()
}

/// Decode one packed solar-term word into the 24 days-of-month.
pub fn decode_solar_terms(packed: u64) -> [u8; TERMS_PER_YEAR] {
    let fields = unpack_fields(packed, TERMS_PER_YEAR, TERM_FIELD_BITS);
    let mut days = [0u8; TERMS_PER_YEAR];
    for (i, day) in days.iter_mut().enumerate() {
        *day = fields[i] + TERM_OFFSET_VECTOR[i];
    }
    days
}

/// Decode a packed solar-term word given as a decimal string.
pub fn decode_solar_terms_str(packed: &str) -> Result<[u8; TERMS_PER_YEAR], BaseError> {
    let value: u64 = packed
        .trim()
        .parse()
        .map_err(|_| BaseError::MalformedTable("packed solar-term word is not a decimal integer"))?;
    Ok(decode_solar_terms(value))
}

/// Last civil year covered by the packed solar-term table.
pub const SOLAR_TERM_LAST_YEAR: i32 = SOLAR_TERM_FIRST_YEAR + SOLAR_TERM_DATA.len() as i32 - 1;

/// Days-of-month of the 24 solar terms of civil `year`, 小寒 first.
///
/// Term `i` falls in month `i / 2 + 1`.
pub fn year_solar_term_days(year: i32) -> Result<[u8; TERMS_PER_YEAR], BaseError> {
    if !(SOLAR_TERM_FIRST_YEAR..=SOLAR_TERM_LAST_YEAR).contains(&year) {
        return Err(BaseError::YearOutOfRange {
            year,
            min: SOLAR_TERM_FIRST_YEAR,
            max: SOLAR_TERM_LAST_YEAR,
        });
    }
    Ok(decode_solar_terms(
        SOLAR_TERM_DATA[(year - SOLAR_TERM_FIRST_YEAR) as usize],
    ))
}
