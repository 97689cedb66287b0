//! Day-counted cycles: the 28 lunar lodges and the nine flying stars.

use huangli_time::CivilDate;

use crate::tables::almanac_data::{FLYING_STAR_SEED, LODGES};

/// Reference day of both cycles (角木蛟).
pub const LODGE_EPOCH: CivilDate = CivilDate {
    year: 2019,
    month: 1,
    day: 17,
};

/// Lodge of `date` as a three-character name, e.g. `角木蛟`.
pub fn lodge(date: &CivilDate) -> &'static str {
    LODGES[LODGE_EPOCH.days_until(date).rem_euclid(28) as usize]
}

/// Index of the lodge of `date` (角 = 0).
pub fn lodge_index(date: &CivilDate) -> u8 {
    LODGE_EPOCH.days_until(date).rem_euclid(28) as u8
}

/// Nine flying stars of `date` as a nine-digit string.
///
/// Each palace's star counts down by one per day from the reference layout.
pub fn nine_flying_stars(date: &CivilDate) -> String {
    let d = LODGE_EPOCH.days_until(date);
    FLYING_STAR_SEED
        .iter()
        .map(|&s| char::from(b'1' + (s - 1 - d).rem_euclid(9) as u8))
        .collect()
}
