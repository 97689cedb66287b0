//! Per-request state the rule tables are matched against.

use huangli_base::{
    DayOfficer, DerivedAttributes, LunarDate, Pillar, Pillars, SEASON_STARTS, SolarTermInfo,
    SolarTermTable,
};
use huangli_time::{CivilDate, CivilDateTime, MINUTES_PER_DAY, minutes_between};

/// Snapshot of one request, built once and shared by every rule.
///
/// Created at the start of [`compute`](crate::compute), threaded through
/// rule matching and the activity cascade, dropped at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleContext {
    /// Day pillar (after the late-night rollover).
    pub day: Pillar,
    /// Year pillar (spring-adjusted when configured).
    pub year: Pillar,
    /// Month pillar.
    pub month: Pillar,
    /// Lodge name of the civil day.
    pub lodge: &'static str,
    /// Day officer.
    pub officer: DayOfficer,
    /// Month index of the officer cycle.
    pub month_index: u8,
    /// Season index of the month pillar, 0 = spring.
    pub season: u8,
    /// Lunar month number (leap months keep their number).
    pub lunar_month: u32,
    /// Lunar day.
    pub lunar_day: u32,
    /// Index of the next solar term.
    pub next_term_index: u8,
    /// Whether the lunar day carries a moon phase.
    pub has_moon_phase: bool,
    /// Whole days from the request instant to the next season-start term.
    pub countdown_days: i64,
    /// Civil `(month, day)` of the following day.
    pub tomorrow: (u32, u32),
    /// Term table of the request's civil year.
    pub terms: SolarTermTable,
}

impl RuleContext {
    /// Assemble the context from the resolved calendar state.
    pub fn new(
        time: &CivilDateTime,
        lunar: &LunarDate,
        pillars: &Pillars,
        terms: &SolarTermInfo,
        attrs: &DerivedAttributes,
    ) -> Self {
        Self {
            day: pillars.day,
            year: pillars.year,
            month: pillars.month,
            lodge: attrs.lodge,
            officer: attrs.officer.officer,
            month_index: attrs.month_index,
            season: attrs.season.index,
            lunar_month: lunar.month,
            lunar_day: lunar.day,
            next_term_index: terms.next_index,
            has_moon_phase: attrs.moon_phase.is_some(),
            countdown_days: earth_king_countdown(time, terms),
            tomorrow: time.date().add_days(1).month_day(),
            terms: terms.table,
        }
    }

    /// Whether the day pillar name contains `c`.
    pub fn day_has(&self, c: char) -> bool {
        self.day.name().contains(c)
    }
}

/// Whole days from `time` to the season-start term (立春, 立夏, 立秋, 立冬)
/// that the "earth king rules" (土王用事) period counts down to.
///
/// The term is picked from this year's table by how many season starts fall
/// strictly before tomorrow; its month and day are placed in the year of the
/// next solar term. The result is floored, so an afternoon request 18 days
/// out counts as 17.
pub fn earth_king_countdown(time: &CivilDateTime, terms: &SolarTermInfo) -> i64 {
    let tomorrow = time.date().add_days(1).month_day();
    let passed = SEASON_STARTS
        .iter()
        .filter(|&&t| terms.table.month_day(t) < tomorrow)
        .count();
    let (month, day) = terms.table.month_day(SEASON_STARTS[passed % 4]);
    let target = CivilDateTime::at_midnight(CivilDate {
        year: terms.next_year(),
        month,
        day,
    });
    minutes_between(time, &target).div_euclid(MINUTES_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use huangli_base::{SolarTerm, resolve_solar_terms};

    fn countdown(y: i32, m: u32, d: u32, h: u32, min: u32) -> i64 {
        let time = CivilDateTime::new(y, m, d, h, min).unwrap();
        let terms = resolve_solar_terms(&time.date()).unwrap();
        earth_king_countdown(&time, &terms)
    }

    #[test]
    fn countdown_to_start_of_summer() {
        let table = SolarTermTable::for_year(2024).unwrap();
        let li_xia = table.date_of(SolarTerm::LiXia);
        let before = li_xia.add_days(-10);
        assert_eq!(countdown(before.year, before.month, before.day, 0, 0), 10);
        // Any time after midnight floors one day lower.
        assert_eq!(countdown(before.year, before.month, before.day, 9, 30), 9);
    }

    #[test]
    fn countdown_on_the_eve_of_the_term() {
        let table = SolarTermTable::for_year(2024).unwrap();
        let eve = table.date_of(SolarTerm::LiQiu).add_days(-1);
        assert_eq!(countdown(eve.year, eve.month, eve.day, 0, 0), 1);
        assert_eq!(countdown(eve.year, eve.month, eve.day, 12, 0), 0);
    }
}
