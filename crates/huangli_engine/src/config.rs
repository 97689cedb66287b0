//! Request-independent almanac options.

use huangli_base::{OfficerMode, YearPillarMode};

/// Options of an almanac computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlmanacConfig {
    /// Where the year pillar changes (lunar new year or 立春).
    pub year_pillar: YearPillarMode,
    /// How the day-officer month index is chosen.
    pub officer_mode: OfficerMode,
}

impl AlmanacConfig {
    /// Month-pillar officers, year pillar changing at the lunar new year.
    pub const fn new() -> Self {
        Self {
            year_pillar: YearPillarMode::FixedYear,
            officer_mode: OfficerMode::MonthPillar,
        }
    }

    /// Same options with the given year-pillar mode.
    pub const fn with_year_pillar(self, year_pillar: YearPillarMode) -> Self {
        Self {
            year_pillar,
            ..self
        }
    }

    /// Same options with the given officer mode.
    pub const fn with_officer_mode(self, officer_mode: OfficerMode) -> Self {
        Self {
            officer_mode,
            ..self
        }
    }
}

impl Default for AlmanacConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_month_pillar_and_lunar_new_year() {
        let config = AlmanacConfig::default();
        assert_eq!(config.year_pillar, YearPillarMode::FixedYear);
        assert_eq!(config.officer_mode, OfficerMode::MonthPillar);
    }

    #[test]
    fn builders_only_touch_their_field() {
        let config = AlmanacConfig::default()
            .with_year_pillar(YearPillarMode::SwitchAtSpring)
            .with_officer_mode(OfficerMode::LunarMonth);
        assert_eq!(config.year_pillar, YearPillarMode::SwitchAtSpring);
        assert_eq!(config.officer_mode, OfficerMode::LunarMonth);
        let back = config.with_officer_mode(OfficerMode::MonthPillar);
        assert_eq!(back.year_pillar, YearPillarMode::SwitchAtSpring);
    }
}
