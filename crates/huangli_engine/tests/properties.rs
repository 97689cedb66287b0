//! Property tests of the full pipeline over the supported civil range.

use huangli_engine::{
    AlmanacConfig, Disposition, NOTHING_SUITABLE, OfficerMode, YearPillarMode, compute, sort_rank,
};
use huangli_time::{CivilDate, CivilDateTime};
use proptest::prelude::*;

// 1901-01-01 .. 2100-12-31 as day numbers since 1970-01-01.
const FIRST_DAY: i64 = -25_202;
const LAST_DAY: i64 = 47_846;

fn at(n: i64, hour: u32, minute: u32) -> CivilDateTime {
    let d = CivilDate::from_day_number(n);
    CivilDateTime::new(d.year, d.month, d.day, hour, minute).unwrap()
}

fn config(spring: bool, lunar_officer: bool) -> AlmanacConfig {
    let year_pillar = if spring {
        YearPillarMode::SwitchAtSpring
    } else {
        YearPillarMode::FixedYear
    };
    let officer_mode = if lunar_officer {
        OfficerMode::LunarMonth
    } else {
        OfficerMode::MonthPillar
    };
    AlmanacConfig {
        year_pillar,
        officer_mode,
    }
}

proptest! {
    #[test]
    fn compute_is_deterministic(
        n in FIRST_DAY..=LAST_DAY,
        hour in 0u32..24,
        minute in 0u32..60,
        spring: bool,
        lunar_officer: bool,
    ) {
        let time = at(n, hour, minute);
        let cfg = config(spring, lunar_officer);
        prop_assert_eq!(compute(&time, &cfg).unwrap(), compute(&time, &cfg).unwrap());
    }

    #[test]
    fn activity_lists_are_final(n in FIRST_DAY..=LAST_DAY, hour in 0u32..24) {
        let day = compute(&at(n, hour, 0), &AlmanacConfig::default()).unwrap();
        let out = &day.outcome;

        prop_assert!(!out.good_things.is_empty());
        prop_assert!(!out.bad_things.is_empty());
        for list in [&out.good_things, &out.bad_things] {
            let ranks: Vec<usize> = list.iter().map(sort_rank).collect();
            prop_assert!(ranks.windows(2).all(|w| w[0] <= w[1]), "unsorted {:?}", list);
        }
        if !out.good_things.is_sentinel() && !out.bad_things.is_sentinel() {
            prop_assert!(out.good_things.intersection(&out.bad_things).is_empty());
        }
        prop_assert!((-1..=5).contains(&out.level));
        if out.disposition == Disposition::AvoidAll {
            prop_assert_eq!(out.good_things.as_slice(), [NOTHING_SUITABLE]);
            prop_assert_eq!(out.bad_things.as_slice(), [NOTHING_SUITABLE]);
        }
    }

    #[test]
    fn late_night_belongs_to_the_next_day(n in FIRST_DAY..LAST_DAY, minute in 0u32..60) {
        let tonight = compute(&at(n, 23, minute), &AlmanacConfig::default()).unwrap();
        let tomorrow = compute(&at(n + 1, 12, 0), &AlmanacConfig::default()).unwrap();
        prop_assert_eq!(tonight.pillars.day, tomorrow.pillars.day);
        prop_assert_eq!(tonight.pillars.hour.branch().name(), "子");
    }
}
