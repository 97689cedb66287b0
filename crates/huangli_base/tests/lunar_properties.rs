//! Property tests for the lunar resolver over the supported civil range.

use huangli_base::{LunarYearLayout, resolve_lunar_date, resolve_solar_terms};
use huangli_time::CivilDate;
use proptest::prelude::*;

// 1901-01-01 .. 2100-12-31 as day numbers since 1970-01-01.
const FIRST_DAY: i64 = -25_202;
const LAST_DAY: i64 = 47_846;

proptest! {
    #[test]
    fn lunar_day_within_month_length(n in FIRST_DAY..=LAST_DAY) {
        let date = CivilDate::from_day_number(n);
        let lunar = resolve_lunar_date(&date).unwrap().date;
        let layout = LunarYearLayout::for_year(lunar.year).unwrap();
        let expected = if lunar.is_leap_month {
            prop_assert_eq!(layout.leap_month(), lunar.month);
            layout.leap_days()
        } else {
            layout.month_days(lunar.month)
        };
        prop_assert!((1..=12).contains(&lunar.month));
        prop_assert!(lunar.day >= 1 && lunar.day <= expected);
        prop_assert_eq!(lunar.month_days, expected);
    }

    #[test]
    fn consecutive_days_step_the_lunar_day(n in FIRST_DAY..LAST_DAY) {
        let today = CivilDate::from_day_number(n);
        let a = resolve_lunar_date(&today).unwrap().date;
        let b = resolve_lunar_date(&today.add_days(1)).unwrap().date;
        if a.day < a.month_days {
            prop_assert_eq!((b.year, b.month, b.day), (a.year, a.month, a.day + 1));
            prop_assert_eq!(b.is_leap_month, a.is_leap_month);
        } else {
            prop_assert_eq!(b.day, 1);
        }
    }

    #[test]
    fn next_term_is_after_today(n in FIRST_DAY..=LAST_DAY) {
        let date = CivilDate::from_day_number(n);
        let info = resolve_solar_terms(&date).unwrap();
        prop_assert!(info.next_date.day_number() > date.day_number());
        prop_assert!(date.days_until(&info.next_date) <= 16);
    }
}
