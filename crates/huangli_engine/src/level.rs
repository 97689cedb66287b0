//! Day-quality level (日等级) and the activity disposition derived from it.

/// Sub-rule of a level trigger: `(month branches, companion names, severity)`.
pub type LevelRule = (&'static str, &'static [&'static str], i8);

/// Level triggers. A trigger's sub-rule applies when the month pillar's
/// branch is listed and any companion name is also present on the day.
pub const LEVEL_TABLE: [(&str, &[LevelRule]); 11] = [
    (
        "平日",
        &[
            ("亥", &["相日", "时德", "六合"], 0),
            ("巳", &["相日", "六合", "月刑"], 1),
            ("申", &["相日", "月害"], 2),
            ("寅", &["相日", "月害", "月刑"], 3),
            ("卯午酉", &["天吏"], 3),
            ("辰戌丑未", &["月煞"], 4),
            ("子", &["天吏", "月刑"], 4),
        ],
    ),
    (
        "收日",
        &[
            ("寅申", &["长生", "六合", "劫煞"], 0),
            ("巳亥", &["长生", "劫煞"], 2),
            ("辰未", &["月害"], 2),
            ("子午酉", &["大时"], 3),
            ("丑戌", &["月刑"], 3),
            ("卯", &["大时"], 4),
        ],
    ),
    (
        "闭日",
        &[
            ("子午卯酉", &["王日"], 3),
            ("辰戌丑未", &["官日", "天吏"], 3),
            ("寅申巳亥", &["月煞"], 4),
        ],
    ),
    (
        "劫煞",
        &[
            ("寅申", &["长生", "六合"], 0),
            ("辰戌丑未", &["除日", "相日"], 1),
            ("巳亥", &["长生", "月害"], 2),
            ("子午卯酉", &["执日"], 3),
        ],
    ),
    (
        "灾煞",
        &[
            ("寅申巳亥", &["开日"], 1),
            ("辰戌丑未", &["满日", "民日"], 2),
            ("子午", &["月破"], 4),
            ("卯酉", &["月破", "月厌"], 5),
        ],
    ),
    ("月煞", &[("卯酉", &["六合", "危日"], 1), ("子午", &["月害", "危日"], 3)]),
    (
        "月刑",
        &[
            ("巳", &["平日", "六合", "相日"], 1),
            ("寅", &["相日", "月害", "平日"], 3),
            ("辰酉亥", &["建日"], 3),
            ("子", &["平日", "天吏"], 4),
            ("卯", &["收日", "大时", "天破"], 4),
            ("未申", &["月破"], 4),
            ("午", &["月建", "月厌", "德大会"], 4),
        ],
    ),
    (
        "月害",
        &[
            ("卯酉", &["守日", "除日"], 2),
            ("丑未", &["执日", "大时"], 2),
            ("巳亥", &["长生", "劫煞"], 2),
            ("申", &["相日", "平日"], 2),
            ("子午", &["月煞"], 3),
            ("辰戌", &["官日", "闭日", "天吏"], 3),
            ("寅", &["相日", "平日", "月刑"], 3),
        ],
    ),
    (
        "月厌",
        &[
            ("寅申", &["成日"], 2),
            ("丑未", &["开日"], 2),
            ("辰戌", &["定日"], 3),
            ("巳亥", &["满日"], 3),
            ("子", &["月建", "德大会"], 4),
            ("午", &["月建", "月刑", "德大会"], 4),
            ("卯酉", &["月破", "灾煞"], 5),
        ],
    ),
    (
        "大时",
        &[
            ("寅申巳亥", &["除日", "官日"], 0),
            ("辰戌", &["执日", "六合"], 0),
            ("丑未", &["执日", "月害"], 2),
            ("子午酉", &["收日"], 3),
            ("卯", &["收日", "月刑"], 4),
        ],
    ),
    (
        "天吏",
        &[
            ("寅申巳亥", &["危日"], 2),
            ("辰戌丑未", &["闭日"], 3),
            ("卯午酉", &["平日"], 3),
            ("子", &["平日", "月刑"], 4),
        ],
    ),
];

/// The six virtue deities (德).
pub const VIRTUE_NAMES: [&str; 6] = ["岁德", "岁德合", "月德", "月德合", "天德", "天德合"];

const LEVEL_NAMES: [&str; 6] = [
    "上：吉足胜凶，从宜不从忌。",
    "上次：吉足抵凶，遇德从宜不从忌，不遇从宜亦从忌。",
    "中：吉不抵凶，遇德从宜不从忌，不遇从忌不从宜。",
    "中次：凶胜于吉，遇德从宜亦从忌，不遇从忌不从宜。",
    "下:凶又逢凶，遇德从忌不从宜，不遇诸事皆忌。",
    "下下：凶叠大凶，遇德亦诸事皆忌。（卯酉月，灾煞遇月破、月厌，月厌遇灾煞、月破）",
];

/// Day-quality level, `-1` when no trigger applies.
///
/// `names` holds the matched deity and demon names plus the officer name
/// with `日` appended; `month_branch` is the branch of the month pillar.
pub fn day_level(names: &[&str], month_branch: &str) -> i8 {
    let mut level = -1;
    for (trigger, rules) in &LEVEL_TABLE {
        if !names.contains(trigger) {
            continue;
        }
        for &(branches, companions, severity) in rules.iter() {
            if branches.contains(month_branch)
                && severity > level
                && companions.iter().any(|c| names.contains(c))
            {
                level = severity;
            }
        }
    }
    level
}

/// Description of `level`, `无` for `-1`.
pub fn level_name(level: i8) -> &'static str {
    usize::try_from(level)
        .ok()
        .and_then(|i| LEVEL_NAMES.get(i).copied())
        .unwrap_or("无")
}

/// Whether any virtue deity is among `good_names`.
pub fn has_virtue(good_names: &[&str]) -> bool {
    VIRTUE_NAMES.iter().any(|v| good_names.contains(v))
}

/// How conflicting favorable and unfavorable activities are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// Shared activities stay favorable.
    FavorOnly = 0,
    /// Shared activities are dropped from both lists.
    FavorWithException = 1,
    /// Shared activities stay unfavorable.
    AvoidWithException = 2,
    /// Everything is unsuitable.
    AvoidAll = 3,
}

const DISPOSITION_NAMES: [&str; 4] = ["从宜不从忌", "从宜亦从忌", "从忌不从宜", "诸事皆忌"];

impl Disposition {
    /// Disposition of a day with `level`, softened by virtue.
    pub fn from_level(level: i8, has_virtue: bool) -> Self {
        match (level, has_virtue) {
            (5, _) => Self::AvoidAll,
            (4, true) => Self::AvoidWithException,
            (4, false) => Self::AvoidAll,
            (3, true) => Self::FavorWithException,
            (3, false) => Self::AvoidWithException,
            (2, true) => Self::FavorOnly,
            (2, false) => Self::AvoidWithException,
            (1, true) => Self::FavorOnly,
            (1, false) => Self::FavorWithException,
            (0, _) => Self::FavorOnly,
            _ => Self::FavorWithException,
        }
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Chinese name, e.g. `从宜不从忌`.
    pub fn name(self) -> &'static str {
        DISPOSITION_NAMES[self.code() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_trigger_means_no_level() {
        assert_eq!(day_level(&["天德", "月煞"], "子"), -1);
        assert_eq!(level_name(-1), "无");
    }

    #[test]
    fn maximum_severity_wins() {
        // 月厌 in a 卯 month with 月破 is the worst case; 灾煞 agrees.
        let names = ["月厌", "灾煞", "月破", "执日"];
        assert_eq!(day_level(&names, "卯"), 5);
        // 灾煞 in a 子 month with 月破 only reaches 4.
        assert_eq!(day_level(&["灾煞", "月破"], "子"), 4);
    }

    #[test]
    fn officer_day_name_triggers() {
        assert_eq!(day_level(&["相日", "平日"], "亥"), 0);
        assert_eq!(day_level(&["天吏", "平日"], "子"), 4);
        assert_eq!(day_level(&["天吏", "平日"], "午"), 3);
    }

    #[test]
    fn companions_must_be_present() {
        assert_eq!(day_level(&["平日"], "亥"), -1);
    }

    #[test]
    fn disposition_mapping() {
        use Disposition::*;
        let expect = [
            (5, [AvoidAll, AvoidAll]),
            (4, [AvoidAll, AvoidWithException]),
            (3, [AvoidWithException, FavorWithException]),
            (2, [AvoidWithException, FavorOnly]),
            (1, [FavorWithException, FavorOnly]),
            (0, [FavorOnly, FavorOnly]),
            (-1, [FavorWithException, FavorWithException]),
        ];
        for (level, [plain, virtuous]) in expect {
            assert_eq!(Disposition::from_level(level, false), plain, "{level}");
            assert_eq!(Disposition::from_level(level, true), virtuous, "{level}");
        }
        assert_eq!(AvoidAll.name(), "诸事皆忌");
    }

    #[test]
    fn virtue() {
        assert!(has_virtue(&["天恩", "月德合"]));
        assert!(!has_virtue(&["天恩", "月恩"]));
    }
}
