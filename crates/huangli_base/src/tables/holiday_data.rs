//! Festival dictionaries keyed by solar term, civil `(month, day)` or lunar `(month, day)`.

use crate::solar_term::SolarTerm;

/// Public holidays falling on a solar term.
pub const LEGAL_TERM_HOLIDAYS: [(SolarTerm, &str); 1] = [(SolarTerm::QingMing, "清明节")];

/// Public holidays on fixed civil dates.
pub const LEGAL_SOLAR_HOLIDAYS: [((u32, u32), &str); 3] =
    [((1, 1), "元旦"), ((5, 1), "劳动节"), ((10, 1), "国庆节")];

/// Public holidays on fixed lunar dates.
pub const LEGAL_LUNAR_HOLIDAYS: [((u32, u32), &str); 3] =
    [((1, 1), "春节"), ((5, 5), "端午节"), ((8, 15), "中秋节")];

/// New Year's Eve, on the last day of 腊月.
pub const NEW_YEARS_EVE: &str = "除夕";

/// Observances on fixed civil dates.
pub const OTHER_SOLAR_HOLIDAYS: [((u32, u32), &str); 13] = [
    ((2, 14), "情人节"),
    ((3, 8), "妇女节"),
    ((3, 12), "植树节"),
    ((3, 15), "消费者权益日"),
    ((4, 1), "愚人节"),
    ((5, 4), "青年节"),
    ((5, 12), "护士节"),
    ((6, 1), "儿童节"),
    ((7, 1), "建党节"),
    ((8, 1), "建军节"),
    ((9, 10), "教师节"),
    ((12, 24), "平安夜"),
    ((12, 25), "圣诞节"),
];

/// Observances on the n-th Sunday of a month: `(month, n, name)`.
pub const NTH_SUNDAY_HOLIDAYS: [(u32, u32, &str); 2] = [(5, 2, "母亲节"), (6, 3, "父亲节")];

/// Folk festivals on fixed lunar dates.
pub const OTHER_LUNAR_HOLIDAYS: [((u32, u32), &str); 11] = [
    ((1, 15), "元宵节"),
    ((2, 2), "龙抬头"),
    ((3, 3), "上巳节"),
    ((7, 7), "七夕节"),
    ((7, 15), "中元节"),
    ((9, 9), "重阳节"),
    ((10, 1), "寒衣节"),
    ((10, 15), "下元节"),
    ((12, 8), "腊八节"),
    ((12, 23), "北方小年"),
    ((12, 24), "南方小年"),
];
