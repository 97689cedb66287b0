//! Activity finalization: the disposition split, the corrective cascade,
//! the final cleanup and the canonical sort.

use huangli_base::DayOfficer;

use crate::activity::{ActivityList, NOTHING_SUITABLE, NOTHING_UNSUITABLE};
use crate::context::RuleContext;
use crate::level::Disposition;
use crate::matching::{Tally, is_winter_felling, virtue_avoids};

/// Day pillar that voids every avoidance, indexed by lunar month - 1 (`空` = none).
const VIRTUE_UNION_DAYS: [&str; 12] = [
    "空", "甲戌", "空", "丙申", "空", "甲子", "戊申", "庚辰", "辛卯", "甲子", "空", "甲子",
];

const PARDON_NAMES: [&str; 8] = ["岁德合", "月德合", "天德合", "天赦", "天愿", "月恩", "四相", "时德"];

const PARDONED_AVOIDS: [&str; 9] = [
    "进人口", "安床", "经络", "酝酿", "开市", "立券交易", "纳财", "开仓库", "出货财",
];

/// `(pillar char, forced avoid, vetoed favors)`.
const PILLAR_CHAR_VETOES: [(char, &str, &[&str]); 5] = [
    ('卯', "穿井", &["穿井", "开渠"]),
    ('壬', "开渠", &["开渠", "穿井"]),
    ('巳', "出行", &["出行", "出师", "遣使"]),
    ('酉', "宴会", &["宴会", "庆赐", "赏贺"]),
    ('丁', "剃头", &["剃头", "整容"]),
];

/// Final favorable and unfavorable lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finalized {
    pub good: ActivityList,
    pub bad: ActivityList,
}

/// Reconcile activities present in both lists according to `disposition`.
fn split_by_disposition(disposition: Disposition, good: &mut ActivityList, bad: &mut ActivityList) {
    match disposition {
        Disposition::AvoidAll => {
            *good = ActivityList::only(NOTHING_SUITABLE);
            *bad = ActivityList::only(NOTHING_SUITABLE);
        }
        Disposition::AvoidWithException => {
            let shared = good.intersection(bad);
            good.remove(&shared);
        }
        Disposition::FavorWithException => {
            let shared = good.intersection(bad);
            good.remove(&shared);
            bad.remove(&shared);
        }
        Disposition::FavorOnly => {
            let shared = bad.intersection(good);
            bad.remove(&shared);
        }
    }
}

/// Prerequisite cleanups of a level-1 day.
fn level_one_cleanup(
    bad: &mut ActivityList,
    good_names: &[&str],
    has_virtue: bool,
    virtue_bad: &ActivityList,
) {
    bad.add(virtue_bad.as_slice());
    if !bad.contains("祈福") {
        bad.remove(&["求嗣"]);
    }
    if !bad.contains("结婚姻") && !has_virtue {
        bad.remove(&["冠带", "纳采问名", "嫁娶", "进人口"]);
    }
    if !bad.contains("嫁娶") && !has_virtue && !good_names.contains(&"不将") {
        bad.remove(&["冠带", "纳采问名", "结婚姻", "进人口", "搬移", "安床"]);
    }
}

fn level_one_without_virtue(bad: &mut ActivityList) {
    if !bad.contains("搬移") {
        bad.remove(&["安床"]);
    }
    if !bad.contains("安床") {
        bad.remove(&["搬移"]);
    }
    if !bad.contains("解除") {
        bad.remove(&["整容", "剃头", "整手足甲"]);
    }
    if !bad.contains("修造") || !bad.contains("竖柱上梁") {
        bad.remove(&[
            "修宫室", "缮城郭", "整手足甲", "筑提", "修仓库", "鼓铸", "苫盖", "修置产室",
            "开渠穿井", "安碓硙", "补垣塞穴", "修饰垣墙", "平治道涂", "破屋坏垣",
        ]);
    }
}

fn level_one_trade_and_burial(good: &ActivityList, bad: &mut ActivityList) {
    if !bad.contains("开市") {
        bad.remove(&["立券交易", "纳财", "开仓库", "出货财"]);
    }
    if !bad.contains("纳财") {
        bad.remove(&["立券交易", "开市"]);
    }
    if !bad.contains("立券交易") {
        bad.remove(&["纳财", "开市", "开仓库", "出货财"]);
    }
    if !bad.contains("牧养") {
        bad.remove(&["纳畜"]);
    }
    if !bad.contains("纳畜") {
        bad.remove(&["牧养"]);
    }
    if good.contains("安葬") {
        bad.remove(&["启攒"]);
    }
    if good.contains("启攒") {
        bad.remove(&["安葬"]);
    }
}

/// Ordered corrections applied unless everything is avoided.
fn cascade(
    ctx: &RuleContext,
    tally: &Tally,
    level: i8,
    disposition: Disposition,
    has_virtue: bool,
    good: &mut ActivityList,
    bad: &mut ActivityList,
) {
    let good_names = tally.good_names.as_slice();
    let bad_names = tally.bad_names.as_slice();
    let virtue_bad = if has_virtue {
        virtue_avoids(good_names)
    } else {
        ActivityList::default()
    };

    if good.contains("宣政事") && good.contains("布政事") {
        good.remove(&["布政事"]);
    }
    if good.contains("营建宫室") && good.contains("修宫室") {
        good.remove(&["修宫室"]);
    }
    let pardoned = PARDON_NAMES.iter().any(|n| good_names.contains(n));
    if pardoned && disposition != Disposition::AvoidWithException {
        bad.remove(&PARDONED_AVOIDS);
        bad.add(virtue_bad.as_slice());
    }
    if bad_names.contains(&"天狗") || ctx.day_has('寅') {
        bad.add(&["祭祀"]);
        good.remove(&["祭祀", "求福", "祈嗣"]);
    }
    if is_winter_felling(ctx.next_term_index) && ctx.officer == DayOfficer::Wei {
        good.add(&["伐木"]);
    }
    for &(c, avoid, vetoed) in &PILLAR_CHAR_VETOES {
        if ctx.day_has(c) {
            bad.add(&[avoid]);
            good.remove(vetoed);
        }
    }
    if level == 0 && disposition == Disposition::FavorOnly {
        bad.add(virtue_bad.as_slice());
    }
    if level == 1 {
        level_one_cleanup(bad, good_names, has_virtue, &virtue_bad);
    }
    if ctx.day_has('亥') {
        bad.add(&["嫁娶"]);
    }
    if level == 1 && !has_virtue {
        level_one_without_virtue(bad);
    }
    if level == 1 {
        level_one_trade_and_burial(good, bad);
    }
    if bad.contains_any(&["诏命公卿", "招贤"]) {
        good.remove(&["施恩", "举正直"]);
    }
    if bad.contains_any(&["施恩", "举正直"]) {
        good.remove(&["诏命公卿", "招贤"]);
    }
    if good.contains("宣政事") && bad_names.contains(&"往亡") {
        good.remove(&["宣政事"]);
        good.add(&["布政事"]);
    }
    if bad_names.contains(&"月厌") {
        good.remove(&["颁诏", "施恩", "招贤", "举正直", "宣政事"]);
        good.add(&["布政事"]);
        bad.add(&["补垣"]);
        if ["土府", "土符", "地囊"].iter().any(|n| bad_names.contains(n)) {
            good.remove(&["塞穴"]);
        }
    }
    if ctx.officer == DayOfficer::Kai {
        good.remove(&["破土", "安葬", "启攒"]);
    }
    if bad_names.contains(&"四忌") || bad_names.contains(&"四穷") {
        bad.add(&["安葬"]);
        good.remove(&["破土", "启攒"]);
    }
    if good_names.contains(&"鸣吠") || good_names.contains(&"鸣吠对") {
        good.remove(&["破土", "启攒"]);
    }
    let union_day = (ctx.lunar_month as usize)
        .checked_sub(1)
        .and_then(|i| VIRTUE_UNION_DAYS.get(i));
    if union_day == Some(&ctx.day.name()) {
        *bad = ActivityList::only(NOTHING_UNSUITABLE);
    }
    let virtue_union = ["岁德合", "月德合", "天德合"]
        .iter()
        .any(|n| good_names.contains(n));
    let pardon = ["天赦", "天愿"].iter().any(|n| good_names.contains(n));
    if virtue_union && pardon {
        *bad = ActivityList::only(NOTHING_UNSUITABLE);
    }
}

/// Produce the final lists from the tally.
pub fn finalize(
    ctx: &RuleContext,
    tally: &Tally,
    level: i8,
    disposition: Disposition,
    has_virtue: bool,
) -> Finalized {
    let mut good = tally.good.clone();
    let mut bad = tally.bad.clone();
    split_by_disposition(disposition, &mut good, &mut bad);
    if disposition != Disposition::AvoidAll {
        cascade(ctx, tally, level, disposition, has_virtue, &mut good, &mut bad);
    }

    let shared = bad.intersection(&good);
    let sentinel_only = matches!(shared.as_slice(), [only] if only.contains("诸事"));
    if !sentinel_only {
        good.remove(&shared);
    }
    if bad.is_empty() {
        bad = ActivityList::only(NOTHING_UNSUITABLE);
    }
    if good.is_empty() {
        good = ActivityList::only(NOTHING_SUITABLE);
    }
    good.sort_canonical();
    bad.sort_canonical();
    Finalized { good, bad }
}
