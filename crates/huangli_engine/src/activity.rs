//! Activity lists (宜/忌) and the tables seeding them.

use huangli_base::DayOfficer;

/// Sentinel of an empty or fully vetoed favorable list.
pub const NOTHING_SUITABLE: &str = "诸事不宜";

/// Sentinel of an empty unfavorable list.
pub const NOTHING_UNSUITABLE: &str = "诸事不忌";

/// Favored and disfavored activities of each day officer, in officer order (建..闭).
pub const OFFICER_THINGS: [(&[&str], &[&str]); 12] = [
    (&["出行", "上任", "会友", "上书", "见工"], &["动土", "开仓", "嫁娶", "纳采"]),
    (&["除服", "疗病", "出行", "拆卸", "入宅"], &["求官", "上任", "开张", "搬家", "探病"]),
    (&["祈福", "祭祀", "结亲", "开市", "交易"], &["服药", "求医", "栽种", "动土", "迁移"]),
    (&["祭祀", "修填", "涂泥", "余事勿取"], &["移徙", "入宅", "嫁娶", "开市", "安葬"]),
    (&["交易", "立券", "会友", "签约", "纳畜"], &["种植", "置业", "卖田", "掘井", "造船"]),
    (&["祈福", "祭祀", "求子", "结婚", "立约"], &["开市", "交易", "搬家", "远行"]),
    (&["求医", "赴考", "祭祀", "余事勿取"], &["动土", "出行", "移徙", "开市", "修造"]),
    (&["经营", "交易", "求官", "纳畜", "动土"], &["登高", "行船", "安床", "入宅", "博彩"]),
    (&["祈福", "入学", "开市", "求医", "成服"], &["词讼", "安门", "移徙"]),
    (&["祭祀", "求财", "签约", "嫁娶", "订盟"], &["开市", "安床", "安葬", "入宅", "破土"]),
    (&["疗病", "结婚", "交易", "入仓", "求职"], &["安葬", "动土", "针灸"]),
    (&["祭祀", "交易", "收财", "安葬"], &["宴会", "安床", "出行", "嫁娶", "移徙"]),
];

/// Activity avoided on days whose pillar contains the character (彭祖百忌 in short form).
pub const DAY_CHAR_AVOIDS: [(char, &str); 22] = [
    ('甲', "开仓"),
    ('乙', "栽种"),
    ('丙', "修灶"),
    ('丁', "剃头"),
    ('戊', "受田"),
    ('己', "破券"),
    ('庚', "经络"),
    ('辛', "酝酿"),
    ('壬', "开渠"),
    ('癸', "词讼"),
    ('子', "问卜"),
    ('丑', "冠带"),
    ('寅', "祭祀"),
    ('卯', "穿井"),
    ('辰', "哭泣"),
    ('巳', "出行"),
    ('午', "苫盖"),
    ('未', "服药"),
    ('申', "安床"),
    ('酉', "宴会"),
    ('戌', "纳畜"),
    ('亥', "嫁娶"),
];

/// Canonical order of activities. Anything else sorts after all of these.
pub const THINGS_SORT: &[&str] = &[
    "祭祀", "祈福", "求嗣", "上册", "上表章", "颁诏", "覃恩", "施恩", "招贤", "举正直", "恤孤茕",
    "宣政事", "布政事", "雪冤", "庆赐", "宴会", "入学", "冠带", "出行", "安抚边境", "选将", "出师",
    "上官", "临政", "结婚姻", "纳采", "嫁娶", "进人口", "搬移", "安床", "解除", "沐浴", "整容",
    "剃头", "整手足甲", "求医疗病", "疗目", "针刺", "裁制", "营建", "修宫室", "缮城郭", "筑堤防",
    "修造", "竖柱上梁", "修仓库", "鼓铸", "苫盖", "经络", "酝酿", "开市", "立券交易", "纳财",
    "开仓", "修置产室", "开渠", "穿井", "安碓硙", "塞穴", "补垣", "扫舍宇", "修饰垣墙",
    "平治道涂", "破屋坏垣", "伐木", "捕捉", "畋猎", "取鱼", "乘船渡水", "栽种", "牧养", "纳畜",
    "破土", "安葬", "启攒", "赴任", "入宅", "诉讼", "开张", "立券", "远回", "纳采问名", "求福",
    "祈嗣", "遣使", "赏贺", "诏命公卿", "营建宫室", "开仓库", "出货财", "筑提", "开渠穿井",
    "补垣塞穴", "修灶", "受田", "破券", "问卜", "哭泣", "服药", "词讼",
];

/// Sort key of `thing` in [`THINGS_SORT`].
pub fn sort_rank(thing: &str) -> usize {
    THINGS_SORT
        .iter()
        .position(|&t| t == thing)
        .unwrap_or(THINGS_SORT.len() + 1)
}

/// Insertion-ordered set of activity names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityList(Vec<&'static str>);

impl ActivityList {
    /// List holding `items` with duplicates dropped.
    pub fn from_slice(items: &[&'static str]) -> Self {
        let mut list = Self::default();
        list.add(items);
        list
    }

    /// List holding only `sentinel`.
    pub fn only(sentinel: &'static str) -> Self {
        Self(vec![sentinel])
    }

    /// Union: append the items not already present.
    pub fn add(&mut self, items: &[&'static str]) {
        for &item in items {
            if !self.0.contains(&item) {
                self.0.push(item);
            }
        }
    }

    /// Difference: drop every listed item.
    pub fn remove(&mut self, items: &[&str]) {
        self.0.retain(|t| !items.contains(t));
    }

    /// Keep the items satisfying `keep`.
    pub fn retain(&mut self, keep: impl FnMut(&&'static str) -> bool) {
        self.0.retain(keep);
    }

    pub fn contains(&self, item: &str) -> bool {
        self.0.iter().any(|&t| t == item)
    }

    pub fn contains_any(&self, items: &[&str]) -> bool {
        items.iter().any(|i| self.contains(i))
    }

    /// Items also present in `other`, in this list's order.
    pub fn intersection(&self, other: &Self) -> Vec<&'static str> {
        self.0.iter().copied().filter(|t| other.contains(t)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'static str] {
        &self.0
    }

    /// Whether the list is exactly one `诸事..` sentinel.
    pub fn is_sentinel(&self) -> bool {
        matches!(self.0.as_slice(), [only] if only.contains("诸事"))
    }

    /// Stable sort by [`sort_rank`].
    pub fn sort_canonical(&mut self) {
        self.0.sort_by_key(|t| sort_rank(t));
    }

    /// Items joined with `sep`.
    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }
}

/// Favored and disfavored lists seeded from the officer and the day pillar characters.
pub fn seed_activities(officer: DayOfficer, day_pillar: &str) -> (ActivityList, ActivityList) {
    let (good, bad) = OFFICER_THINGS[officer.index() as usize];
    let good = ActivityList::from_slice(good);
    let mut bad = ActivityList::from_slice(bad);
    for &(key, thing) in &DAY_CHAR_AVOIDS {
        if day_pillar.contains(key) {
            bad.add(&[thing]);
        }
    }
    (good, bad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_keeps_first_insertion() {
        let mut list = ActivityList::from_slice(&["祭祀", "出行", "祭祀"]);
        assert_eq!(list.as_slice(), ["祭祀", "出行"]);
        list.add(&["嫁娶", "出行"]);
        assert_eq!(list.as_slice(), ["祭祀", "出行", "嫁娶"]);
        list.remove(&["祭祀", "不存在"]);
        assert_eq!(list.as_slice(), ["出行", "嫁娶"]);
    }

    #[test]
    fn canonical_sort_puts_unknown_last() {
        let mut list = ActivityList::from_slice(&["博彩", "嫁娶", "祭祀", "登高", "出行"]);
        list.sort_canonical();
        assert_eq!(list.as_slice(), ["祭祀", "出行", "嫁娶", "博彩", "登高"]);
    }

    #[test]
    fn sentinel_detection() {
        assert!(ActivityList::only(NOTHING_SUITABLE).is_sentinel());
        assert!(ActivityList::only(NOTHING_UNSUITABLE).is_sentinel());
        assert!(!ActivityList::from_slice(&["祭祀"]).is_sentinel());
        assert!(!ActivityList::from_slice(&[NOTHING_SUITABLE, "祭祀"]).is_sentinel());
    }

    #[test]
    fn seeds_from_officer_and_pillar_chars() {
        let (good, bad) = seed_activities(DayOfficer::Man, "癸卯");
        assert_eq!(good.as_slice(), ["祈福", "祭祀", "结亲", "开市", "交易"]);
        assert_eq!(
            bad.as_slice(),
            ["服药", "求医", "栽种", "动土", "迁移", "词讼", "穿井"]
        );
    }

    #[test]
    fn sort_table_has_no_duplicates() {
        for (i, t) in THINGS_SORT.iter().enumerate() {
            assert_eq!(sort_rank(t), i, "{t}");
        }
    }
}
