//! Golden almanac days: pillars, matched deities and demons, day level and
//! the final activity lists.

use huangli_engine::{
    AlmanacConfig, Disposition, NOTHING_SUITABLE, NOTHING_UNSUITABLE, OfficerMode, YearPillarMode,
    compute,
};
use huangli_time::CivilDateTime;

struct Golden {
    when: &'static str,
    config: AlmanacConfig,
    pillars: &'static str,
    officer: &'static str,
    level: i8,
    disposition: &'static str,
    good_gods: &'static str,
    bad_gods: &'static str,
    good: &'static str,
    bad: &'static str,
}

const GOLDEN: &[Golden] = &[
    Golden {
        when: "2026-01-29T01:30",
        config: AlmanacConfig::new(),
        pillars: "乙巳 己丑 癸卯 癸丑",
        officer: "满",
        level: 2,
        disposition: "从忌不从宜",
        good_gods: "五合 鸣吠对 不守塚 民日 天贵 天富 福德 天巫 地财 禄库 普护 天仓 金堂 兵吉",
        bad_gods: "灾煞 披麻 天瘟 天狗 土王用事 宝日",
        good: "结亲 交易",
        bad: "祭祀 祈福 求嗣 上册 上表章 颁诏 施恩 招贤 举正直 宣政事 布政事 庆赐 宴会 冠带 出行 \
            安抚边境 选将 出师 上官 临政 结婚姻 纳采 嫁娶 进人口 搬移 安床 解除 整容 剃头 \
            整手足甲 求医疗病 裁制 营建 修宫室 缮城郭 筑堤防 修造 竖柱上梁 修仓库 鼓铸 经络 酝酿 \
            开市 立券交易 纳财 开仓 修置产室 开渠 穿井 安碓硙 塞穴 补垣 修饰垣墙 平治道涂 \
            破屋坏垣 栽种 牧养 纳畜 破土 安葬 启攒 入宅 服药 词讼 求医 动土 迁移",
    },
    Golden {
        when: "2024-02-10T12:00",
        config: AlmanacConfig::new(),
        pillars: "甲辰 丙寅 甲辰 庚午",
        officer: "满",
        level: -1,
        disposition: "从宜亦从忌",
        good_gods: "岁德 六仪 小葬 天贵 天富 天财 福德 天巫 明星 禄库 金堂",
        bad_gods: "厌对 招摇 重丧 天狗 枯鱼 九空 九坎 九焦 制日 复日",
        good: "祈福 上册 上表章 庆赐 宴会 临政 纳采 搬移 裁制 修宫室 缮城郭 修造 赴任 入宅 诉讼 \
            结亲 交易",
        bad: "祭祀 进人口 整手足甲 鼓铸 立券交易 开仓 塞穴 补垣 取鱼 乘船渡水 栽种 破土 启攒 哭泣 \
            服药 求医 动土 迁移",
    },
    Golden {
        when: "2022-02-03T10:30",
        config: AlmanacConfig::new(),
        pillars: "壬寅 辛丑 丁亥 乙巳",
        officer: "开",
        level: 2,
        disposition: "从宜不从忌",
        good_gods: "岁德合 王日 驿马 福厚 月财 阴德 生气 益后 天后",
        bad_gods: "月厌 天狗下食 地火 三娘煞 四绝 土王用事 伐日 重日",
        good: "祭祀 祈福 求嗣 覃恩 恤孤茕 雪冤 庆赐 宴会 出行 安抚边境 选将 上官 临政 纳采 搬移 \
            求医疗病 裁制 修造 赴任 入宅 疗病 结婚 交易 入仓 求职",
        bad: "上册 上表章 布政事 冠带 出师 结婚姻 嫁娶 解除 整容 剃头 整手足甲 营建 修宫室 缮城郭 \
            筑堤防 竖柱上梁 修仓库 鼓铸 开仓 修置产室 开渠 穿井 安碓硙 塞穴 补垣 修饰垣墙 \
            平治道涂 破屋坏垣 伐木 畋猎 取鱼 栽种 牧养 纳畜 破土 安葬 启攒 远回 动土 针灸",
    },
    Golden {
        when: "2024-01-01T12:00",
        config: AlmanacConfig::new(),
        pillars: "癸卯 甲子 甲子 庚午",
        officer: "建",
        level: 4,
        disposition: "诸事皆忌",
        good_gods: "凤凰日 三合 四相 官日 天恩 月恩 天赦 天愿 天财 敬安 小时 兵福",
        bad_gods: "月建 月厌 地火 月建转杀 土府 义日",
        good: "诸事不宜",
        bad: "诸事不宜",
    },
    Golden {
        when: "2024-03-10T12:00",
        config: AlmanacConfig::new(),
        pillars: "甲辰 丁卯 癸酉 戊午",
        officer: "破",
        level: 5,
        disposition: "诸事皆忌",
        good_gods: "大葬 鸣吠 不守塚 守日 天成 除神 玉宇",
        bad_gods: "月破 月厌 灾煞 小红砂 披麻 地火 五虚 五离 荒芜 义日",
        good: "诸事不宜",
        bad: "诸事不宜",
    },
    Golden {
        when: "2024-01-20T12:00",
        config: AlmanacConfig::new(),
        pillars: "癸卯 乙丑 癸未 戊午",
        officer: "破",
        level: -1,
        disposition: "从宜亦从忌",
        good_gods: "岁德合 不守塚 天贵 天恩 天愿",
        bad_gods: "月破 六不成 神隔 玄武 四击 土王用事 伐日",
        good: "覃恩 恤孤茕 雪冤 赴任 入宅 求医 赴考 余事勿取",
        bad: "诸事不忌",
    },
    Golden {
        when: "2024-01-15T12:00",
        config: AlmanacConfig::new(),
        pillars: "癸卯 乙丑 戊寅 戊午",
        officer: "除",
        level: 1,
        disposition: "从宜不从忌",
        good_gods: "岁德 五合 不将 时德 不守塚 相日 天财 玉宇 吉期 兵宝 兵吉",
        bad_gods: "月忌 劫煞 天贼 五虚 荒芜 伐日",
        good: "祈福 求嗣 庆赐 宴会 出行 安抚边境 选将 出师 上官 临政 结婚姻 纳采 嫁娶 搬移 解除 \
            求医疗病 裁制 修宫室 缮城郭 修造 竖柱上梁 立券交易 纳财 开仓 栽种 牧养 破土 入宅 \
            除服 疗病 拆卸",
        bad: "祭祀 上册 上表章 颁诏 招贤 宣政事 布政事 冠带 整容 剃头 整手足甲 营建 筑堤防 修仓库 \
            鼓铸 修置产室 开渠 穿井 安碓硙 塞穴 补垣 修饰垣墙 破屋坏垣 乘船渡水 安葬 启攒 开张 \
            受田 求官 上任 搬家 探病",
    },
    Golden {
        when: "2024-02-06T12:00",
        config: AlmanacConfig::new(),
        pillars: "癸卯 丙寅 庚子 壬午",
        officer: "开",
        level: 1,
        disposition: "从宜亦从忌",
        good_gods: "不将 鸣吠对 母仓 生气 益后 兵吉",
        bad_gods: "灾煞 重复 披麻 伏兵 天狱 天火 天狗下食 地囊 三娘煞 宝日",
        good: "疗病 结婚 交易 入仓 求职",
        bad: "上册 上表章 颁诏 施恩 招贤 举正直 宣政事 布政事 庆赐 宴会 冠带 出行 上官 临政 结婚姻 \
            纳采 进人口 搬移 安床 解除 整容 剃头 整手足甲 求医疗病 裁制 营建 修宫室 缮城郭 \
            筑堤防 修造 竖柱上梁 修仓库 鼓铸 苫盖 经络 酝酿 开仓 修置产室 开渠 穿井 安碓硙 塞穴 \
            补垣 修饰垣墙 平治道涂 破屋坏垣 伐木 畋猎 取鱼 安葬 入宅 问卜 动土 针灸",
    },
    Golden {
        when: "2024-02-05T12:00",
        config: AlmanacConfig::new(),
        pillars: "癸卯 丙寅 己亥 庚午",
        officer: "收",
        level: 0,
        disposition: "从宜不从忌",
        good_gods: "五富 六合 母仓 圣心",
        bad_gods: "河魁 劫煞 勾陈 八座 制日 重日",
        good: "祭祀 祈福 宴会 结婚姻 进人口 经络 酝酿 开市 立券交易 纳财 开仓 栽种 牧养 纳畜 安葬 \
            求财 签约 订盟",
        bad: "求嗣 上册 上表章 颁诏 施恩 招贤 举正直 宣政事 布政事 庆赐 冠带 出行 安抚边境 选将 \
            出师 上官 临政 纳采 嫁娶 搬移 安床 解除 整容 剃头 整手足甲 求医疗病 裁制 营建 修宫室 \
            缮城郭 筑堤防 修造 竖柱上梁 修仓库 鼓铸 修置产室 开渠 穿井 安碓硙 塞穴 补垣 修饰垣墙 \
            破屋坏垣 破土 启攒 入宅 破券",
    },
    Golden {
        when: "2024-05-12T12:00",
        config: AlmanacConfig::new(),
        pillars: "甲辰 己巳 丙子 甲午",
        officer: "危",
        level: 2,
        disposition: "从宜不从忌",
        good_gods: "天德合 不将 鸣吠对 守日 天贵 天愿 天马 活曜 兵吉",
        bad_gods: "月忌 重丧 伏兵 天吏 天棒 白虎 殃败 四忌 五虚 荒芜 伐日 复日",
        good: "祭祀 祈福 求嗣 上册 上表章 颁诏 覃恩 施恩 招贤 举正直 恤孤茕 宣政事 雪冤 庆赐 宴会 \
            出行 安抚边境 选将 出师 上官 临政 结婚姻 纳采 嫁娶 进人口 搬移 解除 求医疗病 裁制 \
            营建 缮城郭 修造 竖柱上梁 修仓库 经络 酝酿 开市 立券交易 纳财 栽种 牧养 纳畜 安葬 \
            经营 交易 求官 动土",
        bad: "诸事不忌",
    },
    Golden {
        when: "1986-11-01T07:00",
        config: AlmanacConfig::new().with_year_pillar(YearPillarMode::SwitchAtSpring),
        pillars: "丙寅 戊戌 己酉 戊辰",
        officer: "闭",
        level: 3,
        disposition: "从忌不从宜",
        good_gods: "大葬 鸣吠 不守塚 官日 天恩 天医 地财 除神",
        bad_gods: "月害 重丧 重复 天吏 独火 五离 月建转杀 土王用事 血支 宝日",
        good: "祭祀 覃恩 恤孤茕 布政事 雪冤 沐浴 整容 剃头 整手足甲 扫舍宇 交易 收财",
        bad: "祈福 求嗣 上册 上表章 施恩 招贤 举正直 庆赐 宴会 冠带 出行 安抚边境 选将 出师 上官 \
            临政 结婚姻 纳采 嫁娶 进人口 搬移 安床 解除 求医疗病 针刺 营建 修宫室 缮城郭 筑堤防 \
            修造 竖柱上梁 修仓库 经络 酝酿 开市 立券交易 纳财 开仓 修置产室 开渠 穿井 安碓硙 \
            补垣 修饰垣墙 平治道涂 破屋坏垣 栽种 牧养 纳畜 破土 安葬 启攒 破券 移徙",
    },
    Golden {
        when: "2024-02-04T10:30",
        config: AlmanacConfig::new().with_year_pillar(YearPillarMode::SwitchAtSpring),
        pillars: "甲辰 丙寅 戊戌 丁巳",
        officer: "成",
        level: 2,
        disposition: "从忌不从宜",
        good_gods: "三合 天喜 天官",
        bad_gods: "岁破 月厌 神号 地火 受死 飞廉 大煞 四击 专日",
        good: "入学 求医 成服",
        bad: "祈福 求嗣 上册 上表章 颁诏 施恩 招贤 举正直 宣政事 布政事 庆赐 宴会 冠带 出行 \
            安抚边境 选将 出师 上官 临政 结婚姻 纳采 嫁娶 进人口 搬移 安床 解除 整容 剃头 \
            整手足甲 求医疗病 裁制 营建 修宫室 缮城郭 筑堤防 修造 竖柱上梁 修仓库 鼓铸 经络 酝酿 \
            开市 立券交易 纳财 开仓 修置产室 开渠 穿井 安碓硙 塞穴 补垣 修饰垣墙 平治道涂 \
            破屋坏垣 伐木 畋猎 栽种 牧养 纳畜 破土 安葬 启攒 远回 受田 词讼 安门 移徙",
    },
    Golden {
        when: "2019-02-04T22:30",
        config: AlmanacConfig::new().with_officer_mode(OfficerMode::LunarMonth),
        pillars: "戊戌 丙寅 壬申 辛亥",
        officer: "危",
        level: -1,
        disposition: "从宜亦从忌",
        good_gods: "五富 大葬 鸣吠 不守塚 天官 福生 活曜 除神",
        bad_gods: "伏兵 雷公 五离 游祸 义日",
        good: "祭祀 沐浴 整容 剃头 整手足甲 经络 酝酿 开市 纳财 开仓 扫舍宇 栽种 牧养 纳畜 安葬 \
            经营 交易 求官 动土",
        bad: "求嗣 庆赐 宴会 出师 结婚姻 纳采 安床 修造 修仓库 开渠 入宅 登高 行船 博彩",
    },
];

fn almanac(when: &str, config: AlmanacConfig) -> huangli_engine::AlmanacDay {
    let time: CivilDateTime = when.parse().unwrap();
    compute(&time, &config).unwrap()
}

#[test]
fn golden_days() {
    for g in GOLDEN {
        let day = almanac(g.when, g.config);
        let out = &day.outcome;
        assert_eq!(day.pillars_text(), g.pillars, "{} pillars", g.when);
        assert_eq!(day.attributes.officer.officer.name(), g.officer, "{} officer", g.when);
        assert_eq!(out.level, g.level, "{} level", g.when);
        assert_eq!(out.disposition_name, g.disposition, "{} disposition", g.when);
        assert_eq!(out.good_gods.join(" "), g.good_gods, "{} deities", g.when);
        assert_eq!(out.bad_gods.join(" "), g.bad_gods, "{} demons", g.when);
        assert_eq!(out.good_things.join(" "), g.good, "{} good", g.when);
        assert_eq!(out.bad_things.join(" "), g.bad, "{} bad", g.when);
    }
}

#[test]
fn avoid_all_overrides_matched_activities() {
    // 2024-03-10: 月厌 meets 月破 in a 卯 month.
    let day = almanac("2024-03-10T12:00", AlmanacConfig::default());
    assert_eq!(day.outcome.level, 5);
    assert_eq!(day.outcome.disposition, Disposition::AvoidAll);
    assert_eq!(day.outcome.good_things.as_slice(), [NOTHING_SUITABLE]);
    assert_eq!(day.outcome.bad_things.as_slice(), [NOTHING_SUITABLE]);
}

#[test]
fn virtue_union_with_pardon_clears_avoidances() {
    // 天德合 with 天愿.
    let day = almanac("2024-05-12T12:00", AlmanacConfig::default());
    assert!(day.outcome.has_virtue);
    assert_eq!(day.outcome.bad_things.as_slice(), [NOTHING_UNSUITABLE]);
}

#[test]
fn spring_switch_changes_year_pillar_only_where_it_should() {
    let fixed = almanac("1986-11-01T07:00", AlmanacConfig::default());
    let spring = almanac(
        "1986-11-01T07:00",
        AlmanacConfig::default().with_year_pillar(YearPillarMode::SwitchAtSpring),
    );
    assert_eq!(fixed.pillars.year.name(), "丙寅");
    assert_eq!(spring.pillars.year.name(), "丙寅");

    // Between 立春 and the lunar new year the two modes disagree.
    let fixed = almanac("2024-02-04T10:30", AlmanacConfig::default());
    let spring = almanac(
        "2024-02-04T10:30",
        AlmanacConfig::default().with_year_pillar(YearPillarMode::SwitchAtSpring),
    );
    assert_eq!(fixed.pillars.year.name(), "癸卯");
    assert_eq!(spring.pillars.year.name(), "甲辰");
    assert_eq!(spring.attributes.zodiac, "龙");
}

#[test]
fn officer_modes_can_disagree() {
    let by_pillar = almanac("2019-02-04T22:30", AlmanacConfig::default());
    let by_lunar = almanac(
        "2019-02-04T22:30",
        AlmanacConfig::default().with_officer_mode(OfficerMode::LunarMonth),
    );
    assert_eq!(by_lunar.attributes.officer.officer.name(), "危");
    assert_eq!(by_lunar.attributes.month_index, 1);
    assert_eq!(by_pillar.attributes.month_index, 2);
    assert_ne!(
        by_pillar.attributes.officer.officer,
        by_lunar.attributes.officer.officer
    );
}

#[test]
fn demo_day_is_level_two_without_virtue() {
    let day = almanac("2026-01-29T01:30", AlmanacConfig::default());
    assert_eq!(day.lunar_text(), "二零二五年 腊月小 十一");
    assert_eq!(day.attributes.relations.clash(), "兔日冲鸡");
    assert!(!day.outcome.has_virtue);
    assert_eq!(day.outcome.disposition, Disposition::AvoidWithException);
}
