//! Auspicious deities (吉神), in matching order.
//!
//! The first six entries are the virtue deities; their unfavorable lists
//! become the "still avoid under virtue" activities.

use crate::rules::{BU_JIANG, Condition, Matcher, Rule, Text};

/// Favored under the month and heaven virtues.
const VIRTUE_FAVORS: &[&str] = &[
    "祭祀", "祈福", "求嗣", "上册", "上表章", "颁诏", "覃恩", "施恩", "招贤", "举正直", "恤孤茕",
    "宣政事", "雪冤", "庆赐", "宴会", "出行", "安抚边境", "选将", "出师", "上官", "临政", "结婚姻",
    "纳采", "嫁娶", "搬移", "解除", "求医疗病", "裁制", "营建", "缮城郭", "修造", "竖柱上梁",
    "修仓库", "栽种", "牧养", "纳畜", "安葬",
];

/// Favored under the seasonal virtues.
const SEASON_VIRTUE_FAVORS: &[&str] = &[
    "祭祀", "祈福", "求嗣", "施恩", "举正直", "庆赐", "宴会", "出行", "上官", "临政", "结婚姻",
    "纳采", "搬移", "解除", "求医疗病", "裁制", "修宫室", "缮城郭", "修造", "竖柱上梁", "纳财",
    "开仓", "栽种", "牧养",
];

/// Deity rules, matched in order.
pub static DEITIES: &[Rule] = &[
    Rule {
        name: "岁德",
        matcher: Matcher::Contains {
            needle: Text::YearStem("甲庚丙壬戊甲庚丙壬戊"),
            haystack: Text::DayPillar,
        },
        good: &["修造", "嫁娶", "纳采", "搬移", "入宅"],
        bad: &[],
    },
    Rule {
        name: "岁德合",
        matcher: Matcher::Contains {
            needle: Text::YearStem("己乙辛丁癸己乙辛丁癸"),
            haystack: Text::DayPillar,
        },
        good: &["修造", "赴任", "嫁娶", "纳采", "搬移", "入宅", "出行"],
        bad: &[],
    },
    Rule {
        name: "月德",
        matcher: Matcher::Contains {
            needle: Text::Month("壬庚丙甲壬庚丙甲壬庚丙甲"),
            haystack: Text::DayStem,
        },
        good: VIRTUE_FAVORS,
        bad: &["畋猎", "取鱼"],
    },
    Rule {
        name: "月德合",
        matcher: Matcher::Contains {
            needle: Text::Month("丁乙辛己丁乙辛己丁乙辛己"),
            haystack: Text::DayStem,
        },
        good: VIRTUE_FAVORS,
        bad: &["畋猎", "取鱼"],
    },
    Rule {
        name: "天德",
        matcher: Matcher::Contains {
            needle: Text::Month("巳庚丁申壬辛亥甲癸寅丙乙"),
            haystack: Text::DayPillar,
        },
        good: VIRTUE_FAVORS,
        bad: &["畋猎", "取鱼"],
    },
    Rule {
        name: "天德合",
        matcher: Matcher::Contains {
            needle: Text::Month("空乙壬空丁丙空己戊空辛庚"),
            haystack: Text::DayPillar,
        },
        good: VIRTUE_FAVORS,
        bad: &["畋猎", "取鱼"],
    },
    Rule {
        name: "凤凰日",
        matcher: Matcher::Contains {
            needle: Text::LodgeChar,
            haystack: Text::Season(&["危", "昴", "胃", "毕"]),
        },
        good: &["嫁娶"],
        bad: &[],
    },
    Rule {
        name: "麒麟日",
        matcher: Matcher::Contains {
            needle: Text::LodgeChar,
            haystack: Text::Season(&["井", "尾", "牛", "壁"]),
        },
        good: &["嫁娶"],
        bad: &[],
    },
    Rule {
        name: "三合",
        matcher: Matcher::Flag(Condition::SanHe),
        good: &[
            "庆赐", "宴会", "结婚姻", "纳采", "嫁娶", "进人口", "裁制", "修宫室", "缮城郭", "修造",
            "竖柱上梁", "修仓库", "经络", "酝酿", "立券交易", "纳财", "安碓硙", "纳畜",
        ],
        bad: &[],
    },
    Rule {
        name: "四相",
        matcher: Matcher::Contains {
            needle: Text::DayStem,
            haystack: Text::Season(&["丙丁", "戊己", "壬癸", "甲乙"]),
        },
        good: SEASON_VIRTUE_FAVORS,
        bad: &[],
    },
    Rule {
        name: "五合",
        matcher: Matcher::Contains {
            needle: Text::DayBranch,
            haystack: Text::Literal("寅卯"),
        },
        good: &["宴会", "结婚姻", "立券交易"],
        bad: &[],
    },
    Rule {
        name: "五富",
        matcher: Matcher::Contains {
            needle: Text::Month("巳申亥寅巳申亥寅巳申亥寅"),
            haystack: Text::DayPillar,
        },
        good: &["经络", "酝酿", "开市", "立券交易", "纳财", "开仓", "栽种", "牧养", "纳畜"],
        bad: &[],
    },
    Rule {
        name: "六合",
        matcher: Matcher::Contains {
            needle: Text::Month("丑子亥戌酉申未午巳辰卯寅"),
            haystack: Text::DayPillar,
        },
        good: &[
            "宴会", "结婚姻", "嫁娶", "进人口", "经络", "酝酿", "立券交易", "纳财", "纳畜", "安葬",
        ],
        bad: &[],
    },
    Rule {
        name: "六仪",
        matcher: Matcher::Contains {
            needle: Text::Month("午巳辰卯寅丑子亥戌酉申未"),
            haystack: Text::DayPillar,
        },
        good: &["临政"],
        bad: &[],
    },
    Rule {
        name: "不将",
        matcher: Matcher::Contains {
            needle: Text::DayPillar,
            haystack: Text::MonthList(&BU_JIANG),
        },
        good: &["嫁娶"],
        bad: &[],
    },
    Rule {
        name: "时德",
        matcher: Matcher::Contains {
            needle: Text::Season(&["午", "辰", "子", "寅"]),
            haystack: Text::DayBranch,
        },
        good: SEASON_VIRTUE_FAVORS,
        bad: &[],
    },
    Rule {
        name: "大葬",
        matcher: Matcher::Contains {
            needle: Text::DayPillar,
            haystack: Text::Literal("壬申癸酉壬午甲申乙酉丙申丁酉壬寅丙午己酉庚申辛酉"),
        },
        good: &["安葬"],
        bad: &[],
    },
    Rule {
        name: "鸣吠",
        matcher: Matcher::Contains {
            needle: Text::DayPillar,
            haystack: Text::Literal("庚午壬申癸酉壬午甲申乙酉己酉丙申丁酉壬寅丙午庚寅庚申辛酉"),
        },
        good: &["破土", "安葬"],
        bad: &[],
    },
    Rule {
        name: "小葬",
        matcher: Matcher::Contains {
            needle: Text::DayPillar,
            haystack: Text::Literal("庚午壬辰甲辰乙巳甲寅丙辰庚寅"),
        },
        good: &["安葬"],
        bad: &[],
    },
    Rule {
        name: "鸣吠对",
        matcher: Matcher::Contains {
            needle: Text::DayPillar,
            haystack: Text::Literal("丙寅丁卯丙子辛卯甲午庚子癸卯壬子甲寅乙卯"),
        },
        good: &["破土", "启攒"],
        bad: &[],
    },
    Rule {
        name: "不守塚",
        matcher: Matcher::Contains {
            needle: Text::DayPillar,
            haystack: Text::Literal("庚午辛未壬申癸酉戊寅己卯壬午癸未甲申乙酉丁未甲午乙未丙申丁酉壬寅癸卯丙午戊申己酉庚申辛酉"),
        },
        good: &["破土"],
        bad: &[],
    },
    Rule {
        name: "王日",
        matcher: Matcher::Contains {
            needle: Text::Season(&["寅", "巳", "申", "亥"]),
            haystack: Text::DayBranch,
        },
        good: &[
            "颁诏", "覃恩", "施恩", "招贤", "举正直", "恤孤茕", "宣政事", "雪冤", "庆赐", "宴会",
            "出行", "安抚边境", "选将", "上官", "临政", "裁制",
        ],
        bad: &[],
    },
    Rule {
        name: "官日",
        matcher: Matcher::Contains {
            needle: Text::Season(&["卯", "午", "酉", "子"]),
            haystack: Text::DayBranch,
        },
        good: &["上官", "临政"],
        bad: &[],
    },
    Rule {
        name: "守日",
        matcher: Matcher::Contains {
            needle: Text::Season(&["酉", "子", "卯", "午"]),
            haystack: Text::DayBranch,
        },
        good: &["安抚边境", "上官", "临政"],
        bad: &[],
    },
    Rule {
        name: "相日",
        matcher: Matcher::Contains {
            needle: Text::Season(&["巳", "申", "亥", "寅"]),
            haystack: Text::DayBranch,
        },
        good: &["上官", "临政"],
        bad: &[],
    },
    Rule {
        name: "民日",
        matcher: Matcher::Contains {
            needle: Text::Season(&["午", "酉", "子", "卯"]),
            haystack: Text::DayBranch,
        },
        good: &[
            "宴会", "结婚姻", "纳采", "进人口", "搬移", "开市", "立券交易", "纳财", "栽种", "牧养",
            "纳畜",
        ],
        bad: &[],
    },
    Rule {
        name: "临日",
        matcher: Matcher::Contains {
            needle: Text::Month("辰酉午亥申丑戌卯子巳寅未"),
            haystack: Text::DayPillar,
        },
        good: &["上册", "上表章", "上官", "临政"],
        bad: &[],
    },
    Rule {
        name: "天贵",
        matcher: Matcher::Contains {
            needle: Text::DayStem,
            haystack: Text::Season(&["甲乙", "丙丁", "庚辛", "壬癸"]),
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "天喜",
        matcher: Matcher::Contains {
            needle: Text::Month("申酉戌亥子丑寅卯辰巳午未"),
            haystack: Text::DayBranch,
        },
        good: &[
            "施恩", "举正直", "庆赐", "宴会", "出行", "上官", "临政", "结婚姻", "纳采", "嫁娶",
        ],
        bad: &[],
    },
    Rule {
        name: "天富",
        matcher: Matcher::Contains {
            needle: Text::Month("寅卯辰巳午未申酉戌亥子丑"),
            haystack: Text::DayPillar,
        },
        good: &["安葬", "修仓库"],
        bad: &[],
    },
    Rule {
        name: "天恩",
        matcher: Matcher::Flag(Condition::TianEn),
        good: &["覃恩", "恤孤茕", "布政事", "雪冤", "庆赐", "宴会"],
        bad: &[],
    },
    Rule {
        name: "月恩",
        matcher: Matcher::Contains {
            needle: Text::Month("甲辛丙丁庚己戊辛壬癸庚乙"),
            haystack: Text::DayPillar,
        },
        good: SEASON_VIRTUE_FAVORS,
        bad: &[],
    },
    Rule {
        name: "天赦",
        matcher: Matcher::Contains {
            needle: Text::MonthList(&[
                "甲子", "甲子", "戊寅", "戊寅", "戊寅", "甲午", "甲午", "甲午", "戊申", "戊申",
                "戊申", "甲子",
            ]),
            haystack: Text::DayPillar,
        },
        good: &[
            "祭祀", "祈福", "求嗣", "上册", "上表章", "颁诏", "覃恩", "施恩", "招贤", "举正直",
            "恤孤茕", "宣政事", "雪冤", "庆赐", "宴会", "出行", "安抚边境", "选将", "上官", "临政",
            "结婚姻", "纳采", "嫁娶", "搬移", "解除", "求医疗病", "裁制", "营建", "缮城郭", "修造",
            "竖柱上梁", "修仓库", "栽种", "牧养", "纳畜", "安葬",
        ],
        bad: &["畋猎", "取鱼"],
    },
    Rule {
        name: "天愿",
        matcher: Matcher::Contains {
            needle: Text::MonthList(&[
                "甲子", "癸未", "甲午", "甲戌", "乙酉", "丙子", "丁丑", "戊午", "甲寅", "丙辰",
                "辛卯", "戊辰",
            ]),
            haystack: Text::DayPillar,
        },
        good: &[
            "祭祀", "祈福", "求嗣", "上册", "上表章", "颁诏", "覃恩", "施恩", "招贤", "举正直",
            "恤孤茕", "宣政事", "雪冤", "庆赐", "宴会", "出行", "安抚边境", "选将", "上官", "临政",
            "结婚姻", "纳采", "嫁娶", "进人口", "搬移", "裁制", "营建", "缮城郭", "修造",
            "竖柱上梁", "修仓库", "经络", "酝酿", "开市", "立券交易", "纳财", "栽种", "牧养",
            "纳畜", "安葬",
        ],
        bad: &[],
    },
    Rule {
        name: "天成",
        matcher: Matcher::Contains {
            needle: Text::Month("卯巳未酉亥丑卯巳未酉亥丑"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "天官",
        matcher: Matcher::Contains {
            needle: Text::Month("午申戌子寅辰午申戌子寅辰"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "天医",
        matcher: Matcher::Contains {
            needle: Text::Month("亥子丑寅卯辰巳午未申酉戌"),
            haystack: Text::DayPillar,
        },
        good: &["求医疗病"],
        bad: &[],
    },
    Rule {
        name: "天马",
        matcher: Matcher::Contains {
            needle: Text::Month("寅辰午申戌子寅辰午申戌子"),
            haystack: Text::DayPillar,
        },
        good: &["出行", "搬移"],
        bad: &[],
    },
    Rule {
        name: "驿马",
        matcher: Matcher::Contains {
            needle: Text::Month("寅亥申巳寅亥申巳寅亥申巳"),
            haystack: Text::DayPillar,
        },
        good: &["出行", "搬移"],
        bad: &[],
    },
    Rule {
        name: "天财",
        matcher: Matcher::Contains {
            needle: Text::Month("子寅辰午申戌子寅辰午申戌"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "福生",
        matcher: Matcher::Contains {
            needle: Text::Month("寅申酉卯戌辰亥巳子午丑未"),
            haystack: Text::DayPillar,
        },
        good: &["祭祀", "祈福"],
        bad: &[],
    },
    Rule {
        name: "福厚",
        matcher: Matcher::Contains {
            needle: Text::Season(&["寅", "巳", "申", "亥"]),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "福德",
        matcher: Matcher::Contains {
            needle: Text::Month("寅卯辰巳午未申酉戌亥子丑"),
            haystack: Text::DayPillar,
        },
        good: &["上册", "上表章", "庆赐", "宴会", "修宫室", "缮城郭"],
        bad: &[],
    },
    Rule {
        name: "天巫",
        matcher: Matcher::Contains {
            needle: Text::Month("寅卯辰巳午未申酉戌亥子丑"),
            haystack: Text::DayPillar,
        },
        good: &["求医疗病"],
        bad: &[],
    },
    Rule {
        name: "地财",
        matcher: Matcher::Contains {
            needle: Text::Month("丑卯巳未酉亥丑卯巳未酉亥"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "月财",
        matcher: Matcher::Contains {
            needle: Text::Month("酉亥午巳巳未酉亥午巳巳未"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "月空",
        matcher: Matcher::Contains {
            needle: Text::Month("丙甲壬庚丙甲壬庚丙甲壬庚"),
            haystack: Text::DayPillar,
        },
        good: &["上表章"],
        bad: &[],
    },
    Rule {
        name: "母仓",
        matcher: Matcher::Contains {
            needle: Text::DayBranch,
            haystack: Text::Season(&["亥子", "寅卯", "辰丑戌未", "申酉"]),
        },
        good: &["纳财", "栽种", "牧养", "纳畜"],
        bad: &[],
    },
    Rule {
        name: "明星",
        matcher: Matcher::Contains {
            needle: Text::Month("辰午甲戌子寅辰午甲戌子寅"),
            haystack: Text::DayPillar,
        },
        good: &["赴任", "诉讼", "安葬"],
        bad: &[],
    },
    Rule {
        name: "圣心",
        matcher: Matcher::Contains {
            needle: Text::Month("辰戌亥巳子午丑未寅申卯酉"),
            haystack: Text::DayPillar,
        },
        good: &["祭祀", "祈福"],
        bad: &[],
    },
    Rule {
        name: "禄库",
        matcher: Matcher::Contains {
            needle: Text::Month("寅卯辰巳午未申酉戌亥子丑"),
            haystack: Text::DayPillar,
        },
        good: &["纳财"],
        bad: &[],
    },
    Rule {
        name: "吉庆",
        matcher: Matcher::Contains {
            needle: Text::Month("未子酉寅亥辰丑午卯申巳戌"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "阴德",
        matcher: Matcher::Contains {
            needle: Text::Month("丑亥酉未巳卯丑亥酉未巳卯"),
            haystack: Text::DayPillar,
        },
        good: &["恤孤茕", "雪冤"],
        bad: &[],
    },
    Rule {
        name: "活曜",
        matcher: Matcher::Contains {
            needle: Text::Month("卯申巳戌未子酉寅亥辰丑午"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "除神",
        matcher: Matcher::Contains {
            needle: Text::DayBranch,
            haystack: Text::Literal("申酉"),
        },
        good: &["解除", "沐浴", "整容", "剃头", "整手足甲", "求医疗病", "扫舍宇"],
        bad: &[],
    },
    Rule {
        name: "解神",
        matcher: Matcher::Contains {
            needle: Text::Month("午午申申戌戌子子寅寅辰辰"),
            haystack: Text::DayPillar,
        },
        good: &["上表章", "解除", "沐浴", "整容", "剃头", "整手足甲", "求医疗病"],
        bad: &[],
    },
    Rule {
        name: "生气",
        matcher: Matcher::Contains {
            needle: Text::Month("戌亥子丑寅卯辰巳午未申酉"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["伐木", "畋猎", "取鱼"],
    },
    Rule {
        name: "普护",
        matcher: Matcher::Contains {
            needle: Text::Month("丑卯申寅酉卯戌辰亥巳子午"),
            haystack: Text::DayPillar,
        },
        good: &["祭祀", "祈福"],
        bad: &[],
    },
    Rule {
        name: "益后",
        matcher: Matcher::Contains {
            needle: Text::Month("巳亥子午丑未寅申卯酉辰戌"),
            haystack: Text::DayPillar,
        },
        good: &["祭祀", "祈福", "求嗣"],
        bad: &[],
    },
    Rule {
        name: "续世",
        matcher: Matcher::Contains {
            needle: Text::Month("午子丑未寅申卯酉辰戌巳亥"),
            haystack: Text::DayPillar,
        },
        good: &["祭祀", "祈福", "求嗣"],
        bad: &[],
    },
    Rule {
        name: "要安",
        matcher: Matcher::Contains {
            needle: Text::Month("未丑寅申卯酉辰戌巳亥午子"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "天后",
        matcher: Matcher::Contains {
            needle: Text::Month("寅亥申巳寅亥申巳寅亥申巳"),
            haystack: Text::DayPillar,
        },
        good: &["求医疗病"],
        bad: &[],
    },
    Rule {
        name: "天仓",
        matcher: Matcher::Contains {
            needle: Text::Month("辰卯寅丑子亥戌酉申未午巳"),
            haystack: Text::DayPillar,
        },
        good: &["进人口", "纳财", "纳畜"],
        bad: &[],
    },
    Rule {
        name: "敬安",
        matcher: Matcher::Contains {
            needle: Text::Month("子午未丑申寅酉卯戌辰亥巳"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "玉宇",
        matcher: Matcher::Contains {
            needle: Text::Month("申寅卯酉辰戌巳亥午子未丑"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "金堂",
        matcher: Matcher::Contains {
            needle: Text::Month("酉卯辰戌巳亥午子未丑申寅"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "吉期",
        matcher: Matcher::Contains {
            needle: Text::Month("丑寅卯辰巳午未申酉戌亥子"),
            haystack: Text::DayPillar,
        },
        good: &["施恩", "举正直", "出行", "上官", "临政"],
        bad: &[],
    },
    Rule {
        name: "小时",
        matcher: Matcher::Contains {
            needle: Text::Month("子丑寅卯辰巳午未申酉戌亥"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "兵福",
        matcher: Matcher::Contains {
            needle: Text::Month("子丑寅卯辰巳午未申酉戌亥"),
            haystack: Text::DayPillar,
        },
        good: &["安抚边境", "选将", "出师"],
        bad: &[],
    },
    Rule {
        name: "兵宝",
        matcher: Matcher::Contains {
            needle: Text::Month("丑寅卯辰巳午未申酉戌亥子"),
            haystack: Text::DayPillar,
        },
        good: &["安抚边境", "选将", "出师"],
        bad: &[],
    },
    Rule {
        name: "兵吉",
        matcher: Matcher::Contains {
            needle: Text::DayBranch,
            haystack: Text::MonthList(&[
                "寅卯辰巳", "丑寅卯辰", "子丑寅卯", "亥子丑寅", "戌亥子丑", "酉戌亥子", "申酉戌亥",
                "未申酉戌", "午未申酉", "巳午未申", "辰巳午未", "卯辰巳午",
            ]),
        },
        good: &["安抚边境", "选将", "出师"],
        bad: &[],
    },
];
