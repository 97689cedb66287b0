//! Inauspicious demons (凶煞), in matching order.

use huangli_base::{SEASON_MIDPOINTS, SEASON_STARTS};

use crate::rules::{Condition, Matcher, Rule, Text};

/// Avoided under the severe month demons.
const SEVERE_AVOIDS: &[&str] = &[
    "祈福", "求嗣", "上册", "上表章", "颁诏", "施恩", "招贤", "举正直", "宣政事", "布政事", "庆赐",
    "宴会", "冠带", "出行", "安抚边境", "选将", "出师", "上官", "临政", "结婚姻", "纳采", "嫁娶",
    "进人口", "搬移", "安床", "解除", "整容", "剃头", "整手足甲", "求医疗病", "裁制", "营建",
    "修宫室", "缮城郭", "筑堤防", "修造", "竖柱上梁", "修仓库", "鼓铸", "经络", "酝酿", "开市",
    "立券交易", "纳财", "开仓", "修置产室", "开渠", "穿井", "安碓硙", "塞穴", "补垣", "修饰垣墙",
    "破屋坏垣", "栽种", "牧养", "纳畜", "破土", "安葬", "启攒",
];

/// Avoided under 天吏 and 大时.
const OFFICIAL_AVOIDS: &[&str] = &[
    "祈福", "求嗣", "上册", "上表章", "施恩", "招贤", "举正直", "冠带", "出行", "安抚边境", "选将",
    "出师", "上官", "临政", "结婚姻", "纳采", "嫁娶", "进人口", "搬移", "安床", "解除", "求医疗病",
    "营建", "修宫室", "缮城郭", "筑堤防", "修造", "竖柱上梁", "修仓库", "开市", "立券交易", "纳财",
    "开仓", "修置产室", "栽种", "牧养", "纳畜",
];

/// Earthworks avoided while the earth is disturbed.
const EARTHWORK_AVOIDS: &[&str] = &[
    "营建", "修宫室", "缮城郭", "筑堤防", "修造", "修仓库", "修置产室", "开渠", "穿井", "安碓硙",
    "补垣", "修饰垣墙", "平治道涂", "破屋坏垣", "栽种", "破土",
];

/// Demon rules, matched in order.
pub static DEMONS: &[Rule] = &[
    Rule {
        name: "岁破",
        matcher: Matcher::Flag(Condition::SuiPo),
        good: &[],
        bad: &["修造", "搬移", "嫁娶", "出行"],
    },
    Rule {
        name: "天罡",
        matcher: Matcher::Contains {
            needle: Text::Month("卯戌巳子未寅酉辰亥午丑申"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["安葬"],
    },
    Rule {
        name: "河魁",
        matcher: Matcher::Contains {
            needle: Text::Month("酉辰亥午丑申卯戌巳子未寅"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["安葬"],
    },
    Rule {
        name: "死神",
        matcher: Matcher::Contains {
            needle: Text::Month("卯辰巳午未申酉戌亥子丑寅"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[
            "安抚边境", "选将", "出师", "进人口", "解除", "求医疗病", "修置产室", "栽种", "牧养",
            "纳畜",
        ],
    },
    Rule {
        name: "死气",
        matcher: Matcher::Contains {
            needle: Text::Month("辰巳午未申酉戌亥子丑寅卯"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["安抚边境", "选将", "出师", "解除", "求医疗病", "修置产室", "栽种"],
    },
    Rule {
        name: "官符",
        matcher: Matcher::Contains {
            needle: Text::Month("辰巳午未申酉戌亥子丑寅卯"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["上表章", "上册"],
    },
    Rule {
        name: "月建",
        matcher: Matcher::Contains {
            needle: Text::Month("子丑寅卯辰巳午未申酉戌亥"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[
            "祈福", "求嗣", "上册", "上表章", "结婚姻", "纳采", "解除", "整容", "剃头", "整手足甲",
            "求医疗病", "营建", "修宫室", "缮城郭", "修造", "竖柱上梁", "修仓库", "开仓",
            "修置产室", "破屋坏垣", "伐木", "栽种", "破土", "安葬", "启攒",
        ],
    },
    Rule {
        name: "月破",
        matcher: Matcher::Contains {
            needle: Text::Month("午未申酉戌亥子丑寅卯辰巳"),
            haystack: Text::DayPillar,
        },
        good: &["破屋坏垣"],
        bad: &[
            "祈福", "求嗣", "上册", "上表章", "颁诏", "施恩", "招贤", "举正直", "宣政事", "布政事",
            "庆赐", "宴会", "冠带", "出行", "安抚边境", "选将", "出师", "上官", "临政", "结婚姻",
            "纳采", "嫁娶", "进人口", "搬移", "安床", "整容", "剃头", "整手足甲", "裁制", "营建",
            "修宫室", "缮城郭", "筑堤防", "修造", "竖柱上梁", "修仓库", "鼓铸", "经络", "酝酿",
            "开市", "立券交易", "纳财", "开仓", "修置产室", "开渠", "穿井", "安碓硙", "塞穴",
            "补垣", "修饰垣墙", "伐木", "栽种", "牧养", "纳畜", "破土", "安葬", "启攒",
        ],
    },
    Rule {
        name: "月煞",
        matcher: Matcher::Contains {
            needle: Text::Month("未辰丑戌未辰丑戌未辰丑戌"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[
            "祈福", "求嗣", "上册", "上表章", "颁诏", "施恩", "招贤", "举正直", "宣政事", "布政事",
            "庆赐", "宴会", "冠带", "出行", "安抚边境", "选将", "出师", "上官", "临政", "结婚姻",
            "纳采", "嫁娶", "进人口", "搬移", "安床", "解除", "整容", "剃头", "整手足甲",
            "求医疗病", "裁制", "营建", "修宫室", "缮城郭", "筑堤防", "修造", "竖柱上梁", "修仓库",
            "鼓铸", "经络", "酝酿", "开市", "立券交易", "纳财", "开仓", "修置产室", "开渠", "穿井",
            "安碓硙", "塞穴", "补垣", "修饰垣墙", "破屋坏垣", "栽种", "牧养", "纳畜", "安葬",
        ],
    },
    Rule {
        name: "月害",
        matcher: Matcher::Contains {
            needle: Text::Month("未午巳辰卯寅丑子亥戌酉申"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[
            "祈福", "求嗣", "上册", "上表章", "庆赐", "宴会", "安抚边境", "选将", "出师", "上官",
            "纳采", "嫁娶", "进人口", "求医疗病", "修仓库", "经络", "酝酿", "开市", "立券交易",
            "纳财", "开仓", "修置产室", "牧养", "纳畜", "破土", "安葬", "启攒",
        ],
    },
    Rule {
        name: "月刑",
        matcher: Matcher::Contains {
            needle: Text::Month("卯戌巳子辰申午丑寅酉未亥"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: SEVERE_AVOIDS,
    },
    Rule {
        name: "月厌",
        matcher: Matcher::Contains {
            needle: Text::Month("子亥戌酉申未午巳辰卯寅丑"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[
            "祈福", "求嗣", "上册", "上表章", "颁诏", "施恩", "招贤", "举正直", "宣政事", "布政事",
            "庆赐", "宴会", "冠带", "出行", "安抚边境", "选将", "出师", "上官", "临政", "结婚姻",
            "纳采", "嫁娶", "进人口", "搬移", "远回", "安床", "解除", "整容", "剃头", "整手足甲",
            "求医疗病", "裁制", "营建", "修宫室", "缮城郭", "筑堤防", "修造", "竖柱上梁", "修仓库",
            "鼓铸", "经络", "酝酿", "开市", "立券交易", "纳财", "开仓", "修置产室", "开渠", "穿井",
            "安碓硙", "塞穴", "补垣", "修饰垣墙", "平治道涂", "破屋坏垣", "伐木", "栽种", "牧养",
            "纳畜", "破土", "安葬", "启攒",
        ],
    },
    Rule {
        name: "月忌",
        matcher: Matcher::LunarDayIn(&[5, 14, 23]),
        good: &[],
        bad: &["出行", "乘船渡水"],
    },
    Rule {
        name: "月虚",
        matcher: Matcher::Contains {
            needle: Text::Month("未辰丑戌未辰丑戌未辰丑戌"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["修仓库", "纳财", "开仓"],
    },
    Rule {
        name: "灾煞",
        matcher: Matcher::Contains {
            needle: Text::Month("午卯子酉午卯子酉午卯子酉"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: SEVERE_AVOIDS,
    },
    Rule {
        name: "劫煞",
        matcher: Matcher::Contains {
            needle: Text::Month("巳寅亥申巳寅亥申巳寅亥申"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: SEVERE_AVOIDS,
    },
    Rule {
        name: "厌对",
        matcher: Matcher::Contains {
            needle: Text::Month("午巳辰卯寅丑子亥戌酉申未"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["嫁娶"],
    },
    Rule {
        name: "招摇",
        matcher: Matcher::Contains {
            needle: Text::Month("午巳辰卯寅丑子亥戌酉申未"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["取鱼", "乘船渡水"],
    },
    Rule {
        name: "小红砂",
        matcher: Matcher::Contains {
            needle: Text::Month("酉丑巳酉丑巳酉丑巳酉丑巳"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["嫁娶"],
    },
    Rule {
        name: "往亡",
        matcher: Matcher::Contains {
            needle: Text::Month("戌丑寅巳申亥卯午酉子辰未"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[
            "上册", "上表章", "颁诏", "招贤", "宣政事", "出行", "安抚边境", "选将", "出师", "上官",
            "临政", "嫁娶", "进人口", "搬移", "求医疗病", "捕捉", "畋猎", "取鱼",
        ],
    },
    Rule {
        name: "重丧",
        matcher: Matcher::Contains {
            needle: Text::Month("癸己甲乙己丙丁己庚辛己壬"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["嫁娶", "安葬"],
    },
    Rule {
        name: "重复",
        matcher: Matcher::Contains {
            needle: Text::Month("癸己庚辛己壬癸戊甲乙己壬"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["嫁娶", "安葬"],
    },
    Rule {
        name: "杨公忌",
        matcher: Matcher::LunarDateIn(&[
            (1, 13), (2, 11), (3, 9), (4, 7), (5, 5), (6, 2), (7, 1),
            (7, 29), (8, 27), (9, 25), (10, 23), (11, 21), (12, 19),
        ]),
        good: &[],
        bad: &["开张", "修造", "嫁娶", "立券"],
    },
    Rule {
        name: "神号",
        matcher: Matcher::Contains {
            needle: Text::Month("申酉戌亥子丑寅卯辰巳午未"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "妨择",
        matcher: Matcher::Contains {
            needle: Text::Month("辰辰午午申申戌戌子子寅寅"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "披麻",
        matcher: Matcher::Contains {
            needle: Text::Month("午卯子酉午卯子酉午卯子酉"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["嫁娶", "入宅"],
    },
    Rule {
        name: "大耗",
        matcher: Matcher::Contains {
            needle: Text::Month("辰巳午未申酉戌亥子丑寅卯"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["修仓库", "开市", "立券交易", "纳财", "开仓"],
    },
    Rule {
        name: "伏兵",
        matcher: Matcher::Contains {
            needle: Text::YearBranch4("丙甲壬庚"),
            haystack: Text::DayStem,
        },
        good: &[],
        bad: &["修仓库", "修造", "出师"],
    },
    Rule {
        name: "大祸",
        matcher: Matcher::Contains {
            needle: Text::YearBranch4("丁乙癸辛"),
            haystack: Text::DayStem,
        },
        good: &[],
        bad: &["修仓库", "修造", "出师"],
    },
    Rule {
        name: "天吏",
        matcher: Matcher::Contains {
            needle: Text::Month("卯子酉午卯子酉午卯子酉午"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: OFFICIAL_AVOIDS,
    },
    Rule {
        name: "天瘟",
        matcher: Matcher::Contains {
            needle: Text::Month("丑卯未戌辰寅午子酉申巳亥"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["修造", "求医疗病", "纳畜"],
    },
    Rule {
        name: "天狱",
        matcher: Matcher::Contains {
            needle: Text::Month("午酉子卯午酉子卯午酉子卯"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "天火",
        matcher: Matcher::Contains {
            needle: Text::Month("午酉子卯午酉子卯午酉子卯"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["苫盖"],
    },
    Rule {
        name: "天棒",
        matcher: Matcher::Contains {
            needle: Text::Month("寅辰午申戌子寅辰午申戌子"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "天狗",
        matcher: Matcher::Contains {
            needle: Text::Month("寅卯辰巳午未申酉戌亥子丑"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["祭祀"],
    },
    Rule {
        name: "天狗下食",
        matcher: Matcher::Contains {
            needle: Text::Month("戌亥子丑寅卯辰巳午未申酉"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["祭祀"],
    },
    Rule {
        name: "天贼",
        matcher: Matcher::Contains {
            needle: Text::Month("卯寅丑子亥戌酉申未午巳辰"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["出行", "修仓库", "开仓"],
    },
    Rule {
        name: "地囊",
        matcher: Matcher::Contains {
            needle: Text::DayPillar,
            haystack: Text::MonthList(&[
                "辛未辛酉", "乙酉乙未", "庚子庚午", "癸未癸丑", "甲子甲寅", "己卯己丑", "戊辰戊午",
                "癸未癸巳", "丙寅丙申", "丁卯丁巳", "戊辰戊子", "庚戌庚子",
            ]),
        },
        good: &[],
        bad: EARTHWORK_AVOIDS,
    },
    Rule {
        name: "地火",
        matcher: Matcher::Contains {
            needle: Text::Month("子亥戌酉申未午巳辰卯寅丑"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["栽种"],
    },
    Rule {
        name: "独火",
        matcher: Matcher::Contains {
            needle: Text::Month("未午巳辰卯寅丑子亥戌酉申"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["修造"],
    },
    Rule {
        name: "受死",
        matcher: Matcher::Contains {
            needle: Text::Month("卯酉戌辰亥巳子午丑未寅申"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["畋猎"],
    },
    Rule {
        name: "黄沙",
        matcher: Matcher::Contains {
            needle: Text::Month("寅子午寅子午寅子午寅子午"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["出行"],
    },
    Rule {
        name: "六不成",
        matcher: Matcher::Contains {
            needle: Text::Month("卯未寅午戌巳酉丑申子辰亥"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["修造"],
    },
    Rule {
        name: "小耗",
        matcher: Matcher::Contains {
            needle: Text::Month("卯辰巳午未申酉戌亥子丑寅"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["修仓库", "开市", "立券交易", "纳财", "开仓"],
    },
    Rule {
        name: "神隔",
        matcher: Matcher::Contains {
            needle: Text::Month("酉未巳卯丑亥酉未巳卯丑亥"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["祭祀", "祈福", "安葬"],
    },
    Rule {
        name: "朱雀",
        matcher: Matcher::Contains {
            needle: Text::Month("亥丑卯巳未酉亥丑卯巳未酉"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["嫁娶"],
    },
    Rule {
        name: "白虎",
        matcher: Matcher::Contains {
            needle: Text::Month("寅辰午申戌子寅辰午申戌子"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["安葬"],
    },
    Rule {
        name: "玄武",
        matcher: Matcher::Contains {
            needle: Text::Month("巳未酉亥丑卯巳未酉亥丑卯"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["安葬"],
    },
    Rule {
        name: "勾陈",
        matcher: Matcher::Contains {
            needle: Text::Month("未酉亥丑卯巳未酉亥丑卯巳"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "木马",
        matcher: Matcher::Contains {
            needle: Text::Month("辰午巳未酉申戌子亥丑卯寅"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "破败",
        matcher: Matcher::Contains {
            needle: Text::Month("辰午申戌子寅辰午申戌子寅"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "殃败",
        matcher: Matcher::Contains {
            needle: Text::Month("巳辰卯寅丑子亥戌酉申未午"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "雷公",
        matcher: Matcher::Contains {
            needle: Text::Month("巳申寅亥巳申寅亥巳申寅亥"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "飞廉",
        matcher: Matcher::Contains {
            needle: Text::Month("申酉戌巳午未寅卯辰亥子丑"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["纳畜", "修造", "搬移", "嫁娶"],
    },
    Rule {
        name: "大煞",
        matcher: Matcher::Contains {
            needle: Text::Month("申酉戌巳午未寅卯辰亥子丑"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["安抚边境", "选将", "出师"],
    },
    Rule {
        name: "枯鱼",
        matcher: Matcher::Contains {
            needle: Text::Month("申巳辰丑戌未卯子酉午寅亥"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["栽种"],
    },
    Rule {
        name: "九空",
        matcher: Matcher::Contains {
            needle: Text::Month("申巳辰丑戌未卯子酉午寅亥"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["进人口", "修仓库", "开市", "立券交易", "纳财", "开仓"],
    },
    Rule {
        name: "八座",
        matcher: Matcher::Contains {
            needle: Text::Month("酉戌亥子丑寅卯辰巳午未申"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "八风触水龙",
        matcher: Matcher::Contains {
            needle: Text::DayPillar,
            haystack: Text::Season(&["丁丑己酉", "甲申甲辰", "辛未丁未", "甲戌甲寅"]),
        },
        good: &[],
        bad: &["取鱼", "乘船渡水"],
    },
    Rule {
        name: "血忌",
        matcher: Matcher::Contains {
            needle: Text::MonthList(&["午", "子", "丑", "未", "寅", "申", "卯", "酉", "辰", "戌", "巳", "亥"]),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["针刺"],
    },
    Rule {
        name: "阴错",
        matcher: Matcher::Contains {
            needle: Text::MonthPillar("壬子癸丑庚寅辛卯庚辰丁巳丙午丁未甲申乙酉甲戌癸亥"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "三娘煞",
        matcher: Matcher::LunarDayIn(&[3, 7, 13, 18, 22, 27]),
        good: &[],
        bad: &["嫁娶", "结婚姻"],
    },
    Rule {
        name: "四绝",
        matcher: Matcher::TomorrowIsTerm(SEASON_STARTS),
        good: &[],
        bad: &["出行", "上官", "嫁娶", "进人口", "搬移", "开市", "立券交易", "祭祀"],
    },
    Rule {
        name: "四离",
        matcher: Matcher::TomorrowIsTerm(SEASON_MIDPOINTS),
        good: &[],
        bad: &["出行", "嫁娶"],
    },
    Rule {
        name: "四击",
        matcher: Matcher::Contains {
            needle: Text::Month("未未戌戌戌丑丑丑辰辰辰未"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["安抚边境", "选将", "出师"],
    },
    Rule {
        name: "四耗",
        matcher: Matcher::Contains {
            needle: Text::DayPillar,
            haystack: Text::Season(&["壬子", "乙卯", "戊午", "辛酉"]),
        },
        good: &[],
        bad: &["安抚边境", "选将", "出师", "修仓库", "开市", "立券交易", "纳财", "开仓"],
    },
    Rule {
        name: "四穷",
        matcher: Matcher::Contains {
            needle: Text::DayPillar,
            haystack: Text::Season(&["乙亥", "丁亥", "辛亥", "癸亥"]),
        },
        good: &[],
        bad: &[
            "安抚边境", "选将", "出师", "结婚姻", "纳采", "嫁娶", "进人口", "修仓库", "开市",
            "立券交易", "纳财", "开仓", "安葬",
        ],
    },
    Rule {
        name: "四忌",
        matcher: Matcher::Contains {
            needle: Text::DayPillar,
            haystack: Text::Season(&["甲子", "丙子", "庚子", "壬子"]),
        },
        good: &[],
        bad: &["安抚边境", "选将", "出师", "结婚姻", "纳采", "嫁娶", "安葬"],
    },
    Rule {
        name: "四废",
        matcher: Matcher::Contains {
            needle: Text::DayPillar,
            haystack: Text::Season(&["庚申辛酉", "壬子癸亥", "甲寅乙卯", "丁巳丙午"]),
        },
        good: &[],
        bad: &[
            "祈福", "求嗣", "上册", "上表章", "颁诏", "施恩", "招贤", "举正直", "宣政事", "布政事",
            "庆赐", "宴会", "冠带", "出行", "安抚边境", "选将", "出师", "上官", "临政", "结婚姻",
            "纳采", "嫁娶", "进人口", "搬移", "安床", "解除", "求医疗病", "裁制", "营建", "修宫室",
            "缮城郭", "筑堤防", "修造", "竖柱上梁", "修仓库", "鼓铸", "经络", "酝酿", "开市",
            "立券交易", "纳财", "开仓", "修置产室", "开渠", "穿井", "安碓硙", "塞穴", "补垣",
            "修饰垣墙", "栽种", "牧养", "纳畜", "破土", "安葬", "启攒",
        ],
    },
    Rule {
        name: "五墓",
        matcher: Matcher::Contains {
            needle: Text::MonthList(&[
                "壬辰", "戊辰", "乙未", "乙未", "戊辰", "丙戌", "丙戌", "戊辰", "辛丑", "辛丑",
                "戊辰", "壬辰",
            ]),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[
            "冠带", "出行", "安抚边境", "选将", "出师", "上官", "临政", "结婚姻", "纳采", "嫁娶",
            "进人口", "搬移", "安床", "解除", "求医疗病", "营建", "修宫室", "缮城郭", "筑堤防",
            "修造", "竖柱上梁", "开市", "立券交易", "修置产室", "栽种", "牧养", "纳畜", "破土",
            "安葬", "启攒",
        ],
    },
    Rule {
        name: "五虚",
        matcher: Matcher::Contains {
            needle: Text::DayBranch,
            haystack: Text::Season(&["巳酉丑", "申子辰", "亥卯未", "寅午戌"]),
        },
        good: &[],
        bad: &["修仓库", "开仓"],
    },
    Rule {
        name: "五离",
        matcher: Matcher::Contains {
            needle: Text::DayBranch,
            haystack: Text::Literal("申酉"),
        },
        good: &["沐浴"],
        bad: &["庆赐", "宴会", "结婚姻", "纳采", "立券交易"],
    },
    Rule {
        name: "五鬼",
        matcher: Matcher::Contains {
            needle: Text::Month("未戌午寅辰酉卯申丑巳子亥"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["出行"],
    },
    Rule {
        name: "八专",
        matcher: Matcher::OneOf {
            value: Text::DayPillar,
            set: &["丁未", "己未", "庚申", "甲寅", "癸丑"],
        },
        good: &[],
        bad: &["安抚边境", "选将", "出师", "结婚姻", "纳采", "嫁娶"],
    },
    Rule {
        name: "九坎",
        matcher: Matcher::Contains {
            needle: Text::Month("申巳辰丑戌未卯子酉午寅亥"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["塞穴", "补垣", "取鱼", "乘船渡水"],
    },
    Rule {
        name: "九焦",
        matcher: Matcher::Contains {
            needle: Text::Month("申巳辰丑戌未卯子酉午寅亥"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["鼓铸", "栽种"],
    },
    Rule {
        name: "天转",
        matcher: Matcher::Contains {
            needle: Text::SeasonPillar("乙卯丙午辛酉壬子"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["修造", "搬移", "嫁娶"],
    },
    Rule {
        name: "地转",
        matcher: Matcher::Contains {
            needle: Text::SeasonPillar("辛卯戊午癸酉丙子"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["修造", "搬移", "嫁娶"],
    },
    Rule {
        name: "月建转杀",
        matcher: Matcher::Contains {
            needle: Text::Season(&["卯", "午", "酉", "子"]),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["修造"],
    },
    Rule {
        name: "荒芜",
        matcher: Matcher::Contains {
            needle: Text::DayBranch,
            haystack: Text::Season(&["巳酉丑", "申子辰", "亥卯未", "寅午戌"]),
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "蚩尤",
        matcher: Matcher::Contains {
            needle: Text::Month6("戌子寅辰午申"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "大时",
        matcher: Matcher::Contains {
            needle: Text::Month("酉午卯子酉午卯子酉午卯子"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: OFFICIAL_AVOIDS,
    },
    Rule {
        name: "大败",
        matcher: Matcher::Contains {
            needle: Text::Month("酉午卯子酉午卯子酉午卯子"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "咸池",
        matcher: Matcher::Contains {
            needle: Text::Month("酉午卯子酉午卯子酉午卯子"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["嫁娶", "取鱼", "乘船渡水"],
    },
    Rule {
        name: "土符",
        matcher: Matcher::Contains {
            needle: Text::Month("申子丑巳酉寅午戌卯未亥辰"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: EARTHWORK_AVOIDS,
    },
    Rule {
        name: "土府",
        matcher: Matcher::Contains {
            needle: Text::Month("子丑寅卯辰巳午未申酉戌亥"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: EARTHWORK_AVOIDS,
    },
    Rule {
        name: "土王用事",
        matcher: Matcher::CountdownIn(0..=17),
        good: &[],
        bad: EARTHWORK_AVOIDS,
    },
    Rule {
        name: "血支",
        matcher: Matcher::Contains {
            needle: Text::Month("亥子丑寅卯辰巳午未申酉戌"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["针刺"],
    },
    Rule {
        name: "游祸",
        matcher: Matcher::Contains {
            needle: Text::Month("亥申巳寅亥申巳寅亥申巳寅"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["祈福", "求嗣", "解除", "求医疗病"],
    },
    Rule {
        name: "归忌",
        matcher: Matcher::Contains {
            needle: Text::Month("寅子丑寅子丑寅子丑寅子丑"),
            haystack: Text::DayPillar,
        },
        good: &[],
        bad: &["搬移", "远回"],
    },
    Rule {
        name: "岁薄",
        matcher: Matcher::MonthPillarIn(&[(4, "戊午"), (4, "丙午"), (10, "壬子"), (10, "戊子")]),
        good: &[],
        bad: &[],
    },
    Rule {
        name: "逐阵",
        matcher: Matcher::MonthPillarIn(&[(6, "戊午"), (6, "丙午"), (12, "壬子"), (12, "戊子")]),
        good: &[],
        bad: &[],
    },
    Rule {
        name: "阴阳交破",
        matcher: Matcher::MonthPillarIn(&[(10, "丁巳")]),
        good: &[],
        bad: &[],
    },
    Rule {
        name: "宝日",
        matcher: Matcher::OneOf {
            value: Text::DayPillar,
            set: &[
                "丁未", "丁丑", "丙戌", "甲午", "庚子", "壬寅", "癸卯", "乙巳", "戊申", "己酉",
                "辛亥", "丙辰",
            ],
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "义日",
        matcher: Matcher::OneOf {
            value: Text::DayPillar,
            set: &[
                "甲子", "丙寅", "丁卯", "己巳", "辛未", "壬申", "癸酉", "乙亥", "庚辰", "辛丑",
                "庚戌", "戊午",
            ],
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "制日",
        matcher: Matcher::OneOf {
            value: Text::DayPillar,
            set: &[
                "乙丑", "甲戌", "壬午", "戊子", "庚寅", "辛卯", "癸巳", "乙未", "丙申", "丁酉",
                "己亥", "甲辰",
            ],
        },
        good: &[],
        bad: &[],
    },
    Rule {
        name: "伐日",
        matcher: Matcher::OneOf {
            value: Text::DayPillar,
            set: &[
                "庚午", "辛巳", "丙子", "戊寅", "己卯", "癸未", "癸丑", "甲申", "乙酉", "丁亥",
                "壬辰", "壬戌",
            ],
        },
        good: &[],
        bad: &["安抚边境", "选将", "出师"],
    },
    Rule {
        name: "专日",
        matcher: Matcher::OneOf {
            value: Text::DayPillar,
            set: &[
                "甲寅", "乙卯", "丁巳", "丙午", "庚申", "辛酉", "癸亥", "壬子", "戊辰", "戊戌",
                "己丑", "己未",
            ],
        },
        good: &[],
        bad: &["安抚边境", "选将", "出师"],
    },
    Rule {
        name: "重日",
        matcher: Matcher::Contains {
            needle: Text::DayBranch,
            haystack: Text::Literal("巳亥"),
        },
        good: &[],
        bad: &["破土", "安葬", "启攒"],
    },
    Rule {
        name: "复日",
        matcher: Matcher::Contains {
            needle: Text::Month("癸巳甲乙戊丙丁巳庚辛戊壬"),
            haystack: Text::DayPillar,
        },
        good: &["裁制"],
        bad: &["破土", "安葬", "启攒"],
    },
];
