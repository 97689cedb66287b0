//! Naming tables of the derived almanac attributes.

/// Nayin (纳音) of each pair of consecutive pillars, 甲子乙丑 first.
pub const NAYIN: [&str; 30] = [
    "海中金", "炉中火", "大林木", "路旁土", "剑锋金", "山头火", "涧下水", "城头土", "白蜡金", "杨柳木",
    "泉中水", "屋上土", "霹雳火", "松柏木", "长流水", "沙中金", "山下火", "平地木", "壁上土", "金箔金",
    "覆灯火", "天河水", "大驿土", "钗钏金", "桑柘木", "大溪水", "沙中土", "天上火", "石榴木", "大海水",
];

/// The 28 lunar lodges, 角木蛟 first.
pub const LODGES: [&str; 28] = [
    "角木蛟", "亢金龙", "氐土貉", "房日兔", "心月狐", "尾火虎", "箕水豹", //
    "斗木獬", "牛金牛", "女土蝠", "虚日鼠", "危月燕", "室火猪", "壁水獝", //
    "奎木狼", "娄金狗", "胃土彘", "昴日鸡", "毕月乌", "觜火猴", "参水猿", //
    "井木犴", "鬼金羊", "柳土獐", "星日马", "张月鹿", "翼火蛇", "轸水蚓", //
];

/// Peng Zu taboos: ten by stem, then twelve by branch.
pub const PENG_TABOOS: [&str; 22] = [
    "甲不开仓财物耗散",
    "乙不栽植千株不长",
    "丙不修灶必见灾殃",
    "丁不剃头头必生疮",
    "戊不受田田主不祥",
    "己不破券二比并亡",
    "庚不经络织机虚张",
    "辛不合酱主人不尝",
    "壬不汲水更难提防",
    "癸不词讼理弱敌强",
    "子不问卜自惹祸殃",
    "丑不冠带主不还乡",
    "寅不祭祀神鬼不尝",
    "卯不穿井水泉不香",
    "辰不哭泣必主重丧",
    "巳不远行财物伏藏",
    "午不苫盖屋主更张",
    "未不服药毒气入肠",
    "申不安床鬼祟入房",
    "酉不会客醉坐颠狂",
    "戌不吃犬作怪上床",
    "亥不嫁娶不利新郎",
];

/// Fetal god location by day pillar, 甲子 first.
pub const FETAL_GODS: [&str; 60] = [
    "占门碓外东南", "碓磨厕外东南", "厨灶炉外正南", "仓库门外正南", "房床栖外正南",
    "占门床外正南", "占碓磨外正南", "厨灶厕外西南", "仓库炉外西南", "房床门外西南",
    "门鸡栖外西南", "碓磨床外西南", "厨灶碓外西南", "仓库厕外正西", "房床炉外正西",
    "大门外正西", "碓磨栖外正西", "厨灶床外正西", "仓库碓外西北", "房床厕外西北",
    "门炉外西北", "碓磨门外西北", "厨灶栖外西北", "仓库床外西北", "房床碓外正北",
    "占门厕外正北", "碓磨炉外正北", "厨灶门外正北", "仓库栖外正北", "占房床房内北",
    "占门碓房内北", "碓磨厕房内北", "厨灶炉房内北", "仓库门房内北", "房床栖房内中",
    "占门床房内中", "占碓磨房内南", "厨灶厕房内南", "仓库炉房内南", "房床门房内西",
    "门鸡栖房内东", "碓磨床房内东", "厨灶碓房内东", "仓库厕房内东", "房床炉房内中",
    "占大门外东北", "碓磨栖外东北", "厨灶床外东北", "仓库碓外东北", "房床厕外东北",
    "占门炉外东北", "碓磨门外正东", "厨灶栖外正东", "仓库床外正东", "房床碓外正东",
    "占门厕外正东", "碓磨炉外东南", "厨灶门外东南", "仓库栖外东南", "占房床外东南",
];

/// Compass directions in trigram order.
pub const DIRECTIONS: [&str; 8] = ["正北", "东北", "正东", "东南", "正南", "西南", "正西", "西北"];

/// The eight trigrams, aligned with [`DIRECTIONS`].
pub const TRIGRAMS: [char; 8] = ['坎', '艮', '震', '巽', '离', '坤', '兑', '乾'];

/// Trigram of each lucky god, indexed by day stem. Order: 喜神, 财神, 福神, 阳贵, 阴贵.
pub const LUCKY_GOD_TRIGRAMS: [(&str, &str); 5] = [
    ("喜神", "艮乾坤离巽艮乾坤离巽"),
    ("财神", "艮艮坤坤坎坎震震离离"),
    ("福神", "坎坤乾巽艮坎坤乾巽艮"),
    ("阳贵", "坤坤兑乾艮坎离艮震巽"),
    ("阴贵", "艮坎乾兑坤坤艮离巽震"),
];

/// Organ meridian of each two-hour block, 子 first.
pub const MERIDIANS: [&str; 12] = [
    "胆", "肝", "肺", "大肠", "胃", "脾", "心", "小肠", "膀胱", "肾", "心包", "三焦",
];

/// Western star signs, 摩羯座 first.
pub const STAR_SIGNS: [&str; 12] = [
    "摩羯座", "水瓶座", "双鱼座", "白羊座", "金牛座", "双子座", "巨蟹座", "狮子座", "处女座",
    "天秤座", "天蝎座", "射手座",
];

/// First `(month, day)` of each star sign after 摩羯座.
pub const STAR_SIGN_STARTS: [(u32, u32); 12] = [
    (1, 20),
    (2, 19),
    (3, 21),
    (4, 20),
    (5, 21),
    (6, 22),
    (7, 23),
    (8, 23),
    (9, 23),
    (10, 24),
    (11, 23),
    (12, 22),
];

/// The twelve Jupiter stations (星次), 玄枵 first.
pub const EAST_ZODIAC: [&str; 12] = [
    "玄枵", "娵訾", "降娄", "大梁", "实沈", "鹑首", "鹑火", "鹑尾", "寿星", "大火", "析木", "星纪",
];

/// Nine flying stars of the reference day 2019-01-17.
pub const FLYING_STAR_SEED: [i64; 9] = [7, 3, 5, 6, 8, 1, 2, 4, 9];
