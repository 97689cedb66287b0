//! Lunar month codes, lunar new-year anchors and packed solar terms.
//!
//! Regenerated from apparent solar longitudes and true new moons,
//! reckoned in Beijing civil time (UTC+8 from 1929, local mean time of
//! 116°25′E before).

/// First lunar year covered by [`LUNAR_MONTH_DATA`].
pub const LUNAR_MONTH_FIRST_YEAR: i32 = 1900;

/// Per-lunar-year month layout, 1900..=2100.
///
/// Bit `m-1` set: month `m` has 30 days. Bits 13..=16: leap month number
/// (0 = none). Bit 12 set: the leap month has 30 days.
pub const LUNAR_MONTH_DATA: [u32; 201] = [
    0x10bd2, 0x00752, 0x00ea5, 0x0ab2a, 0x0064b, 0x00a9b, 0x09aa6, 0x0056a, 0x00b59, 0x04baa,
    0x00752, 0x0cda5, 0x00b25, 0x00a4b, 0x0ba4b, 0x002ad, 0x0056b, 0x045b5, 0x00da9, 0x0fe92,
    0x00e92, 0x00d25, 0x0ad2d, 0x00a56, 0x002b6, 0x09ad5, 0x006d4, 0x00ea9, 0x04f4a, 0x00e92,
    0x0c6a6, 0x0052b, 0x00a57, 0x0b956, 0x00b5a, 0x006d4, 0x07761, 0x00749, 0x0fb13, 0x00a93,
    0x0052b, 0x0d51b, 0x00aad, 0x0056a, 0x09da5, 0x00ba4, 0x00b49, 0x04d4b, 0x00a95, 0x0eaad,
    0x00536, 0x00aad, 0x0baca, 0x005b2, 0x00da5, 0x07ea2, 0x00d4a, 0x10595, 0x00a97, 0x00556,
    0x0c575, 0x00ad5, 0x006d2, 0x08755, 0x00ea5, 0x0064a, 0x0664f, 0x00a9b, 0x0eada, 0x0056a,
    0x00b69, 0x0abb2, 0x00b52, 0x00b25, 0x08b2b, 0x00a4b, 0x10aab, 0x002ad, 0x0056d, 0x0d5a9,
    0x00da9, 0x00d92, 0x08e95, 0x00d25, 0x14e4d, 0x00a56, 0x002b6, 0x0c2f5, 0x006d5, 0x00ea9,
    0x0af52, 0x00e92, 0x00d26, 0x0652e, 0x00a57, 0x10ad6, 0x0035a, 0x006d5, 0x0ab69, 0x00749,
    0x00693, 0x08a9b, 0x0052b, 0x00a5b, 0x04aae, 0x0056a, 0x0edd5, 0x00ba4, 0x00b49, 0x0ad53,
    0x00a95, 0x0052d, 0x0855d, 0x00ab5, 0x12baa, 0x005d2, 0x00da5, 0x0de8a, 0x00d4a, 0x00c95,
    0x08a9e, 0x00556, 0x00ab5, 0x04ada, 0x006d2, 0x0c765, 0x00725, 0x0064b, 0x0a657, 0x00cab,
    0x0055a, 0x0656e, 0x00b69, 0x16f52, 0x00b52, 0x00b25, 0x0dd0b, 0x00a4b, 0x004ab, 0x0a2bb,
    0x005ad, 0x00b6a, 0x04daa, 0x00d92, 0x0eea5, 0x00d25, 0x00a55, 0x0ba4d, 0x004b6, 0x005b5,
    0x076d2, 0x00ec9, 0x10f92, 0x00e92, 0x00d26, 0x0d516, 0x00a57, 0x00556, 0x09365, 0x00755,
    0x00749, 0x0674b, 0x00693, 0x0eaab, 0x0052b, 0x00a5b, 0x0aaba, 0x0056a, 0x00b65, 0x08baa,
    0x00b4a, 0x10d95, 0x00a95, 0x0052d, 0x0c56d, 0x00ab5, 0x005aa, 0x085d5, 0x00da5, 0x00d4a,
    0x06e4d, 0x00c96, 0x0ecce, 0x00556, 0x00ab5, 0x0bad2, 0x006d2, 0x00ea5, 0x0872a, 0x0068b,
    0x10697, 0x004ab, 0x0055b, 0x0d556, 0x00b6a, 0x00752, 0x08b95, 0x00b45, 0x00a8b, 0x04a4f,
    0x004ab,
];

/// First civil year covered by [`LUNAR_NEW_YEAR`].
pub const NEW_YEAR_FIRST_YEAR: i32 = 1901;

/// Civil date of the lunar new year, 1901..=2100, as `(month << 5) | day`.
pub const LUNAR_NEW_YEAR: [u16; 200] = [
    83, 72, 61, 80, 68, 57, 77, 66, 54, 74, 62, 82, 70, 58, 78, 67,
    55, 75, 65, 84, 72, 60, 80, 69, 56, 77, 66, 55, 74, 62, 81, 70,
    58, 78, 68, 56, 75, 63, 83, 72, 59, 79, 69, 57, 77, 66, 54, 74,
    61, 81, 70, 59, 78, 67, 56, 76, 63, 82, 72, 60, 79, 69, 57, 77,
    66, 53, 73, 62, 81, 70, 59, 79, 67, 55, 75, 63, 82, 71, 60, 80,
    69, 57, 77, 66, 84, 73, 61, 81, 70, 59, 79, 68, 55, 74, 63, 83,
    71, 60, 80, 69, 56, 76, 65, 54, 73, 61, 82, 71, 58, 78, 67, 55,
    74, 63, 83, 72, 60, 80, 69, 57, 76, 65, 54, 74, 61, 81, 70, 58,
    77, 67, 55, 75, 63, 83, 72, 60, 79, 68, 56, 76, 65, 54, 74, 62,
    81, 70, 58, 78, 66, 55, 75, 65, 83, 72, 60, 79, 68, 56, 76, 66,
    53, 73, 61, 81, 69, 58, 78, 67, 55, 75, 63, 83, 71, 59, 79, 69,
    56, 76, 66, 54, 73, 61, 81, 70, 58, 78, 67, 56, 74, 62, 82, 71,
    59, 79, 69, 57, 76, 65, 53, 73,
];

/// First civil year covered by [`SOLAR_TERM_DATA`].
pub const SOLAR_TERM_FIRST_YEAR: i32 = 1901;

/// Day-of-month offset added to every decoded solar term field, 小寒 first.
pub const TERM_OFFSET_VECTOR: [u8; 24] = [
    4, 19, 3, 18, 4, 19, 4, 19, 4, 20, 4, 20, 6, 22, 6, 22, 6, 22, 7, 22, 6, 21, 6, 21,
];

/// Packed solar-term days, 1901..=2101: 24 two-bit fields, 小寒 in the
/// least significant field.
pub const SOLAR_TERM_DATA: [u64; 201] = [
    0x6aaaa6aa9a5a, 0xaaaaaabaaa6a, 0xaaabbabbafaa, 0x5aa665a65aab,
    0x6aaaa6aa9a5a, 0xaaaaaaaaaa6a, 0xaaabbabbafaa, 0x5aa665a65aab,
    0x6aaaa6aa9a56, 0xaaaaaaaaaa6a, 0xaaabbabaafaa, 0x569665a65aaa,
    0x6aa6a6aa9a56, 0xaaaaaaaa9a5a, 0xaaabaabaaeaa, 0x569665a65aaa,
    0x5aa6a6a69a56, 0x6aaaaaaa9a5a, 0xaaabaabaaeaa, 0x569665a65aaa,
    0x5aa6a6a65a56, 0x6aaaaaaa9a5a, 0xaaabaabaaa6a, 0x569665a65aaa,
    0x5aa6a6a65a56, 0x6aaaa6aa9a5a, 0xaaaaaabaaa6a, 0x555665665aaa,
    0x5aa665a65a56, 0x6aaaa6aa9a5a, 0xaaaaaabaaa6a, 0x555665665aaa,
    0x5aa665a65a56, 0x6aaaa6aa9a5a, 0xaaaaaaaaaa6a, 0x555665665aaa,
    0x5aa665a65a56, 0x6aaaa6aa9a5a, 0xaaaaaaaaaa6a, 0x555665665aaa,
    0x5aa665a65a56, 0x6aaaa6aa9a5a, 0xaaaaaaaaaa6a, 0x555665655aaa,
    0x569665a65a56, 0x6aa6a6aa9a56, 0xaaaaaaaa9a5a, 0x5556556559aa,
    0x569665a65a55, 0x6aa6a6a65a56, 0xaaaaaaaa9a5a, 0x5556556559aa,
    0x569665a65a55, 0x5aa6a6a65a56, 0x6aaaa6aa9a5a, 0x5556556555aa,
    0x569665a65a55, 0x5aa665a65a56, 0x6aaaa6aa9a5a, 0x55555565556a,
    0x555665665a55, 0x5aa665a65a56, 0x6aaaa6aa9a5a, 0x55555565556a,
    0x555665665a55, 0x5aa665a65a56, 0x6aaaa6aa9a5a, 0x55555555556a,
    0x555665665a55, 0x5aa665a65a56, 0x6aaaa6aa9a5a, 0x55555555556a,
    0x555665655a55, 0x5aa665a65a56, 0x6aa6a6aa9a5a, 0x55555555456a,
    0x555655655a55, 0x5a9665a65a56, 0x6aa6a6a69a5a, 0x55555555456a,
    0x555655655a55, 0x569665a65a56, 0x6aa6a6a65a56, 0x55555155455a,
    0x555655655955, 0x569665a65a55, 0x5aa6a5a65a56, 0x15555155455a,
    0x555555655555, 0x569665665a55, 0x5aa665a65a56, 0x15555155455a,
    0x555555655515, 0x555665665a55, 0x5aa665a65a56, 0x15555155455a,
    0x555555555515, 0x555665665a55, 0x5aa665a65a56, 0x15555155455a,
    0x555555555515, 0x555665665a55, 0x5aa665a65a56, 0x15555155455a,
    0x555555555515, 0x555655655a55, 0x5aa665a65a56, 0x15515155455a,
    0x555555554515, 0x555655655a55, 0x5a9665a65a56, 0x15515151455a,
    0x555551554515, 0x555655655a55, 0x569665a65a56, 0x155151510556,
    0x555551554505, 0x555655655955, 0x569665665a55, 0x155110510556,
    0x155551554505, 0x555555655555, 0x569665665a55, 0x055110510556,
    0x155551554505, 0x555555555515, 0x555665665a55, 0x055110510556,
    0x155551554505, 0x555555555515, 0x555665665a55, 0x055110510556,
    0x155551554505, 0x555555555515, 0x555655655a55, 0x055110510556,
    0x155551554505, 0x555555555515, 0x555655655a55, 0x055110510556,
    0x155151514505, 0x555555554515, 0x555655655a55, 0x054110510556,
    0x155151510505, 0x555551554515, 0x555655655a55, 0x014110110556,
    0x155110510501, 0x555551554505, 0x555555655555, 0x014110110555,
    0x155110510501, 0x555551554505, 0x555555555555, 0x014110110555,
    0x055110510501, 0x155551554505, 0x555555555555, 0x000110110555,
    0x055110510501, 0x155551554505, 0x555555555515, 0x000110110555,
    0x055110510501, 0x155551554505, 0x555555555515, 0x000100100555,
    0x055110510501, 0x155151514505, 0x555555555515, 0x000100100555,
    0x054110510501, 0x155151514505, 0x555551554515, 0x000100100555,
    0x054110510501, 0x155150510505, 0x555551554515, 0x000100100555,
    0x014110110501, 0x155110510505, 0x555551554505, 0x000000100055,
    0x014110110500, 0x155110510501, 0x555551554505, 0x000000000055,
    0x014110110500, 0x055110510501, 0x155551554505, 0x000000000055,
    0x000110110500, 0x055110510501, 0x155551554505, 0x000000000015,
    0x000100110500, 0x055110510501, 0x155551554505, 0x555555555515,
    0x555655655a55,
];
