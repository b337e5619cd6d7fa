use std::collections::HashMap;

// в блоке совместимости (U+3130..U+318F) согласные не делятся на ведущие и
// завершающие - один и тот же кодпоинт встречается в обеих таблицах

/// ведущие согласные, чамо совместимости
pub const COMPAT_L: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// гласные, чамо совместимости
pub const COMPAT_V: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ',
    'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// завершающие согласные, чамо совместимости;
/// индекс в таблице на 1 меньше, чем T (T = 0 - согласной нет)
pub const COMPAT_T: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ',
    'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

lazy_static! {
    /// обратное отображение: чамо -> индекс ведущей согласной, 0 ..= 18
    pub static ref COMPAT_L_MAP: HashMap<char, u32> = reverse(&COMPAT_L, 0);
    /// обратное отображение: чамо -> индекс гласной, 0 ..= 20
    pub static ref COMPAT_V_MAP: HashMap<char, u32> = reverse(&COMPAT_V, 0);
    /// обратное отображение: чамо -> индекс завершающей согласной, 1 ..= 27
    pub static ref COMPAT_T_MAP: HashMap<char, u32> = reverse(&COMPAT_T, 1);
}

/// построить обратное отображение таблицы, индексы считаются от base
fn reverse(table: &[char], base: u32) -> HashMap<char, u32>
{
    table
        .iter()
        .enumerate()
        .map(|(i, &jamo)| (jamo, i as u32 + base))
        .collect()
}
