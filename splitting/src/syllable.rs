/// начало блока слогов хангыль
pub const HANGUL_S_BASE: u32 = 0xAC00;
/// количество слогов хангыль в Unicode
pub const HANGUL_S_COUNT: u32 = 11172;
/// количество ведущих согласных
pub const HANGUL_L_COUNT: u32 = 19;
/// количество гласных
pub const HANGUL_V_COUNT: u32 = 21;
/// количество завершающих согласных (включая вариант без согласной)
pub const HANGUL_T_COUNT: u32 = 28;
/// количество гласных * количество завершающих согласных
pub const HANGUL_N_COUNT: u32 = 588;

/// разложить слог на индексы (L, V, T); None - кодпоинт не является слогом
#[inline(always)]
pub fn to_lvt(code: u32) -> Option<(u32, u32, u32)>
{
    let lvt = code.wrapping_sub(HANGUL_S_BASE);

    if lvt >= HANGUL_S_COUNT {
        return None;
    }

    let l = lvt / HANGUL_N_COUNT;
    let v = (lvt % HANGUL_N_COUNT) / HANGUL_T_COUNT;
    let t = lvt % HANGUL_T_COUNT;

    Some((l, v, t))
}

/// собрать слог из индексов; индексы обязаны быть взяты из таблиц или из to_lvt,
/// выход за границы L < 19, V < 21, T < 28 - ошибка в вызывающем коде
#[inline(always)]
pub fn from_lvt(l: u32, v: u32, t: u32) -> u32
{
    HANGUL_S_BASE + l * HANGUL_N_COUNT + v * HANGUL_T_COUNT + t
}
