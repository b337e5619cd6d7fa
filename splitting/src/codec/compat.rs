use super::{Encoding, Step};
use crate::syllable;
use crate::tables::{COMPAT_L, COMPAT_L_MAP, COMPAT_T, COMPAT_T_MAP, COMPAT_V, COMPAT_V_MAP};

/// кодирование без разделителей: слог записывается подряд идущими чамо
/// совместимости - ведущая согласная, гласная, завершающая согласная (если есть)
pub struct CompatJamo;

impl Encoding for CompatJamo
{
    #[inline(always)]
    fn write_syllable(result: &mut String, l: u32, v: u32, t: u32)
    {
        result.push(COMPAT_L[l as usize]);
        result.push(COMPAT_V[v as usize]);

        if t != 0 {
            result.push(COMPAT_T[t as usize - 1]);
        }
    }

    #[inline(always)]
    fn step(chars: &[char], pos: usize) -> Step
    {
        let current = chars[pos];

        // слог начинается с пары ведущая согласная + гласная

        let l = match COMPAT_L_MAP.get(&current) {
            Some(&l) => l,
            None => return Step::Unmatched { literal: current },
        };

        let v = match chars.get(pos + 1).and_then(|c| COMPAT_V_MAP.get(c)) {
            Some(&v) => v,
            None => return Step::Unmatched { literal: current },
        };

        // завершающая согласная поглощается жадно, без заглядывания дальше;
        // согласная, записанная как ведущая следующего слога, будет прочитана
        // как завершающая текущего - см. таблицы, наборы пересекаются

        match chars.get(pos + 2).and_then(|c| COMPAT_T_MAP.get(c)) {
            Some(&t) => Step::matched(3, syllable::from_lvt(l, v, t)),
            None => Step::matched(2, syllable::from_lvt(l, v, 0)),
        }
    }
}
