use super::{Encoding, Step};
use crate::syllable;
use crate::tables::{COMPAT_T, COMPAT_T_MAP};

/// маркер перед завершающей согласной: ZERO WIDTH SPACE;
/// в исходном тексте слогов встречаться не должен, иначе сборка неоднозначна
pub const MARKER: char = '\u{200B}';

/// кодирование с маркером: блок ведущая согласная + гласная остаётся одним
/// кодпоинтом из блока слогов, завершающая согласная выносится за маркер
pub struct ZeroSpace;

impl Encoding for ZeroSpace
{
    #[inline(always)]
    fn write_syllable(result: &mut String, l: u32, v: u32, t: u32)
    {
        let lv = syllable::from_lvt(l, v, 0);

        result.push(unsafe { char::from_u32_unchecked(lv) });

        if t != 0 {
            result.push(MARKER);
            result.push(COMPAT_T[t as usize - 1]);
        }
    }

    #[inline(always)]
    fn step(chars: &[char], pos: usize) -> Step
    {
        let current = chars[pos];

        let (l, v, _) = match syllable::to_lvt(u32::from(current)) {
            Some(lvt) => lvt,
            None => return Step::Unmatched { literal: current },
        };

        // завершающая согласная может идти как за маркером, так и сразу;
        // T самого блока при этом отбрасывается - ожидается блок с T = 0

        let peek = match chars.get(pos + 1) {
            Some(&MARKER) => pos + 2,
            _ => pos + 1,
        };

        match chars.get(peek).and_then(|c| COMPAT_T_MAP.get(c)) {
            Some(&t) => Step::matched(peek + 1 - pos, syllable::from_lvt(l, v, t)),
            // непарный маркер останется на следующий шаг и будет скопирован
            None => Step::matched(1, syllable::from_lvt(l, v, 0)),
        }
    }
}
