use crate::syllable;

pub use compat::CompatJamo;
pub use zero_space::ZeroSpace;
pub use zero_space::MARKER;

mod compat;
mod zero_space;

/// результат одного шага сборки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step
{
    /// в текущей позиции собран слог, поглощено consumed символов
    Matched { consumed: usize, syllable: char },
    /// шаблон слога не распознан, символ копируется без изменений
    Unmatched { literal: char },
}

impl Step
{
    /// слог собран; код обязан быть получен из from_lvt
    #[inline(always)]
    fn matched(consumed: usize, code: u32) -> Self
    {
        let syllable = unsafe { char::from_u32_unchecked(code) };

        Step::Matched { consumed, syllable }
    }
}

/// политика кодирования разложенного текста
pub trait Encoding
{
    /// записать разложенный слог (L, V, T) в результат
    fn write_syllable(result: &mut String, l: u32, v: u32, t: u32);

    /// попытаться собрать слог, начинающийся в позиции pos
    fn step(chars: &[char], pos: usize) -> Step;
}

/// разложение: слоги перекодируются политикой, прочие символы копируются
pub fn decompose<E: Encoding>(input: &str) -> String
{
    let mut result = String::with_capacity(input.len());

    for c in input.chars() {
        match syllable::to_lvt(u32::from(c)) {
            Some((l, v, t)) => E::write_syllable(&mut result, l, v, t),
            None => result.push(c),
        }
    }

    result
}

/// сборка: проход слева направо, каждый шаг - либо слог, либо копия символа
pub fn compose<E: Encoding>(input: &str) -> String
{
    let chars: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len());
    let mut pos = 0;

    while pos < chars.len() {
        match E::step(&chars, pos) {
            Step::Matched { consumed, syllable } => {
                result.push(syllable);
                pos += consumed;
            }
            Step::Unmatched { literal } => {
                result.push(literal);
                pos += 1;
            }
        }
    }

    result
}
