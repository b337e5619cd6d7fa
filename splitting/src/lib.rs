#[macro_use]
extern crate lazy_static;

pub use codec::MARKER;

use codec::CompatJamo;
use codec::ZeroSpace;

pub mod codec;
pub mod syllable;
mod tables;

/// форма разложенного текста
enum Form
{
    /// поток чамо совместимости без разделителей
    CompatJamo,
    /// блок LV + завершающая согласная за маркером ZERO WIDTH SPACE
    ZeroSpace,
}

/// разбиение слогов хангыль на чамо совместимости и обратная сборка
pub struct HangulSplitter
{
    /// выбранная форма разложенного текста
    form: Form,
}

impl HangulSplitter
{
    /// кодек без разделителей
    pub fn new_compat_jamo() -> Self
    {
        Self {
            form: Form::CompatJamo,
        }
    }

    /// кодек с маркером ZERO WIDTH SPACE
    pub fn new_zero_space() -> Self
    {
        Self {
            form: Form::ZeroSpace,
        }
    }

    /// разложить слоги; символы вне блока слогов копируются без изменений
    #[inline(never)]
    pub fn decompose(&self, input: &str) -> String
    {
        match self.form {
            Form::CompatJamo => codec::decompose::<CompatJamo>(input),
            Form::ZeroSpace => codec::decompose::<ZeroSpace>(input),
        }
    }

    /// собрать слоги обратно; всё, что не укладывается в шаблон слога,
    /// копируется без изменений
    #[inline(never)]
    pub fn compose(&self, input: &str) -> String
    {
        match self.form {
            Form::CompatJamo => codec::compose::<CompatJamo>(input),
            Form::ZeroSpace => codec::compose::<ZeroSpace>(input),
        }
    }
}
