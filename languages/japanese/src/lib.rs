pub mod glossary;
pub mod ipa;
pub mod kana;
pub mod loader;
pub mod passages;
pub mod reading;

pub use glossary::{Glossary, MeaningFix};
pub use ipa::IpaDictionary;
pub use kana::{Katakana, hiragana_to_katakana, is_katakana, romaji_to_katakana, to_katakana};
pub use passages::{add_ipa, fill_segments};
pub use reading::{ReadingDictionary, ReadingFiller, ReadingFix};
