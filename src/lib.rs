pub mod furigana;
pub mod jlpt_kanji;
pub mod utility;
