use once_cell::sync::Lazy;
use regex::Regex;

// 漢字は CJK 統合漢字の基本ブロック（U+4E00..=U+9FAF）のみを対象とする
// 々 〆 〇 などの記号は漢字扱いしない
pub fn is_kanji(c: char) -> bool {
    let u = c as u32;
    0x4e00 <= u && u <= 0x9faf
}

// 長音符・中黒も片仮名語の一部として扱う
static REGEX_KATAKANA: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ァ-ヴー・]+$").unwrap());

pub fn is_katakana(s: &str) -> bool {
    REGEX_KATAKANA.is_match(s)
}

// 片仮名を平仮名に変換する
// ァ..=ヴ は符号位置が平仮名と 0x60 ずれているだけ
// 範囲外の文字（長音符など）はそのまま残す
pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'ァ'..='ヴ' => char::from_u32(c as u32 - 0x60).unwrap(),
            _ => c,
        })
        .collect()
}

// UTF-8 として読めなければ Shift_JIS として読み直す
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => encoding_rs::SHIFT_JIS.decode(e.as_bytes()).0.into_owned(),
    }
}
