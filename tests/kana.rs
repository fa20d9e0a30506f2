use std::collections::HashSet;

use furigana_html::utility::str::{decode_text, is_kanji, is_katakana, katakana_to_hiragana};

#[test]
fn test_katakana_to_hiragana_is_fixed_offset() {
    // ァ..=ヴ の全ての文字が重複なく平仮名に移る
    let mut mapped = HashSet::new();
    for katakana in 'ァ'..='ヴ' {
        let hiragana: Vec<char> = katakana_to_hiragana(&katakana.to_string()).chars().collect();
        assert_eq!(hiragana.len(), 1);

        let hiragana = hiragana[0];
        assert_eq!(hiragana as u32, katakana as u32 - 0x60);
        assert!(('ぁ'..='ゔ').contains(&hiragana));
        assert!(mapped.insert(hiragana));
    }
}

#[test]
fn test_katakana_to_hiragana_keeps_other_characters() {
    assert_eq!(katakana_to_hiragana("ガッコウ"), "がっこう");
    assert_eq!(katakana_to_hiragana("コーヒー"), "こーひー");
    assert_eq!(katakana_to_hiragana("ロケット・エンジン"), "ろけっと・えんじん");
    assert_eq!(katakana_to_hiragana("ひらがな"), "ひらがな");
    assert_eq!(katakana_to_hiragana("ABC 123"), "ABC 123");
    assert_eq!(katakana_to_hiragana(""), "");
}

#[test]
fn test_is_katakana() {
    assert!(is_katakana("コーヒー"));
    assert!(is_katakana("ロケット・エンジン"));
    assert!(is_katakana("ヴ"));

    assert!(!is_katakana(""));
    assert!(!is_katakana("こーひー"));
    assert!(!is_katakana("コーヒー豆"));
    assert!(!is_katakana("コーヒー "));
}

#[test]
fn test_is_kanji() {
    assert!(is_kanji('一'));
    assert!(is_kanji('龯'));
    assert!(is_kanji('漢'));

    assert!(!is_kanji('々'));
    assert!(!is_kanji('〇'));
    assert!(!is_kanji('ヶ'));
    assert!(!is_kanji('あ'));
    assert!(!is_kanji('A'));
}

#[test]
fn test_decode_text() {
    let text = "日本語のテキスト";

    assert_eq!(decode_text(text.as_bytes().to_vec()), text);

    let (sjis, _, _) = encoding_rs::SHIFT_JIS.encode(text);
    assert_eq!(decode_text(sjis.into_owned()), text);
}
