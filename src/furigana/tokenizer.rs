use anyhow::Result;
use lindera::{
    dictionary::{load_embedded_dictionary, DictionaryKind},
    mode::Mode,
    segmenter::Segmenter,
    tokenizer::Tokenizer,
};
use serde::{Deserialize, Serialize};

use crate::utility::str::katakana_to_hiragana;

// 形態素解析で得られる語
// reading は平仮名に正規化する（読みが得られなければ空文字列）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub surface: String,
    pub reading: String,
}

// 1 行を語の列にする
// 表層形を連結すると入力の行に戻る（行を隙間なく覆う）
pub trait LineTokenizer {
    fn tokenize_line(&self, line: &str) -> Result<Vec<Token>>;
}

// IPADIC 同梱の Lindera による解析器
pub struct JapaneseTokenizer {
    tokenizer: Tokenizer,
}

impl JapaneseTokenizer {
    pub fn new() -> Result<Self> {
        let dictionary = load_embedded_dictionary(DictionaryKind::IPADIC)?;
        let segmenter = Segmenter::new(Mode::Normal, dictionary, None);
        Ok(Self {
            tokenizer: Tokenizer::new(segmenter),
        })
    }
}

impl LineTokenizer for JapaneseTokenizer {
    fn tokenize_line(&self, line: &str) -> Result<Vec<Token>> {
        let mut tokens = self.tokenizer.tokenize(line)?;

        let mut result = Vec::with_capacity(tokens.len());
        for token in tokens.iter_mut() {
            let surface = token.surface.to_string();

            // IPADIC の素性は 7 番目が読み（片仮名）
            // 未知語は素性を持たないか "*" になる
            let details = token.details();
            let reading = match details.get(7) {
                Some(&reading) if reading != "*" => katakana_to_hiragana(reading),
                _ => String::new(),
            };

            result.push(Token { surface, reading });
        }

        Ok(result)
    }
}
