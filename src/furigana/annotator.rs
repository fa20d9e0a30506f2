use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{
    furigana::tokenizer::{LineTokenizer, Token},
    jlpt_kanji::{is_all_known_kanji, KanjiLevel},
    utility::str::is_katakana,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum LineFragment {
    String { value: String },
    Ruby { base: String, reading: String },
}

// 注釈済みの 1 行
// 空行は fragments が空になる
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedLine {
    pub fragments: Vec<LineFragment>,
}

impl AnnotatedLine {
    pub fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn push(&mut self, fragment: LineFragment) {
        if let LineFragment::String { value } = fragment {
            self.push_str(&value);
        } else {
            self.fragments.push(fragment);
        }
    }

    // 連続する文字列は 1 つにまとめる
    pub fn push_str(&mut self, string: &str) {
        if let Some(LineFragment::String { value }) = self.fragments.last_mut() {
            value.push_str(string)
        } else {
            self.fragments.push(LineFragment::String {
                value: string.to_string(),
            });
        }
    }
}

// 語にルビを振るかどうか：
// 1. 片仮名語はそのまま
// 2. 読みが無い・表層形と同じ語はそのまま
// 3. 漢字が全て学習済みの語はそのまま
// 4. それ以外はルビを振る
pub fn annotate_token(token: Token, level: Option<KanjiLevel>) -> LineFragment {
    if is_katakana(&token.surface) {
        return LineFragment::String {
            value: token.surface,
        };
    }

    if token.reading.is_empty() || token.reading == token.surface {
        return LineFragment::String {
            value: token.surface,
        };
    }

    if is_all_known_kanji(&token.surface, level) {
        return LineFragment::String {
            value: token.surface,
        };
    }

    LineFragment::Ruby {
        base: token.surface,
        reading: token.reading,
    }
}

// 空白しかない行は解析せず空の行にする
pub fn annotate_line(
    tokenizer: &impl LineTokenizer,
    line: &str,
    level: Option<KanjiLevel>,
) -> Result<AnnotatedLine> {
    let mut annotated = AnnotatedLine::new();

    if line.trim().is_empty() {
        return Ok(annotated);
    }

    for token in tokenizer.tokenize_line(line)? {
        annotated.push(annotate_token(token, level));
    }

    Ok(annotated)
}
