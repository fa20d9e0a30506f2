use crate::furigana::annotator::{AnnotatedLine, LineFragment};

// テキスト位置に置けない文字をエスケープする
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// 1 行を段落要素にする
// 空の行は <p></p> になる
pub fn render_line(line: &AnnotatedLine) -> String {
    let mut html = String::new();

    for fragment in &line.fragments {
        match fragment {
            LineFragment::String { value } => html.push_str(&escape_text(value)),
            LineFragment::Ruby { base, reading } => html.push_str(&format!(
                "<ruby>{}<rt>{}</rt></ruby>",
                escape_text(base),
                escape_text(reading)
            )),
        }
    }

    format!("<p>{}</p>", html)
}

// 段落を並べて固定のシェルに埋め込む
pub fn render_document(lines: &[AnnotatedLine]) -> String {
    let body_content = lines.iter().map(render_line).collect::<Vec<_>>().join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
  <meta charset="UTF-8">
  <title>Furigana Output</title>
  <style>
    body {{
      font-family: "Yu Gothic", sans-serif;
      font-size: 14pt;
      line-height: 1.7;
      margin: 2cm;
    }}
    ruby rt {{
      font-size: 60%;
    }}
  </style>
</head>
<body>
{}
</body>
</html>"#,
        body_content
    )
}
