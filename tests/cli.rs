use std::{env, fs, process::Command};

use anyhow::Result;

// 見つからない入力は報告して飛ばし，残りの入力は処理する
#[test]
fn test_missing_input_is_reported_and_skipped() -> Result<()> {
    let dir = env::temp_dir().join("furigana-html-test-missing");
    fs::create_dir_all(&dir)?;

    let input_path = dir.join("input.txt");
    fs::write(&input_path, "学校\n")?;

    let missing_path = dir.join("missing.txt");
    let _ = fs::remove_file(&missing_path);

    let output = Command::new(env!("CARGO_BIN_EXE_furigana-html"))
        .arg(missing_path.display().to_string())
        .arg(input_path.display().to_string())
        .output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains(&format!("File not found: {}", missing_path.display())));

    assert!(!missing_path.with_extension("html").exists());

    let html = fs::read_to_string(input_path.with_extension("html"))?;
    assert!(html.contains("<p><ruby>学校<rt>がっこう</rt></ruby></p>"));

    fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn test_kanji_level_option_suppresses_ruby() -> Result<()> {
    let dir = env::temp_dir().join("furigana-html-test-level");
    fs::create_dir_all(&dir)?;

    let input_path = dir.join("input.txt");
    fs::write(&input_path, "今日は学校に行きます\n")?;

    let output = Command::new(env!("CARGO_BIN_EXE_furigana-html"))
        .args(["-k", "N5"])
        .arg(input_path.display().to_string())
        .output()?;

    assert!(output.status.success());

    let output_path = input_path.with_extension("html");
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains(&format!("Furigana HTML saved to: {}", output_path.display())));

    let html = fs::read_to_string(&output_path)?;
    assert!(html.contains("<p>今日は学校に行きます</p>"));

    fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn test_unknown_kanji_level_fails() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_furigana-html"))
        .args(["-k", "N6", "input.txt"])
        .output()?;

    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Unknown kanji level: N6"));
    Ok(())
}
