use anyhow::{bail, ensure, Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::{env, fs, path::PathBuf, process};

use furigana_html::{
    furigana::{annotator::annotate_line, renderer::render_document, tokenizer::JapaneseTokenizer},
    jlpt_kanji::KanjiLevel,
    utility::str::decode_text,
};

struct Args {
    input_files: Vec<String>,
    kanji_level: Option<KanjiLevel>,
}

fn get_args() -> Result<Args> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optopt(
        "k",
        "kanji-level",
        "suppress ruby for kanji known at LEVEL (N5, N4, N3, N2, N1)",
        "LEVEL",
    );
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        print!("{}", opts.usage("Usage: furigana-html [options] <input>..."));
        process::exit(0);
    }

    let kanji_level = match matches.opt_str("k") {
        Some(name) => Some(KanjiLevel::of(&name)?),
        None => None,
    };

    let input_files = matches.free.clone();
    ensure!(!input_files.is_empty(), "input file is required");

    Ok(Args {
        input_files,
        kanji_level,
    })
}

fn main() -> Result<()> {
    let args = get_args()?;

    println!("Loading dictionary...");
    let tokenizer = JapaneseTokenizer::new().context("Failed to load tokenizer")?;

    for input_file in &args.input_files {
        let input_path = PathBuf::from(input_file);

        // 見つからない入力は報告して飛ばす
        if !input_path.exists() {
            println!("File not found: {}", input_path.display());
            continue;
        }

        (|| {
            ensure!(input_path.is_file(), "Not a file");

            let text = decode_text(fs::read(&input_path)?);
            let lines: Vec<&str> = text.lines().collect();

            let pb = create_progress_bar(lines.len() as u64);
            let annotated = lines
                .iter()
                .progress_with(pb)
                .map(|line| annotate_line(&tokenizer, line, args.kanji_level))
                .collect::<Result<Vec<_>>>()?;

            let output_path = input_path.with_extension("html");
            fs::write(&output_path, render_document(&annotated))?;

            println!("Furigana HTML saved to: {}", output_path.display());

            Ok(())
        })()
        .with_context(|| format!("Failed to process: {}", input_path.display()))?;
    }

    Ok(())
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
