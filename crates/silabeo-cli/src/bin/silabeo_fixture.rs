// silabeo-fixture: Generate a regression fixture from a word list.
//
// Writes one `word hyphenated stressed accent` line per input word, where
// `stressed` is the 0-based index of the stressed syllable and `accent` the
// 0-based character position of the written accent (`-` when unaccented).
// The output records current behaviour, not necessarily correct Spanish.
//
// Usage:
//   silabeo-fixture -i WORDS [-o FIXTURE] [--first-word]

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use silabeo_cli::Verbosity;
use silabeo_es::SyllabifiedWord;

const HEADER: &str = "\
# ---------------------------------------------------------------------------
# Spanish words regression fixture
# ---------------------------------------------------------------------------
# Format:
# [word] [hyphenated] [stressed] [accent]
#
# - word: the word as written
# - hyphenated: the word split in syllables, separated by hyphens
# - stressed: index of the stressed syllable (0-based)
# - accent: character position of the written accent (0-based), or -
# ---------------------------------------------------------------------------
";

#[derive(Debug, Parser)]
#[command(
    name = "silabeo-fixture",
    version,
    about = "Generate a regression fixture from a list of words"
)]
struct Cli {
    /// Word list, one word per line; `-` for stdin
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Fixture file to write (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Take the first word of lines holding several words
    #[arg(short = 't', long)]
    first_word: bool,

    #[command(flatten)]
    verbosity: Verbosity,
}

fn main() {
    let cli = Cli::parse();
    cli.verbosity.init_logging();

    match run(&cli) {
        Ok(errors) if errors.is_empty() => {}
        Ok(errors) => {
            eprintln!("errors:");
            for (line, msg) in &errors {
                eprintln!("{line}: {msg}");
            }
            std::process::exit(1);
        }
        Err(e) => silabeo_cli::fatal(&format!("{e:#}")),
    }
}

/// Format one fixture line.
fn fixture_line(word: &SyllabifiedWord) -> String {
    let accent = word
        .accent
        .map_or_else(|| "-".to_string(), |a| a.to_string());
    format!(
        "{} {} {} {}",
        word.original,
        word.hyphenated(),
        word.stressed,
        accent
    )
}

/// Write the fixture and return the per-line errors.
fn run(cli: &Cli) -> Result<Vec<(usize, String)>> {
    // The whole input is read before the output is opened, so both may name
    // the same file.
    let lines = silabeo_cli::read_word_lines(Some(&cli.input), 1, None)?;

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    writeln!(out, "{HEADER}")?;

    let mut errors = Vec::new();
    let mut written = 0usize;
    for word_line in lines {
        let mut parts = word_line.text.split_whitespace();
        let first = parts.next().unwrap_or_default();
        if parts.next().is_some() && !cli.first_word {
            errors.push((
                word_line.line,
                format!("multiple words on line: {}", word_line.text),
            ));
            continue;
        }
        match silabeo_es::syllabify(first) {
            Ok(result) => {
                writeln!(out, "{}", fixture_line(&result))?;
                written += 1;
            }
            Err(e) => errors.push((word_line.line, e.to_string())),
        }
    }
    out.flush()?;

    log::info!("wrote {written} fixture line(s), {} error(s)", errors.len());
    Ok(errors)
}
