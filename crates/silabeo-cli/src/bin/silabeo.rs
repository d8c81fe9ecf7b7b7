// silabeo: Split Spanish words into syllables.
//
// Prints one hyphenated word per line. Words come from the command line or,
// when none are given, from stdin (one per line).
//
// Usage:
//   silabeo [OPTIONS] [WORD...]

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use silabeo_cli::Verbosity;
use silabeo_es::FormatOptions;

#[derive(Debug, Parser)]
#[command(name = "silabeo", version, about = "Split Spanish words into syllables")]
struct Cli {
    /// Words to syllabify; reads stdin when empty
    words: Vec<String>,

    /// String placed between syllables
    #[arg(long, default_value = "-")]
    separator: String,

    /// Mark the stressed syllable as >syl<
    #[arg(long)]
    stressed: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(flatten)]
    verbosity: Verbosity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One hyphenated word per line
    Text,
    /// One JSON object per line
    Json,
}

fn main() {
    let cli = Cli::parse();
    cli.verbosity.init_logging();

    match run(&cli) {
        Ok(0) => {}
        Ok(failed) => {
            log::info!("{failed} word(s) failed");
            std::process::exit(1);
        }
        Err(e) => silabeo_cli::fatal(&format!("{e:#}")),
    }
}

/// Process every word and return the number of failures.
fn run(cli: &Cli) -> Result<usize> {
    let options = FormatOptions {
        separator: cli.separator.clone(),
        mark_stressed: cli.stressed,
        ..Default::default()
    };

    let words: Vec<String> = if cli.words.is_empty() {
        silabeo_cli::read_word_lines(None, 1, None)?
            .into_iter()
            .map(|w| w.text)
            .collect()
    } else {
        cli.words.clone()
    };
    log::debug!("processing {} word(s)", words.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut failed = 0;

    for word in &words {
        match silabeo_es::syllabify(word) {
            Ok(result) => match cli.format {
                OutputFormat::Text => writeln!(out, "{}", result.hyphenate_with(&options))?,
                OutputFormat::Json => {
                    let json = serde_json::to_string(&result)
                        .with_context(|| format!("failed to serialize {word}"))?;
                    writeln!(out, "{json}")?;
                }
            },
            Err(e) => {
                out.flush()?;
                eprintln!("error: {e}");
                failed += 1;
            }
        }
    }

    out.flush()?;
    Ok(failed)
}
