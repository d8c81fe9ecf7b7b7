// silabeo-report: Tabulate syllabification and stress for a word file.
//
// Each row shows the line number, the word with its written accent
// highlighted and the hyphenation with the stressed syllable highlighted.
// Words that fail are listed after the table.
//
// Usage:
//   silabeo-report -i FILE [--start N] [--limit N]

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use silabeo_cli::{Markers, Verbosity, WordLine};
use silabeo_core::format::highlight_accent;
use silabeo_es::{FormatOptions, SyllabifiedWord};

#[derive(Debug, Parser)]
#[command(
    name = "silabeo-report",
    version,
    about = "Report syllabification and stress for a file of words"
)]
struct Cli {
    /// Word file, one word per line; `-` for stdin
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// First line number to consider
    #[arg(short, long, default_value_t = 1)]
    start: usize,

    /// Maximum number of words to report
    #[arg(short, long)]
    limit: Option<usize>,

    #[command(flatten)]
    verbosity: Verbosity,
}

struct Row {
    line: usize,
    original: String,
    hyphenated: String,
    width: usize,
}

fn main() {
    let cli = Cli::parse();
    cli.verbosity.init_logging();

    match run(&cli) {
        Ok(0) => {}
        Ok(_) => std::process::exit(1),
        Err(e) => silabeo_cli::fatal(&format!("{e:#}")),
    }
}

fn run(cli: &Cli) -> Result<usize> {
    let lines = silabeo_cli::read_word_lines(Some(&cli.input), cli.start, cli.limit)?;
    log::info!("{} word(s) from {}", lines.len(), cli.input.display());

    let markers = Markers::for_stdout();
    let mut rows = Vec::with_capacity(lines.len());
    let mut errors = Vec::new();

    for WordLine { line, text } in lines {
        match silabeo_es::syllabify(&text) {
            Ok(result) => rows.push(row(line, &result, markers)),
            Err(e) => errors.push((line, e)),
        }
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    print_table(&mut out, &rows)?;

    if !errors.is_empty() {
        writeln!(out)?;
        writeln!(out, "Errors:")?;
        for (line, e) in &errors {
            writeln!(out, "{line}: {e}")?;
        }
    }
    out.flush()?;

    Ok(errors.len())
}

fn row(line: usize, result: &SyllabifiedWord, markers: Markers) -> Row {
    let (accent_open, accent_close) = markers.accent;
    let options = FormatOptions {
        mark_stressed: true,
        stress_open: markers.stress.0.to_string(),
        stress_close: markers.stress.1.to_string(),
        ..Default::default()
    };
    Row {
        line,
        original: highlight_accent(result, accent_open, accent_close),
        hyphenated: result.hyphenate_with(&options),
        width: result.original.chars().count()
            + if result.accent.is_some() && markers.printable {
                accent_open.chars().count() + accent_close.chars().count()
            } else {
                0
            },
    }
}

fn print_table(out: &mut impl Write, rows: &[Row]) -> io::Result<()> {
    let line_width = rows
        .iter()
        .map(|r| r.line.to_string().len())
        .max()
        .unwrap_or(0)
        .max("Line".len());
    let word_width = rows
        .iter()
        .map(|r| r.width)
        .max()
        .unwrap_or(0)
        .max("Original".len());

    writeln!(out, "{:>line_width$}  {:<word_width$}  Hyphenated", "Line", "Original")?;
    for r in rows {
        let pad = word_width.saturating_sub(r.width);
        writeln!(
            out,
            "{:>line_width$}  {}{}  {}",
            r.line,
            r.original,
            " ".repeat(pad),
            r.hyphenated
        )?;
    }
    Ok(())
}
