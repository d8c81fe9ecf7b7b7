// silabeo-cli: shared utilities for CLI tools.

use std::io::{self, BufRead, IsTerminal};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Args;

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Verbosity flags shared by every tool.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct Verbosity {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Do not initialise logging at all
    #[arg(short, long)]
    pub quiet: bool,
}

impl Verbosity {
    /// Default filter for the given `-v` count. `RUST_LOG` takes precedence.
    pub fn filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Install `env_logger` unless `--quiet` was given.
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }
        // A second init (e.g. from tests) is harmless; ignore it.
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.filter()),
        )
        .try_init();
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A non-blank, non-comment line of a word file with its 1-based number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLine {
    pub line: usize,
    pub text: String,
}

/// Select word lines from `reader`.
///
/// Lines before `start` are skipped, as are blank lines and lines starting
/// with `#`. At most `limit` lines are returned when a limit is given.
pub fn word_lines<R: BufRead>(
    reader: R,
    start: usize,
    limit: Option<usize>,
) -> Result<Vec<WordLine>> {
    let mut out = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.with_context(|| format!("failed to read line {line_no}"))?;
        if line_no < start {
            continue;
        }
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        if limit.is_some_and(|l| out.len() >= l) {
            break;
        }
        out.push(WordLine {
            line: line_no,
            text: text.to_string(),
        });
    }
    Ok(out)
}

/// Read word lines from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_word_lines(
    path: Option<&Path>,
    start: usize,
    limit: Option<usize>,
) -> Result<Vec<WordLine>> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file = std::fs::File::open(p)
                .with_context(|| format!("failed to open {}", p.display()))?;
            word_lines(io::BufReader::new(file), start, limit)
        }
        _ => word_lines(io::stdin().lock(), start, limit),
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Highlight markers for report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub accent: (&'static str, &'static str),
    pub stress: (&'static str, &'static str),
    /// False when the markers occupy no columns on screen.
    pub printable: bool,
}

impl Markers {
    /// Bold colours for terminals.
    pub const ANSI: Markers = Markers {
        accent: ("\x1b[1;34m", "\x1b[0m"),
        stress: ("\x1b[1;32m", "\x1b[0m"),
        printable: false,
    };

    /// Bracket markers for pipes and files.
    pub const PLAIN: Markers = Markers {
        accent: ("[", "]"),
        stress: (">", "<"),
        printable: true,
    };

    /// Pick markers for stdout.
    pub fn for_stdout() -> Markers {
        if io::stdout().is_terminal() {
            Markers::ANSI
        } else {
            Markers::PLAIN
        }
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
