//! Spanish syllabification and stress detection.
//!
//! A word is scanned once from left to right. Each iteration of the
//! [`engine`] carves one syllable out of the word by running three scanners
//! in sequence (onset, nucleus, coda) over a shared [`state::ScanState`].
//! After the last syllable the stressed syllable is taken from the written
//! accent or, failing that, from the default Spanish stress rule.
//!
//! ```
//! let word = silabeo_es::syllabify("encuentro").unwrap();
//! assert_eq!(word.hyphenated(), "en-cuen-tro");
//! assert_eq!(word.stressed, 1);
//! ```

pub mod cursor;
pub mod engine;
pub mod error;
pub mod scanner;
pub mod state;
pub mod stress;
pub mod validation;

pub use error::{Error, SyllabifyError, ValidationError};
pub use silabeo_core::{FormatOptions, SyllabifiedWord, Syllable};
pub use validation::validate;

/// Validate `word` and split it into syllables with stress and accent details.
pub fn syllabify(word: &str) -> Result<SyllabifiedWord, Error> {
    validate(word)?;
    Ok(engine::syllabify(word)?)
}

/// Syllables of `word`, keeping its original casing.
pub fn syllables(word: &str) -> Result<Vec<String>, Error> {
    Ok(syllabify(word)?.original_syllables())
}

/// `word` with its syllables joined by hyphens.
pub fn hyphenate(word: &str) -> Result<String, Error> {
    Ok(syllabify(word)?.hyphenated())
}
