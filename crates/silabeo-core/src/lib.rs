//! Shared types for Spanish syllabification.
//!
//! - [`character`]: vowel/consonant classification, including the
//!   context-dependent treatment of "y"
//! - [`syllable`]: [`Syllable`] and [`SyllabifiedWord`] result types
//! - [`format`]: rendering results as separator-joined text

pub mod character;
pub mod format;
pub mod syllable;

pub use character::VowelType;
pub use format::FormatOptions;
pub use syllable::{SyllabifiedWord, Syllable};
