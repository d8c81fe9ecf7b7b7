// Syllable and syllabified-word result types

use std::ops::Range;

// ---------------------------------------------------------------------------
// Syllable
// ---------------------------------------------------------------------------

/// One syllable of a scanned word.
///
/// The three parts hold lowercased text. Concatenating `onset + nucleus + coda`
/// over all syllables of a word reproduces the lowercased word exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Syllable {
    /// Consonants before the nucleus. May be empty.
    pub onset: String,

    /// The vowel, diphthong or triphthong. Empty only for vowel-less words.
    pub nucleus: String,

    /// Consonants closing the syllable. May be empty.
    pub coda: String,

    /// True if the word's written accent falls within this syllable.
    pub accented: bool,

    /// True for exactly one syllable per word.
    pub stressed: bool,
}

impl Syllable {
    /// The syllable text: onset, nucleus and coda joined.
    pub fn text(&self) -> String {
        let mut text =
            String::with_capacity(self.onset.len() + self.nucleus.len() + self.coda.len());
        text.push_str(&self.onset);
        text.push_str(&self.nucleus);
        text.push_str(&self.coda);
        text
    }

    /// Length of the syllable in characters.
    pub fn char_len(&self) -> usize {
        self.onset.chars().count() + self.nucleus.chars().count() + self.coda.chars().count()
    }

    /// Character range of the nucleus, relative to the start of the syllable.
    pub fn nucleus_range(&self) -> Range<usize> {
        let start = self.onset.chars().count();
        start..start + self.nucleus.chars().count()
    }
}

// ---------------------------------------------------------------------------
// SyllabifiedWord
// ---------------------------------------------------------------------------

/// Complete result of syllabifying one word.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyllabifiedWord {
    /// The word as given, original casing preserved.
    pub original: String,

    /// Syllables in reading order.
    pub syllables: Vec<Syllable>,

    /// Index of the stressed syllable.
    pub stressed: usize,

    /// Character offset of the written accent, if the word has one.
    pub accent: Option<usize>,
}

impl SyllabifiedWord {
    /// Character ranges of every syllable within the word.
    pub fn spans(&self) -> Vec<Range<usize>> {
        let mut start = 0;
        self.syllables
            .iter()
            .map(|syllable| {
                let end = start + syllable.char_len();
                let span = start..end;
                start = end;
                span
            })
            .collect()
    }

    /// Lowercased syllable texts.
    pub fn syllable_texts(&self) -> Vec<String> {
        self.syllables.iter().map(Syllable::text).collect()
    }

    /// Syllable texts cut from the original word, keeping its casing.
    pub fn original_syllables(&self) -> Vec<String> {
        let chars: Vec<char> = self.original.chars().collect();
        self.spans()
            .into_iter()
            .map(|span| {
                let end = span.end.min(chars.len());
                chars[span.start.min(end)..end].iter().collect()
            })
            .collect()
    }

    /// Original-cased syllables joined with `-`.
    pub fn hyphenated(&self) -> String {
        self.original_syllables().join("-")
    }

    /// The stressed syllable.
    pub fn stressed_syllable(&self) -> Option<&Syllable> {
        self.syllables.get(self.stressed)
    }

    /// Number of syllables.
    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    /// True if the word produced no syllables.
    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }
}
