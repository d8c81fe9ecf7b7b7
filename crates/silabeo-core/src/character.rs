// Character classification for Spanish syllabification
//
// Every decision the scanners make about diphthongs, hiatus and consonant
// clusters goes through the functions in this module. The letter "y" is the
// only context-dependent character: callers always pass the character that
// follows it (or `None` at end of word).

// ---------------------------------------------------------------------------
// Spanish phonological constants
// ---------------------------------------------------------------------------

/// Spanish vowels (lowercase), including written-accent and diaeresis forms.
/// "y" is not listed here; see [`is_vowel`].
const SPANISH_VOWELS: &[char] = &[
    'a', '\u{00E1}', // á
    'e', '\u{00E9}', // é
    'i', '\u{00ED}', // í
    'o', '\u{00F3}', // ó
    'u', '\u{00FA}', // ú
    '\u{00FC}', // ü
];

/// Spanish consonants (lowercase), including "ñ" and the ambiguous "y".
const SPANISH_CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', '\u{00F1}', 'p', 'q', 'r', 's', 't',
    'v', 'w', 'x', 'y', 'z',
];

// ---------------------------------------------------------------------------
// Vowel classification
// ---------------------------------------------------------------------------

/// Category of a single vowel character.
///
/// Open vowels cannot share a nucleus with another open vowel; closed vowels
/// combine with open ones into diphthongs. A written accent on a closed vowel
/// breaks any diphthong it would otherwise form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelType {
    /// a, e, o
    Open,
    /// á, é, ó
    OpenWithAccent,
    /// i, u, ü, and "y" acting as a vowel
    Closed,
    /// í, ú
    ClosedWithAccent,
}

/// Classify a vowel character. Returns `None` for anything that is not a
/// Spanish vowel or "y".
///
/// "y" is always classified as [`VowelType::Closed`]; whether it acts as a
/// vowel at all is decided by [`is_vowel`] before classification.
pub fn classify_vowel(c: char) -> Option<VowelType> {
    match simple_lower(c) {
        'a' | 'e' | 'o' => Some(VowelType::Open),
        '\u{00E1}' | '\u{00E9}' | '\u{00F3}' => Some(VowelType::OpenWithAccent),
        'i' | 'u' | '\u{00FC}' | 'y' => Some(VowelType::Closed),
        '\u{00ED}' | '\u{00FA}' => Some(VowelType::ClosedWithAccent),
        _ => None,
    }
}

/// True for the two accented categories.
pub fn has_accent(vowel: VowelType) -> bool {
    matches!(
        vowel,
        VowelType::OpenWithAccent | VowelType::ClosedWithAccent
    )
}

/// True for a, e, o with or without accent.
pub fn is_open(vowel: VowelType) -> bool {
    matches!(vowel, VowelType::Open | VowelType::OpenWithAccent)
}

/// True for i, u, ü, "y" with or without accent.
pub fn is_closed(vowel: VowelType) -> bool {
    matches!(vowel, VowelType::Closed | VowelType::ClosedWithAccent)
}

// ---------------------------------------------------------------------------
// Vowel / consonant predicates
// ---------------------------------------------------------------------------

/// Check whether a character is a Spanish vowel, ignoring "y".
pub fn is_plain_vowel(c: char) -> bool {
    SPANISH_VOWELS.contains(&simple_lower(c))
}

/// Check whether `c` acts as a vowel given the character that follows it.
///
/// Vowels are vowels unconditionally. "y" is a vowel unless it is followed by
/// a vowel: "ya", "yu" start with a consonant, while "by", "muy", "rry" end in
/// a vowel. The result depends only on the two arguments.
pub fn is_vowel(c: char, next: Option<char>) -> bool {
    if simple_lower(c) == 'y' {
        return !next.is_some_and(is_plain_vowel);
    }
    is_plain_vowel(c)
}

/// Check whether a character is a Spanish consonant, "y" included.
pub fn is_consonant(c: char) -> bool {
    SPANISH_CONSONANTS.contains(&simple_lower(c))
}

/// Check whether a character is a Spanish consonant other than "y".
pub fn is_consonant_bar_y(c: char) -> bool {
    let lower = simple_lower(c);
    lower != 'y' && SPANISH_CONSONANTS.contains(&lower)
}

/// Check whether a character belongs to the Spanish alphabet.
pub fn is_spanish_letter(c: char) -> bool {
    is_plain_vowel(c) || is_consonant(c)
}

// ---------------------------------------------------------------------------
// Simple case conversion
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, returns only
/// the first character so that lowercasing never changes a word's length.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Lowercase a word character by character, preserving its length.
pub fn lower_chars(word: &str) -> Vec<char> {
    word.chars().map(simple_lower).collect()
}
