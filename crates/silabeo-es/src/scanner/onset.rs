// Onset: the consonants that open a syllable

use silabeo_core::character::{is_consonant_bar_y, is_vowel};

use super::Step;
use crate::state::ScanState;

/// Letters after "gu" that keep the "u" silent and inside the onset.
const GU_FRONT_VOWELS: &[char] = &['e', 'i', '\u{00E9}', '\u{00ED}'];

/// Consume the onset of the syllable starting at the cursor.
///
/// Takes every consonant up to the first vowel. A "y" followed by a vowel is
/// a consonant and closes the run; a "y" acting as vowel stops it. "qu" and
/// "gü" always stay in the onset, "gu" only before e/i.
pub fn scan(mut state: ScanState<'_>) -> Step<'_> {
    let start = state.cursor.position();
    let cursor = &mut state.cursor;

    while cursor.current().is_some_and(is_consonant_bar_y) {
        cursor.advance(1);
    }

    if cursor.current() == Some('y') && !is_vowel('y', cursor.peek(1)) {
        cursor.advance(1);
    }

    if let (Some(prev), Some(c)) = (cursor.behind(1), cursor.current()) {
        let silent_u = match (prev, c) {
            ('q', 'u') | ('g', '\u{00FC}') => true,
            ('g', 'u') => cursor.peek(1).is_some_and(|n| GU_FRONT_VOWELS.contains(&n)),
            _ => false,
        };
        if silent_u {
            cursor.advance(1);
        }
    }

    let span = state.cursor.span_from(start);
    (state, span)
}
