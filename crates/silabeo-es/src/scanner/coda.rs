// Coda: the consonants that close a syllable
//
// The coda decides where a consonant run between two nuclei is split. A
// single consonant always starts the next syllable; longer runs are split
// according to which pairs may open a Spanish syllable.

use silabeo_core::character::is_vowel;

use super::Step;
use crate::state::ScanState;

/// Digraphs that are a single sound and never split.
const DIGRAPHS: &[[char; 2]] = &[['l', 'l'], ['c', 'h'], ['r', 'r']];

/// Consonant + liquid clusters that always open a syllable.
const LIQUID_CLUSTERS: &[[char; 2]] = &[
    ['g', 'l'],
    ['c', 'l'],
    ['k', 'l'],
    ['b', 'l'],
    ['v', 'l'],
    ['p', 'l'],
    ['f', 'l'],
    ['t', 'l'],
    ['g', 'r'],
    ['c', 'r'],
    ['k', 'r'],
    ['b', 'r'],
    ['v', 'r'],
    ['p', 'r'],
    ['f', 'r'],
    ['t', 'r'],
    ['d', 'r'],
];

/// Groups that open a syllable when another consonant precedes them.
const ONSET_GROUPS: &[[char; 2]] = &[
    ['p', 't'],
    ['c', 't'],
    ['c', 'n'],
    ['p', 's'],
    ['m', 'n'],
    ['g', 'n'],
    ['f', 't'],
    ['p', 'n'],
    ['c', 'z'],
    ['t', 'z'],
    ['t', 's'],
];

/// Consume the coda of the current syllable.
///
/// Advances the cursor by 0 to 3 characters and never fails.
pub fn scan(mut state: ScanState<'_>) -> Step<'_> {
    let start = state.cursor.position();
    let taken = coda_len(&state);
    state.cursor.advance(taken);
    let span = state.cursor.span_from(start);
    (state, span)
}

/// Number of characters at the cursor that belong to the coda.
fn coda_len(state: &ScanState<'_>) -> usize {
    let cursor = &state.cursor;

    let Some(c1) = cursor.current() else {
        return 0;
    };
    if is_vowel(c1, cursor.peek(1)) {
        return 0;
    }

    // A final consonant is the coda.
    if cursor.at_last() {
        return 1;
    }

    let Some(c2) = cursor.peek(1) else {
        return 1;
    };

    // A single consonant between vowels opens the next syllable.
    if is_vowel(c2, cursor.peek(2)) {
        return 0;
    }

    // Two final consonants, unless the second is a vowel "y".
    if cursor.remaining() <= 2 {
        return if c2 != 'y' { 2 } else { 0 };
    }

    let Some(c3) = cursor.peek(2) else {
        return 0;
    };

    if is_vowel(c3, cursor.peek(3)) {
        return split_before_vowel(c1, c2, c3);
    }

    // Three final consonants.
    if cursor.remaining() <= 3 {
        if c2 == 'y' && is_vowel('y', Some(c3)) {
            return 0;
        }
        return if c3 == 'y' { 1 } else { 3 };
    }

    // Three consonants mid-word.
    if c2 == 'y' && is_vowel('y', Some(c3)) {
        return 1;
    }
    if ONSET_GROUPS.contains(&[c2, c3]) {
        return 1;
    }
    if matches!(c3, 'l' | 'r' | 'y') || [c2, c3] == ['c', 'h'] {
        1
    } else {
        2
    }
}

/// Two consonants `c1 c2` followed by the vowel `c3`.
fn split_before_vowel(c1: char, c2: char, c3: char) -> usize {
    let pair = [c1, c2];
    if DIGRAPHS.contains(&pair) {
        return 0;
    }
    // consonant + h opens a syllable, except "sh" and "rh"
    if c2 == 'h' && !matches!(c1, 's' | 'r') {
        return 0;
    }
    if c2 == 'y' {
        // vowel "y": c1 alone before it opens the next syllable
        // consonant "y": the split falls right before it
        return if is_vowel('y', Some(c3)) { 0 } else { 1 };
    }
    if LIQUID_CLUSTERS.contains(&pair) {
        return 0;
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::test_support::{chars, state_at};

    fn coda_at(word: &str, pos: usize) -> String {
        let word = chars(word);
        scan(state_at(&word, pos)).1
    }

    // -----------------------------------------------------------------------
    // No coda
    // -----------------------------------------------------------------------

    #[test]
    fn none_at_end() {
        assert_eq!(coda_at("casa", 4), "");
    }

    #[test]
    fn none_before_vowel() {
        assert_eq!(coda_at("caos", 2), "");
    }

    #[test]
    fn single_consonant_between_vowels() {
        assert_eq!(coda_at("casa", 2), "");
        assert_eq!(coda_at("tenacidad", 6), "");
    }

    // -----------------------------------------------------------------------
    // End of word
    // -----------------------------------------------------------------------

    #[test]
    fn final_consonant() {
        assert_eq!(coda_at("mel\u{00F3}n", 4), "n"); // melón
        assert_eq!(coda_at("tenacidad", 8), "d");
    }

    #[test]
    fn two_final_consonants() {
        assert_eq!(coda_at("bypass", 4), "ss");
        assert_eq!(coda_at("b\u{00ED}ceps", 4), "ps"); // bíceps
    }

    #[test]
    fn three_final_consonants() {
        assert_eq!(coda_at("ginsps", 3), "sps");
    }

    // -----------------------------------------------------------------------
    // Consonant pairs before a vowel
    // -----------------------------------------------------------------------

    #[test]
    fn pair_splits() {
        assert_eq!(coda_at("encuentro", 1), "n");
        assert_eq!(coda_at("huesca", 3), "s");
        assert_eq!(coda_at("actu\u{00E1}is", 1), "c");
    }

    #[test]
    fn digraphs_do_not_split() {
        assert_eq!(coda_at("perro", 2), "");
        assert_eq!(coda_at("calle", 2), "");
        assert_eq!(coda_at("coche", 2), "");
    }

    #[test]
    fn liquid_clusters_do_not_split() {
        assert_eq!(coda_at("libro", 2), "");
        assert_eq!(coda_at("hablar", 2), "");
    }

    #[test]
    fn consonant_h_opens_syllable() {
        assert_eq!(coda_at("anhelo", 1), "");
        assert_eq!(coda_at("deshacer", 2), "s");
    }

    #[test]
    fn consonant_y_splits_before_y() {
        assert_eq!(coda_at("coadyuvar", 3), "d");
        assert_eq!(coda_at("abyecto", 1), "b");
    }

    #[test]
    fn vowel_y_after_consonant() {
        assert_eq!(coda_at("curry", 2), "");
    }

    // -----------------------------------------------------------------------
    // Three consonants mid-word
    // -----------------------------------------------------------------------

    #[test]
    fn consonant_before_liquid_cluster() {
        assert_eq!(coda_at("encuentro", 5), "n");
        assert_eq!(coda_at("hombre", 2), "m");
    }

    #[test]
    fn onset_groups_after_consonant() {
        assert_eq!(coda_at("\u{00E1}rctico", 1), "r"); // árctico
    }

    #[test]
    fn split_after_second_consonant() {
        assert_eq!(coda_at("instante", 1), "ns");
        assert_eq!(coda_at("obstinado", 1), "bs");
        assert_eq!(coda_at("perspectiva", 2), "rs");
    }

    #[test]
    fn ch_after_consonant() {
        assert_eq!(coda_at("ancho", 1), "n");
    }
}
