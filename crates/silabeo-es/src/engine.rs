// Engine: drives onset, nucleus and coda scans over a whole word
//
// One loop iteration produces one syllable. When the cursor reaches the end
// of the word the stressed syllable is resolved and the post-conditions are
// checked before the result is assembled.

use silabeo_core::character::lower_chars;
use silabeo_core::{SyllabifiedWord, Syllable};

use crate::error::SyllabifyError;
use crate::scanner::{coda, nucleus, onset};
use crate::state::ScanState;
use crate::stress;

/// Split `word` into syllables and find its stressed syllable.
///
/// The word is lowercased character by character before scanning. This
/// function does not validate the alphabet; see [`crate::validate`].
pub fn syllabify(word: &str) -> Result<SyllabifiedWord, SyllabifyError> {
    let lower = lower_chars(word);
    if lower.is_empty() {
        return Err(SyllabifyError::EmptyWord);
    }

    let mut state = ScanState::new(&lower);

    while !state.cursor.is_ended() {
        state = scan_syllable(state)?;
    }

    let stressed = stress::resolve(&state)?;
    stress::apply(&mut state, stressed)?;
    check_coverage(&state, &lower)?;

    log::debug!(
        "{word}: {} syllables, stressed {stressed}, accent {:?}",
        state.syllables.len(),
        state.accent
    );

    Ok(SyllabifiedWord {
        original: word.to_string(),
        syllables: state.syllables,
        stressed,
        accent: state.accent,
    })
}

/// Run onset, nucleus and coda once and append the resulting syllable.
fn scan_syllable(state: ScanState<'_>) -> Result<ScanState<'_>, SyllabifyError> {
    let start = state.cursor.position();

    let (state, onset) = onset::scan(state);
    let (state, nucleus) = nucleus::scan(state)?;
    let (mut state, coda) = coda::scan(state);

    let end = state.cursor.position();
    if end == start {
        return Err(SyllabifyError::MalformedInput { position: start });
    }

    let accented = state.accent.is_some_and(|a| start <= a && a < end);
    log::trace!("syllable {start}..{end}: [{onset}|{nucleus}|{coda}]");
    state.syllables.push(Syllable {
        onset,
        nucleus,
        coda,
        accented,
        stressed: false,
    });

    if state.stress_found && state.stressed.is_none() {
        state.stressed = Some(state.syllables.len() - 1);
    }

    Ok(state)
}

fn check_coverage(state: &ScanState<'_>, lower: &[char]) -> Result<(), SyllabifyError> {
    let joined: String = state.syllables.iter().map(Syllable::text).collect();
    if !joined.chars().eq(lower.iter().copied()) {
        return Err(SyllabifyError::InternalInconsistency {
            detail: format!("syllables {joined:?} do not cover the word"),
        });
    }
    Ok(())
}
