// Nucleus: the vowel group at the core of a syllable
//
// Up to three vowel slots are scanned:
//   1. the first vowel, always consumed
//   2. an optional second vowel forming a rising or falling diphthong
//   3. an optional closing "u"/"i" completing a triphthong
// An "h" between the first and second vowel is consumed tentatively and
// given back whenever the second vowel does not join the nucleus.

use silabeo_core::VowelType;
use silabeo_core::character::{classify_vowel, has_accent, is_closed, is_open, is_vowel};

use super::ScanResult;
use crate::cursor::Checkpoint;
use crate::error::SyllabifyError;
use crate::state::ScanState;

/// Consume the nucleus of the syllable at the cursor.
///
/// Returns an empty span at end of word. Fails with
/// [`SyllabifyError::InvalidNucleus`] when the cursor is not on a vowel.
pub fn scan(mut state: ScanState<'_>) -> ScanResult<'_> {
    let start = state.cursor.position();

    if state.cursor.current() == Some('y') && !is_vowel('y', state.cursor.peek(1)) {
        state.cursor.advance(1);
    }

    let Some(first) = state.cursor.current() else {
        return Ok(finish(state, start));
    };

    let position = state.cursor.position();
    let first_type = match classify_vowel(first) {
        Some(vowel) if is_vowel(first, state.cursor.peek(1)) => vowel,
        _ => {
            return Err(SyllabifyError::InvalidNucleus {
                position,
                found: first,
            });
        }
    };

    if has_accent(first_type) {
        state.record_accent(position);
        state.stress_found = true;
    }
    state.cursor.advance(1);

    // An accented closed vowel never forms a diphthong.
    if first_type == VowelType::ClosedWithAccent {
        return Ok(finish(state, start));
    }

    // "prohibir" keeps the h inside the nucleus, "ahora" does not.
    let before_h = state.cursor.checkpoint();
    let found_h = state.cursor.current() == Some('h');
    if found_h {
        state.cursor.advance(1);
    }

    if state.cursor.is_ended() {
        return Ok(finish(state, start));
    }

    if state.cursor.position() == start {
        return Err(SyllabifyError::MalformedInput { position: start });
    }

    let Some(second) = state.cursor.current() else {
        return Ok(finish(state, start));
    };
    if !is_vowel(second, state.cursor.peek(1)) {
        return Ok(finish(state, start));
    }
    let Some(second_type) = classify_vowel(second) else {
        return Ok(finish(state, start));
    };

    match second_type {
        VowelType::Open | VowelType::OpenWithAccent => {
            // Two open vowels are a hiatus.
            if is_open(first_type) {
                give_back(&mut state, found_h, before_h);
                return Ok(finish(state, start));
            }
            if has_accent(second_type) {
                let position = state.cursor.position();
                state.record_accent(position);
                state.stress_found = true;
            }
            state.cursor.advance(1);
        }
        VowelType::ClosedWithAccent => {
            let position = state.cursor.position();
            state.record_accent(position);
            if is_closed(first_type) {
                state.stress_found = true;
                state.cursor.advance(1);
            } else {
                give_back(&mut state, found_h, before_h);
            }
            return Ok(finish(state, start));
        }
        VowelType::Closed => {
            // vowel + closed + vowel: the closed vowel opens the next syllable.
            let next_is_vowel = state
                .cursor
                .peek(1)
                .is_some_and(|next| is_vowel(next, state.cursor.peek(2)));
            if next_is_vowel {
                give_back(&mut state, found_h, before_h);
                return Ok(finish(state, start));
            }
            // Two identical closed vowels do not merge.
            if state.cursor.behind(1) != Some(second) {
                state.cursor.advance(1);
            }
            return Ok(finish(state, start));
        }
    }

    if matches!(state.cursor.current(), Some('u' | 'i')) {
        state.cursor.advance(1);
    }

    // "paraguay": a final "y" closes the triphthong.
    if state.cursor.current() == Some('y') && state.cursor.at_last() {
        state.cursor.advance(1);
    }

    Ok(finish(state, start))
}

fn give_back(state: &mut ScanState<'_>, found_h: bool, before_h: Checkpoint) {
    if found_h {
        state.cursor.restore(before_h);
    }
}

fn finish(state: ScanState<'_>, start: usize) -> (ScanState<'_>, String) {
    let span = state.cursor.span_from(start);
    (state, span)
}
