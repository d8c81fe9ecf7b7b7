// Stress resolution for words without a written accent

use silabeo_core::character::is_vowel;

use crate::error::SyllabifyError;
use crate::state::ScanState;

/// Index of the stressed syllable once scanning has finished.
///
/// A written accent already fixed the stressed syllable during the scan.
/// Otherwise the default rule applies: words ending in a vowel, or in "n"/"s"
/// after a vowel, stress the second-to-last syllable, everything else the
/// last one. A final "y" counts as a vowel after a consonant ("curry") and as
/// a consonant after a vowel ("estoy").
pub fn resolve(state: &ScanState<'_>) -> Result<usize, SyllabifyError> {
    if let Some(stressed) = state.stressed {
        return Ok(stressed);
    }

    let count = state.syllables.len();
    if count == 0 {
        return Err(SyllabifyError::InternalInconsistency {
            detail: "no syllables to stress".to_string(),
        });
    }
    if count == 1 {
        return Ok(0);
    }

    let chars = state.cursor.chars();
    let len = chars.len();
    if len < 2 {
        return Ok(count - 1);
    }
    let (prev, last) = (chars[len - 2], chars[len - 1]);

    let penultimate = if last == 'y' {
        !is_vowel(prev, Some(last))
    } else {
        is_vowel(last, None) || (matches!(last, 'n' | 's') && vowel_before(chars, len - 2))
    };

    let stressed = if penultimate { count - 2 } else { count - 1 };
    log::debug!("default stress on syllable {stressed} of {count} (ends in {prev}{last})");
    Ok(stressed)
}

/// Whether `chars[index]` counts as a vowel for the stress rule.
///
/// A "y" after a vowel closes a diphthong and counts as a consonant
/// ("jerseys"); after a consonant or at the start it is a vowel ("rugbys").
fn vowel_before(chars: &[char], index: usize) -> bool {
    let c = chars[index];
    if c != 'y' {
        return is_vowel(c, chars.get(index + 1).copied());
    }
    !index
        .checked_sub(1)
        .is_some_and(|before| is_vowel(chars[before], Some(c)))
}

/// Mark syllable `index` as stressed and check the scan's post-conditions.
pub fn apply(state: &mut ScanState<'_>, index: usize) -> Result<(), SyllabifyError> {
    let Some(syllable) = state.syllables.get_mut(index) else {
        return Err(SyllabifyError::InternalInconsistency {
            detail: format!("stressed index {index} out of range"),
        });
    };
    syllable.stressed = true;
    state.stressed = Some(index);

    let marked = state.syllables.iter().filter(|s| s.stressed).count();
    if marked != 1 {
        return Err(SyllabifyError::InternalInconsistency {
            detail: format!("{marked} syllables marked as stressed"),
        });
    }

    if let Some(accent) = state.accent {
        let start: usize = state.syllables[..index].iter().map(|s| s.char_len()).sum();
        let nucleus = state.syllables[index].nucleus_range();
        let in_nucleus = accent >= start + nucleus.start && accent < start + nucleus.end;
        if !in_nucleus {
            return Err(SyllabifyError::InternalInconsistency {
                detail: format!("accent at {accent} is outside the stressed nucleus"),
            });
        }
    }

    Ok(())
}
