// Input validation: Spanish alphabet and placement of "ü"

use silabeo_core::character::{is_spanish_letter, simple_lower};

use crate::error::ValidationError;

/// Letters that may follow "gü".
const DIAERESIS_FOLLOWERS: &[char] = &['e', 'i', '\u{00E9}', '\u{00ED}'];

/// Check that `word` is non-empty, uses only Spanish letters, and that every
/// "ü" sits inside "güe" or "güi".
pub fn validate(word: &str) -> Result<(), ValidationError> {
    if word.is_empty() {
        return Err(ValidationError::Empty);
    }

    let lower: Vec<char> = word.chars().map(simple_lower).collect();

    let mut bad: Vec<char> = lower
        .iter()
        .copied()
        .filter(|&c| !is_spanish_letter(c))
        .collect();
    if !bad.is_empty() {
        bad.sort_unstable();
        bad.dedup();
        return Err(ValidationError::InvalidLetters {
            word: word.to_string(),
            letters: bad.into_iter().collect(),
        });
    }

    for (i, &c) in lower.iter().enumerate() {
        if c != '\u{00FC}' {
            continue;
        }
        let after_g = i > 0 && lower[i - 1] == 'g';
        let before_front_vowel = lower
            .get(i + 1)
            .is_some_and(|next| DIAERESIS_FOLLOWERS.contains(next));
        if !after_g || !before_front_vowel {
            return Err(ValidationError::MisplacedDiaeresis {
                word: word.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_words() {
        for word in [
            "hola",
            "tenacidad",
            "ni\u{00F1}o",
            "g\u{00FC}ero",
            "G\u{00FC}ero",
            "G\u{00DC}ERO",
            "g\u{00FC}e",
            "g\u{00FC}i",
            "ping\u{00FC}ino",
            "biling\u{00FC}e",
            "BILING\u{00DC}E",
        ] {
            assert_eq!(validate(word), Ok(()), "{word}");
        }
    }

    #[test]
    fn invalid_letters() {
        for word in ["caf\u{00E9}@", "word123", "se\u{00F1}or!", "test&word"] {
            let err = validate(word).unwrap_err();
            assert!(err.to_string().contains("invalid letters"), "{word}: {err}");
        }
    }

    #[test]
    fn invalid_letters_are_listed_once() {
        let err = validate("a11b2").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidLetters {
                word: "a11b2".into(),
                letters: "12".into(),
            }
        );
    }

    #[test]
    fn misplaced_diaeresis() {
        for word in [
            "m\u{00FC}sica",
            "t\u{00FC}",
            "\u{00FC}rsula",
            "g\u{00FC}a",
            "g\u{00FC}o",
            "g\u{00FC}",
            "b\u{00FC}ggy",
        ] {
            let err = validate(word).unwrap_err();
            assert!(
                err.to_string()
                    .contains("\u{00FC} can only appear in g\u{00FC}e or g\u{00FC}i"),
                "{word}: {err}"
            );
        }
    }

    #[test]
    fn empty_word() {
        assert_eq!(validate(""), Err(ValidationError::Empty));
    }
}
