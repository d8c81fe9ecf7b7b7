//! Regression tests: compare syllabification against a word list.
//!
//! Each non-comment line of `tests/data/spanish-hyphens.txt` holds a word,
//! its hyphenated form, the index of the stressed syllable and the character
//! position of the written accent (`-` when there is none).
//!
//! Run: cargo test -p silabeo-es --test regression

use std::path::PathBuf;

use silabeo_es::{Error, SyllabifyError, ValidationError};

// ---------------------------------------------------------------------------
// Fixture loading
// ---------------------------------------------------------------------------

struct Expected {
    line: usize,
    word: String,
    hyphenated: String,
    stressed: usize,
    accent: Option<usize>,
}

fn load_fixture(filename: &str) -> Vec<Expected> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(filename);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e));

    contents
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty() && !l.starts_with('#'))
        .map(|(i, l)| {
            let fields: Vec<&str> = l.split_whitespace().collect();
            assert_eq!(fields.len(), 4, "line {}: expected 4 fields: {l:?}", i + 1);
            Expected {
                line: i + 1,
                word: fields[0].to_string(),
                hyphenated: fields[1].to_string(),
                stressed: fields[2]
                    .parse()
                    .unwrap_or_else(|e| panic!("line {}: bad stress index: {e}", i + 1)),
                accent: match fields[3] {
                    "-" => None,
                    n => Some(
                        n.parse()
                            .unwrap_or_else(|e| panic!("line {}: bad accent: {e}", i + 1)),
                    ),
                },
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Word list
// ---------------------------------------------------------------------------

#[test]
fn word_list_matches() {
    let cases = load_fixture("spanish-hyphens.txt");
    assert!(!cases.is_empty(), "fixture is empty");

    let mut failures = Vec::new();
    for case in &cases {
        let result = match silabeo_es::syllabify(&case.word) {
            Ok(r) => r,
            Err(e) => {
                failures.push(format!("line {}: {}: error: {e}", case.line, case.word));
                continue;
            }
        };
        let got = (result.hyphenated(), result.stressed, result.accent);
        let want = (case.hyphenated.clone(), case.stressed, case.accent);
        if got != want {
            failures.push(format!(
                "line {}: {}: got {:?}, expected {:?}",
                case.line, case.word, got, want
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "{} of {} words differ:\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}

#[test]
fn word_list_syllables_rejoin() {
    for case in load_fixture("spanish-hyphens.txt") {
        let syllables = silabeo_es::syllables(&case.word).expect("syllabify");
        assert_eq!(syllables.concat(), case.word, "line {}", case.line);
    }
}

#[test]
fn uppercase_words_match_lowercase() {
    for case in load_fixture("spanish-hyphens.txt") {
        let upper = case.word.to_uppercase();
        // Skip words whose uppercase form changes length.
        if upper.chars().count() != case.word.chars().count() {
            continue;
        }
        let lower = silabeo_es::syllabify(&case.word).expect("lowercase");
        let shouted = silabeo_es::syllabify(&upper).expect("uppercase");
        assert_eq!(
            lower.syllable_texts(),
            shouted.syllable_texts(),
            "{}",
            case.word
        );
        assert_eq!(lower.stressed, shouted.stressed, "{}", case.word);
        assert_eq!(shouted.hyphenated().replace('-', ""), upper);
    }
}

// ---------------------------------------------------------------------------
// Consonant "y"
// ---------------------------------------------------------------------------

/// A "y" before a vowel opens its own syllable, even right after "n".
#[test]
fn consonant_y_after_n() {
    assert_eq!(
        silabeo_es::hyphenate("c\u{00F3}nyuge").unwrap(),
        "c\u{00F3}n-yu-ge"
    );
    assert_eq!(
        silabeo_es::hyphenate("inyecci\u{00F3}n").unwrap(),
        "in-yec-ci\u{00F3}n"
    );
}

// ---------------------------------------------------------------------------
// Rejected input
// ---------------------------------------------------------------------------

#[test]
fn rejected_words() {
    assert!(matches!(
        silabeo_es::syllabify("hello123"),
        Err(Error::Validation(ValidationError::InvalidLetters { .. }))
    ));
    assert!(matches!(
        silabeo_es::syllabify("m\u{00FC}sica"),
        Err(Error::Validation(ValidationError::MisplacedDiaeresis { .. }))
    ));
    assert!(matches!(
        silabeo_es::syllabify(""),
        Err(Error::Validation(ValidationError::Empty))
    ));
    assert_eq!(
        silabeo_es::engine::syllabify(""),
        Err(SyllabifyError::EmptyWord)
    );
}
