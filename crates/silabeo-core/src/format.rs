// Rendering of syllabified words for display

use crate::syllable::SyllabifiedWord;

// ---------------------------------------------------------------------------
// Format options
// ---------------------------------------------------------------------------

/// Options controlling how a [`SyllabifiedWord`] is rendered as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// String placed between syllables.
    pub separator: String,

    /// When true, wrap the stressed syllable in `stress_open`/`stress_close`.
    pub mark_stressed: bool,

    /// Marker written before the stressed syllable.
    pub stress_open: String,

    /// Marker written after the stressed syllable.
    pub stress_close: String,
}

impl Default for FormatOptions {
    /// Hyphen-separated, stressed syllable unmarked, `>`/`<` as markers.
    fn default() -> Self {
        Self {
            separator: "-".to_string(),
            mark_stressed: false,
            stress_open: ">".to_string(),
            stress_close: "<".to_string(),
        }
    }
}

impl FormatOptions {
    /// Default options with the stressed syllable marked.
    pub fn with_stress() -> Self {
        Self {
            mark_stressed: true,
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render the original-cased syllables of `word` according to `options`.
pub fn render(word: &SyllabifiedWord, options: &FormatOptions) -> String {
    let pieces = word.original_syllables();
    let mut out = String::with_capacity(word.original.len() + pieces.len() * 3);
    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            out.push_str(&options.separator);
        }
        if options.mark_stressed && i == word.stressed {
            out.push_str(&options.stress_open);
            out.push_str(piece);
            out.push_str(&options.stress_close);
        } else {
            out.push_str(piece);
        }
    }
    out
}

/// Render the original word with the accented letter wrapped in the given
/// markers. Words without a written accent are returned unchanged.
pub fn highlight_accent(word: &SyllabifiedWord, open: &str, close: &str) -> String {
    let Some(accent) = word.accent else {
        return word.original.clone();
    };
    let mut out = String::with_capacity(word.original.len() + open.len() + close.len());
    for (i, c) in word.original.chars().enumerate() {
        if i == accent {
            out.push_str(open);
            out.push(c);
            out.push_str(close);
        } else {
            out.push(c);
        }
    }
    out
}

impl SyllabifiedWord {
    /// Render this word with the given options.
    pub fn hyphenate_with(&self, options: &FormatOptions) -> String {
        render(self, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllable::Syllable;

    fn melon() -> SyllabifiedWord {
        SyllabifiedWord {
            original: "mel\u{00F3}n".to_string(),
            syllables: vec![
                Syllable {
                    onset: "m".into(),
                    nucleus: "e".into(),
                    ..Default::default()
                },
                Syllable {
                    onset: "l".into(),
                    nucleus: "\u{00F3}".into(),
                    coda: "n".into(),
                    accented: true,
                    stressed: true,
                },
            ],
            stressed: 1,
            accent: Some(3),
        }
    }

    #[test]
    fn default_render() {
        assert_eq!(render(&melon(), &FormatOptions::default()), "me-l\u{00F3}n");
    }

    #[test]
    fn render_with_stress() {
        assert_eq!(
            melon().hyphenate_with(&FormatOptions::with_stress()),
            "me->l\u{00F3}n<"
        );
    }

    #[test]
    fn render_custom_separator() {
        let opts = FormatOptions {
            separator: "\u{00B7}".to_string(),
            mark_stressed: true,
            stress_open: "[".to_string(),
            stress_close: "]".to_string(),
        };
        assert_eq!(render(&melon(), &opts), "me\u{00B7}[l\u{00F3}n]");
    }

    #[test]
    fn accent_highlight() {
        assert_eq!(highlight_accent(&melon(), "*", "*"), "mel*\u{00F3}*n");
    }

    #[test]
    fn accent_highlight_without_accent() {
        let mut word = melon();
        word.accent = None;
        assert_eq!(highlight_accent(&word, "*", "*"), "mel\u{00F3}n");
    }
}
