// Error types for validation and scanning

/// Failure inside the scanning engine. Terminal for the word being scanned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyllabifyError {
    /// A nucleus was expected but the character at `position` is not a vowel.
    #[error("nucleus expects a vowel, found {found:?} at position {position}")]
    InvalidNucleus { position: usize, found: char },

    /// A scan step made no forward progress at `position`.
    #[error("no forward progress at position {position}, unexpected character sequence")]
    MalformedInput { position: usize },

    /// The engine was given an empty word.
    #[error("cannot syllabify an empty word")]
    EmptyWord,

    /// A post-condition of the scan did not hold.
    #[error("internal inconsistency: {detail}")]
    InternalInconsistency { detail: String },
}

/// Rejection of a word before it reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The word is empty.
    #[error("the word is empty")]
    Empty,

    /// The word contains characters outside the Spanish alphabet.
    #[error("the word {word} contains invalid letters in Spanish: {letters}")]
    InvalidLetters { word: String, letters: String },

    /// "ü" appears outside "güe"/"güi".
    #[error("the word {word} does not seem to be Spanish, where \u{00FC} can only appear in g\u{00FC}e or g\u{00FC}i")]
    MisplacedDiaeresis { word: String },
}

/// Error returned by the public API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The word was rejected by input validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The engine failed while scanning a validated word.
    #[error(transparent)]
    Syllabify(#[from] SyllabifyError),
}

impl Error {
    /// True when the error comes from user input rather than the engine.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
