//! Validated puzzle words: uppercase A-Z, at least two letters, with an
//! optional definition carried for display.

use crate::errors::PuzzleError;
use std::fmt;
use std::ops::RangeInclusive;

// Character-set constants
pub(crate) const ALPHABET_SIZE: usize = 26;
pub(crate) const UPPERCASE_ALPHABET: RangeInclusive<char> = 'A'..='Z';

/// Words shorter than this are indistinguishable from fill noise.
pub(crate) const MIN_WORD_LEN: usize = 2;

/// A placeable word. Construction normalizes ASCII case and rejects anything
/// outside A-Z, so the solver and dictionary only ever see well-formed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    definition: Option<String>,
}

impl Word {
    /// Create a word from raw text, uppercasing ASCII letters.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::EmptyWord` for an empty string,
    /// `PuzzleError::InvalidCharacter` for anything outside A-Z after
    /// uppercasing, and `PuzzleError::WordTooShort` for single letters.
    pub fn new(text: &str, definition: Option<&str>) -> Result<Self, PuzzleError> {
        if text.is_empty() {
            return Err(PuzzleError::EmptyWord);
        }
        let upper = text.to_ascii_uppercase();
        if let Some(invalid_char) = upper.chars().find(|c| !UPPERCASE_ALPHABET.contains(c)) {
            return Err(PuzzleError::InvalidCharacter { word: upper.clone(), invalid_char });
        }
        // All-ASCII at this point, so byte length equals letter count.
        if upper.len() < MIN_WORD_LEN {
            return Err(PuzzleError::WordTooShort { word: upper });
        }
        Ok(Self { text: upper, definition: definition.map(str::to_string) })
    }

    /// Assemble a word from parts already known to be valid (an uppercase A-Z
    /// text of length >= 2). Used when rebuilding words out of the trie, whose
    /// contents were validated on insert.
    pub(crate) fn from_parts(text: String, definition: Option<String>) -> Self {
        debug_assert!(
            text.len() >= MIN_WORD_LEN && text.chars().all(|c| c.is_ascii_uppercase()),
            "from_parts requires pre-validated text, got {text:?}"
        );
        Self { text, definition }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
