//! Error types for puzzle construction with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (P001-P006) for documentation lookup:
//!
//! - P001: `GridTooSmall` (Grid dimension below the supported minimum)
//! - P002: `WordTooLong` (Word cannot fit on the grid in any direction)
//! - P003: `EmptyWord` (Empty word string)
//! - P004: `WordTooShort` (Word shorter than two letters)
//! - P005: `InvalidCharacter` (Word contains a character outside A-Z)
//! - P006: `Unplaceable` (Solver exhausted without placing every word)
//!
//! # Examples
//!
//! ```
//! use wordgrid::errors::PuzzleError;
//!
//! fn check_size(size: usize) -> Result<(), Box<PuzzleError>> {
//!     if size < 5 {
//!         return Err(Box::new(PuzzleError::GridTooSmall { size }));
//!     }
//!     Ok(())
//! }
//!
//! match check_size(3) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

/// Custom error type for puzzle-construction operations
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("Grid size {size} is below the minimum of 5")]
    GridTooSmall { size: usize },

    #[error("Word \"{word}\" ({} letters) cannot fit on a {size}x{size} grid", .word.len())]
    WordTooLong { word: String, size: usize },

    #[error("Empty word string")]
    EmptyWord,

    #[error("Word \"{word}\" is shorter than two letters")]
    WordTooShort { word: String },

    #[error("Word \"{word}\" contains invalid character '{invalid_char}' (only A-Z allowed)")]
    InvalidCharacter { word: String, invalid_char: char },

    #[error("Could not place all {word_count} words on a {size}x{size} grid")]
    Unplaceable { size: usize, word_count: usize },
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::GridTooSmall { .. } => "P001",
            PuzzleError::WordTooLong { .. } => "P002",
            PuzzleError::EmptyWord => "P003",
            PuzzleError::WordTooShort { .. } => "P004",
            PuzzleError::InvalidCharacter { .. } => "P005",
            PuzzleError::Unplaceable { .. } => "P006",
        }
    }

    /// Returns a short, variant-level description (no instance data)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PuzzleError::GridTooSmall { .. } => "Grid dimension below the supported minimum",
            PuzzleError::WordTooLong { .. } => "Word cannot fit on the grid in any direction",
            PuzzleError::EmptyWord => "Empty word string",
            PuzzleError::WordTooShort { .. } => "Word shorter than two letters",
            PuzzleError::InvalidCharacter { .. } => "Word contains a character outside A-Z",
            PuzzleError::Unplaceable { .. } => "Solver exhausted without placing every word",
        }
    }

    /// Returns an expanded explanation including the instance data
    #[must_use]
    pub fn details(&self) -> String {
        match self {
            PuzzleError::GridTooSmall { size } => {
                format!("A {size}x{size} board has no room for crossing words")
            }
            PuzzleError::WordTooLong { word, size } => format!(
                "The longest straight run on a {size}x{size} grid is {size} cells; \"{word}\" needs {}",
                word.len()
            ),
            PuzzleError::EmptyWord => "A word was empty after trimming".to_string(),
            PuzzleError::WordTooShort { word } => {
                format!("\"{word}\" has fewer than the two letters a placement needs")
            }
            PuzzleError::InvalidCharacter { invalid_char, .. } => {
                format!("'{invalid_char}' can never be placed; grid cells hold only A-Z")
            }
            PuzzleError::Unplaceable { word_count, .. } => format!(
                "The search tried every arrangement it could for the {word_count} words within its budget"
            ),
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::GridTooSmall { .. } => {
                Some("Pass a grid size of at least 5 (the original game uses 14)")
            }
            PuzzleError::WordTooLong { .. } => {
                Some("Grow the grid or drop the word: the longest straight run on an NxN grid is N cells")
            }
            PuzzleError::EmptyWord => Some("Example: use 'CAT' or 'RIVER' instead of an empty string"),
            PuzzleError::WordTooShort { .. } => {
                Some("Placeable words need at least two letters; single letters are indistinguishable from noise")
            }
            PuzzleError::InvalidCharacter { .. } => {
                Some("Words are uppercased automatically but must contain only ASCII letters (no spaces, digits, or hyphens)")
            }
            PuzzleError::Unplaceable { .. } => {
                Some("Retry with a different seed, a larger grid, or fewer/shorter words")
            }
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_help() {
        let err = PuzzleError::GridTooSmall { size: 3 };
        assert_eq!(err.code(), "P001");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("P001"));
        assert!(detailed.contains("at least 5"));
    }

    #[test]
    fn test_word_too_long_mentions_both_sizes() {
        let err = PuzzleError::WordTooLong { word: "ELEPHANT".to_string(), size: 5 };
        assert_eq!(err.code(), "P002");
        let detailed = err.display_detailed();
        assert!(detailed.contains("ELEPHANT"));
        assert!(detailed.contains('8'));
        assert!(detailed.contains('5'));
    }

    /// Test that all `PuzzleError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();

        // Sample one of each variant
        let errors: Vec<PuzzleError> = vec![
            PuzzleError::GridTooSmall { size: 3 },
            PuzzleError::WordTooLong { word: "ELEPHANT".to_string(), size: 5 },
            PuzzleError::EmptyWord,
            PuzzleError::WordTooShort { word: "A".to_string() },
            PuzzleError::InvalidCharacter { word: "SEA HORSE".to_string(), invalid_char: ' ' },
            PuzzleError::Unplaceable { size: 5, word_count: 4 },
        ];

        for err in errors {
            let code = err.code();
            assert!(
                code.starts_with('P'),
                "Error code '{}' should start with 'P'",
                code
            );
            assert!(
                codes.insert(code),
                "Duplicate error code found: {}",
                code
            );
        }

        assert_eq!(codes.len(), 6, "Should have 6 unique error codes");
    }

    /// Test that all error codes follow the format P0XX
    #[test]
    fn test_error_code_format() {
        let errors: Vec<PuzzleError> = vec![
            PuzzleError::GridTooSmall { size: 0 },
            PuzzleError::EmptyWord,
            PuzzleError::Unplaceable { size: 14, word_count: 9 },
        ];

        for err in errors {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (P0XX)", code);
            assert!(
                code.starts_with("P0"),
                "Error code '{}' should start with 'P0'",
                code
            );
            let num_part = &code[1..];
            assert!(
                num_part.parse::<u16>().is_ok(),
                "Error code '{}' should end with a number",
                code
            );
        }
    }

    /// Test that all errors have helpful help text
    #[test]
    fn test_all_errors_have_helpful_messages() {
        let errors: Vec<PuzzleError> = vec![
            PuzzleError::GridTooSmall { size: 2 },
            PuzzleError::WordTooLong { word: "CROCODILE".to_string(), size: 5 },
            PuzzleError::EmptyWord,
            PuzzleError::WordTooShort { word: "X".to_string() },
            PuzzleError::InvalidCharacter { word: "NAÏVE".to_string(), invalid_char: 'Ï' },
            PuzzleError::Unplaceable { size: 5, word_count: 8 },
        ];

        for err in errors {
            let help = err.help();
            if let Some(help_text) = help {
                assert!(
                    help_text.len() > 10,
                    "Help text for {:?} should be substantial",
                    err
                );
                // Help text should not just repeat the error message
                let err_msg = err.to_string();
                assert_ne!(help_text, err_msg, "Help text should provide additional information beyond error message");
            }
        }
    }

    /// Test that descriptions and details carry distinct information
    #[test]
    fn test_descriptions_and_details_are_distinct() {
        let errors: Vec<PuzzleError> = vec![
            PuzzleError::GridTooSmall { size: 3 },
            PuzzleError::WordTooLong { word: "ELEPHANT".to_string(), size: 5 },
            PuzzleError::EmptyWord,
            PuzzleError::WordTooShort { word: "A".to_string() },
            PuzzleError::InvalidCharacter { word: "R2D2".to_string(), invalid_char: '2' },
            PuzzleError::Unplaceable { size: 5, word_count: 9 },
        ];

        for err in errors {
            assert!(!err.description().is_empty());
            assert!(!err.details().is_empty());
            assert_ne!(err.description(), err.details(), "details should expand on the description");
        }
    }

    /// Test that display_detailed properly formats errors
    #[test]
    fn test_display_detailed_includes_code_and_help() {
        let err = PuzzleError::EmptyWord;
        let detailed = err.display_detailed();

        // should include code
        assert!(
            detailed.contains(err.code()),
            "Detailed display should include error code"
        );

        // should include base message
        let base_msg = err.to_string();
        assert!(
            detailed.contains(&base_msg),
            "Detailed display should include base error message"
        );

        // if there's help text, it should be included
        if let Some(help) = err.help() {
            assert!(
                detailed.contains(help),
                "Detailed display should include help text when available"
            );
        }
    }

    /// Test that error messages carry the values needed to act on them
    #[test]
    fn test_error_messages_are_actionable() {
        let err = PuzzleError::Unplaceable { size: 7, word_count: 12 };
        let detailed = err.display_detailed();

        // should explain what went wrong
        assert!(
            detailed.contains("place"),
            "Error should mention the failed placement"
        );

        // should include the actual values
        assert!(
            detailed.contains('7') && detailed.contains("12"),
            "Error should include the grid size and word count"
        );
    }
}
