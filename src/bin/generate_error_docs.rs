//! Generate error code documentation from the source of truth (the error enum).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `PuzzleError` implementation via its `code()`,
//! `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use wordgrid::errors::PuzzleError;

/// Helper to create one sample of every `PuzzleError` variant for documentation
fn all_puzzle_error_variants() -> Vec<PuzzleError> {
    vec![
        PuzzleError::GridTooSmall { size: 3 },
        PuzzleError::WordTooLong { word: "ELEPHANT".to_string(), size: 5 },
        PuzzleError::EmptyWord,
        PuzzleError::WordTooShort { word: "A".to_string() },
        PuzzleError::InvalidCharacter { word: "R2D2".to_string(), invalid_char: '2' },
        PuzzleError::Unplaceable { size: 5, word_count: 9 },
    ]
}

fn print_error_docs(errors: &[PuzzleError]) {
    for error in errors {
        println!("### {}: {}\n", error.code(), error.description());
        println!("**Details:** {}\n", error.details());

        if let Some(help_text) = error.help() {
            println!("**How to fix:**");
            println!("```");
            println!("{help_text}");
            println!("```\n");
        }

        println!("**Example error message:**");
        println!("```");
        println!("{error}");
        println!("```\n");

        println!("**Detailed format:**");
        println!("```");
        println!("{}", error.display_detailed());
        println!("```\n");

        println!("---\n");
    }
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Puzzle Errors\n");
    println!("Errors raised while validating words and constructing a puzzle.\n");
    print_error_docs(&all_puzzle_error_variants());

    println!("## How to Use Error Codes\n");
    println!("When you see an error like:\n");
    println!("```");
    println!("Error: Grid size 3 is below the minimum of 5 (P001)");
    println!("Pass a grid size of at least 5 (the original game uses 14)");
    println!("```\n");
    println!("1. Note the error code (e.g., `P001`)");
    println!("2. Look it up in this document for detailed explanation");
    println!("3. Follow the suggested resolution steps\n");

    println!("## Error Display Formats\n");
    println!("Errors are displayed in two formats:\n");
    println!("### Simple Format");
    println!("```");
    println!("Error: <message>");
    println!("```\n");
    println!("### Detailed Format (via `display_detailed()`)");
    println!("```");
    println!("<message> (<code>)");
    println!("<help text if available>");
    println!("```");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// The sample list must cover each error code exactly once, or the
    /// generated reference silently drops a variant.
    #[test]
    fn test_variant_list_covers_every_code_once() {
        let codes: Vec<&str> = all_puzzle_error_variants().iter().map(PuzzleError::code).collect();
        let unique: HashSet<&str> = codes.iter().copied().collect();

        assert_eq!(codes.len(), unique.len(), "duplicate code in the sample list");
        assert_eq!(unique.len(), 6);
    }
}
