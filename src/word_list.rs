//! `word_list` — Module to load and preprocess the hidden-word list.
//!
//! The input is a plain text file with one word per line, in the format
//! `WORD;definition`. The definition is optional: a bare `WORD` line is
//! valid. Output is a `WordList` holding validated [`Word`]s.
//!
//! The parsing logic:
//! - Each line is trimmed; empty lines are skipped.
//! - The line splits on the first `;` into word and definition, so
//!   definitions may themselves contain semicolons.
//! - The word part goes through [`Word::new`]: uppercased and checked for
//!   A-Z only, at least two letters. Lines that fail validation are
//!   skipped silently.
//! - Duplicates are dropped keeping the first occurrence, definition
//!   included.
//! - Input order is preserved: it is the order words are handed to the
//!   solver, so the file author controls placement priority.
//!
//! The public API provides:
//! - `parse_from_str(...)` — parse an in-memory string (tests, bundled lists).
//! - `load_from_path(...)` — convenience method to read from a file path.

use crate::word::Word;
use std::collections::HashSet;

/// A processed, ready-to-solve word list.
///
/// The `words` vector contains all valid words (normalized, deduplicated),
/// still in file order.
#[derive(Debug, Clone)]
pub struct WordList {
    /// Validated words, first occurrence of each.
    pub words: Vec<Word>,
}

impl WordList {
    /// Parse a raw word list from an in-memory string.
    ///
    /// # Arguments
    /// * `contents` — The raw file contents. Each line should be
    ///   `WORD;definition` or just `WORD`.
    ///
    /// # Returns
    /// * `WordList` — Struct containing all valid words.
    ///
    /// # Behavior:
    /// 1. Splits the input into lines and trims each.
    /// 2. Skips empty lines.
    /// 3. Splits each line on the first `;` into word and definition.
    /// 4. Validates and normalizes the word; invalid lines are skipped.
    /// 5. Drops a definition that is empty after trimming.
    /// 6. Deduplicates, keeping the first occurrence in input order.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let parsed = contents.lines().filter_map(|raw_line| {
            let line = raw_line.trim();
            if line.is_empty() {
                return None;
            }

            let (text, definition) = match line.split_once(';') {
                Some((text, definition)) => (text, Some(definition)),
                None => (line, None),
            };
            let definition = definition.map(str::trim).filter(|d| !d.is_empty());

            // Invalid words (digits, spaces, one-letter lines) are dropped
            // here rather than failing the whole file.
            Word::new(text.trim(), definition).ok()
        });

        // Dedup keeps the first occurrence. We cannot sort + dedup the way a
        // scored list would: input order is the solving order, so it has to
        // survive parsing untouched.
        let mut seen: HashSet<String> = HashSet::new();
        let words = parsed
            .filter(|word| seen.insert(word.text().to_string()))
            .collect();

        WordList { words }
    }

    /// Convenience method: read from a file path and parse.
    ///
    /// # Example:
    /// `let word_list = WordList::load_from_path("data/animals.txt")?;`
    /// `println!("Loaded {} words", word_list.words.len());`
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        // Read the entire file into a single string.
        // Using `read_to_string` ensures UTF-8 decoding.
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(list: &WordList) -> Vec<&str> {
        list.words.iter().map(Word::text).collect()
    }

    #[test]
    fn test_parse_basic() {
        let input = "CAT;a small feline\nDOG;a loyal companion";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(texts(&word_list), vec!["CAT", "DOG"]);
        assert_eq!(word_list.words[0].definition(), Some("a small feline"));
        assert_eq!(word_list.words[1].definition(), Some("a loyal companion"));
    }

    #[test]
    fn test_parse_bare_words_have_no_definition() {
        let input = "CAT\nDOG";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(texts(&word_list), vec!["CAT", "DOG"]);
        assert!(word_list.words.iter().all(|w| w.definition().is_none()));
    }

    #[test]
    fn test_parse_normalizes_to_uppercase() {
        let input = "cat;feline\nDog;canine";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(texts(&word_list), vec!["CAT", "DOG"]);
    }

    #[test]
    fn test_parse_preserves_input_order() {
        let input = "ZEBRA;striped\nANT;small\nMOUSE;quiet";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(texts(&word_list), vec!["ZEBRA", "ANT", "MOUSE"]);
    }

    #[test]
    fn test_parse_first_occurrence_wins() {
        let input = "CAT;first\nDOG;canine\nCAT;second";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(texts(&word_list), vec!["CAT", "DOG"]);
        assert_eq!(word_list.words[0].definition(), Some("first"));
    }

    #[test]
    fn test_parse_skips_empty_lines() {
        let input = "CAT;feline\n\n\nDOG;canine\n\n";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(texts(&word_list), vec!["CAT", "DOG"]);
    }

    #[test]
    fn test_parse_skips_invalid_words() {
        let input = "CAT;feline\nX;too short\n123;digits\nTWO WORDS;spaced";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(texts(&word_list), vec!["CAT"]);
    }

    #[test]
    fn test_parse_empty_input() {
        let input = "";
        let word_list = WordList::parse_from_str(input);

        assert!(word_list.is_empty());
    }

    #[test]
    fn test_parse_handles_whitespace() {
        let input = "  cat  ;  a small feline  \n  dog  ;  a loyal companion  ";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(texts(&word_list), vec!["CAT", "DOG"]);
        assert_eq!(word_list.words[0].definition(), Some("a small feline"));
    }

    #[test]
    fn test_parse_blank_definition_is_none() {
        let input = "CAT;\nDOG;   ";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(texts(&word_list), vec!["CAT", "DOG"]);
        assert!(word_list.words.iter().all(|w| w.definition().is_none()));
    }

    #[test]
    fn test_parse_definition_may_contain_semicolons() {
        let input = "CAT;a feline; sleeps all day";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(word_list.words[0].definition(), Some("a feline; sleeps all day"));
    }

    #[test]
    fn test_load_from_missing_path_names_the_file() {
        let err = WordList::load_from_path("/nonexistent/words.txt").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/words.txt"));
    }
}
