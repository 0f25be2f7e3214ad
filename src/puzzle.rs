//! Puzzle orchestration: turn a word list into a playable, fully-filled
//! grid, and answer the questions a game front end asks about it.
//!
//! # Examples
//!
//! ```
//! use wordgrid::puzzle::{Puzzle, PuzzleConfig};
//! use wordgrid::word_list::WordList;
//!
//! let list = WordList::parse_from_str("CAT;a small feline\nDOG;a loyal companion");
//! let config = PuzzleConfig { size: 8, seed: 7, ..PuzzleConfig::default() };
//!
//! let puzzle = Puzzle::generate(&config, &list.words)?;
//! assert_eq!(puzzle.grid().size(), 8);
//! assert_eq!(puzzle.words().len(), 2);
//! # Ok::<(), wordgrid::errors::PuzzleError>(())
//! ```

use crate::dictionary::Dictionary;
use crate::errors::PuzzleError;
use crate::geometry::Pos;
use crate::grid::{Grid, MIN_GRID_SIZE};
use crate::selection;
use crate::solver::{PlacedWord, Solver};
use crate::word::Word;
use log::{debug, info};

/// Default grid side length, matching the classic board size.
pub const DEFAULT_GRID_SIZE: usize = 14;

/// Knobs for puzzle generation.
#[derive(Debug, Clone)]
pub struct PuzzleConfig {
    /// Grid side length (the grid is `size` x `size`).
    pub size: usize,
    /// RNG seed; the same seed with the same words reproduces the grid.
    pub seed: u64,
    /// Override for the solver's step budget. `None` keeps the default.
    pub step_budget: Option<u64>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self { size: DEFAULT_GRID_SIZE, seed: 0, step_budget: None }
    }
}

/// A generated puzzle: the filled grid, the dictionary of hidden words, and
/// the placement record for each one.
#[derive(Debug)]
pub struct Puzzle {
    grid: Grid,
    dictionary: Dictionary,
    placements: Vec<PlacedWord>,
    seed: u64,
}

impl Puzzle {
    /// Generate a puzzle hiding every word in `words`.
    ///
    /// Words are attempted in the order given, so callers control placement
    /// priority (longest-first tends to succeed with fewer retries). An
    /// empty word list is allowed and yields a grid of pure noise.
    ///
    /// # Errors
    ///
    /// * `PuzzleError::GridTooSmall` — `config.size` is below 5.
    /// * `PuzzleError::WordTooLong` — some word cannot fit even along a
    ///   full row, column, or diagonal.
    /// * `PuzzleError::Unplaceable` — the solver exhausted its search or
    ///   its step budget without fitting every word. Retrying with another
    ///   seed or a larger grid may succeed.
    pub fn generate(config: &PuzzleConfig, words: &[Word]) -> Result<Puzzle, PuzzleError> {
        // Step 1: Validate the inputs before any search runs.
        if config.size < MIN_GRID_SIZE {
            return Err(PuzzleError::GridTooSmall { size: config.size });
        }
        if let Some(word) = words.iter().find(|w| w.text().len() > config.size) {
            return Err(PuzzleError::WordTooLong {
                word: word.text().to_string(),
                size: config.size,
            });
        }

        // Step 2: Build the answer dictionary.
        let mut dictionary = Dictionary::default();
        for word in words {
            dictionary.insert(word);
        }

        // Step 3: Run the placement search.
        let mut solver = Solver::new(config.size, config.seed)?;
        if config.step_budget.is_some() {
            solver = solver.with_step_budget(config.step_budget);
        }
        let report = solver.solve(words);
        if !report.status.is_placed() {
            debug!("solve gave up with status {:?}", report.status);
            return Err(PuzzleError::Unplaceable {
                size: config.size,
                word_count: words.len(),
            });
        }

        // Step 4: Fill the leftover cells with noise and freeze the grid.
        solver.fill_empty();
        let grid = solver.into_grid();
        debug_assert_eq!(grid.empty_count(), 0);
        debug_assert_eq!(report.placements.len(), words.len());

        info!(
            "generated {size}x{size} puzzle hiding {count} words (seed {seed})",
            size = config.size,
            count = words.len(),
            seed = config.seed
        );

        Ok(Puzzle {
            grid,
            dictionary,
            placements: report.placements,
            seed: config.seed,
        })
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Placement record for every hidden word, in solve order.
    #[must_use]
    pub fn placements(&self) -> &[PlacedWord] {
        &self.placements
    }

    /// The hidden words in alphabetical order, definitions attached. This is
    /// what a front end renders as the word bank.
    #[must_use]
    pub fn words(&self) -> Vec<Word> {
        self.dictionary.words()
    }

    /// Check a claimed selection against the hidden words.
    ///
    /// The selection resolves to the string read from `a` to `b`; the claim
    /// succeeds when that string or its reverse is a hidden word, so a
    /// player may trace a word from either end. Returns the dictionary form
    /// of the matched word.
    #[must_use]
    pub fn check_selection(&self, a: Pos, b: Pos) -> Option<String> {
        let read = selection::resolve(&self.grid, a, b)?;
        if self.dictionary.contains(&read) {
            return Some(read);
        }
        let reversed: String = read.chars().rev().collect();
        self.dictionary.contains(&reversed).then_some(reversed)
    }

    /// Where a hidden word sits, as the endpoints of its walk. `None` for
    /// anything that is not a hidden word.
    #[must_use]
    pub fn locate(&self, word: &str) -> Option<(Pos, Pos)> {
        let text = word.to_ascii_uppercase();
        self.placements
            .iter()
            .find(|p| p.word().text() == text)
            .map(PlacedWord::span)
    }

    /// Definition of a hidden word, if the list supplied one.
    #[must_use]
    pub fn definition(&self, word: &str) -> Option<&str> {
        self.dictionary.definition(&word.to_ascii_uppercase())
    }
}
