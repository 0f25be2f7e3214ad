//! The placement solver: randomized backtracking search that hides every word
//! in the grid, then fills the leftover cells with noise.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use wordgrid::solver::Solver;
//! use wordgrid::word::Word;
//!
//! let words = vec![Word::new("CAT", None)?, Word::new("DOG", None)?];
//! let mut solver = Solver::new(5, 42)?;
//!
//! let report = solver.solve(&words);
//! if report.status.is_placed() {
//!     solver.fill_empty();
//!     println!("{}", solver.grid());
//! }
//! # Ok::<(), wordgrid::errors::PuzzleError>(())
//! ```
//!
//! ## Checking Solve Status
//!
//! ```
//! use wordgrid::solver::{Solver, SolveStatus};
//! use wordgrid::word::Word;
//!
//! let words = vec![Word::new("ELEPHANT", None)?];
//! let mut solver = Solver::new(5, 7)?;
//!
//! match solver.solve(&words).status {
//!     SolveStatus::Placed => println!("every word committed"),
//!     SolveStatus::Exhausted => println!("no arrangement exists at this size"),
//!     SolveStatus::BudgetExhausted { steps } => {
//!         println!("gave up after {steps} placement attempts");
//!     }
//! }
//! # Ok::<(), wordgrid::errors::PuzzleError>(())
//! ```

use crate::errors::PuzzleError;
use crate::geometry::{CharOrder, Direction, Orientation, Placement, Pos};
use crate::grid::{Grid, MIN_GRID_SIZE};
use crate::word::Word;
use log::{debug, warn};
use rand::prelude::*;

// How many placement candidates a solve may try before giving up. Generous:
// typical game-sized inputs finish in a few hundred attempts.
const DEFAULT_STEP_BUDGET: u64 = 500_000;

/// Status of a solver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStatus {
    /// Every word was committed to the grid.
    Placed,

    /// The whole candidate space was searched without placing every word:
    /// no arrangement exists for this grid size, word list, and crossing
    /// constraints.
    Exhausted,

    /// The step budget ran out mid-search. Contains the attempts consumed.
    /// Callers should treat this the same as `Exhausted`; it exists so the
    /// two cases can be told apart in logs.
    BudgetExhausted { steps: u64 },
}

impl SolveStatus {
    #[must_use]
    pub fn is_placed(&self) -> bool {
        matches!(self, SolveStatus::Placed)
    }
}

/// One committed word: where it starts and how it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    word: Word,
    placement: Placement,
}

impl PlacedWord {
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// First and last cell of the word's walk, both in bounds.
    #[must_use]
    pub fn span(&self) -> (Pos, Pos) {
        let last = self.word.text().len() - 1;
        let (r0, c0) = self.placement.cell(0);
        let (r1, c1) = self.placement.cell(last);
        (
            Pos::new(r0 as usize, c0 as usize),
            Pos::new(r1 as usize, c1 as usize),
        )
    }
}

/// Outcome of one solver run (the grid itself stays with the solver).
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Status indicating whether every word was placed.
    pub status: SolveStatus,
    /// The committed placements, in word-list order. Empty unless `Placed`:
    /// any failed run backtracks all of its commits out of the grid.
    pub placements: Vec<PlacedWord>,
}

/// Counter-based search limit. Deterministic, unlike a wall-clock budget,
/// so fixed-seed runs stay byte-for-byte reproducible.
struct StepBudget {
    used: u64,
    limit: Option<u64>,
}

impl StepBudget {
    fn new(limit: Option<u64>) -> Self {
        Self { used: 0, limit }
    }

    fn spend(&mut self) {
        self.used += 1;
    }

    fn expired(&self) -> bool {
        self.limit.is_some_and(|limit| self.used >= limit)
    }
}

/// Marker for a search cut short by the step budget; unwinds the recursion
/// so every level can retract its own commit on the way out.
struct BudgetExhausted;

macro_rules! budget_stop {
    ($budget:expr) => {
        if $budget.expired() {
            return Err(BudgetExhausted);
        }
    };
}

/// Owns the grid buffer and the one RNG that drives every random choice
/// (anchor shuffling, character order, noise fill), so a fixed seed
/// reproduces a run exactly.
pub struct Solver {
    grid: Grid,
    rng: StdRng,
    budget: StepBudget,
}

impl Solver {
    /// Create a solver session with an all-empty grid.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::GridTooSmall` for sizes below 5.
    pub fn new(size: usize, seed: u64) -> Result<Self, PuzzleError> {
        if size < MIN_GRID_SIZE {
            return Err(PuzzleError::GridTooSmall { size });
        }
        Ok(Self {
            grid: Grid::empty(size),
            rng: StdRng::seed_from_u64(seed),
            budget: StepBudget::new(Some(DEFAULT_STEP_BUDGET)),
        })
    }

    /// Override the step budget. `None` removes the bound entirely, making
    /// pathological word sets search their whole candidate space.
    #[must_use]
    pub fn with_step_budget(mut self, limit: Option<u64>) -> Self {
        self.budget = StepBudget::new(limit);
        self
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Freeze the session and take the grid.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Try to place every word, in the order given.
    ///
    /// Per word, all N^2 anchors are tried in randomized order; per anchor the
    /// six direction/orientation combinations in fixed order; per candidate
    /// the character order is drawn uniformly at random before the validity
    /// test. A valid candidate is committed and the search recurses to the
    /// next word, retracting the commit if that fails. The search terminates
    /// because the word index only increases and each level's candidate set
    /// is finite.
    ///
    /// # Returns
    ///
    /// A [`SolveReport`]; the grid holds the committed letters iff the status
    /// is [`SolveStatus::Placed`], and is restored to its pre-call state
    /// otherwise (budget exhaustion included).
    pub fn solve(&mut self, words: &[Word]) -> SolveReport {
        self.budget.used = 0;
        let empty_before = self.grid.empty_count();
        let mut placements = Vec::with_capacity(words.len());

        let status = match self.place_from(words, 0, &mut placements) {
            Ok(true) => {
                debug_assert_eq!(placements.len(), words.len());
                SolveStatus::Placed
            }
            Ok(false) => {
                debug!("exhausted all candidates after {} attempts", self.budget.used);
                SolveStatus::Exhausted
            }
            Err(BudgetExhausted) => {
                warn!("step budget exhausted after {} placement attempts", self.budget.used);
                SolveStatus::BudgetExhausted { steps: self.budget.used }
            }
        };

        if !status.is_placed() {
            debug_assert!(placements.is_empty(), "failed solve must backtrack every commit");
            debug_assert_eq!(self.grid.empty_count(), empty_before);
        }

        SolveReport { status, placements }
    }

    /// Replace every still-empty cell with uniform random noise. Run once,
    /// after solving; placed letters are never touched.
    pub fn fill_empty(&mut self) {
        let noise_cells = self.grid.empty_count();
        self.grid.fill_empty(&mut self.rng);
        debug!("filled {noise_cells} empty cells with noise");
        debug_assert_eq!(self.grid.empty_count(), 0);
    }

    /// Backtracking step: place `words[index..]`, given everything before
    /// `index` already committed.
    fn place_from(
        &mut self,
        words: &[Word],
        index: usize,
        placements: &mut Vec<PlacedWord>,
    ) -> Result<bool, BudgetExhausted> {
        // Base case: nothing left to place.
        let Some(word) = words.get(index) else {
            return Ok(true);
        };

        for anchor in self.shuffled_anchors() {
            for direction in Direction::ALL {
                for orientation in Orientation::ALL {
                    self.budget.spend();
                    budget_stop!(self.budget);

                    let order = if self.rng.gen_bool(0.5) {
                        CharOrder::Mirrored
                    } else {
                        CharOrder::Straight
                    };
                    let placement = Placement { anchor, direction, orientation, order };

                    if !self.grid.fits(word.text(), &placement) {
                        continue;
                    }

                    let written = self.grid.commit(word.text(), &placement);
                    debug!("placed \"{word}\" at {anchor} {direction:?} {orientation:?} {order:?}");
                    placements.push(PlacedWord { word: word.clone(), placement });

                    match self.place_from(words, index + 1, placements) {
                        Ok(true) => return Ok(true),
                        Ok(false) => {
                            // Dead end below: undo exactly this commit's cells.
                            placements.pop();
                            self.grid.retract(&written);
                        }
                        Err(BudgetExhausted) => {
                            placements.pop();
                            self.grid.retract(&written);
                            return Err(BudgetExhausted);
                        }
                    }
                }
            }
        }

        Ok(false)
    }

    /// All N^2 anchor cells in a fresh random order. Reshuffled per word so
    /// grids vary visually across runs instead of packing top-left.
    fn shuffled_anchors(&mut self) -> Vec<Pos> {
        let n = self.grid.size();
        let mut anchors: Vec<Pos> = (0..n * n).map(|i| Pos::new(i / n, i % n)).collect();
        anchors.shuffle(&mut self.rng);
        anchors
    }
}
