//! The mutable letter grid and its placement primitives: validity testing,
//! committing a word's letters, and the exact undo of a commit.

use crate::geometry::{Placement, Pos};
use crate::word::ALPHABET_SIZE;
use rand::prelude::*;
use std::fmt;

/// Smallest supported grid dimension.
pub const MIN_GRID_SIZE: usize = 5;

/// One grid cell: the still-empty sentinel or an uppercase letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Letter(char),
}

impl Cell {
    #[inline]
    #[must_use]
    pub fn letter(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Letter(c) => Some(c),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Square N x N letter grid, row-major storage.
///
/// Allocated once per session by the solver, mutated destructively while
/// solving, then frozen once noise-filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub(crate) fn empty(size: usize) -> Self {
        debug_assert!(size >= MIN_GRID_SIZE, "grid size {size} below minimum {MIN_GRID_SIZE}");
        Self { size, cells: vec![Cell::Empty; size * size] }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    #[must_use]
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        let n = self.size as isize;
        (0..n).contains(&row) && (0..n).contains(&col)
    }

    /// The cell at `pos`, or `None` out of bounds.
    #[must_use]
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        if pos.row < self.size && pos.col < self.size {
            Some(self.cells[pos.row * self.size + pos.col])
        } else {
            None
        }
    }

    /// The letter at `pos`, or `None` for out-of-bounds or still-empty cells.
    #[must_use]
    pub fn letter(&self, pos: Pos) -> Option<char> {
        self.get(pos).and_then(Cell::letter)
    }

    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) {
        debug_assert!(pos.row < self.size && pos.col < self.size);
        self.cells[pos.row * self.size + pos.col] = cell;
    }

    /// Iterate all cells with their coordinates, row-major.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Pos::new(i / size, i % size), cell))
    }

    /// Placement validity: every cell of the word's walk is in bounds and
    /// either still empty or already holding the letter this placement writes
    /// there. Shared letters at crossings are exactly the cells that are
    /// non-empty but match.
    #[must_use]
    pub fn fits(&self, word: &str, placement: &Placement) -> bool {
        let letters = word.as_bytes();
        (0..letters.len()).all(|i| {
            let (row, col) = placement.cell(i);
            if !self.in_bounds(row, col) {
                return false;
            }
            let required = letters[placement.letter_index(i, letters.len())] as char;
            match self.cells[row as usize * self.size + col as usize] {
                Cell::Empty => true,
                Cell::Letter(held) => held == required,
            }
        })
    }

    /// Write the word along the placement, returning exactly the cells this
    /// commit changed from empty. Cells already holding their letter (shared
    /// crossings) are left as they are, so a later retract of the returned
    /// list cannot erase an earlier word.
    pub(crate) fn commit(&mut self, word: &str, placement: &Placement) -> Vec<Pos> {
        debug_assert!(self.fits(word, placement), "commit of a non-fitting placement");
        let letters = word.as_bytes();
        let mut written = Vec::with_capacity(letters.len());
        for i in 0..letters.len() {
            let (row, col) = placement.cell(i);
            let pos = Pos::new(row as usize, col as usize);
            let required = letters[placement.letter_index(i, letters.len())] as char;
            match self.get(pos) {
                Some(Cell::Empty) => {
                    self.set(pos, Cell::Letter(required));
                    written.push(pos);
                }
                Some(Cell::Letter(held)) => {
                    debug_assert_eq!(held, required, "fits() admitted a mismatched crossing");
                }
                None => unreachable!("fits() admitted an out-of-bounds cell"),
            }
        }
        written
    }

    /// Undo one commit: reset the cells that commit reported as newly
    /// written, and only those.
    pub(crate) fn retract(&mut self, written: &[Pos]) {
        for &pos in written {
            debug_assert!(
                matches!(self.get(pos), Some(Cell::Letter(_))),
                "retract of a cell that holds no letter"
            );
            self.set(pos, Cell::Empty);
        }
    }

    /// Replace every still-empty cell with an independent uniform random
    /// letter. Cells holding a placed letter are never touched.
    pub(crate) fn fill_empty(&mut self, rng: &mut StdRng) {
        for cell in &mut self.cells {
            if cell.is_empty() {
                let letter = (b'A' + rng.gen_range(0..ALPHABET_SIZE as u8)) as char;
                *cell = Cell::Letter(letter);
            }
        }
    }

    /// Number of cells still holding the empty sentinel.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }
}

impl fmt::Display for Grid {
    /// Rows of space-separated letters; still-empty cells render as '.'.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                let c = self.cells[row * self.size + col].letter().unwrap_or('.');
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
