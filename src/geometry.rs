//! Placement geometry: grid coordinates and the closed placement space
//! (direction x orientation x character order).

use std::fmt;

/// A grid coordinate, row-major from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Axis a word is written along. Diagonal means the main diagonal; placements
/// never use the anti-diagonal, though selection reads may cross it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    Diagonal,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Horizontal, Direction::Vertical, Direction::Diagonal];
}

/// Which way along the axis the cell walk proceeds from the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Forward,
    Reverse,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Forward, Orientation::Reverse];

    /// Step sign along both axes: +1 forward, -1 reverse.
    #[inline]
    #[must_use]
    pub fn sign(self) -> isize {
        match self {
            Orientation::Forward => 1,
            Orientation::Reverse => -1,
        }
    }
}

/// Whether letters are written in word order or back-to-front along the cell
/// walk. Mirroring randomizes which endpoint reads as the word's start without
/// changing which lines can hold the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharOrder {
    Straight,
    Mirrored,
}

/// All eight unit steps a straight-line read can take, for scanning a grid
/// for a word's letters. Placements only ever use six of these (no
/// anti-diagonal), but a finished grid is read in any of the eight.
pub(crate) const READ_DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// One placement candidate: where a word's cell walk starts and how it runs.
/// Together with the word, this fully determines the occupied cells and the
/// letter each must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub anchor: Pos,
    pub direction: Direction,
    pub orientation: Orientation,
    pub order: CharOrder,
}

impl Placement {
    /// Unit step of the cell walk.
    #[inline]
    #[must_use]
    pub fn delta(&self) -> (isize, isize) {
        let s = self.orientation.sign();
        match self.direction {
            Direction::Horizontal => (0, s),
            Direction::Vertical => (s, 0),
            Direction::Diagonal => (s, s),
        }
    }

    /// Raw coordinates of the i-th cell of the walk. May land outside the
    /// grid; bounds are the grid's concern.
    #[inline]
    #[must_use]
    pub fn cell(&self, i: usize) -> (isize, isize) {
        let (dr, dc) = self.delta();
        let i = i as isize;
        (self.anchor.row as isize + i * dr, self.anchor.col as isize + i * dc)
    }

    /// Index into the word of the letter the i-th cell must hold.
    #[inline]
    #[must_use]
    pub fn letter_index(&self, i: usize, len: usize) -> usize {
        debug_assert!(i < len, "cell index {i} out of range for word of length {len}");
        match self.order {
            CharOrder::Straight => i,
            CharOrder::Mirrored => len - 1 - i,
        }
    }
}
