//! Selection geometry: turning a pair of endpoint cells into the string a
//! player claims, and scanning a grid for where a word actually sits.
//!
//! A selection is valid when its endpoints are collinear along one of the
//! eight read directions (the three placement directions and their
//! reverses). Everything here is read-only over the grid.

use crate::geometry::{Pos, READ_DIRECTIONS};
use crate::grid::Grid;

/// The inclusive walk from `a` to `b`, one cell per step.
///
/// Returns `None` when the endpoints are not collinear: not on a shared
/// row, column, or 45-degree diagonal. A single cell (`a == b`) is a valid
/// walk of length one.
#[must_use]
pub fn span_cells(a: Pos, b: Pos) -> Option<Vec<Pos>> {
    let dr = b.row as isize - a.row as isize;
    let dc = b.col as isize - a.col as isize;
    if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
        return None;
    }

    let steps = dr.abs().max(dc.abs());
    let (step_r, step_c) = (dr.signum(), dc.signum());
    let cells = (0..=steps)
        .map(|i| {
            let row = a.row as isize + i * step_r;
            let col = a.col as isize + i * step_c;
            Pos::new(row as usize, col as usize)
        })
        .collect();
    Some(cells)
}

/// Resolve a selection to the letters it covers, reading from `a` to `b`.
///
/// Returns `None` when the endpoints are not collinear, when either lies
/// outside the grid, or when the walk crosses a cell that holds no letter.
/// Swapping the endpoints yields the reversed string.
#[must_use]
pub fn resolve(grid: &Grid, a: Pos, b: Pos) -> Option<String> {
    span_cells(a, b)?
        .into_iter()
        .map(|pos| grid.letter(pos))
        .collect()
}

/// Scan the whole grid for `word` and return the endpoints of its first
/// occurrence, scanning cells row-major and directions in fixed order.
///
/// Finds words however they were committed: a mirrored placement is simply
/// read from its far end. Returns `None` if the word appears nowhere.
#[must_use]
pub fn find_word(grid: &Grid, word: &str) -> Option<(Pos, Pos)> {
    let len = word.len();
    if len == 0 {
        return None;
    }

    for (start, _) in grid.iter_cells() {
        for (step_r, step_c) in READ_DIRECTIONS {
            let end_r = start.row as isize + step_r * (len as isize - 1);
            let end_c = start.col as isize + step_c * (len as isize - 1);
            if !grid.in_bounds(end_r, end_c) {
                continue;
            }
            let end = Pos::new(end_r as usize, end_c as usize);
            if resolve(grid, start, end).is_some_and(|read| read == word) {
                return Some((start, end));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{CharOrder, Direction, Orientation, Placement};
    use crate::grid::Cell;

    fn straight(row: usize, col: usize, direction: Direction) -> Placement {
        Placement {
            anchor: Pos::new(row, col),
            direction,
            orientation: Orientation::Forward,
            order: CharOrder::Straight,
        }
    }

    /// 5x5 grid holding CAT across row 1 starting at column 1.
    fn cat_grid() -> Grid {
        let mut grid = Grid::empty(5);
        grid.commit("CAT", &straight(1, 1, Direction::Horizontal));
        grid
    }

    #[test]
    fn test_resolve_reads_a_committed_word() {
        let grid = cat_grid();
        let read = resolve(&grid, Pos::new(1, 1), Pos::new(1, 3));
        assert_eq!(read, Some("CAT".to_string()));
    }

    #[test]
    fn test_resolve_reversed_endpoints_reverse_the_string() {
        let grid = cat_grid();
        let forward = resolve(&grid, Pos::new(1, 1), Pos::new(1, 3)).unwrap();
        let backward = resolve(&grid, Pos::new(1, 3), Pos::new(1, 1)).unwrap();

        let reversed: String = forward.chars().rev().collect();
        assert_eq!(backward, reversed);
    }

    #[test]
    fn test_resolve_single_cell() {
        let grid = cat_grid();
        let read = resolve(&grid, Pos::new(1, 2), Pos::new(1, 2));
        assert_eq!(read, Some("A".to_string()));
    }

    #[test]
    fn test_resolve_anti_diagonal() {
        let mut grid = Grid::empty(5);
        // NET running up-right from (4, 0).
        grid.set(Pos::new(4, 0), Cell::Letter('N'));
        grid.set(Pos::new(3, 1), Cell::Letter('E'));
        grid.set(Pos::new(2, 2), Cell::Letter('T'));

        let read = resolve(&grid, Pos::new(4, 0), Pos::new(2, 2));
        assert_eq!(read, Some("NET".to_string()));
    }

    #[test]
    fn test_resolve_rejects_non_collinear_endpoints() {
        let grid = cat_grid();
        assert_eq!(resolve(&grid, Pos::new(0, 0), Pos::new(1, 3)), None);
        // A knight's move is neither straight nor diagonal.
        assert_eq!(resolve(&grid, Pos::new(0, 0), Pos::new(2, 1)), None);
    }

    #[test]
    fn test_resolve_rejects_out_of_bounds_endpoint() {
        let grid = cat_grid();
        assert_eq!(resolve(&grid, Pos::new(1, 1), Pos::new(1, 7)), None);
    }

    #[test]
    fn test_resolve_rejects_walks_over_empty_cells() {
        let grid = cat_grid();
        // (1, 4) holds no letter, so the longer row walk has a hole.
        assert_eq!(resolve(&grid, Pos::new(1, 1), Pos::new(1, 4)), None);
    }

    #[test]
    fn test_span_cells_inclusive_walk() {
        let cells = span_cells(Pos::new(2, 0), Pos::new(2, 3)).unwrap();
        assert_eq!(
            cells,
            vec![Pos::new(2, 0), Pos::new(2, 1), Pos::new(2, 2), Pos::new(2, 3)]
        );
    }

    #[test]
    fn test_span_cells_diagonal_and_reverse() {
        let down = span_cells(Pos::new(0, 0), Pos::new(2, 2)).unwrap();
        assert_eq!(down, vec![Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2)]);

        let up = span_cells(Pos::new(2, 2), Pos::new(0, 0)).unwrap();
        assert_eq!(up, vec![Pos::new(2, 2), Pos::new(1, 1), Pos::new(0, 0)]);
    }

    #[test]
    fn test_span_cells_non_collinear_is_none() {
        assert_eq!(span_cells(Pos::new(0, 0), Pos::new(1, 3)), None);
    }

    mod scanning {
        use super::*;

        #[test]
        fn test_find_word_locates_a_straight_placement() {
            let grid = cat_grid();
            let (start, end) = find_word(&grid, "CAT").unwrap();
            assert_eq!((start, end), (Pos::new(1, 1), Pos::new(1, 3)));
        }

        #[test]
        fn test_find_word_locates_a_mirrored_placement() {
            let mut grid = Grid::empty(5);
            let placement = Placement {
                anchor: Pos::new(0, 0),
                direction: Direction::Horizontal,
                orientation: Orientation::Forward,
                order: CharOrder::Mirrored,
            };
            grid.commit("CAT", &placement);

            // Cells hold T A C; the scan reads it right-to-left.
            let (start, end) = find_word(&grid, "CAT").unwrap();
            assert_eq!(resolve(&grid, start, end), Some("CAT".to_string()));
            assert_eq!((start, end), (Pos::new(0, 2), Pos::new(0, 0)));
        }

        #[test]
        fn test_find_word_vertical() {
            let mut grid = Grid::empty(5);
            grid.commit("DOG", &straight(1, 4, Direction::Vertical));

            let (start, end) = find_word(&grid, "DOG").unwrap();
            assert_eq!((start, end), (Pos::new(1, 4), Pos::new(3, 4)));
        }

        #[test]
        fn test_find_word_absent_is_none() {
            let grid = cat_grid();
            assert_eq!(find_word(&grid, "DOG"), None);
            assert_eq!(find_word(&grid, ""), None);
        }
    }
}
