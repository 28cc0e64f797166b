//! Straight runs of cells.
//!
//! Both puzzle generation and drag selection reason about words as straight
//! runs: an origin cell, a [`Direction`], and a length. This module turns such a
//! description into the ordered cells it covers, and answers the reverse
//! question of whether two cells lie on a common run.
//!
//! [`compute_direction`] is the single place that decides whether a drag is a
//! straight line.

use crate::{CellCoord, Direction};

/// Returns the `length` cells starting at `origin` and stepping by `direction`.
///
/// `cells[i]` is `origin` moved `i` steps, so the result is ordered from the
/// origin outwards. No upper bound is applied; use [`line_cells_in`] to keep the
/// run inside a grid.
///
/// Returns `None` if any cell would have a negative coordinate.
///
/// # Examples
///
/// ```
/// use wordlace_core::{CellCoord, Direction, line};
///
/// let cells = line::try_line_cells(CellCoord::new(2, 2), Direction::UP, 3).unwrap();
/// assert_eq!(
///     cells,
///     [CellCoord::new(2, 2), CellCoord::new(1, 2), CellCoord::new(0, 2)]
/// );
/// assert_eq!(line::try_line_cells(CellCoord::new(2, 2), Direction::UP, 4), None);
/// ```
#[must_use]
pub fn try_line_cells(
    origin: CellCoord,
    direction: Direction,
    length: usize,
) -> Option<Vec<CellCoord>> {
    if length == 0 {
        return Some(Vec::new());
    }
    // Bounds are monotone along a run, so checking the far end is enough.
    origin.step(direction, length - 1)?;
    (0..length).map(|i| origin.step(direction, i)).collect()
}

/// Like [`try_line_cells`], but also rejects runs leaving a `size × size` grid.
///
/// # Examples
///
/// ```
/// use wordlace_core::{CellCoord, Direction, line};
///
/// assert!(line::line_cells_in(5, CellCoord::new(0, 2), Direction::RIGHT, 3).is_some());
/// assert!(line::line_cells_in(5, CellCoord::new(0, 3), Direction::RIGHT, 3).is_none());
/// ```
#[must_use]
pub fn line_cells_in(
    size: u8,
    origin: CellCoord,
    direction: Direction,
    length: usize,
) -> Option<Vec<CellCoord>> {
    if !origin.is_within(size) {
        return None;
    }
    let cells = try_line_cells(origin, direction, length)?;
    cells
        .last()
        .is_none_or(|last| last.is_within(size))
        .then_some(cells)
}

/// Infers the direction from `start` to `end`.
///
/// Returns `None` when the two cells are equal or do not share a row, a column,
/// or a 45° diagonal.
///
/// # Examples
///
/// ```
/// use wordlace_core::{CellCoord, Direction, line};
///
/// let start = CellCoord::new(4, 1);
/// assert_eq!(
///     line::compute_direction(start, CellCoord::new(1, 4)),
///     Some(Direction::UP_RIGHT)
/// );
/// assert_eq!(line::compute_direction(start, CellCoord::new(2, 2)), None);
/// assert_eq!(line::compute_direction(start, start), None);
/// ```
#[must_use]
pub fn compute_direction(start: CellCoord, end: CellCoord) -> Option<Direction> {
    let (d_row, d_col) = start.delta_to(end);
    Direction::from_delta(d_row, d_col)
}

/// Returns the number of cells on the run from `start` to `end`, both inclusive.
///
/// The two cells are assumed to lie on a common run; for other pairs the result
/// is the Chebyshev distance plus one.
#[must_use]
pub fn line_length(start: CellCoord, end: CellCoord) -> usize {
    let (d_row, d_col) = start.delta_to(end);
    let steps = d_row.unsigned_abs().max(d_col.unsigned_abs());
    usize::try_from(steps).map_or(usize::MAX, |steps| steps + 1)
}

/// Returns how many steps from `origin` in `direction` stay inside the grid.
///
/// Returns `0` when `origin` itself is the last in-grid cell in that direction.
#[must_use]
pub fn steps_to_edge(size: u8, origin: CellCoord, direction: Direction) -> usize {
    fn axis(pos: u8, step: i8, size: u8) -> usize {
        match step {
            1 => usize::from(size.saturating_sub(pos).saturating_sub(1)),
            -1 => usize::from(pos),
            _ => usize::MAX,
        }
    }
    if !origin.is_within(size) {
        return 0;
    }
    let rows = axis(origin.row, direction.dy(), size);
    let cols = axis(origin.col, direction.dx(), size);
    rows.min(cols)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_try_line_cells_orders_from_origin() {
        let cells = try_line_cells(CellCoord::new(1, 3), Direction::DOWN_LEFT, 4).unwrap();
        assert_eq!(
            cells,
            [
                CellCoord::new(1, 3),
                CellCoord::new(2, 2),
                CellCoord::new(3, 1),
                CellCoord::new(4, 0),
            ]
        );
    }

    #[test]
    fn test_try_line_cells_edge_lengths() {
        let origin = CellCoord::new(0, 0);
        assert_eq!(try_line_cells(origin, Direction::LEFT, 0), Some(vec![]));
        assert_eq!(try_line_cells(origin, Direction::LEFT, 1), Some(vec![origin]));
        assert_eq!(try_line_cells(origin, Direction::LEFT, 2), None);
    }

    #[test]
    fn test_line_cells_in_checks_upper_bound() {
        let origin = CellCoord::new(3, 3);
        assert!(line_cells_in(4, origin, Direction::RIGHT, 1).is_some());
        assert!(line_cells_in(4, origin, Direction::RIGHT, 2).is_none());
        assert!(line_cells_in(4, origin, Direction::UP_LEFT, 4).is_some());
        assert!(line_cells_in(4, CellCoord::new(4, 0), Direction::UP, 1).is_none());
    }

    #[test]
    fn test_compute_direction_rejects_knight_moves() {
        let origin = CellCoord::new(3, 3);
        for (d_row, d_col) in [(1, 2), (2, 1), (-1, 2), (-2, -1), (2, -1), (1, -2)] {
            let end = CellCoord::new(
                u8::try_from(3 + d_row).unwrap(),
                u8::try_from(3 + d_col).unwrap(),
            );
            assert_eq!(compute_direction(origin, end), None, "{end}");
        }
    }

    #[test]
    fn test_line_length() {
        let origin = CellCoord::new(2, 2);
        assert_eq!(line_length(origin, origin), 1);
        assert_eq!(line_length(origin, CellCoord::new(2, 6)), 5);
        assert_eq!(line_length(origin, CellCoord::new(0, 0)), 3);
    }

    #[test]
    fn test_steps_to_edge() {
        let size = 5;
        let origin = CellCoord::new(1, 3);
        assert_eq!(steps_to_edge(size, origin, Direction::RIGHT), 1);
        assert_eq!(steps_to_edge(size, origin, Direction::LEFT), 3);
        assert_eq!(steps_to_edge(size, origin, Direction::UP), 1);
        assert_eq!(steps_to_edge(size, origin, Direction::DOWN), 3);
        assert_eq!(steps_to_edge(size, origin, Direction::DOWN_RIGHT), 1);
        assert_eq!(steps_to_edge(size, origin, Direction::DOWN_LEFT), 3);
        assert_eq!(steps_to_edge(size, CellCoord::new(5, 0), Direction::UP), 0);
    }

    proptest! {
        #[test]
        fn test_direction_and_length_rebuild_the_run(
            row in 0u8..12,
            col in 0u8..12,
            index in 0usize..8,
            length in 2usize..8,
        ) {
            let origin = CellCoord::new(row, col);
            let direction = Direction::ALL[index];
            if let Some(cells) = line_cells_in(12, origin, direction, length) {
                let end = *cells.last().unwrap();
                prop_assert_eq!(compute_direction(origin, end), Some(direction));
                prop_assert_eq!(line_length(origin, end), length);
                prop_assert!(steps_to_edge(12, origin, direction) >= length - 1);
            } else {
                prop_assert!(steps_to_edge(12, origin, direction) < length - 1);
            }
        }
    }
}
