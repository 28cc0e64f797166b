//! Grid cell coordinates.

use crate::Direction;

/// A cell in a square letter grid, addressed by 0-indexed row and column.
///
/// Coordinates are plain values; whether a coordinate lies inside a particular
/// grid is checked with [`CellCoord::is_within`].
///
/// # Examples
///
/// ```
/// use wordlace_core::{CellCoord, Direction};
///
/// let cell = CellCoord::new(2, 3);
/// assert_eq!(cell.step(Direction::RIGHT, 2), Some(CellCoord::new(2, 5)));
/// assert_eq!(cell.step(Direction::UP, 3), None);
/// assert!(cell.is_within(4));
/// assert!(!cell.is_within(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("({row}, {col})")]
pub struct CellCoord {
    /// Row index, counted from the top.
    pub row: u8,
    /// Column index, counted from the left.
    pub col: u8,
}

impl CellCoord {
    /// Creates a coordinate.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns `true` if the coordinate lies inside a `size × size` grid.
    #[must_use]
    pub const fn is_within(self, size: u8) -> bool {
        self.row < size && self.col < size
    }

    /// Returns the coordinate reached by taking `steps` unit steps in `direction`.
    ///
    /// Returns `None` when the result would have a negative component or would not
    /// fit in a `u8`. The upper grid bound is not checked.
    #[must_use]
    pub fn step(self, direction: Direction, steps: usize) -> Option<Self> {
        let steps = i32::try_from(steps).ok()?;
        let row = i32::from(self.row).checked_add(steps.checked_mul(i32::from(direction.dy()))?)?;
        let col = i32::from(self.col).checked_add(steps.checked_mul(i32::from(direction.dx()))?)?;
        Some(Self::new(u8::try_from(row).ok()?, u8::try_from(col).ok()?))
    }

    /// Returns `(Δrow, Δcol)` from `self` to `other`.
    #[must_use]
    pub fn delta_to(self, other: Self) -> (i32, i32) {
        (
            i32::from(other.row) - i32::from(self.row),
            i32::from(other.col) - i32::from(self.col),
        )
    }

    /// Returns all coordinates of a `size × size` grid in row-major order.
    pub fn all(size: u8) -> impl Iterator<Item = Self> + Clone {
        (0..size).flat_map(move |row| (0..size).map(move |col| Self::new(row, col)))
    }
}
