//! A word's location in the grid.

use crate::{CellCoord, Direction, line};

/// A word committed to a straight run of grid cells.
///
/// `cells[i]` holds `word[i]`, so the cell order follows the direction the word
/// was written in, which may run right to left or bottom to top when backwards
/// words are allowed.
///
/// # Examples
///
/// ```
/// use wordlace_core::{CellCoord, Direction, Placement};
///
/// let placement = Placement::from_line("DOG", CellCoord::new(2, 3), Direction::LEFT).unwrap();
/// assert_eq!(placement.first(), CellCoord::new(2, 3));
/// assert_eq!(placement.last(), CellCoord::new(2, 1));
/// assert!(placement.contains(CellCoord::new(2, 2)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    word: String,
    cells: Vec<CellCoord>,
    direction: Direction,
}

impl Placement {
    /// Places `word` on the run starting at `origin` and going in `direction`.
    ///
    /// Returns `None` for an empty word or if the run would leave the
    /// non-negative quadrant. The grid's upper bound is not checked here.
    #[must_use]
    pub fn from_line(
        word: impl Into<String>,
        origin: CellCoord,
        direction: Direction,
    ) -> Option<Self> {
        let word = word.into();
        if word.is_empty() {
            return None;
        }
        let cells = line::try_line_cells(origin, direction, word.len())?;
        Some(Self {
            word,
            cells,
            direction,
        })
    }

    /// The normalised word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The cells holding each letter, in writing order.
    #[must_use]
    pub fn cells(&self) -> &[CellCoord] {
        &self.cells
    }

    /// The direction the word was written in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cell of the first letter.
    #[must_use]
    pub fn first(&self) -> CellCoord {
        self.cells[0]
    }

    /// Cell of the last letter.
    #[must_use]
    pub fn last(&self) -> CellCoord {
        self.cells[self.cells.len() - 1]
    }

    /// Returns `true` if the word covers `coord`.
    #[must_use]
    pub fn contains(&self, coord: CellCoord) -> bool {
        self.cells.contains(&coord)
    }

    /// Returns `true` if the word occupies exactly `cells`, read in either
    /// direction.
    ///
    /// Two placements spanning the same run share their drag paths, so at most
    /// one of them could ever be selected.
    #[must_use]
    pub fn spans(&self, cells: &[CellCoord]) -> bool {
        self.cells == cells || self.cells.iter().eq(cells.iter().rev())
    }

    /// Iterates over `(cell, letter)` pairs.
    pub fn letters(&self) -> impl Iterator<Item = (CellCoord, u8)> + '_ {
        self.cells.iter().copied().zip(self.word.bytes())
    }
}
