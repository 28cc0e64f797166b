//! Generated word-search puzzles.

use crate::{CellCoord, LetterGrid, Placement};

/// A playable word-search puzzle.
///
/// Holds the filled letter grid, the words that were placed, and the words
/// that could not be placed. A puzzle is immutable once built; starting a new
/// puzzle means building a new value.
///
/// A consistent puzzle satisfies:
///
/// - every grid cell holds a letter;
/// - every placement lies inside the grid and its cells hold that word's
///   letters, so overlapping placements agree on shared cells;
/// - no two placements span the same run of cells, in either order;
/// - placed and unplaced words are disjoint.
///
/// [`Puzzle::validate`] checks these, and [`Puzzle::try_new`] refuses parts
/// that break them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle {
    grid: LetterGrid,
    placements: Vec<Placement>,
    unplaced: Vec<String>,
}

/// Inconsistency found by [`Puzzle::validate`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// A grid cell has no letter.
    #[display("cell {cell} is empty")]
    EmptyCell {
        /// First empty cell in row-major order.
        cell: CellCoord,
    },
    /// A placement's cell count differs from its word length.
    #[display("placement of {word} has {cells} cells")]
    LengthMismatch {
        /// Placed word.
        word: String,
        /// Number of cells.
        cells: usize,
    },
    /// A placement leaves the grid.
    #[display("placement of {word} leaves the grid at {cell}")]
    OutOfBounds {
        /// Placed word.
        word: String,
        /// First cell outside the grid.
        cell: CellCoord,
    },
    /// A placement's letter differs from the grid.
    #[display("placement of {word} disagrees with the grid at {cell}")]
    LetterMismatch {
        /// Placed word.
        word: String,
        /// Cell holding a different letter.
        cell: CellCoord,
    },
    /// Two placements cover the same cells, so only one can be selected.
    #[display("placement of {word} retraces the cells of {other}")]
    SharedRun {
        /// Later placed word.
        word: String,
        /// Earlier word on the same cells.
        other: String,
    },
    /// A word is listed as both placed and unplaced, or placed twice.
    #[display("{word} is listed more than once")]
    DuplicateWord {
        /// Repeated word.
        word: String,
    },
}

impl Puzzle {
    /// Assembles a puzzle from its parts without checking them.
    ///
    /// Use [`Puzzle::try_new`] for parts that may be inconsistent.
    #[must_use]
    pub fn new(grid: LetterGrid, placements: Vec<Placement>, unplaced: Vec<String>) -> Self {
        Self {
            grid,
            placements,
            unplaced,
        }
    }

    /// Assembles a puzzle from its parts after checking them.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency reported by [`Puzzle::validate`].
    pub fn try_new(
        grid: LetterGrid,
        placements: Vec<Placement>,
        unplaced: Vec<String>,
    ) -> Result<Self, PuzzleError> {
        let puzzle = Self::new(grid, placements, unplaced);
        puzzle.validate()?;
        Ok(puzzle)
    }

    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.grid.size()
    }

    /// The filled letter grid.
    #[must_use]
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Placed words.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Words that did not fit.
    #[must_use]
    pub fn unplaced(&self) -> &[String] {
        &self.unplaced
    }

    /// Number of distinct words the puzzle was generated from.
    #[must_use]
    pub fn total_requested(&self) -> usize {
        self.placements.len() + self.unplaced.len()
    }

    /// Returns the letter at `coord` as a `char`.
    #[must_use]
    pub fn letter_at(&self, coord: CellCoord) -> Option<char> {
        self.grid.get(coord).map(char::from)
    }

    /// Returns the placement of `word`, if it was placed.
    #[must_use]
    pub fn placement_of(&self, word: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.word() == word)
    }

    /// Checks the consistency rules listed on [`Puzzle`].
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if let Some(cell) = self.grid.empty_cells().next() {
            return Err(PuzzleError::EmptyCell { cell });
        }
        let size = self.grid.size();
        for (i, placement) in self.placements.iter().enumerate() {
            let word = placement.word();
            if placement.cells().len() != word.len() {
                return Err(PuzzleError::LengthMismatch {
                    word: word.to_owned(),
                    cells: placement.cells().len(),
                });
            }
            for (cell, letter) in placement.letters() {
                if !cell.is_within(size) {
                    return Err(PuzzleError::OutOfBounds {
                        word: word.to_owned(),
                        cell,
                    });
                }
                if self.grid.get(cell) != Some(letter) {
                    return Err(PuzzleError::LetterMismatch {
                        word: word.to_owned(),
                        cell,
                    });
                }
            }
            if let Some(other) = self.placements[..i]
                .iter()
                .find(|p| p.spans(placement.cells()))
            {
                return Err(PuzzleError::SharedRun {
                    word: word.to_owned(),
                    other: other.word().to_owned(),
                });
            }
            let seen_before = self.placements[..i].iter().any(|p| p.word() == word);
            if seen_before || self.unplaced.iter().any(|w| w == word) {
                return Err(PuzzleError::DuplicateWord {
                    word: word.to_owned(),
                });
            }
        }
        Ok(())
    }
}
