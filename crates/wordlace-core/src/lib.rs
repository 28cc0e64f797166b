//! Core data structures for word-search puzzles.
//!
//! This crate provides the value types shared by puzzle generation, play-time
//! selection and the desktop host.
//!
//! # Overview
//!
//! 1. **Geometry** - Where things are on the grid
//!    - [`coord`]: 0-indexed `(row, col)` cell coordinates
//!    - [`direction`]: The eight unit steps a word can run in, and the subset a
//!      puzzle allows
//!    - [`line`]: Resolving straight runs of cells and inferring a direction
//!      from two cells
//!
//! 2. **Words** - What gets placed
//!    - [`word`]: Normalising raw input into placeable, de-duplicated words
//!
//! 3. **Puzzles** - The result of generation
//!    - [`grid`]: A square grid of letters
//!    - [`placement`]: A word's committed location in the grid
//!    - [`puzzle`]: Grid, placements and unplaced words together
//!
//! # Examples
//!
//! ```
//! use wordlace_core::{CellCoord, Direction, line};
//!
//! let cells = line::try_line_cells(CellCoord::new(0, 0), Direction::DOWN_RIGHT, 3).unwrap();
//! assert_eq!(
//!     cells,
//!     [CellCoord::new(0, 0), CellCoord::new(1, 1), CellCoord::new(2, 2)]
//! );
//!
//! // A knight's move is not a straight line.
//! assert_eq!(
//!     line::compute_direction(CellCoord::new(0, 0), CellCoord::new(1, 2)),
//!     None
//! );
//! ```

pub mod coord;
pub mod direction;
pub mod grid;
pub mod line;
pub mod placement;
pub mod puzzle;
pub mod word;

pub use self::{
    coord::CellCoord,
    direction::{Direction, DirectionSet},
    grid::{LetterGrid, ParseLetterGridError},
    placement::Placement,
    puzzle::{Puzzle, PuzzleError},
    word::{WordEntry, WordList},
};

/// Smallest grid size a host should offer.
pub const MIN_GRID_SIZE: u8 = 4;

/// Largest supported grid size.
pub const MAX_GRID_SIZE: u8 = 26;
