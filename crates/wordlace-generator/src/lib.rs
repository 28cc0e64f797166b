//! Seeded word-search puzzle generation.
//!
//! [`PuzzleGenerator`] places a [`WordList`](wordlace_core::WordList) into a
//! square letter grid. Generation is a pure function of the word list, the
//! [`GeneratorConfig`] and a [`PuzzleSeed`]: the same inputs always give the
//! same [`Puzzle`](wordlace_core::Puzzle), on every platform.
//!
//! Placement is best effort. Words that do not fit are reported through
//! [`Puzzle::unplaced`](wordlace_core::Puzzle::unplaced) rather than as errors;
//! only an invalid configuration fails with [`GenerateError`].
//!
//! # Examples
//!
//! ```
//! use wordlace_core::WordList;
//! use wordlace_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed};
//!
//! let words = WordList::from_raw(["sun", "moon", "star"]);
//! let config = GeneratorConfig::default().size(8);
//! let generated = PuzzleGenerator::new(config).generate_with_seed(&words, PuzzleSeed::new(7))?;
//!
//! let puzzle = &generated.puzzle;
//! assert!(puzzle.grid().is_filled());
//! assert_eq!(puzzle.placements().len() + puzzle.unplaced().len(), 3);
//! # Ok::<(), wordlace_generator::GenerateError>(())
//! ```

pub use self::{config::*, generator::*, seed::*};

mod config;
mod generator;
mod seed;
