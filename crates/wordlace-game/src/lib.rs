//! Play-time logic for word-search puzzles.
//!
//! A [`Session`] wraps a generated puzzle with everything needed to play it:
//!
//! - [`PlacementIndex`] answers which placement, if any, a cell path spells,
//!   in either traversal direction.
//! - [`SelectionEngine`] turns pointer events into straight cell paths and
//!   matches them when the drag ends.
//! - [`FoundWords`] records what has been found, in order.
//! - A [`Clock`] times the game, and a [`CompletionReport`] is produced once,
//!   when the last placed word is found.
//!
//! The crate has no UI dependencies; hosts feed it cell-level pointer events.

pub use self::{clock::*, found::*, index::*, selection::*, session::*};

mod clock;
mod found;
mod index;
mod selection;
mod session;
