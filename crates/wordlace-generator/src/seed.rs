use std::{
    fmt::{self, Display},
    num::ParseIntError,
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Seed that fully determines a generated puzzle.
///
/// The same seed, word list and [`GeneratorConfig`](crate::GeneratorConfig)
/// always produce the same puzzle. The seed is expanded to the generator's
/// PCG state with SHA-256, so numerically close seeds give unrelated puzzles.
///
/// Seeds print and parse as decimal integers.
///
/// # Examples
///
/// ```
/// use wordlace_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "42".parse().unwrap();
/// assert_eq!(seed, PuzzleSeed::new(42));
/// assert_eq!(seed.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleSeed(u64);

impl PuzzleSeed {
    /// Wraps a fixed seed value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Draws a fresh seed from the thread-local random source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// The raw seed value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Builds the deterministic random number generator for this seed.
    #[must_use]
    pub fn rng(self) -> Pcg64 {
        let digest = Sha256::digest(self.0.to_le_bytes());
        Pcg64::from_seed(digest.into())
    }
}

impl From<u64> for PuzzleSeed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Error returned when parsing a [`PuzzleSeed`] fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid puzzle seed: {source}")]
pub struct ParseSeedError {
    source: ParseIntError,
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|source| ParseSeedError { source })
    }
}
