use std::cmp::Reverse;

use log::debug;
use rand::{
    distr::{Distribution as _, Uniform},
    seq::IndexedRandom as _,
};
use rand_pcg::Pcg64;
use wordlace_core::{
    CellCoord, Direction, LetterGrid, MAX_GRID_SIZE, Placement, Puzzle, WordList, line,
};

use crate::{GeneratorConfig, PuzzleSeed};

/// A puzzle together with the seed it was generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The seed used for generation.
    pub seed: PuzzleSeed,
    /// The generated puzzle.
    pub puzzle: Puzzle,
}

/// Configuration errors that prevent generation.
///
/// Words that do not fit are not errors; they are reported through
/// [`Puzzle::unplaced`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// The grid size is zero or larger than [`MAX_GRID_SIZE`].
    #[display("invalid grid size {size}, expected 1 to {MAX_GRID_SIZE}")]
    InvalidSize {
        /// Requested size.
        size: u8,
    },
    /// The word list has no playable words.
    #[display("no playable words")]
    NoWords,
}

/// Seeded word-search generator.
///
/// Words are placed longest first (ties keep input order). Each word gets up to
/// [`GeneratorConfig::max_trials`] attempts, each picking a random origin cell
/// and a random allowed direction. An attempt succeeds if the whole word lies
/// inside the grid and every cell is either empty or already holds the needed
/// letter, so words may cross on shared letters. An attempt that would lay a
/// word over exactly the cells of an earlier word, such as `GOD` read back
/// along `DOG`, is rejected, since the two could not be told apart when
/// selected. Words that exhaust their
/// attempts, including any word longer than the grid, are reported as
/// unplaced. Remaining cells are then filled with random letters.
///
/// Every random decision comes from a PCG generator seeded by [`PuzzleSeed`],
/// so generation is reproducible.
///
/// # Examples
///
/// ```
/// use wordlace_core::WordList;
/// use wordlace_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed};
///
/// let words = WordList::from_raw(["cat", "dog"]);
/// let generator = PuzzleGenerator::new(GeneratorConfig::default().size(6));
/// let first = generator.generate_with_seed(&words, PuzzleSeed::new(42))?;
/// let second = generator.generate_with_seed(&words, PuzzleSeed::new(42))?;
/// assert_eq!(first, second);
/// assert_eq!(first.puzzle.total_requested(), 2);
/// # Ok::<(), wordlace_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

struct Sampler {
    coord: Uniform<u8>,
    letter: Uniform<u8>,
    directions: &'static [Direction],
}

impl PuzzleGenerator {
    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a puzzle with a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`PuzzleGenerator::generate_with_seed`].
    pub fn generate(&self, words: &WordList) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(words, PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidSize`] if the configured size is zero or
    /// above [`MAX_GRID_SIZE`], and [`GenerateError::NoWords`] for an empty word
    /// list.
    pub fn generate_with_seed(
        &self,
        words: &WordList,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        let size = self.config.size;
        if size == 0 || size > MAX_GRID_SIZE {
            return Err(GenerateError::InvalidSize { size });
        }
        if words.is_empty() {
            return Err(GenerateError::NoWords);
        }

        let mut rng = seed.rng();
        let sampler = Sampler {
            coord: Uniform::new(0, size).map_err(|_| GenerateError::InvalidSize { size })?,
            letter: Uniform::new_inclusive(b'A', b'Z')
                .map_err(|_| GenerateError::InvalidSize { size })?,
            directions: self.config.direction_set().directions(),
        };

        let mut order: Vec<usize> = (0..words.len()).collect();
        order.sort_by_key(|&i| Reverse(words[i].word().len()));

        let mut grid = LetterGrid::new(size);
        let mut placed: Vec<Option<Placement>> = vec![None; words.len()];
        for i in order {
            let word = words[i].word();
            let placement = self.place_word(&mut grid, &placed, word, &sampler, &mut rng);
            placed[i] = placement;
            if placed[i].is_none() {
                debug!("could not place {word} in a {size}x{size} grid");
            }
        }

        let empty: Vec<CellCoord> = grid.empty_cells().collect();
        for cell in empty {
            grid.set(cell, sampler.letter.sample(&mut rng));
        }

        let mut placements = Vec::with_capacity(words.len());
        let mut unplaced = Vec::new();
        for (entry, placement) in words.entries().iter().zip(placed) {
            match placement {
                Some(placement) => placements.push(placement),
                None => unplaced.push(entry.word().to_owned()),
            }
        }

        debug!(
            "generated {size}x{size} puzzle with seed {seed}: placed {} of {} words",
            placements.len(),
            words.len()
        );

        let puzzle = Puzzle::new(grid, placements, unplaced);
        debug_assert_eq!(puzzle.validate(), Ok(()));
        Ok(GeneratedPuzzle { seed, puzzle })
    }

    fn place_word(
        &self,
        grid: &mut LetterGrid,
        placed: &[Option<Placement>],
        word: &str,
        sampler: &Sampler,
        rng: &mut Pcg64,
    ) -> Option<Placement> {
        let size = grid.size();
        if word.len() > usize::from(size) {
            return None;
        }
        let letters = word.as_bytes();
        for _ in 0..self.config.max_trials {
            let row = sampler.coord.sample(rng);
            let col = sampler.coord.sample(rng);
            let &direction = sampler.directions.choose(rng)?;
            let origin = CellCoord::new(row, col);

            let Some(cells) = line::line_cells_in(size, origin, direction, letters.len()) else {
                continue;
            };
            let fits = cells
                .iter()
                .zip(letters)
                .all(|(&cell, &letter)| grid.get(cell).is_none_or(|existing| existing == letter));
            if !fits || placed.iter().flatten().any(|other| other.spans(&cells)) {
                continue;
            }

            for (&cell, &letter) in cells.iter().zip(letters) {
                grid.set(cell, letter);
            }
            return Placement::from_line(word, origin, direction);
        }
        None
    }
}
