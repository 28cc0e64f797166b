use wordlace_core::{DirectionSet, MAX_GRID_SIZE, MIN_GRID_SIZE};

/// Parameters of puzzle generation.
///
/// # Examples
///
/// ```
/// use wordlace_generator::GeneratorConfig;
///
/// let config = GeneratorConfig::default()
///     .size(8)
///     .allow_diagonals(false)
///     .allow_backwards(false);
/// assert_eq!(config.direction_set().directions().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneratorConfig {
    /// Side length of the square grid.
    pub size: u8,
    /// Whether words may run diagonally.
    pub allow_diagonals: bool,
    /// Whether words may run right to left or bottom to top.
    pub allow_backwards: bool,
    /// Placement attempts per word before it is reported as unplaced.
    pub max_trials: usize,
}

impl GeneratorConfig {
    /// Default side length.
    pub const DEFAULT_SIZE: u8 = 12;
    /// Default number of placement attempts per word.
    pub const DEFAULT_MAX_TRIALS: usize = 200;

    /// Sets the grid size.
    #[must_use]
    pub fn size(mut self, size: u8) -> Self {
        self.size = size;
        self
    }

    /// Sets whether diagonal placements are allowed.
    #[must_use]
    pub fn allow_diagonals(mut self, allow: bool) -> Self {
        self.allow_diagonals = allow;
        self
    }

    /// Sets whether backwards placements are allowed.
    #[must_use]
    pub fn allow_backwards(mut self, allow: bool) -> Self {
        self.allow_backwards = allow;
        self
    }

    /// Sets the per-word placement budget.
    #[must_use]
    pub fn max_trials(mut self, max_trials: usize) -> Self {
        self.max_trials = max_trials;
        self
    }

    /// Returns the directions words may be placed in.
    #[must_use]
    pub fn direction_set(&self) -> DirectionSet {
        DirectionSet::new(self.allow_diagonals, self.allow_backwards)
    }

    /// Clamps a requested size into the range hosts should offer.
    ///
    /// The generator itself does not clamp; hosts call this before building a
    /// config from user input.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlace_generator::GeneratorConfig;
    ///
    /// assert_eq!(GeneratorConfig::clamped_size(1), 4);
    /// assert_eq!(GeneratorConfig::clamped_size(10), 10);
    /// assert_eq!(GeneratorConfig::clamped_size(200), 26);
    /// ```
    #[must_use]
    pub fn clamped_size(requested: u32) -> u8 {
        let clamped = requested.clamp(u32::from(MIN_GRID_SIZE), u32::from(MAX_GRID_SIZE));
        u8::try_from(clamped).unwrap_or(MAX_GRID_SIZE)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            allow_diagonals: true,
            allow_backwards: true,
            max_trials: Self::DEFAULT_MAX_TRIALS,
        }
    }
}
