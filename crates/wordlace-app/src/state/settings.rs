use serde::{Deserialize, Serialize};
use wordlace_core::WordList;
use wordlace_generator::GeneratorConfig;

pub(crate) const DEFAULT_WORDS: &str = "\
apple
banana
cherry
grape
lemon
mango
orange
peach
";

/// User-editable settings, persisted between runs.
///
/// They are read when a new puzzle is generated; the puzzle in play keeps the
/// settings it was generated with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) grid_size: u8,
    pub(crate) allow_diagonals: bool,
    pub(crate) allow_backwards: bool,
    pub(crate) words: String,
}

impl Default for Settings {
    fn default() -> Self {
        let config = GeneratorConfig::default();
        Self {
            grid_size: config.size,
            allow_diagonals: config.allow_diagonals,
            allow_backwards: config.allow_backwards,
            words: DEFAULT_WORDS.to_owned(),
        }
    }
}

impl Settings {
    #[must_use]
    pub(crate) fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::default()
            .size(GeneratorConfig::clamped_size(u32::from(self.grid_size)))
            .allow_diagonals(self.allow_diagonals)
            .allow_backwards(self.allow_backwards)
    }

    #[must_use]
    pub(crate) fn word_list(&self) -> WordList {
        WordList::parse(&self.words)
    }
}
