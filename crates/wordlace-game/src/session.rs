use std::{fmt, time::Duration};

use log::{debug, info};
use wordlace_core::{CellCoord, Placement, Puzzle, WordList};
use wordlace_generator::{
    GenerateError, GeneratedPuzzle, GeneratorConfig, PuzzleGenerator, PuzzleSeed,
};

use crate::{Clock, FoundWords, PlacementIndex, SelectionEngine, SelectionOutcome, SystemClock};

/// Who decides the seed of the next puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SeedOwnership {
    /// The host supplied a seed. [`Session::new_puzzle`] without a seed keeps
    /// the current one.
    Controlled,
    /// The session draws seeds itself. [`Session::new_puzzle`] without a seed
    /// draws a fresh one.
    Uncontrolled,
}

/// Summary emitted once when every placed word has been found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionReport {
    /// Found words, in the order they were found.
    pub found_words: Vec<String>,
    /// Number of words placed in the grid.
    pub total_placed: usize,
    /// Number of distinct words requested, placed or not.
    pub total_requested: usize,
    /// Play time in whole seconds, rounded and at least 1.
    pub seconds_elapsed: u64,
    /// Seed of the completed puzzle.
    pub seed: PuzzleSeed,
    /// Words that could not be placed.
    pub unplaced: Vec<String>,
}

/// Errors that can occur when creating or regenerating a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SessionError {
    /// Puzzle generation rejected the configuration or word list.
    #[display("failed to generate puzzle: {_0}")]
    Generate(#[from] GenerateError),
}

/// What a finished drag did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    /// How the drag was matched.
    pub outcome: SelectionOutcome,
    /// Set on the drag that found the last word.
    pub completion: Option<CompletionReport>,
}

type CompletionCallback = Box<dyn FnMut(&CompletionReport)>;

/// One word-search game: a puzzle, what has been found in it, and its timer.
///
/// The session owns the [`PlacementIndex`] and [`SelectionEngine`] for the
/// current puzzle and rebuilds both whenever the puzzle changes. Time is read
/// from an injected [`Clock`].
///
/// # Examples
///
/// ```
/// use wordlace_core::WordList;
/// use wordlace_game::{ManualClock, Session};
/// use wordlace_generator::{GeneratorConfig, PuzzleSeed};
///
/// let config = GeneratorConfig::default().size(6);
/// let words = WordList::from_raw(["cat", "dog"]);
/// let mut session = Session::new(config, words, Some(PuzzleSeed::new(42)), ManualClock::new())?;
///
/// for placement in session.puzzle().placements().to_vec() {
///     session.pointer_down(placement.first());
///     session.pointer_enter(placement.last());
///     session.pointer_up();
/// }
/// let report = session.completion().unwrap();
/// assert_eq!(report.found_words.len(), report.total_placed);
/// # Ok::<(), wordlace_game::SessionError>(())
/// ```
pub struct Session<C = SystemClock> {
    generator: PuzzleGenerator,
    words: WordList,
    ownership: SeedOwnership,
    generated: GeneratedPuzzle,
    index: PlacementIndex,
    selection: SelectionEngine,
    found: FoundWords,
    clock: C,
    started_at: Duration,
    report: Option<CompletionReport>,
    finished_at: Option<Duration>,
    on_complete: Option<CompletionCallback>,
}

impl<C> fmt::Debug for Session<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("config", self.generator.config())
            .field("ownership", &self.ownership)
            .field("seed", &self.generated.seed)
            .field("found", &self.found)
            .field("selection", &self.selection)
            .field("report", &self.report)
            .finish_non_exhaustive()
    }
}

impl<C: Clock> Session<C> {
    /// Generates the first puzzle and starts the timer.
    ///
    /// Passing a seed makes the session [`SeedOwnership::Controlled`];
    /// otherwise it is [`SeedOwnership::Uncontrolled`] and starts from a random
    /// seed.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Generate`] if the configuration is invalid or
    /// `words` is empty.
    pub fn new(
        config: GeneratorConfig,
        words: WordList,
        seed: Option<PuzzleSeed>,
        clock: C,
    ) -> Result<Self, SessionError> {
        let ownership = if seed.is_some() {
            SeedOwnership::Controlled
        } else {
            SeedOwnership::Uncontrolled
        };
        let generator = PuzzleGenerator::new(config);
        let seed = seed.unwrap_or_else(PuzzleSeed::random);
        let generated = generator.generate_with_seed(&words, seed)?;
        let index = PlacementIndex::new(generated.puzzle.placements());
        let selection = SelectionEngine::new(generated.puzzle.size())
            .allow_diagonals(generator.config().allow_diagonals);
        let found = FoundWords::new(index.len());
        let started_at = clock.now();
        Ok(Self {
            generator,
            words,
            ownership,
            generated,
            index,
            selection,
            found,
            clock,
            started_at,
            report: None,
            finished_at: None,
            on_complete: None,
        })
    }

    /// Registers a callback invoked once per puzzle when it is completed.
    pub fn set_on_complete(&mut self, callback: impl FnMut(&CompletionReport) + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    /// The current puzzle.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.generated.puzzle
    }

    /// Seed of the current puzzle.
    #[must_use]
    pub fn seed(&self) -> PuzzleSeed {
        self.generated.seed
    }

    /// Generation settings.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        self.generator.config()
    }

    /// The words the puzzle was generated from.
    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Whether the host or the session chooses seeds.
    #[must_use]
    pub fn ownership(&self) -> SeedOwnership {
        self.ownership
    }

    /// Placements found so far.
    #[must_use]
    pub fn found(&self) -> &FoundWords {
        &self.found
    }

    /// Returns `true` if `placement` has been found.
    #[must_use]
    pub fn is_found(&self, placement: usize) -> bool {
        self.found.contains(placement)
    }

    /// Found placements, in the order they were found.
    pub fn found_placements(&self) -> impl Iterator<Item = &Placement> + '_ {
        let placements = self.generated.puzzle.placements();
        self.found.iter().map(move |i| &placements[i])
    }

    /// Cells of the drag in progress.
    #[must_use]
    pub fn selection_path(&self) -> &[CellCoord] {
        self.selection.path()
    }

    /// Returns `true` once every placement has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.report.is_some()
    }

    /// The completion report, once the puzzle is complete.
    #[must_use]
    pub fn completion(&self) -> Option<&CompletionReport> {
        self.report.as_ref()
    }

    /// Play time so far; frozen once the puzzle is complete.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        let now = self.finished_at.unwrap_or_else(|| self.clock.now());
        now.saturating_sub(self.started_at)
    }

    /// Starts a drag at `cell`.
    pub fn pointer_down(&mut self, cell: CellCoord) {
        self.selection.pointer_down(cell);
    }

    /// Extends the drag in progress towards `cell`.
    pub fn pointer_enter(&mut self, cell: CellCoord) {
        self.selection.pointer_enter(cell);
    }

    /// Finishes the drag in progress.
    ///
    /// Safe to call when no drag is in progress; the outcome is then
    /// [`SelectionOutcome::Idle`].
    pub fn pointer_up(&mut self) -> SelectionResult {
        let outcome = self.selection.pointer_up(&self.index, &mut self.found);
        self.finish_selection(outcome)
    }

    /// Finishes the drag in progress after the pointer was lost.
    pub fn pointer_cancel(&mut self) -> SelectionResult {
        let outcome = self.selection.pointer_cancel(&self.index, &mut self.found);
        self.finish_selection(outcome)
    }

    fn finish_selection(&mut self, outcome: SelectionOutcome) -> SelectionResult {
        if let SelectionOutcome::Found { placement } = outcome {
            debug!(
                "found {} ({} of {})",
                self.generated.puzzle.placements()[placement].word(),
                self.found.len(),
                self.index.len()
            );
        }
        let completion = (outcome.is_found() && self.found.is_complete() && self.report.is_none())
            .then(|| self.complete());
        SelectionResult {
            outcome,
            completion,
        }
    }

    fn complete(&mut self) -> CompletionReport {
        let finished_at = self.clock.now();
        self.finished_at = Some(finished_at);
        let puzzle = &self.generated.puzzle;
        let report = CompletionReport {
            found_words: self
                .found_placements()
                .map(|placement| placement.word().to_owned())
                .collect(),
            total_placed: puzzle.placements().len(),
            total_requested: puzzle.total_requested(),
            seconds_elapsed: rounded_seconds(finished_at.saturating_sub(self.started_at)),
            seed: self.generated.seed,
            unplaced: puzzle.unplaced().to_vec(),
        };
        info!(
            "completed puzzle {} in {}s: {} of {} words placed",
            report.seed, report.seconds_elapsed, report.total_placed, report.total_requested
        );
        if let Some(callback) = &mut self.on_complete {
            callback(&report);
        }
        self.report = Some(report.clone());
        report
    }

    /// Replays the current puzzle from the start.
    ///
    /// Clears the found set and the drag in progress and restarts the timer.
    pub fn restart(&mut self) {
        self.selection.reset();
        self.found.clear();
        self.report = None;
        self.finished_at = None;
        self.started_at = self.clock.now();
    }

    /// Replaces the puzzle with a newly generated one.
    ///
    /// With `None`, a [`SeedOwnership::Controlled`] session regenerates from its
    /// current seed and an [`SeedOwnership::Uncontrolled`] one draws a fresh
    /// seed. On error the current puzzle is kept.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Generate`] if generation fails.
    pub fn new_puzzle(&mut self, seed: Option<PuzzleSeed>) -> Result<(), SessionError> {
        let seed = seed.unwrap_or_else(|| match self.ownership {
            SeedOwnership::Controlled => self.generated.seed,
            SeedOwnership::Uncontrolled => PuzzleSeed::random(),
        });
        let generated = self.generator.generate_with_seed(&self.words, seed)?;
        self.index = PlacementIndex::new(generated.puzzle.placements());
        self.selection = SelectionEngine::new(generated.puzzle.size())
            .allow_diagonals(self.generator.config().allow_diagonals);
        self.found = FoundWords::new(self.index.len());
        self.generated = generated;
        self.restart();
        Ok(())
    }
}

fn rounded_seconds(elapsed: Duration) -> u64 {
    let seconds = elapsed.as_secs() + u64::from(elapsed.subsec_millis() >= 500);
    seconds.max(1)
}
