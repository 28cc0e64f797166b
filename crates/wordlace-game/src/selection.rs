use log::trace;
use wordlace_core::{CellCoord, line};

use crate::{FoundWords, PlacementIndex};

/// State of the drag state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectionState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag started at `origin` and currently covers `path`.
    Dragging {
        /// Cell the drag started on.
        origin: CellCoord,
        /// Straight run from `origin`; always starts with `origin`.
        path: Vec<CellCoord>,
    },
}

/// Result of finishing a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectionOutcome {
    /// No drag was in progress.
    Idle,
    /// The drag covered a single cell.
    Tap,
    /// The path does not spell any placement.
    NoMatch,
    /// The path spells a placement that was already found.
    AlreadyFound {
        /// Index of the placement.
        placement: usize,
    },
    /// The path spells a placement found for the first time.
    Found {
        /// Index of the placement.
        placement: usize,
    },
}

/// Drag selection over a square grid.
///
/// A drag starts with [`pointer_down`](Self::pointer_down), follows the pointer
/// through [`pointer_enter`](Self::pointer_enter), and ends with
/// [`pointer_up`](Self::pointer_up) or [`pointer_cancel`](Self::pointer_cancel).
/// While dragging, the path is always a straight run from the origin in one of
/// the allowed directions: all eight by default, or only horizontal and
/// vertical ones when diagonals are disallowed. Cells that are not on such a
/// run from the origin are ignored, so the path keeps its last valid shape.
/// Either end of a run may be the origin, so backwards drags are always
/// accepted.
///
/// # Examples
///
/// ```
/// use wordlace_core::{CellCoord, Direction, Placement};
/// use wordlace_game::{FoundWords, PlacementIndex, SelectionEngine, SelectionOutcome};
///
/// let placements = [Placement::from_line("CAT", CellCoord::new(1, 0), Direction::RIGHT).unwrap()];
/// let index = PlacementIndex::new(&placements);
/// let mut found = FoundWords::new(placements.len());
/// let mut engine = SelectionEngine::new(5);
///
/// // Dragging from the last letter back to the first still matches.
/// engine.pointer_down(CellCoord::new(1, 2));
/// engine.pointer_enter(CellCoord::new(1, 0));
/// assert_eq!(
///     engine.pointer_up(&index, &mut found),
///     SelectionOutcome::Found { placement: 0 }
/// );
/// assert!(engine.state().is_idle());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEngine {
    size: u8,
    allow_diagonals: bool,
    state: SelectionState,
}

impl SelectionEngine {
    /// Creates an idle engine for a `size × size` grid.
    #[must_use]
    pub fn new(size: u8) -> Self {
        Self {
            size,
            allow_diagonals: true,
            state: SelectionState::Idle,
        }
    }

    /// Sets whether drags may run diagonally.
    #[must_use]
    pub fn allow_diagonals(mut self, allow: bool) -> Self {
        self.allow_diagonals = allow;
        self
    }

    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Cells of the drag in progress, or an empty slice when idle.
    #[must_use]
    pub fn path(&self) -> &[CellCoord] {
        match &self.state {
            SelectionState::Idle => &[],
            SelectionState::Dragging { path, .. } => path,
        }
    }

    /// Starts a drag at `cell`.
    ///
    /// A drag already in progress is discarded and restarted at `cell`. Cells
    /// outside the grid are ignored.
    pub fn pointer_down(&mut self, cell: CellCoord) {
        if !cell.is_within(self.size) {
            trace!("ignoring pointer down outside the grid at {cell}");
            return;
        }
        self.state = SelectionState::Dragging {
            origin: cell,
            path: vec![cell],
        };
    }

    /// Extends the drag in progress towards `cell`.
    ///
    /// The path is rebuilt from the origin towards `cell`, shortened if it would
    /// leave the grid. Entering the origin collapses the path to the origin
    /// alone. Cells not on a straight run from the origin in an allowed
    /// direction are ignored.
    pub fn pointer_enter(&mut self, cell: CellCoord) {
        let size = self.size;
        let allow_diagonals = self.allow_diagonals;
        let SelectionState::Dragging { origin, path } = &mut self.state else {
            trace!("ignoring pointer enter at {cell} while idle");
            return;
        };
        if cell == *origin {
            path.truncate(1);
            return;
        }
        let Some(direction) = line::compute_direction(*origin, cell) else {
            trace!("ignoring pointer enter at {cell}: not in line with {origin}");
            return;
        };
        if direction.is_diagonal() && !allow_diagonals {
            trace!("ignoring pointer enter at {cell}: diagonal from {origin}");
            return;
        }
        let length = line::line_length(*origin, cell)
            .min(line::steps_to_edge(size, *origin, direction) + 1);
        if let Some(cells) = line::line_cells_in(size, *origin, direction, length) {
            *path = cells;
        }
    }

    /// Finishes the drag in progress and matches its path.
    ///
    /// Newly matched placements are recorded in `found`. The engine is idle
    /// afterwards whatever the outcome.
    pub fn pointer_up(
        &mut self,
        index: &PlacementIndex,
        found: &mut FoundWords,
    ) -> SelectionOutcome {
        let SelectionState::Dragging { path, .. } = std::mem::take(&mut self.state) else {
            return SelectionOutcome::Idle;
        };
        if path.len() < 2 {
            return SelectionOutcome::Tap;
        }
        match index.lookup(&path) {
            None => {
                trace!("no placement along {} cells from {}", path.len(), path[0]);
                SelectionOutcome::NoMatch
            }
            Some(placement) if found.insert(placement) => SelectionOutcome::Found { placement },
            Some(placement) => SelectionOutcome::AlreadyFound { placement },
        }
    }

    /// Finishes the drag in progress, for example when the pointer leaves the
    /// window or focus is lost.
    ///
    /// Behaves exactly like [`pointer_up`](Self::pointer_up).
    pub fn pointer_cancel(
        &mut self,
        index: &PlacementIndex,
        found: &mut FoundWords,
    ) -> SelectionOutcome {
        self.pointer_up(index, found)
    }

    /// Drops any drag in progress without matching it.
    pub fn reset(&mut self) {
        self.state = SelectionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use wordlace_core::{Direction, Placement};

    use super::*;

    fn c(row: u8, col: u8) -> CellCoord {
        CellCoord::new(row, col)
    }

    fn fixture() -> (Vec<Placement>, PlacementIndex, FoundWords) {
        let placements = vec![
            Placement::from_line("CAT", c(0, 0), Direction::RIGHT).unwrap(),
            Placement::from_line("DOG", c(1, 3), Direction::DOWN).unwrap(),
            Placement::from_line("OWL", c(4, 0), Direction::UP_RIGHT).unwrap(),
        ];
        let index = PlacementIndex::new(&placements);
        let found = FoundWords::new(placements.len());
        (placements, index, found)
    }

    fn drag(engine: &mut SelectionEngine, cells: &[CellCoord]) {
        engine.pointer_down(cells[0]);
        for &cell in &cells[1..] {
            engine.pointer_enter(cell);
        }
    }

    #[test]
    fn test_down_starts_drag() {
        let mut engine = SelectionEngine::new(5);
        engine.pointer_down(c(2, 3));
        assert_eq!(
            engine.state(),
            &SelectionState::Dragging {
                origin: c(2, 3),
                path: vec![c(2, 3)],
            }
        );
    }

    #[test]
    fn test_down_outside_grid_ignored() {
        let mut engine = SelectionEngine::new(5);
        engine.pointer_down(c(5, 0));
        assert!(engine.state().is_idle());
    }

    #[test]
    fn test_down_while_dragging_restarts() {
        let mut engine = SelectionEngine::new(5);
        drag(&mut engine, &[c(0, 0), c(0, 3)]);
        engine.pointer_down(c(4, 4));
        assert_eq!(engine.path(), [c(4, 4)]);
    }

    #[test]
    fn test_enter_builds_straight_path() {
        let mut engine = SelectionEngine::new(5);
        drag(&mut engine, &[c(4, 0), c(1, 3)]);
        assert_eq!(engine.path(), [c(4, 0), c(3, 1), c(2, 2), c(1, 3)]);

        // Moving back shrinks the path.
        engine.pointer_enter(c(3, 1));
        assert_eq!(engine.path(), [c(4, 0), c(3, 1)]);
    }

    #[test]
    fn test_enter_knights_move_ignored() {
        let mut engine = SelectionEngine::new(5);
        drag(&mut engine, &[c(0, 0), c(0, 2)]);
        engine.pointer_enter(c(1, 2));
        engine.pointer_enter(c(2, 1));
        assert_eq!(engine.path(), [c(0, 0), c(0, 1), c(0, 2)]);
    }

    #[test]
    fn test_enter_diagonal_ignored_when_disallowed() {
        let mut engine = SelectionEngine::new(5).allow_diagonals(false);
        drag(&mut engine, &[c(0, 0), c(2, 2)]);
        assert_eq!(engine.path(), [c(0, 0)]);

        // The last straight path survives a diagonal detour.
        engine.pointer_enter(c(0, 2));
        engine.pointer_enter(c(1, 1));
        assert_eq!(engine.path(), [c(0, 0), c(0, 1), c(0, 2)]);

        // Backwards runs are still accepted.
        drag(&mut engine, &[c(3, 3), c(3, 0)]);
        assert_eq!(engine.path(), [c(3, 3), c(3, 2), c(3, 1), c(3, 0)]);
    }

    #[test]
    fn test_enter_origin_collapses_path() {
        let mut engine = SelectionEngine::new(5);
        drag(&mut engine, &[c(2, 2), c(2, 4), c(2, 2)]);
        assert_eq!(engine.path(), [c(2, 2)]);
    }

    #[test]
    fn test_enter_clamped_to_grid() {
        let mut engine = SelectionEngine::new(4);
        drag(&mut engine, &[c(1, 1), c(9, 9)]);
        assert_eq!(engine.path(), [c(1, 1), c(2, 2), c(3, 3)]);
    }

    #[test]
    fn test_enter_while_idle_ignored() {
        let mut engine = SelectionEngine::new(4);
        engine.pointer_enter(c(1, 1));
        assert!(engine.state().is_idle());
    }

    #[test]
    fn test_up_matches_both_directions_once() {
        let (_, index, mut found) = fixture();
        let mut engine = SelectionEngine::new(5);

        drag(&mut engine, &[c(3, 3), c(1, 3)]);
        assert_eq!(
            engine.pointer_up(&index, &mut found),
            SelectionOutcome::Found { placement: 1 }
        );
        drag(&mut engine, &[c(1, 3), c(3, 3)]);
        assert_eq!(
            engine.pointer_up(&index, &mut found),
            SelectionOutcome::AlreadyFound { placement: 1 }
        );
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_up_outcomes() {
        let (_, index, mut found) = fixture();
        let mut engine = SelectionEngine::new(5);

        assert_eq!(engine.pointer_up(&index, &mut found), SelectionOutcome::Idle);

        engine.pointer_down(c(0, 0));
        assert_eq!(engine.pointer_up(&index, &mut found), SelectionOutcome::Tap);

        // Prefix of CAT.
        drag(&mut engine, &[c(0, 0), c(0, 1)]);
        assert_eq!(engine.pointer_up(&index, &mut found), SelectionOutcome::NoMatch);

        // Overshooting CAT.
        drag(&mut engine, &[c(0, 0), c(0, 3)]);
        assert_eq!(engine.pointer_up(&index, &mut found), SelectionOutcome::NoMatch);

        drag(&mut engine, &[c(2, 2), c(4, 0)]);
        assert_eq!(
            engine.pointer_cancel(&index, &mut found),
            SelectionOutcome::Found { placement: 2 }
        );
        assert!(engine.state().is_idle());
        assert_eq!(found.iter().collect::<Vec<_>>(), [2]);
    }

    #[test]
    fn test_reset_discards_drag() {
        let (_, index, mut found) = fixture();
        let mut engine = SelectionEngine::new(5);
        drag(&mut engine, &[c(0, 0), c(0, 2)]);
        engine.reset();
        assert_eq!(engine.pointer_up(&index, &mut found), SelectionOutcome::Idle);
        assert!(found.is_empty());
    }

    proptest! {
        #[test]
        fn test_any_placement_matches_from_either_end(
            placement in 0..3_usize,
            reverse: bool,
        ) {
            let (placements, index, mut found) = fixture();
            let mut engine = SelectionEngine::new(5);
            let placement_ref = &placements[placement];
            let (start, end) = if reverse {
                (placement_ref.last(), placement_ref.first())
            } else {
                (placement_ref.first(), placement_ref.last())
            };
            drag(&mut engine, &[start, end]);
            prop_assert_eq!(
                engine.pointer_up(&index, &mut found),
                SelectionOutcome::Found { placement }
            );
        }

        #[test]
        fn test_path_is_always_a_straight_run(
            origin in (0..6_u8, 0..6_u8),
            moves in proptest::collection::vec((0..8_u8, 0..8_u8), 1..12),
            diagonals: bool,
        ) {
            let mut engine = SelectionEngine::new(6).allow_diagonals(diagonals);
            engine.pointer_down(c(origin.0, origin.1));
            for (row, col) in moves {
                engine.pointer_enter(c(row, col));
                let path = engine.path();
                prop_assert_eq!(path[0], c(origin.0, origin.1));
                prop_assert!(path.iter().all(|cell| cell.is_within(6)));
                if path.len() > 1 {
                    let direction = line::compute_direction(path[0], path[1]).unwrap();
                    prop_assert!(diagonals || !direction.is_diagonal());
                    let expected = line::try_line_cells(path[0], direction, path.len()).unwrap();
                    prop_assert_eq!(path, expected.as_slice());
                }
            }
        }
    }
}
