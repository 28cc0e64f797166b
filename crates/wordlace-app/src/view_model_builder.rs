use wordlace_core::{CellCoord, Placement};
use wordlace_game::{SelectionOutcome, Session};

use crate::{
    state::AppState,
    ui::{
        game_screen::GameScreenViewModel,
        grid::GridViewModel,
        sidebar::{SidebarViewModel, WordItem},
        status_line::{GameStatus, StatusLineViewModel},
    },
};

fn label_of<'a>(session: &'a Session, word: &'a str) -> &'a str {
    session.words().label_of(word).unwrap_or(word)
}

#[must_use]
pub(crate) fn build_game_screen_view_model(app_state: &AppState) -> Option<GameScreenViewModel> {
    let session = app_state.session()?;
    let puzzle = session.puzzle();

    let grid_vm = GridViewModel::new(
        puzzle.size(),
        CellCoord::all(puzzle.size()).map(|coord| puzzle.letter_at(coord).unwrap_or(' ')),
        session.found_placements().map(Placement::cells),
        session.selection_path(),
    );

    let status = if session.is_complete() {
        GameStatus::Complete
    } else {
        GameStatus::InProgress {
            found: session.found().len(),
            total: puzzle.placements().len(),
        }
    };
    let elapsed_secs = session
        .completion()
        .map_or(session.elapsed().as_secs(), |report| report.seconds_elapsed);
    let status_vm = StatusLineViewModel::new(
        status,
        elapsed_secs,
        session.seed(),
        app_state
            .last_outcome()
            .and_then(|outcome| feedback(session, outcome)),
    );

    Some(GameScreenViewModel::new(grid_vm, status_vm))
}

fn feedback(session: &Session, outcome: SelectionOutcome) -> Option<String> {
    let word_label = |placement: usize| {
        let word = session.puzzle().placements()[placement].word();
        label_of(session, word).to_owned()
    };
    match outcome {
        SelectionOutcome::Found { placement } => {
            Some(format!("Found \"{}\"", word_label(placement)))
        }
        SelectionOutcome::AlreadyFound { placement } => {
            Some(format!("\"{}\" was already found", word_label(placement)))
        }
        SelectionOutcome::NoMatch => Some("No word there".to_owned()),
        SelectionOutcome::Idle | SelectionOutcome::Tap => None,
    }
}

#[must_use]
pub(crate) fn build_sidebar_view_model(app_state: &AppState) -> SidebarViewModel<'_> {
    let Some(session) = app_state.session() else {
        let error = app_state.session_error().map(ToString::to_string);
        return SidebarViewModel::new(Vec::new(), Vec::new(), error, &app_state.settings);
    };
    let puzzle = session.puzzle();
    let words = puzzle
        .placements()
        .iter()
        .enumerate()
        .map(|(i, placement)| WordItem {
            label: label_of(session, placement.word()).to_owned(),
            found: session.is_found(i),
        })
        .collect();
    let unplaced = puzzle
        .unplaced()
        .iter()
        .map(|word| label_of(session, word).to_owned())
        .collect();
    SidebarViewModel::new(words, unplaced, None, &app_state.settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Settings;

    fn app_state(words: &str, size: u8) -> AppState {
        AppState::new(Settings {
            grid_size: size,
            allow_diagonals: false,
            allow_backwards: false,
            words: words.to_owned(),
        })
    }

    #[test]
    fn test_feedback_uses_labels() {
        let state = app_state("Cat, dog", 6);
        let session = state.session().unwrap();
        let cat = session
            .puzzle()
            .placements()
            .iter()
            .position(|placement| placement.word() == "CAT")
            .unwrap();
        assert_eq!(
            feedback(session, SelectionOutcome::Found { placement: cat }).as_deref(),
            Some("Found \"Cat\"")
        );
        assert_eq!(
            feedback(session, SelectionOutcome::AlreadyFound { placement: cat }).as_deref(),
            Some("\"Cat\" was already found")
        );
        assert_eq!(feedback(session, SelectionOutcome::Tap), None);
    }

    #[test]
    fn test_sidebar_lists_placed_and_unplaced_words() {
        let state = app_state("cat\nelephants", 6);
        let vm = build_sidebar_view_model(&state);
        let SidebarViewModel {
            words,
            unplaced,
            error,
            ..
        } = vm;
        assert_eq!(
            words,
            [WordItem {
                label: "cat".to_owned(),
                found: false,
            }]
        );
        assert_eq!(unplaced, ["elephants"]);
        assert_eq!(error, None);
    }

    #[test]
    fn test_no_session_has_no_game_screen() {
        let state = app_state("", 6);
        assert!(build_game_screen_view_model(&state).is_none());
        assert!(build_sidebar_view_model(&state).error.is_some());
    }
}
