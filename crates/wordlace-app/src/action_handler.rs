use log::trace;

use crate::{
    action::{Action, ActionRequestQueue},
    state::AppState,
};

pub(crate) fn handle_all(app_state: &mut AppState, action_queue: &mut ActionRequestQueue) {
    for action in action_queue.take_all() {
        handle(app_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, action: Action) {
    match action {
        Action::PointerDown(cell) => {
            if let Some(session) = app_state.session_mut() {
                session.pointer_down(cell);
            }
        }
        Action::PointerEnter(cell) => {
            if let Some(session) = app_state.session_mut() {
                session.pointer_enter(cell);
            }
        }
        Action::PointerUp | Action::PointerCancel => {
            let Some(session) = app_state.session_mut() else {
                trace!("ignoring {action:?} without a puzzle");
                return;
            };
            let result = if action.is_pointer_up() {
                session.pointer_up()
            } else {
                session.pointer_cancel()
            };
            app_state.record_outcome(result.outcome);
        }
        Action::RestartPuzzle => app_state.restart_puzzle(),
        Action::StartNewPuzzle => app_state.start_new_puzzle(),
        Action::UpdateSettings(settings) => app_state.update_settings(settings),
    }
}

#[cfg(test)]
mod tests {
    use wordlace_game::SelectionOutcome;

    use super::*;
    use crate::state::Settings;

    fn state() -> AppState {
        AppState::new(Settings {
            grid_size: 6,
            allow_diagonals: false,
            allow_backwards: false,
            words: "cat\ndog".to_owned(),
        })
    }

    #[test]
    fn test_pointer_actions_find_words() {
        let mut app_state = state();
        let placements = app_state.session().unwrap().puzzle().placements().to_vec();

        let mut queue = ActionRequestQueue::default();
        for placement in &placements {
            queue.request(Action::PointerDown(placement.last()));
            queue.request(Action::PointerEnter(placement.first()));
            queue.request(Action::PointerUp);
        }
        handle_all(&mut app_state, &mut queue);

        let session = app_state.session().unwrap();
        assert!(session.is_complete());
        assert_eq!(session.found().len(), placements.len());
        assert!(matches!(
            app_state.last_outcome(),
            Some(SelectionOutcome::Found { .. })
        ));
    }

    #[test]
    fn test_cancel_finishes_drag() {
        let mut app_state = state();
        handle(&mut app_state, Action::PointerDown(wordlace_core::CellCoord::new(0, 0)));
        assert!(app_state.is_dragging());
        handle(&mut app_state, Action::PointerCancel);
        assert!(!app_state.is_dragging());
        assert_eq!(app_state.last_outcome(), Some(SelectionOutcome::Tap));
    }

    #[test]
    fn test_restart_clears_found_words() {
        let mut app_state = state();
        let placement = app_state.session().unwrap().puzzle().placements()[0].clone();
        handle(&mut app_state, Action::PointerDown(placement.first()));
        handle(&mut app_state, Action::PointerEnter(placement.last()));
        handle(&mut app_state, Action::PointerUp);
        assert_eq!(app_state.session().unwrap().found().len(), 1);

        handle(&mut app_state, Action::RestartPuzzle);
        assert!(app_state.session().unwrap().found().is_empty());
    }

    #[test]
    fn test_update_settings_marks_dirty() {
        let mut app_state = state();
        let mut settings = app_state.settings.clone();
        settings.allow_backwards = true;
        handle(&mut app_state, Action::UpdateSettings(settings.clone()));
        assert!(app_state.is_dirty());
        assert_eq!(app_state.settings, settings);
    }
}
