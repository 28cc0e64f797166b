use log::{info, warn};
use wordlace_game::{SelectionOutcome, Session, SessionError, SystemClock};

use crate::state::Settings;

// AppState holds the puzzle in play and the persisted settings. Only the
// settings are saved; play state starts over on every run.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) settings: Settings,
    game: Result<Session, SessionError>,
    last_outcome: Option<SelectionOutcome>,
    dirty: bool,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(settings: Settings) -> Self {
        let game = Self::create_session(&settings);
        Self {
            settings,
            game,
            last_outcome: None,
            dirty: false,
        }
    }

    fn create_session(settings: &Settings) -> Result<Session, SessionError> {
        let session = Session::new(
            settings.generator_config(),
            settings.word_list(),
            None,
            SystemClock::new(),
        );
        if let Err(err) = &session {
            warn!("cannot start a puzzle: {err}");
        }
        session
    }

    #[must_use]
    pub(crate) fn session(&self) -> Option<&Session> {
        self.game.as_ref().ok()
    }

    pub(crate) fn session_mut(&mut self) -> Option<&mut Session> {
        self.game.as_mut().ok()
    }

    #[must_use]
    pub(crate) fn session_error(&self) -> Option<&SessionError> {
        self.game.as_ref().err()
    }

    #[must_use]
    pub(crate) fn last_outcome(&self) -> Option<SelectionOutcome> {
        self.last_outcome
    }

    pub(crate) fn record_outcome(&mut self, outcome: SelectionOutcome) {
        if !outcome.is_idle() {
            self.last_outcome = Some(outcome);
        }
    }

    #[must_use]
    pub(crate) fn is_dragging(&self) -> bool {
        self.session()
            .is_some_and(|session| !session.selection_path().is_empty())
    }

    /// Generates a new puzzle from the current settings.
    ///
    /// The current session is reused when its settings are unchanged, so only
    /// the seed changes.
    pub(crate) fn start_new_puzzle(&mut self) {
        let config = self.settings.generator_config();
        let words = self.settings.word_list();
        self.last_outcome = None;
        if let Ok(session) = &mut self.game
            && session.config() == &config
            && session.words() == &words
        {
            match session.new_puzzle(None) {
                Ok(()) => info!("new puzzle with seed {}", session.seed()),
                Err(err) => warn!("cannot generate a new puzzle: {err}"),
            }
            return;
        }
        self.game = Self::create_session(&self.settings);
        if let Some(session) = self.session() {
            info!("new puzzle with seed {}", session.seed());
        }
    }

    pub(crate) fn restart_puzzle(&mut self) {
        self.last_outcome = None;
        if let Some(session) = self.session_mut() {
            session.restart();
        }
    }

    pub(crate) fn update_settings(&mut self, settings: Settings) {
        if self.settings != settings {
            self.settings = settings;
            self.dirty = true;
        }
    }

    #[must_use]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_settings() -> Settings {
        Settings {
            grid_size: 6,
            allow_diagonals: false,
            allow_backwards: false,
            words: "cat, dog".to_owned(),
        }
    }

    #[test]
    fn test_new_state_has_session() {
        let state = AppState::new(small_settings());
        let session = state.session().unwrap();
        assert_eq!(session.puzzle().size(), 6);
        assert_eq!(session.puzzle().total_requested(), 2);
        assert!(!state.is_dirty());
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_no_playable_words_is_reported() {
        let state = AppState::new(Settings {
            words: "a, !, ".to_owned(),
            ..small_settings()
        });
        assert!(state.session().is_none());
        assert!(state.session_error().is_some());
    }

    #[test]
    fn test_new_puzzle_keeps_session_when_settings_unchanged() {
        let mut state = AppState::new(small_settings());
        let words_before = state.session().unwrap().words().clone();
        state.start_new_puzzle();
        assert_eq!(state.session().unwrap().words(), &words_before);
    }

    #[test]
    fn test_new_puzzle_applies_changed_settings() {
        let mut state = AppState::new(small_settings());
        state.update_settings(Settings {
            grid_size: 8,
            words: "cat, dog, owl".to_owned(),
            ..small_settings()
        });
        assert!(state.is_dirty());
        // The puzzle in play is unchanged until a new one is requested.
        assert_eq!(state.session().unwrap().puzzle().size(), 6);

        state.start_new_puzzle();
        let session = state.session().unwrap();
        assert_eq!(session.puzzle().size(), 8);
        assert_eq!(session.puzzle().total_requested(), 3);

        state.clear_dirty();
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_recovers_from_invalid_words() {
        let mut state = AppState::new(Settings {
            words: String::new(),
            ..small_settings()
        });
        assert!(state.session().is_none());
        state.update_settings(small_settings());
        state.start_new_puzzle();
        assert!(state.session().is_some());
    }

    #[test]
    fn test_idle_outcome_not_recorded() {
        let mut state = AppState::new(small_settings());
        state.record_outcome(SelectionOutcome::NoMatch);
        state.record_outcome(SelectionOutcome::Idle);
        assert_eq!(state.last_outcome(), Some(SelectionOutcome::NoMatch));
        state.restart_puzzle();
        assert_eq!(state.last_outcome(), None);
    }
}
