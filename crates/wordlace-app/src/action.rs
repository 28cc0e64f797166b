use std::mem;

use wordlace_core::CellCoord;

use crate::state::Settings;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum Action {
    PointerDown(CellCoord),
    PointerEnter(CellCoord),
    PointerUp,
    PointerCancel,
    RestartPuzzle,
    StartNewPuzzle,
    UpdateSettings(Settings),
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue};

    #[test]
    fn test_take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::StartNewPuzzle);
        queue.request(Action::PointerUp);

        let drained = queue.take_all();
        assert_eq!(drained, [Action::StartNewPuzzle, Action::PointerUp]);

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }
}
