use eframe::egui::{InputState, Key};

use crate::action::{Action, ActionRequestQueue};

struct Shortcut {
    key: Key,
    action: Action,
}

const SHORTCUTS: [Shortcut; 2] = [
    Shortcut {
        key: Key::N,
        action: Action::StartNewPuzzle,
    },
    Shortcut {
        key: Key::R,
        action: Action::RestartPuzzle,
    },
];

/// Handles input that is not tied to a widget.
///
/// A drag ends on a primary button release anywhere, not only over the grid,
/// and is cancelled when the window loses focus or the button is found up
/// without a release event.
pub(crate) fn handle_input(
    i: &InputState,
    dragging: bool,
    action_queue: &mut ActionRequestQueue,
) {
    if dragging {
        if i.pointer.primary_released() {
            action_queue.request(Action::PointerUp);
        } else if !i.focused || !i.pointer.primary_down() {
            action_queue.request(Action::PointerCancel);
        }
    }

    if i.modifiers.command {
        for shortcut in &SHORTCUTS {
            if i.key_pressed(shortcut.key) {
                action_queue.request(shortcut.action.clone());
            }
        }
    }
}
