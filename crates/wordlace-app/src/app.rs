//! Wordlace desktop application UI.
//!
//! # Design Notes
//! - The letter grid fills the central panel; the word list, puzzle buttons and
//!   settings live in a side panel.
//! - Pointer input is reduced to cell-level down/enter/up events before it
//!   reaches the game session, so drag handling is independent of egui.
//! - Only settings are persisted; a new puzzle is generated on every start.

use std::time::Duration;

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context, SidePanel},
};

use crate::{
    action::ActionRequestQueue,
    action_handler, persistence,
    state::AppState,
    ui, view_model_builder,
};

const SIDEBAR_WIDTH: f32 = 240.0;

#[derive(Debug)]
pub struct WordlaceApp {
    app_state: AppState,
}

impl WordlaceApp {
    #[must_use]
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let settings = cc
            .storage
            .and_then(persistence::load_settings)
            .unwrap_or_default();
        Self {
            app_state: AppState::new(settings),
        }
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.app_state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            self.app_state.clear_dirty();
        }
    }
}

impl App for WordlaceApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        persistence::save_settings(storage, &self.app_state.settings);
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        let sidebar_vm = view_model_builder::build_sidebar_view_model(&self.app_state);
        SidePanel::right("sidebar")
            .resizable(false)
            .exact_width(SIDEBAR_WIDTH)
            .show(ctx, |ui| {
                ui::sidebar::show(ui, &sidebar_vm, &mut action_queue);
            });

        let game_screen_vm = view_model_builder::build_game_screen_view_model(&self.app_state);
        CentralPanel::default().show(ctx, |ui| {
            ui::game_screen::show(ui, game_screen_vm.as_ref(), &mut action_queue);
        });

        action_handler::handle_all(&mut self.app_state, &mut action_queue);

        // Releases are handled after the grid so a press and release in the
        // same frame reach the session in order.
        let dragging = self.app_state.is_dragging();
        ctx.input(|i| ui::input::handle_input(i, dragging, &mut action_queue));
        action_handler::handle_all(&mut self.app_state, &mut action_queue);

        if self
            .app_state
            .session()
            .is_some_and(|session| !session.is_complete())
        {
            ctx.request_repaint_after(Duration::from_secs(1));
        }

        self.apply_persistence(frame);
    }
}
