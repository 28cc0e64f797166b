use eframe::egui::{Button, CollapsingHeader, RichText, ScrollArea, Slider, TextEdit, Ui, widgets};
use wordlace_core::{MAX_GRID_SIZE, MIN_GRID_SIZE};

use crate::{
    action::{Action, ActionRequestQueue},
    state::Settings,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WordItem {
    pub(crate) label: String,
    pub(crate) found: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct SidebarViewModel<'a> {
    pub(crate) words: Vec<WordItem>,
    pub(crate) unplaced: Vec<String>,
    pub(crate) error: Option<String>,
    pub(crate) settings: &'a Settings,
}

impl<'a> SidebarViewModel<'a> {
    pub(crate) fn new(
        words: Vec<WordItem>,
        unplaced: Vec<String>,
        error: Option<String>,
        settings: &'a Settings,
    ) -> Self {
        Self {
            words,
            unplaced,
            error,
            settings,
        }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &SidebarViewModel, action_queue: &mut ActionRequestQueue) {
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            let has_puzzle = vm.error.is_none();
            if ui.add_enabled(has_puzzle, Button::new("Restart")).clicked() {
                action_queue.request(Action::RestartPuzzle);
            }
            if ui.button("New puzzle").clicked() {
                action_queue.request(Action::StartNewPuzzle);
            }
        });
        ui.separator();

        ScrollArea::vertical().show(ui, |ui| {
            if let Some(error) = &vm.error {
                ui.label(RichText::new(error).color(ui.visuals().error_fg_color));
            }

            ui.heading("Words");
            for item in &vm.words {
                let text = RichText::new(&item.label).size(18.0);
                if item.found {
                    ui.label(text.strikethrough().weak());
                } else {
                    ui.label(text);
                }
            }
            if !vm.unplaced.is_empty() {
                ui.add_space(8.0);
                ui.label(RichText::new("Did not fit in the grid:").italics());
                for label in &vm.unplaced {
                    ui.label(RichText::new(label).weak());
                }
            }

            ui.add_space(12.0);
            show_settings(ui, vm.settings, action_queue);
        });
    });
}

fn show_settings(ui: &mut Ui, settings: &Settings, action_queue: &mut ActionRequestQueue) {
    let mut changed = false;
    let mut settings = settings.clone();
    let Settings {
        grid_size,
        allow_diagonals,
        allow_backwards,
        words,
    } = &mut settings;

    CollapsingHeader::new("Puzzle settings")
        .default_open(true)
        .show(ui, |ui| {
            changed |= ui
                .add(Slider::new(grid_size, MIN_GRID_SIZE..=MAX_GRID_SIZE).text("Grid size"))
                .changed();
            changed |= ui.checkbox(allow_diagonals, "Diagonal words").changed();
            changed |= ui.checkbox(allow_backwards, "Backwards words").changed();
            ui.label("Word list (one per line or comma-separated):");
            changed |= ui.add(TextEdit::multiline(words).desired_rows(8)).changed();
            ui.label(RichText::new("Changes apply to the next new puzzle.").weak());
        });

    CollapsingHeader::new("Appearance")
        .default_open(false)
        .show(ui, |ui| {
            widgets::global_theme_preference_buttons(ui);
        });

    ui.label(RichText::new(format!("Wordlace {}", env!("CARGO_PKG_VERSION"))).small().weak());

    if changed {
        action_queue.request(Action::UpdateSettings(settings));
    }
}
