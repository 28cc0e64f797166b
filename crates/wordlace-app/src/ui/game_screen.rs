use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use super::{grid, status_line};
use crate::{
    action::ActionRequestQueue,
    ui::{grid::GridViewModel, status_line::StatusLineViewModel},
};

#[derive(Debug, Clone)]
pub(crate) struct GameScreenViewModel {
    pub(crate) grid_vm: GridViewModel,
    pub(crate) status_vm: StatusLineViewModel,
}

impl GameScreenViewModel {
    pub(crate) fn new(grid_vm: GridViewModel, status_vm: StatusLineViewModel) -> Self {
        Self { grid_vm, status_vm }
    }
}

const STATUS_LINE_RATIO: f32 = 0.06;

pub(crate) fn show(
    ui: &mut Ui,
    vm: Option<&GameScreenViewModel>,
    action_queue: &mut ActionRequestQueue,
) {
    let Some(vm) = vm else {
        ui.centered_and_justified(|ui| {
            ui.heading("Add some words in the settings, then start a new puzzle.");
        });
        return;
    };

    let spacing = ui.spacing().item_spacing;
    let available = ui.available_size() - spacing * 2.0;
    let grid_side = f32::min(available.x, available.y / (1.0 + STATUS_LINE_RATIO));
    let status_height = grid_side * STATUS_LINE_RATIO;

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(grid_side))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(grid_side))
                    .size(Size::exact(status_height))
                    .size(Size::remainder())
                    .vertical(|mut strip| {
                        strip.empty();
                        strip.cell(|ui| {
                            grid::show(ui, &vm.grid_vm, grid_side, action_queue);
                        });
                        strip.cell(|ui| {
                            status_line::show(ui, &vm.status_vm, status_height * 0.6);
                        });
                        strip.empty();
                    });
            });
            strip.empty();
        });
}
