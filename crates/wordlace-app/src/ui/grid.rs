use std::sync::Arc;

use eframe::egui::{
    Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2,
};
use wordlace_core::CellCoord;

use crate::{
    action::{Action, ActionRequestQueue},
    ui::grid_theme::GridPalette,
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct GridVisualState: u8 {
        const FOUND = 0b0000_0001;
        const DRAG = 0b0000_0010;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GridCell {
    pub(crate) letter: char,
    pub(crate) visual_state: GridVisualState,
}

/// A straight run of cells to highlight, given by its end cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GridRun {
    pub(crate) first: CellCoord,
    pub(crate) last: CellCoord,
}

impl GridRun {
    fn from_cells(cells: &[CellCoord]) -> Option<Self> {
        Some(Self {
            first: *cells.first()?,
            last: *cells.last()?,
        })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct GridViewModel {
    size: u8,
    cells: Vec<GridCell>,
    found_runs: Vec<GridRun>,
    drag_run: Option<GridRun>,
}

impl GridViewModel {
    /// Builds the view model from row-major letters and the runs to highlight.
    #[must_use]
    pub(crate) fn new<'a>(
        size: u8,
        letters: impl IntoIterator<Item = char>,
        found: impl IntoIterator<Item = &'a [CellCoord]>,
        drag_path: &[CellCoord],
    ) -> Self {
        let mut cells: Vec<GridCell> = letters
            .into_iter()
            .map(|letter| GridCell {
                letter,
                visual_state: GridVisualState::empty(),
            })
            .collect();
        let index =
            |coord: CellCoord| usize::from(coord.row) * usize::from(size) + usize::from(coord.col);

        let mut found_runs = Vec::new();
        for run in found {
            for &coord in run {
                if let Some(cell) = cells.get_mut(index(coord)) {
                    cell.visual_state |= GridVisualState::FOUND;
                }
            }
            found_runs.extend(GridRun::from_cells(run));
        }
        for &coord in drag_path {
            if let Some(cell) = cells.get_mut(index(coord)) {
                cell.visual_state |= GridVisualState::DRAG;
            }
        }

        Self {
            size,
            cells,
            found_runs,
            drag_run: GridRun::from_cells(drag_path),
        }
    }

    #[must_use]
    pub(crate) fn is_dragging(&self) -> bool {
        self.drag_run.is_some()
    }

    fn cell(&self, coord: CellCoord) -> Option<&GridCell> {
        self.cells
            .get(usize::from(coord.row) * usize::from(self.size) + usize::from(coord.col))
    }
}

const LETTER_SIZE_RATIO: f32 = 0.6;
const RUN_WIDTH_RATIO: f32 = 0.8;
const OUTER_BORDER_WIDTH: f32 = 2.0;

fn text_color(state: GridVisualState, palette: &GridPalette) -> Color32 {
    if state.intersects(GridVisualState::DRAG) {
        return palette.text_drag;
    }
    if state.intersects(GridVisualState::FOUND) {
        return palette.text_found;
    }
    palette.text_normal
}

/// Maps a screen position to the grid cell under it.
#[must_use]
pub(crate) fn cell_at(rect: Rect, size: u8, pos: Pos2) -> Option<CellCoord> {
    if size == 0 || !rect.contains(pos) {
        return None;
    }
    let cell_size = rect.width() / f32::from(size);
    let max = f32::from(size - 1);
    let col = ((pos.x - rect.left()) / cell_size).floor().clamp(0.0, max);
    let row = ((pos.y - rect.top()) / cell_size).floor().clamp(0.0, max);
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let coord = CellCoord::new(row as u8, col as u8);
    Some(coord)
}

fn cell_rect(rect: Rect, cell_size: f32, coord: CellCoord) -> Rect {
    let offset = Vec2::new(f32::from(coord.col), f32::from(coord.row)) * cell_size;
    let min = rect.min + offset;
    Rect::from_min_size(min, Vec2::splat(cell_size))
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &GridViewModel,
    side: f32,
    action_queue: &mut ActionRequestQueue,
) {
    let style = Arc::clone(ui.style());
    let palette = GridPalette::from_visuals(&style.visuals);

    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(side), Sense::click_and_drag());
    if vm.size == 0 {
        return;
    }
    let cell_size = side / f32::from(vm.size);

    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, palette.cell_bg);

    for run in &vm.found_runs {
        draw_run(painter, rect, cell_size, *run, palette.highlight_found);
    }
    if let Some(run) = vm.drag_run {
        draw_run(painter, rect, cell_size, run, palette.highlight_drag);
    }

    let font = FontId::proportional(cell_size * LETTER_SIZE_RATIO);
    for coord in CellCoord::all(vm.size) {
        let Some(cell) = vm.cell(coord) else {
            continue;
        };
        painter.text(
            cell_rect(rect, cell_size, coord).center(),
            Align2::CENTER_CENTER,
            cell.letter,
            font.clone(),
            text_color(cell.visual_state, &palette),
        );
    }

    painter.rect_stroke(
        rect,
        0.0,
        Stroke::new(OUTER_BORDER_WIDTH, palette.border_outer),
        StrokeKind::Inside,
    );

    handle_pointer(ui, rect, vm, action_queue);
}

fn handle_pointer(
    ui: &Ui,
    rect: Rect,
    vm: &GridViewModel,
    action_queue: &mut ActionRequestQueue,
) {
    let (pressed, down, pos) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_down(),
            i.pointer.interact_pos(),
        )
    });
    let Some(cell) = pos.and_then(|pos| cell_at(rect, vm.size, pos)) else {
        return;
    };
    if pressed {
        action_queue.request(Action::PointerDown(cell));
    } else if down && vm.is_dragging() {
        action_queue.request(Action::PointerEnter(cell));
    }
}

fn draw_run(painter: &Painter, rect: Rect, cell_size: f32, run: GridRun, color: Color32) {
    let start = cell_rect(rect, cell_size, run.first).center();
    let end = cell_rect(rect, cell_size, run.last).center();
    let radius = cell_size * RUN_WIDTH_RATIO * 0.5;
    painter.line_segment([start, end], Stroke::new(radius * 2.0, color));
    painter.circle_filled(start, radius, color);
    painter.circle_filled(end, radius, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: u8, col: u8) -> CellCoord {
        CellCoord::new(row, col)
    }

    #[test]
    fn test_cell_at() {
        let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::splat(40.0));
        assert_eq!(cell_at(rect, 4, Pos2::new(10.0, 20.0)), Some(c(0, 0)));
        assert_eq!(cell_at(rect, 4, Pos2::new(29.9, 41.0)), Some(c(2, 1)));
        assert_eq!(cell_at(rect, 4, Pos2::new(50.0, 60.0)), Some(c(3, 3)));
        assert_eq!(cell_at(rect, 4, Pos2::new(9.0, 30.0)), None);
        assert_eq!(cell_at(rect, 4, Pos2::new(30.0, 61.0)), None);
        assert_eq!(cell_at(rect, 0, Pos2::new(30.0, 30.0)), None);
    }

    #[test]
    fn test_view_model_visual_states() {
        let letters = "CATXDOGXXXXXXXXX".chars();
        let found = [c(0, 0), c(0, 1), c(0, 2)];
        let drag = [c(1, 0), c(1, 1)];
        let vm = GridViewModel::new(4, letters, [found.as_slice()], &drag);

        assert!(vm.is_dragging());
        assert_eq!(
            vm.found_runs,
            [GridRun {
                first: c(0, 0),
                last: c(0, 2),
            }]
        );
        assert_eq!(vm.cell(c(0, 1)).unwrap().letter, 'A');
        assert_eq!(vm.cell(c(0, 1)).unwrap().visual_state, GridVisualState::FOUND);
        assert_eq!(vm.cell(c(1, 1)).unwrap().visual_state, GridVisualState::DRAG);
        assert!(vm.cell(c(3, 3)).unwrap().visual_state.is_empty());
    }

    #[test]
    fn test_idle_view_model() {
        let vm = GridViewModel::new(4, "ABCD".repeat(4).chars(), [], &[]);
        assert!(!vm.is_dragging());
        assert_eq!(vm.size, 4);
    }
}
