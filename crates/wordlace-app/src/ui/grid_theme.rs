use eframe::egui::{Color32, Visuals};

/// Color palette for letter grid rendering.
///
/// Kept apart from `egui::Visuals` so highlight colors for found words and the
/// live drag can be tuned without touching the global theme.
#[derive(Debug, Clone)]
pub(crate) struct GridPalette {
    pub(crate) cell_bg: Color32,
    pub(crate) highlight_found: Color32,
    pub(crate) highlight_drag: Color32,

    pub(crate) border_outer: Color32,

    pub(crate) text_normal: Color32,
    pub(crate) text_found: Color32,
    pub(crate) text_drag: Color32,
}

impl GridPalette {
    pub(crate) fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            cell_bg: visuals.text_edit_bg_color(),
            highlight_found: visuals.selection.bg_fill,
            highlight_drag: visuals.widgets.active.bg_fill,

            border_outer: visuals.widgets.inactive.fg_stroke.color,

            text_normal: visuals.text_color(),
            text_found: visuals.strong_text_color(),
            text_drag: visuals.strong_text_color(),
        }
    }
}
