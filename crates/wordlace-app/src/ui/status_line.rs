use eframe::egui::{Label, RichText, Ui, Widget as _};
use wordlace_generator::PuzzleSeed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GameStatus {
    InProgress { found: usize, total: usize },
    Complete,
}

#[derive(Debug, Clone)]
pub(crate) struct StatusLineViewModel {
    status: GameStatus,
    elapsed_secs: u64,
    seed: PuzzleSeed,
    feedback: Option<String>,
}

impl StatusLineViewModel {
    #[must_use]
    pub(crate) fn new(
        status: GameStatus,
        elapsed_secs: u64,
        seed: PuzzleSeed,
        feedback: Option<String>,
    ) -> Self {
        Self {
            status,
            elapsed_secs,
            seed,
            feedback,
        }
    }
}

#[must_use]
pub(crate) fn format_elapsed(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

pub(crate) fn show(ui: &mut Ui, vm: &StatusLineViewModel, text_size: f32) {
    ui.horizontal(|ui| {
        let (status_text, status_color) = match vm.status {
            GameStatus::InProgress { found, total } => (
                format!("Found {found} of {total}"),
                ui.visuals().text_color(),
            ),
            GameStatus::Complete => (
                "All words found! Well done!".to_owned(),
                ui.visuals().warn_fg_color,
            ),
        };
        Label::new(RichText::new(status_text).color(status_color).size(text_size)).ui(ui);
        ui.separator();
        Label::new(
            RichText::new(format_elapsed(vm.elapsed_secs))
                .size(text_size)
                .monospace(),
        )
        .ui(ui);
        ui.separator();
        Label::new(
            RichText::new(format!("Seed {}", vm.seed))
                .size(text_size * 0.8)
                .weak(),
        )
        .ui(ui);
        if let Some(feedback) = &vm.feedback {
            ui.separator();
            Label::new(RichText::new(feedback).size(text_size)).ui(ui);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "0:00");
        assert_eq!(format_elapsed(59), "0:59");
        assert_eq!(format_elapsed(61), "1:01");
        assert_eq!(format_elapsed(3600), "60:00");
    }
}
