//! Wordlace desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Wordlace application.

use wordlace_app::WordlaceApp;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.gifnksm.wordlace";

    better_panic::install();
    env_logger::init();

    log::info!("starting Wordlace {}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((900.0, 640.0))
            .with_min_inner_size((480.0, 360.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Wordlace",
        options,
        Box::new(|cc| Ok(Box::new(WordlaceApp::new(cc)))),
    )
}
