//! SlideKit demo application
//!
//! A minimal storefront page: a hero slider, a category strip and a
//! settings panel that writes the persisted swipe sensitivity.

mod app;
mod settings;

pub use app::{App, AppConfig, AppError};
pub use settings::SettingsPanel;

/// Open the demo window. An optional JSON config path may be passed as the
/// first command-line argument.
pub fn run() -> Result<(), AppError> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(std::path::Path::new(&path))?,
        None => AppConfig::default(),
    };
    let app = App::new(config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_title("SlideKit"),
        ..Default::default()
    };

    eframe::run_native("SlideKit", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| AppError::Window(e.to_string()))
}
