//! Othello desktop game
//!
//! Play against the engine or another player, with engine hints.

use othello::ui::OthelloApp;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Othello"),
        ..Default::default()
    };

    eframe::run_native(
        "Othello",
        options,
        Box::new(|cc| Ok(Box::new(OthelloApp::new(cc)))),
    )
}
