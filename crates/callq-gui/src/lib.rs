//! Call center GUI using eframe/egui.

pub mod app;
pub mod dialogs;
pub mod state;
pub mod ui_state;
pub mod widgets;

use callq_core::logging::{LoggingDestination, init_logging};

pub const WINDOW_TITLE: &str = "Modern Call Center Simulator";

/// Main entry point for the GUI
pub fn run() -> anyhow::Result<()> {
    if let Err(err) = init_logging(LoggingDestination::FileOnly) {
        eprintln!("Warning: logging disabled: {err}");
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([700.0, 500.0])
            .with_min_inner_size([520.0, 380.0])
            .with_resizable(true)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(|cc| Ok(Box::new(app::CallCenterApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
