//! Session activity: one row per queue action, tagged with the call it touched

use crate::ui_state::{LogLevel, UiState};

fn level_color(level: LogLevel, visuals: &egui::Visuals) -> egui::Color32 {
    match level {
        LogLevel::Info => visuals.text_color(),
        LogLevel::Warning => visuals.warn_fg_color,
        LogLevel::Error => visuals.error_fg_color,
    }
}

pub fn render(ui: &mut egui::Ui, ui_state: &mut UiState) {
    ui.horizontal(|ui| {
        ui.label(format!(
            "{} / {} entries",
            ui_state.activity_log.len(),
            ui_state.activity_log_capacity()
        ));
        if ui.small_button("Clear").clicked() {
            ui_state.activity_log.clear();
        }
    });

    egui::ScrollArea::vertical()
        .id_salt("activity_log_scroll")
        .max_height(160.0)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            egui::Grid::new("activity_log_grid")
                .num_columns(3)
                .striped(true)
                .show(ui, |ui| {
                    for entry in &ui_state.activity_log {
                        ui.monospace(&entry.timestamp);
                        ui.monospace(entry.call_column());
                        ui.colored_label(level_color(entry.level, ui.visuals()), &entry.message);
                        ui.end_row();
                    }
                });
        });
}
