//! Bottom bar with the queue size and the process/clear buttons

use callq_core::size_label;

use crate::state::UserAction;
use crate::widgets::filled_button;

const PROCESS_GREEN: egui::Color32 = egui::Color32::from_rgb(40, 170, 100);
const CLEAR_RED: egui::Color32 = egui::Color32::from_rgb(220, 80, 80);

/// Render the action bar. Returns the action whose button was clicked.
pub fn render(ui: &mut egui::Ui, queue_size: usize) -> Option<UserAction> {
    let mut action = None;

    ui.horizontal_centered(|ui| {
        ui.label(egui::RichText::new(size_label(queue_size)).strong());
        ui.add_space(20.0);

        if ui
            .add(filled_button("Process Next Call", PROCESS_GREEN))
            .clicked()
        {
            action = Some(UserAction::ProcessNext);
        }

        ui.add_space(20.0);

        if ui
            .add(filled_button("Clear All Calls", CLEAR_RED))
            .on_hover_text("Remove every waiting call")
            .clicked()
        {
            action = Some(UserAction::ClearAll);
        }
    });

    action
}
