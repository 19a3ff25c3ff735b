//! "Add New Call" form

use crate::state::AppState;
use crate::widgets::filled_button;

const ADD_BLUE: egui::Color32 = egui::Color32::from_rgb(60, 140, 250);

/// Render the caller name / issue inputs.
/// Returns true when the user asked to add the call.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let mut submitted = false;

    ui.heading("Add New Call");
    ui.add_space(4.0);

    egui::Grid::new("call_form_grid")
        .num_columns(2)
        .spacing([8.0, 8.0])
        .show(ui, |ui| {
            ui.label("Caller Name:");
            ui.add(
                egui::TextEdit::singleline(&mut state.name_input)
                    .hint_text("e.g. Alice Johnson")
                    .desired_width(f32::INFINITY),
            );
            ui.end_row();

            ui.label("Issue:");
            let issue = ui.add(
                egui::TextEdit::singleline(&mut state.issue_input)
                    .hint_text("e.g. Internet speed issues")
                    .desired_width(f32::INFINITY),
            );
            if issue.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = true;
            }
            ui.end_row();
        });

    ui.add_space(4.0);
    let button = filled_button("Add Call to Queue", ADD_BLUE)
        .min_size(egui::vec2(ui.available_width(), 32.0));
    if ui.add(button).clicked() {
        submitted = true;
    }

    submitted
}
