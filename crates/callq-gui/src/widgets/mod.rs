//! UI widgets for the call center window

pub mod action_bar;
pub mod activity_log;
pub mod call_form;
pub mod queue_display;

/// Solid-colour button with white label, as used for the primary actions.
pub(crate) fn filled_button(text: &str, fill: egui::Color32) -> egui::Button<'_> {
    egui::Button::new(egui::RichText::new(text).color(egui::Color32::WHITE).strong()).fill(fill)
}
