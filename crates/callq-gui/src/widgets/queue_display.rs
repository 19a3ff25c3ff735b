//! Scrollable text view of the queue

use callq_core::{CallQueueManager, render_queue};

pub fn render(ui: &mut egui::Ui, queue: &CallQueueManager) {
    ui.heading("Current Call Queue");
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let text = render_queue(&queue.snapshot());
            ui.label(egui::RichText::new(text).monospace());
        });
}
