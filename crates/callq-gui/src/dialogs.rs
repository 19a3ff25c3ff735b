//! Native message boxes shown after queue actions

use callq_core::{clear_confirmation_prompt, processed_message};
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::state::Notice;

fn message(level: MessageLevel, title: &str, description: &str) {
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Show the message box for a notice, if it has one.
///
/// [`Notice::ConfirmClear`] is answered through [`confirm_clear`] instead.
pub fn show_notice(notice: &Notice) {
    match notice {
        Notice::InputError => message(
            MessageLevel::Error,
            "Input Error",
            "Please enter both a name and an issue.",
        ),
        Notice::NothingToProcess => message(
            MessageLevel::Info,
            "Queue Empty",
            "No calls in queue to process!",
        ),
        Notice::CallProcessed(call) => {
            message(MessageLevel::Info, "Call Completed", &processed_message(call))
        }
        Notice::AlreadyEmpty => message(
            MessageLevel::Info,
            "Queue Empty",
            "The queue is already empty!",
        ),
        Notice::Cleared { .. } => message(
            MessageLevel::Info,
            "Queue Cleared",
            "All calls have been cleared from the queue.",
        ),
        Notice::CallAdded { .. } | Notice::ConfirmClear { .. } => {}
    }
}

/// Ask whether to clear `count` calls. Returns true on "Yes".
pub fn confirm_clear(count: usize) -> bool {
    let result = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Confirm Clear Queue")
        .set_description(clear_confirmation_prompt(count))
        .set_buttons(MessageButtons::YesNo)
        .show();
    matches!(result, MessageDialogResult::Yes)
}
