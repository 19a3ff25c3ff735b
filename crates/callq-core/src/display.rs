//! Plain-text rendering of the queue shared by the CLI and GUI.

use std::fmt::Write;

use crate::queue::Call;

pub const EMPTY_QUEUE_TEXT: &str = "The call queue is currently empty.";
const QUEUE_HEADER: &str = "--- Current Call Queue (Front to Back) ---";

/// Render calls front to back, one numbered line each.
pub fn render_queue(calls: &[Call]) -> String {
    if calls.is_empty() {
        return EMPTY_QUEUE_TEXT.to_string();
    }

    let mut text = String::with_capacity(QUEUE_HEADER.len() + calls.len() * 64);
    text.push_str(QUEUE_HEADER);
    text.push_str("\n\n");
    for (index, call) in calls.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = writeln!(text, "{:<4}. {}", index + 1, call);
    }
    text
}

pub fn size_label(size: usize) -> String {
    format!("Calls in Queue: {size}")
}

pub fn processed_message(call: &Call) -> String {
    format!("Call Processed:\n\n{call}")
}

pub fn clear_confirmation_prompt(size: usize) -> String {
    format!("Are you sure you want to clear ALL {size} calls from the queue?")
}
