use std::io::Cursor;

use callq_cli::session::{
    ALREADY_EMPTY, CLEAR_CANCELLED, CLEARED, INPUT_ERROR, NOTHING_TO_PROCESS, Session,
    SessionOptions,
};
use callq_core::CallQueueManager;

// Scripted sessions: feed commands through an in-memory reader and check the
// transcript written to the output buffer.

fn run_script(queue: CallQueueManager, script: &str, options: SessionOptions) -> (String, usize) {
    let mut output = Vec::new();
    let size = {
        let mut session = Session::new(queue, Cursor::new(script), &mut output, options);
        session.run().expect("session runs");
        session.queue().size()
    };
    (String::from_utf8(output).expect("utf8 output"), size)
}

fn confirming() -> SessionOptions {
    SessionOptions {
        confirm_clear: true,
        ..SessionOptions::default()
    }
}

#[test]
fn add_and_process_in_arrival_order() {
    let script = "\
add Alice | Internet speed issues
add Bob | Cannot log in
size
next
size
";
    let (transcript, size) = run_script(CallQueueManager::new(), script, confirming());

    let expected = "\
Added #1: Call from: Alice (Issue: Internet speed issues)
Added #2: Call from: Bob (Issue: Cannot log in)
Calls in Queue: 2
Call Processed:

Call from: Alice (Issue: Internet speed issues)
Calls in Queue: 1
";
    assert_eq!(transcript, expected);
    assert_eq!(size, 1);
}

#[test]
fn blank_fields_are_reported() {
    let script = "add   |  something\nadd Carol |   \nsize\n";
    let (transcript, size) = run_script(CallQueueManager::new(), script, confirming());

    let lines: Vec<&str> = transcript.lines().collect();
    assert_eq!(lines, [INPUT_ERROR, INPUT_ERROR, "Calls in Queue: 0"]);
    assert_eq!(size, 0);
}

#[test]
fn next_and_clear_on_empty_queue() {
    let (transcript, _) = run_script(CallQueueManager::new(), "next\nclear\n", confirming());
    assert_eq!(transcript.lines().collect::<Vec<_>>(), [NOTHING_TO_PROCESS, ALREADY_EMPTY]);
}

#[test]
fn clear_asks_for_confirmation() {
    let mut queue = CallQueueManager::new();
    queue.enqueue("Alice", "Router").unwrap();
    queue.enqueue("Bob", "Login").unwrap();

    let (transcript, size) = run_script(queue, "clear\nno\nsize\n", confirming());
    assert!(
        transcript.contains("Are you sure you want to clear ALL 2 calls from the queue? [y/N] ")
    );
    assert!(transcript.contains(CLEAR_CANCELLED));
    assert_eq!(size, 2);

    let mut queue = CallQueueManager::new();
    queue.enqueue("Alice", "Router").unwrap();
    let (transcript, size) = run_script(queue, "clear\ny\n", confirming());
    assert!(transcript.ends_with(&format!("{CLEARED}\n")));
    assert_eq!(size, 0);
}

#[test]
fn clear_without_confirmation() {
    let mut queue = CallQueueManager::new();
    queue.enqueue("Alice", "Router").unwrap();

    let (transcript, size) = run_script(queue, "clear\n", SessionOptions::default());
    assert_eq!(transcript, format!("{CLEARED}\n"));
    assert_eq!(size, 0);
}

#[test]
fn list_renders_queue_text() {
    let script = "list\nadd Alice | Router\nadd Bob | Login\nlist\n";
    let (transcript, _) = run_script(CallQueueManager::new(), script, confirming());

    assert!(transcript.starts_with("The call queue is currently empty.\n"));
    let expected_list = "\
--- Current Call Queue (Front to Back) ---

1   . Call from: Alice (Issue: Router)
2   . Call from: Bob (Issue: Login)
";
    assert!(transcript.contains(expected_list));
}

#[test]
fn list_as_json() {
    let options = SessionOptions {
        json: true,
        ..SessionOptions::default()
    };
    let (transcript, _) = run_script(
        CallQueueManager::new(),
        "add Alice | Router\nadd Bob | Login\nlist\n",
        options,
    );

    let json_start = transcript.find('[').expect("json array in output");
    let calls: serde_json::Value =
        serde_json::from_str(&transcript[json_start..]).expect("valid json");
    let calls = calls.as_array().expect("array");
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0]["caller_name"], "Alice");
    assert_eq!(calls[0]["id"], 1);
    assert_eq!(calls[1]["issue"], "Login");
}

#[test]
fn unknown_commands_do_not_end_the_session() {
    let (transcript, size) = run_script(
        CallQueueManager::new(),
        "dance\nadd Alice | Router\nquit\nadd Bob | Login\n",
        confirming(),
    );
    assert!(transcript.starts_with("Error: unknown command 'dance'"));
    assert!(transcript.contains("Added #1"));
    assert!(!transcript.contains("Bob"));
    assert_eq!(size, 1);
}
