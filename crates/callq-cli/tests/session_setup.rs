use callq_cli::build_session;
use callq_cli::cli_args::SessionArgs;
use callq_core::FileConfig;

// Session setup: how the `session` flags and the loaded config combine into
// the starting queue and session options.

fn args(no_seed: bool, yes: bool) -> SessionArgs {
    SessionArgs {
        no_seed,
        yes,
        json: false,
    }
}

#[test]
fn default_session_starts_with_demo_calls_in_order() {
    let (queue, options) =
        build_session(&SessionArgs::default(), &FileConfig::default()).expect("builds");

    let names: Vec<String> = queue
        .snapshot()
        .iter()
        .map(|call| call.caller_name().to_string())
        .collect();
    assert_eq!(names, ["Alice Johnson", "Bob Williams", "Charlie Brown", "Diana Prince"]);
    assert!(options.confirm_clear);
    assert!(!options.json);
    assert!(!options.prompt);
}

#[test]
fn no_seed_starts_empty() {
    let (queue, _) = build_session(&args(true, false), &FileConfig::default()).expect("builds");
    assert_eq!(queue.size(), 0);
}

#[test]
fn disabled_seed_in_config_starts_empty() {
    let mut config = FileConfig::default();
    config.seed.enabled = false;

    let (queue, _) = build_session(&SessionArgs::default(), &config).expect("builds");
    assert!(queue.is_empty());
}

#[test]
fn yes_flag_turns_off_confirmation() {
    let (_, options) = build_session(&args(false, true), &FileConfig::default()).expect("builds");
    assert!(!options.confirm_clear);
}

#[test]
fn config_can_turn_off_confirmation() {
    let mut config = FileConfig::default();
    config.ui.confirm_clear = false;

    let (_, options) = build_session(&SessionArgs::default(), &config).expect("builds");
    assert!(!options.confirm_clear);
}

#[test]
fn json_flag_is_carried_over() {
    let session_args = SessionArgs {
        json: true,
        ..SessionArgs::default()
    };
    let (_, options) = build_session(&session_args, &FileConfig::default()).expect("builds");
    assert!(options.json);
}
