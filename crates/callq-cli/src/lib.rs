//! Command-line front end for the call queue.

pub mod cli_args;
pub mod session;

use std::io::{self, IsTerminal};

use callq_core::logging::{LoggingDestination, init_logging};
use callq_core::{CallQueueManager, FileConfig, config_path, load_config, save_config};
use clap::Parser;
use cli_args::{Cli, Command, ConfigCommand, SessionArgs};
use session::{Session, SessionOptions};
use tracing::info;

/// True when command-line arguments were given; otherwise the GUI should start.
pub fn should_run_cli_mode() -> bool {
    std::env::args_os().len() > 1
}

/// Parse the process arguments and run the selected command.
pub fn run() -> Result<(), String> {
    dispatch(Cli::parse())
}

pub fn dispatch(cli: Cli) -> Result<(), String> {
    if let Err(err) = init_logging(LoggingDestination::from_stderr_flag(cli.log_stderr)) {
        eprintln!("Warning: logging disabled: {err}");
    }

    match cli.command {
        Command::Session(args) => run_session(args),
        Command::Config(cmd) => handle_config_command(cmd),
    }
}

fn run_session(args: SessionArgs) -> Result<(), String> {
    let load = load_config();
    for warning in &load.warnings {
        eprintln!("Warning: {warning}");
    }

    let (queue, mut options) = build_session(&args, &load.config)?;
    let stdin = io::stdin();
    options.prompt = stdin.is_terminal();
    let mut session = Session::new(queue, stdin.lock(), io::stdout().lock(), options);
    session.run().map_err(|err| format!("Session I/O failed: {err}"))
}

/// Seed a queue and derive session options from the flags and the loaded config.
///
/// The prompt is left off; the caller turns it on for interactive terminals.
pub fn build_session(
    args: &SessionArgs,
    config: &FileConfig,
) -> Result<(CallQueueManager, SessionOptions), String> {
    let mut queue = CallQueueManager::new();
    if !args.no_seed {
        let seeded = config
            .seed
            .apply(&mut queue)
            .map_err(|err| format!("Invalid seed call: {err}"))?;
        info!(seeded, "Seeded call queue");
    }

    let options = SessionOptions {
        confirm_clear: config.ui.confirm_clear && !args.yes,
        json: args.json,
        prompt: false,
    };
    Ok((queue, options))
}

fn handle_config_command(command: ConfigCommand) -> Result<(), String> {
    match command {
        ConfigCommand::Path => {
            println!("{}", config_path().display());
            Ok(())
        }
        ConfigCommand::Show => {
            let load = load_config();
            for warning in load.warnings {
                eprintln!("Warning: {warning}");
            }
            let rendered = toml::to_string_pretty(&load.config).map_err(|err| err.to_string())?;
            print!("{rendered}");
            Ok(())
        }
        ConfigCommand::Reset => {
            save_config(&FileConfig::default()).map_err(|err| err.to_string())?;
            println!("Wrote default configuration to {}", config_path().display());
            Ok(())
        }
    }
}
