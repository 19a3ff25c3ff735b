use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI entrypoint.
#[derive(Parser, Debug, Clone)]
#[command(version, about = "Call center queue simulator", long_about = None)]
pub struct Cli {
    /// Mirror log events to stderr in addition to the log file.
    #[arg(long, short = 'v', global = true, action = ArgAction::SetTrue)]
    pub log_stderr: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Supported subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run an interactive queue session reading commands from stdin.
    #[command(alias = "repl")]
    Session(SessionArgs),
    /// Inspect or reset the configuration file.
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Options for the interactive session.
#[derive(Debug, Clone, Args, Default)]
pub struct SessionArgs {
    /// Start with an empty queue instead of the configured demo calls.
    #[arg(long, action = ArgAction::SetTrue)]
    pub no_seed: bool,

    /// Clear the queue without asking for confirmation.
    #[arg(short = 'y', long, action = ArgAction::SetTrue)]
    pub yes: bool,

    /// Print `list` output as JSON.
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,
}

/// Configuration subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommand {
    /// Print the configuration file location.
    Path,
    /// Print the effective configuration as TOML.
    Show,
    /// Overwrite the configuration file with defaults.
    Reset,
}
