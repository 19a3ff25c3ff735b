//! Main entry point for callq
//!
//! This binary supports both CLI and GUI modes:
//! - CLI mode: when any command-line arguments are provided
//! - GUI mode: when started without arguments

use anyhow::Result;

fn main() -> Result<()> {
    if callq_cli::should_run_cli_mode() {
        callq_cli::run().map_err(|e| anyhow::anyhow!(e))?;
    } else if let Err(e) = callq_gui::run() {
        eprintln!("GUI error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
