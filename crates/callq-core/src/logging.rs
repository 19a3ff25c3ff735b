//! Structured logging for the call queue front ends.
//!
//! Events always go to a JSON log file under the config directory. Passing
//! [`LoggingDestination::FileAndStderr`] mirrors them to stderr as plain text,
//! which the CLI enables with `--log-stderr`.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use thiserror::Error;
use tracing::{Subscriber, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::time::{LocalTime, UtcTime};
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::config_directory;

const LOG_FILE_NAME: &str = "callq.log";
const LOG_FILTER_ENV: &str = "CALLQ_LOG";
const DEFAULT_FILTER: &str = "info";

/// Where log events are written besides the log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingDestination {
    /// Log file only; keeps the window and the interactive session quiet.
    FileOnly,
    /// Log file plus a human-readable copy on stderr.
    FileAndStderr,
}

impl LoggingDestination {
    pub fn from_stderr_flag(log_stderr: bool) -> Self {
        if log_stderr {
            LoggingDestination::FileAndStderr
        } else {
            LoggingDestination::FileOnly
        }
    }
}

/// Keeps the non-blocking writer alive for the life of the process.
struct InstalledLogging {
    _guard: WorkerGuard,
    log_path: PathBuf,
}

static INSTALLED: OnceLock<InstalledLogging> = OnceLock::new();

/// Errors that can arise while standing up structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to prepare log directory: {0}")]
    Io(#[from] io::Error),
    #[error("invalid logging filter: {0}")]
    Filter(#[from] ParseError),
    #[error("failed to install logging subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the global subscriber and return the log file path.
///
/// Only the first call installs anything; later calls report the same path.
pub fn init_logging(destination: LoggingDestination) -> Result<&'static Path, LoggingError> {
    if let Some(installed) = INSTALLED.get() {
        return Ok(&installed.log_path);
    }

    let installed = install(destination, &config_directory().join("logs"))?;
    Ok(&INSTALLED.get_or_init(|| installed).log_path)
}

/// Log file chosen by [`init_logging`], if logging has been set up.
pub fn current_log_path() -> Option<&'static Path> {
    INSTALLED.get().map(|installed| installed.log_path.as_path())
}

fn install(destination: LoggingDestination, dir: &Path) -> Result<InstalledLogging, LoggingError> {
    let filter = filter_from_spec(env::var(LOG_FILTER_ENV).ok().as_deref())?;
    fs::create_dir_all(dir)?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, LOG_FILE_NAME));
    let json_file = tracing_subscriber::fmt::layer()
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_file(true)
        .with_line_number(true)
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(json_file)
        .with(stderr_layer(destination))
        .try_init()?;

    let log_path = dir.join(LOG_FILE_NAME);
    info!(path = %log_path.display(), ?destination, "Structured logging enabled");

    Ok(InstalledLogging {
        _guard: guard,
        log_path,
    })
}

fn stderr_layer<S>(destination: LoggingDestination) -> Option<Box<dyn Layer<S> + Send + Sync>>
where
    S: Subscriber + for<'span> LookupSpan<'span> + 'static,
{
    match destination {
        LoggingDestination::FileOnly => None,
        LoggingDestination::FileAndStderr => Some(
            tracing_subscriber::fmt::layer()
                .with_timer(LocalTime::rfc_3339())
                .with_target(true)
                .with_writer(io::stderr)
                .with_ansi(false)
                .boxed(),
        ),
    }
}

/// Build the level filter from a `CALLQ_LOG`-style directive.
///
/// A missing or blank directive falls back to `RUST_LOG`, then to `info`.
fn filter_from_spec(spec: Option<&str>) -> Result<EnvFilter, ParseError> {
    match spec.map(str::trim).filter(|spec| !spec.is_empty()) {
        Some(spec) => EnvFilter::try_new(spec),
        None => EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER)),
    }
}
