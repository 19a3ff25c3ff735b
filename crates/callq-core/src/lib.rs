//! Core library crate exposing the call queue shared by the CLI and GUI front ends.

pub mod config;
pub mod display;
pub mod logging;
pub mod queue;

pub use config::{
    ConfigError, ConfigLoadResult, ConfigSource, FileConfig, SeedCall, SeedPreferences,
    ThemePreference, UiPreferences, config_directory, config_path, load_config, load_config_from,
    save_config, save_config_to,
};
pub use display::{clear_confirmation_prompt, processed_message, render_queue, size_label};
pub use queue::{Call, CallField, CallId, CallQueueManager, QueueError};
