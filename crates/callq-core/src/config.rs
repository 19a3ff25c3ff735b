use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::queue::{CallQueueManager, QueueError};

const CONFIG_DIR_NAME: &str = "callq";
const CONFIG_FILE_NAME: &str = "config.toml";
const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Result returned by [`load_config`], capturing the source and any non-fatal issues.
#[derive(Debug, Clone)]
pub struct ConfigLoadResult {
    pub config: FileConfig,
    pub warnings: Vec<String>,
    pub source: ConfigSource,
}

/// Indicates where the configuration was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// No persisted configuration was found or usable; defaults were synthesized.
    Default,
    /// Configuration was read from `config.toml`.
    File,
}

/// Errors that can occur when persisting configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML serialization error: {0}")]
    Ser(#[from] toml::ser::Error),
}

/// Disk-backed configuration schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default = "FileConfig::schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub ui: UiPreferences,
    #[serde(default)]
    pub seed: SeedPreferences,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            ui: UiPreferences::default(),
            seed: SeedPreferences::default(),
        }
    }
}

impl FileConfig {
    const fn schema_version() -> u32 {
        CURRENT_SCHEMA_VERSION
    }
}

/// Presentation preferences shared by the GUI and CLI session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiPreferences {
    #[serde(default)]
    pub theme: ThemePreference,
    #[serde(default)]
    pub show_activity_log: bool,
    #[serde(default = "UiPreferences::default_confirm_clear")]
    pub confirm_clear: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            show_activity_log: false,
            confirm_clear: Self::default_confirm_clear(),
        }
    }
}

impl UiPreferences {
    const fn default_confirm_clear() -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

/// Calls queued at startup so the demo has something to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedPreferences {
    #[serde(default = "SeedPreferences::default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_seed_calls")]
    pub calls: Vec<SeedCall>,
}

impl Default for SeedPreferences {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            calls: default_seed_calls(),
        }
    }
}

impl SeedPreferences {
    const fn default_enabled() -> bool {
        true
    }

    /// Enqueue every seed call in order. Returns how many were queued.
    pub fn apply(&self, queue: &mut CallQueueManager) -> Result<usize, QueueError> {
        if !self.enabled {
            return Ok(0);
        }
        for call in &self.calls {
            queue.enqueue(&call.caller_name, &call.issue)?;
        }
        Ok(self.calls.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCall {
    pub caller_name: String,
    pub issue: String,
}

impl SeedCall {
    fn new(caller_name: &str, issue: &str) -> Self {
        Self {
            caller_name: caller_name.to_string(),
            issue: issue.to_string(),
        }
    }
}

fn default_seed_calls() -> Vec<SeedCall> {
    vec![
        SeedCall::new("Alice Johnson", "Internet speed issues"),
        SeedCall::new("Bob Williams", "Cannot log into account"),
        SeedCall::new("Charlie Brown", "Billing discrepancy on last statement"),
        SeedCall::new("Diana Prince", "Technical support for new device setup"),
    ]
}

pub fn config_directory() -> PathBuf {
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

pub fn config_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}

pub fn load_config() -> ConfigLoadResult {
    load_config_from(&config_path())
}

/// Load configuration from an explicit path, falling back to defaults on any problem.
pub fn load_config_from(path: &Path) -> ConfigLoadResult {
    let mut warnings = Vec::new();

    if path.exists() {
        match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str::<FileConfig>(&raw) {
                Ok(cfg) => {
                    let (cfg, mut sanitize_warnings) = sanitize_config(cfg);
                    warnings.append(&mut sanitize_warnings);
                    return ConfigLoadResult {
                        config: cfg,
                        warnings,
                        source: ConfigSource::File,
                    };
                }
                Err(err) => {
                    warnings.push(format!(
                        "Failed to parse {} as TOML: {}. Falling back to defaults.",
                        path.display(),
                        err
                    ));
                }
            },
            Err(err) => {
                warnings.push(format!(
                    "Failed to read {}: {}. Falling back to defaults.",
                    path.display(),
                    err
                ));
            }
        }
    }

    // Default fallback
    ConfigLoadResult {
        config: FileConfig::default(),
        warnings,
        source: ConfigSource::Default,
    }
}

pub fn save_config(config: &FileConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_path())
}

pub fn save_config_to(config: &FileConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(config)?;
    fs::write(path, serialized)?;
    Ok(())
}

fn sanitize_config(mut config: FileConfig) -> (FileConfig, Vec<String>) {
    let mut warnings = Vec::new();

    if config.schema_version != CURRENT_SCHEMA_VERSION {
        warnings.push(format!(
            "Unknown schema_version {}; treating as {}.",
            config.schema_version, CURRENT_SCHEMA_VERSION
        ));
        config.schema_version = CURRENT_SCHEMA_VERSION;
    }

    config.seed.calls.retain(|call| {
        let keep = !call.caller_name.trim().is_empty() && !call.issue.trim().is_empty();
        if !keep {
            warnings.push(format!(
                "Ignoring seed call with a blank caller name or issue ({:?} / {:?}).",
                call.caller_name, call.issue
            ));
        }
        keep
    });

    (config, warnings)
}
