//! UI-specific state (ephemeral)

use std::collections::VecDeque;

use callq_core::{CallId, ThemePreference};
use chrono::Local;

const ACTIVITY_LOG_CAPACITY: usize = 200;

/// UI-specific state that doesn't need to be persisted
pub struct UiState {
    /// Current theme (dark/light)
    pub theme: Theme,

    /// Activity log entries (max 200)
    pub activity_log: VecDeque<LogEntry>,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            activity_log: VecDeque::with_capacity(ACTIVITY_LOG_CAPACITY),
        }
    }

    /// Add a log entry, maintaining max 200 entries
    pub fn add_log_entry(&mut self, entry: LogEntry) {
        if self.activity_log.len() >= ACTIVITY_LOG_CAPACITY {
            self.activity_log.pop_front();
        }
        self.activity_log.push_back(entry);
    }

    pub fn activity_log_capacity(&self) -> usize {
        ACTIVITY_LOG_CAPACITY
    }
}

/// Theme selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl From<ThemePreference> for Theme {
    fn from(value: ThemePreference) -> Self {
        match value {
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::Light => Theme::Light,
        }
    }
}

impl From<Theme> for ThemePreference {
    fn from(value: Theme) -> Self {
        match value {
            Theme::Dark => ThemePreference::Dark,
            Theme::Light => ThemePreference::Light,
        }
    }
}

/// Activity log entry
#[derive(Clone)]
pub struct LogEntry {
    /// Timestamp
    pub timestamp: String,

    /// Call the entry is about, if any
    pub call_id: Option<CallId>,

    /// Log level
    pub level: LogLevel,

    /// Message
    pub message: String,
}

impl LogEntry {
    /// Entry stamped with the current local time.
    pub fn now(call_id: Option<CallId>, level: LogLevel, message: String) -> Self {
        Self {
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            call_id,
            level,
            message,
        }
    }

    /// Text for the call column: the call id, or `-` for general entries.
    pub fn call_column(&self) -> String {
        self.call_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Log level for coloring
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}
