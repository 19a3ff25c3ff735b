//! Application state for the call center window.

use callq_core::{
    Call, CallId, CallQueueManager, ConfigError, ConfigLoadResult, ConfigSource, FileConfig,
    ThemePreference,
};
use tracing::warn;

/// A button press or key shortcut coming from the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserAction {
    AddCall,
    ProcessNext,
    ClearAll,
}

/// What the window should tell the user after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    CallAdded { id: CallId, summary: String },
    InputError,
    NothingToProcess,
    CallProcessed(Call),
    AlreadyEmpty,
    ConfirmClear { count: usize },
    Cleared { count: usize },
}

/// Main application state (domain)
pub struct AppState {
    /// Persisted preferences
    pub config: FileConfig,

    /// The pending calls
    pub queue: CallQueueManager,

    /// "Caller Name" text field buffer
    pub name_input: String,

    /// "Issue" text field buffer
    pub issue_input: String,

    /// Non-fatal problems found while loading config or seeding
    pub startup_warnings: Vec<String>,

    /// False when `config.toml` exists but could not be used, so saving would clobber it
    config_writable: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::from_load(callq_core::load_config())
    }

    /// Build state from a config load, keeping its warnings.
    pub fn from_load(load: ConfigLoadResult) -> Self {
        let fell_back = load.source == ConfigSource::Default && !load.warnings.is_empty();
        let mut warnings = load.warnings;
        let mut state = Self::with_config(load.config);
        warnings.append(&mut state.startup_warnings);
        state.startup_warnings = warnings;
        if fell_back {
            state.config_writable = false;
            state
                .startup_warnings
                .push("Preferences will not be saved until config.toml is fixed.".to_string());
        }
        state
    }

    /// Build state from an already loaded config, applying the seed calls.
    pub fn with_config(config: FileConfig) -> Self {
        let mut queue = CallQueueManager::new();
        let mut startup_warnings = Vec::new();
        if let Err(err) = config.seed.apply(&mut queue) {
            warn!(%err, "Seeding stopped early");
            startup_warnings.push(format!("Seeding stopped early: {err}"));
        }

        Self {
            config,
            queue,
            name_input: String::new(),
            issue_input: String::new(),
            startup_warnings,
            config_writable: true,
        }
    }

    pub fn config_writable(&self) -> bool {
        self.config_writable
    }

    pub fn set_theme(&mut self, theme: ThemePreference) -> Result<bool, ConfigError> {
        self.config.ui.theme = theme;
        self.persist_config()
    }

    pub fn set_show_activity_log(&mut self, show: bool) -> Result<bool, ConfigError> {
        self.config.ui.show_activity_log = show;
        self.persist_config()
    }

    /// Write preferences to disk. Returns false when the file was left alone.
    fn persist_config(&self) -> Result<bool, ConfigError> {
        if !self.config_writable {
            return Ok(false);
        }
        callq_core::save_config(&self.config)?;
        Ok(true)
    }

    pub fn perform(&mut self, action: UserAction) -> Notice {
        match action {
            UserAction::AddCall => self.add_call(),
            UserAction::ProcessNext => self.process_next(),
            UserAction::ClearAll => self.request_clear(),
        }
    }

    /// Queue the call described by the input fields. Fields are emptied on success only.
    fn add_call(&mut self) -> Notice {
        match self.queue.enqueue(&self.name_input, &self.issue_input) {
            Ok(id) => {
                self.name_input.clear();
                self.issue_input.clear();
                let summary = self
                    .queue
                    .get(id)
                    .map(|call| call.to_string())
                    .unwrap_or_default();
                Notice::CallAdded { id, summary }
            }
            Err(_) => Notice::InputError,
        }
    }

    fn process_next(&mut self) -> Notice {
        match self.queue.dequeue() {
            Ok(call) => Notice::CallProcessed(call),
            Err(_) => Notice::NothingToProcess,
        }
    }

    fn request_clear(&mut self) -> Notice {
        if self.queue.is_empty() {
            Notice::AlreadyEmpty
        } else if self.config.ui.confirm_clear {
            Notice::ConfirmClear {
                count: self.queue.size(),
            }
        } else {
            self.clear_confirmed()
        }
    }

    /// Clear the queue once the user has agreed to it.
    pub fn clear_confirmed(&mut self) -> Notice {
        Notice::Cleared {
            count: self.queue.clear(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_state() -> AppState {
        let mut config = FileConfig::default();
        config.seed.enabled = false;
        AppState::with_config(config)
    }

    #[test]
    fn test_seeded_state_has_demo_calls() {
        let state = AppState::with_config(FileConfig::default());
        assert_eq!(state.queue.size(), 4);
        assert_eq!(
            state.queue.peek().map(|call| call.caller_name()),
            Some("Alice Johnson")
        );
    }

    #[test]
    fn test_add_clears_inputs_on_success() {
        let mut state = empty_state();
        state.name_input = " Alice ".to_string();
        state.issue_input = "Router".to_string();

        let notice = state.perform(UserAction::AddCall);
        assert!(matches!(notice, Notice::CallAdded { ref summary, .. }
            if summary == "Call from: Alice (Issue: Router)"));
        assert!(state.name_input.is_empty());
        assert!(state.issue_input.is_empty());
        assert_eq!(state.queue.size(), 1);
    }

    #[test]
    fn test_add_keeps_inputs_on_error() {
        let mut state = empty_state();
        state.name_input = "Alice".to_string();
        state.issue_input = "   ".to_string();

        assert_eq!(state.perform(UserAction::AddCall), Notice::InputError);
        assert_eq!(state.name_input, "Alice");
        assert_eq!(state.issue_input, "   ");
        assert!(state.queue.is_empty());
    }

    #[test]
    fn test_process_next() {
        let mut state = empty_state();
        assert_eq!(state.perform(UserAction::ProcessNext), Notice::NothingToProcess);

        state.queue.enqueue("Alice", "Router").unwrap();
        match state.perform(UserAction::ProcessNext) {
            Notice::CallProcessed(call) => assert_eq!(call.caller_name(), "Alice"),
            other => panic!("unexpected notice: {other:?}"),
        }
        assert!(state.queue.is_empty());
    }

    #[test]
    fn test_clear_flow() {
        let mut state = empty_state();
        assert_eq!(state.perform(UserAction::ClearAll), Notice::AlreadyEmpty);

        state.queue.enqueue("Alice", "Router").unwrap();
        state.queue.enqueue("Bob", "Login").unwrap();
        assert_eq!(
            state.perform(UserAction::ClearAll),
            Notice::ConfirmClear { count: 2 }
        );
        assert_eq!(state.queue.size(), 2);

        assert_eq!(state.clear_confirmed(), Notice::Cleared { count: 2 });
        assert!(state.queue.is_empty());
    }

    #[test]
    fn test_unusable_config_file_is_not_overwritten() {
        let state = AppState::from_load(ConfigLoadResult {
            config: FileConfig::default(),
            warnings: vec!["Failed to parse config.toml as TOML".to_string()],
            source: ConfigSource::Default,
        });
        assert!(!state.config_writable());
        assert!(state.startup_warnings.len() >= 2);

        let mut state = state;
        assert_eq!(state.set_theme(ThemePreference::Dark).ok(), Some(false));
        assert_eq!(state.set_show_activity_log(true).ok(), Some(false));
        assert_eq!(state.config.ui.theme, ThemePreference::Dark);
        assert!(state.config.ui.show_activity_log);
    }

    #[test]
    fn test_loaded_or_missing_config_is_writable() {
        for source in [ConfigSource::File, ConfigSource::Default] {
            let state = AppState::from_load(ConfigLoadResult {
                config: FileConfig::default(),
                warnings: Vec::new(),
                source,
            });
            assert!(state.config_writable());
            assert!(state.startup_warnings.is_empty());
        }
    }

    #[test]
    fn test_clear_without_confirmation() {
        let mut state = empty_state();
        state.config.ui.confirm_clear = false;
        state.queue.enqueue("Alice", "Router").unwrap();

        assert_eq!(
            state.perform(UserAction::ClearAll),
            Notice::Cleared { count: 1 }
        );
    }
}
