//! Main application structure for the call center window

use crate::dialogs;
use crate::state::{AppState, Notice, UserAction};
use crate::ui_state::{LogEntry, LogLevel, Theme, UiState};
use crate::widgets;
use callq_core::{CallId, ConfigError, ThemePreference};
use tracing::{info, warn};

/// Main application struct implementing eframe::App
pub struct CallCenterApp {
    /// Domain state
    state: AppState,

    /// UI state
    ui_state: UiState,
}

impl CallCenterApp {
    /// Create a new CallCenterApp
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let state = AppState::new();
        let ui_state = UiState::new(Theme::from(state.config.ui.theme));

        let mut app = Self { state, ui_state };

        for warning in std::mem::take(&mut app.state.startup_warnings) {
            warn!(%warning, "Startup warning");
            app.add_log(LogLevel::Warning, warning);
        }
        let waiting = app.state.queue.size();
        app.add_log(
            LogLevel::Info,
            format!("Call center opened with {waiting} waiting calls"),
        );

        app
    }

    /// Add a log entry
    fn add_log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.push_log(None, level, message.into());
    }

    /// Add a log entry about one call
    fn add_call_log(&mut self, call_id: CallId, message: impl Into<String>) {
        self.push_log(Some(call_id), LogLevel::Info, message.into());
    }

    fn push_log(&mut self, call_id: Option<CallId>, level: LogLevel, message: String) {
        self.ui_state.add_log_entry(LogEntry::now(call_id, level, message));
    }

    /// Log the outcome of a preference save
    fn report_save(&mut self, what: &str, result: Result<bool, ConfigError>) {
        match result {
            Ok(true) => {}
            Ok(false) => self.add_log(
                LogLevel::Warning,
                format!("{what} not saved: config.toml could not be read"),
            ),
            Err(e) => self.add_log(LogLevel::Error, format!("Failed to save {what}: {e}")),
        }
    }

    /// Apply theme to egui context
    fn apply_theme(&self, ctx: &egui::Context) {
        let visuals = match self.ui_state.theme {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        };
        ctx.set_visuals(visuals);
    }

    fn toggle_theme(&mut self) {
        self.ui_state.theme = self.ui_state.theme.toggled();
        let result = self.state.set_theme(ThemePreference::from(self.ui_state.theme));
        self.report_save("theme", result);
    }

    /// Run a user action against the queue and report the outcome.
    fn handle_action(&mut self, action: UserAction) {
        let notice = self.state.perform(action);
        self.handle_notice(notice);
    }

    fn handle_notice(&mut self, notice: Notice) {
        match &notice {
            Notice::CallAdded { id, summary } => {
                info!(call_id = id.get(), "Call added from form");
                self.add_call_log(*id, format!("Added: {summary}"));
            }
            Notice::InputError => {
                self.add_log(LogLevel::Warning, "Rejected call with a blank name or issue");
            }
            Notice::NothingToProcess => {
                self.add_log(LogLevel::Warning, "Nothing to process");
            }
            Notice::CallProcessed(call) => {
                self.add_call_log(call.id(), format!("Processed: {call}"));
            }
            Notice::AlreadyEmpty => {
                self.add_log(LogLevel::Warning, "Queue already empty");
            }
            Notice::ConfirmClear { count } => {
                let count = *count;
                if dialogs::confirm_clear(count) {
                    let cleared = self.state.clear_confirmed();
                    self.handle_notice(cleared);
                } else {
                    self.add_log(LogLevel::Info, format!("Kept {count} calls in queue"));
                }
                return;
            }
            Notice::Cleared { count } => {
                self.add_log(LogLevel::Info, format!("Cleared {count} calls"));
            }
        }
        dialogs::show_notice(&notice);
    }

    /// Render the top panel with title and theme toggle
    fn render_top_panel(&mut self, ctx: &egui::Context) {
        let mut toggle = false;
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(crate::WINDOW_TITLE);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_label = match self.ui_state.theme {
                        Theme::Dark => "☀ Light",
                        Theme::Light => "🌙 Dark",
                    };
                    if ui.button(theme_label).clicked() {
                        toggle = true;
                    }
                });
            });
        });
        if toggle {
            self.toggle_theme();
        }
    }

    /// Render the bottom action bar, returning the clicked action
    fn render_action_panel(&self, ctx: &egui::Context) -> Option<UserAction> {
        egui::TopBottomPanel::bottom("action_panel")
            .exact_height(52.0)
            .show(ctx, |ui| widgets::action_bar::render(ui, self.state.queue.size()))
            .inner
    }

    /// Render the main UI content, returning the action requested by the form
    fn render_main_ui(&mut self, ui: &mut egui::Ui) -> Option<UserAction> {
        let mut action = None;

        ui.group(|ui| {
            ui.set_min_width(ui.available_width());
            if widgets::call_form::render(ui, &mut self.state) {
                action = Some(UserAction::AddCall);
            }
        });

        ui.add_space(8.0);

        let log_response = egui::CollapsingHeader::new("Activity Log")
            .default_open(self.state.config.ui.show_activity_log)
            .show(ui, |ui| {
                widgets::activity_log::render(ui, &mut self.ui_state);
            });
        if log_response.header_response.clicked() {
            // egui keeps the open state; the preference only seeds the next launch
            let show = !self.state.config.ui.show_activity_log;
            let result = self.state.set_show_activity_log(show);
            self.report_save("activity log visibility", result);
        }

        ui.add_space(8.0);

        ui.group(|ui| {
            ui.set_min_width(ui.available_width());
            ui.set_min_height(ui.available_height());
            widgets::queue_display::render(ui, &self.state.queue);
        });

        action
    }
}

impl eframe::App for CallCenterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme
        self.apply_theme(ctx);

        // Top panel
        self.render_top_panel(ctx);

        // Panels must be added before the central panel
        let bar_action = self.render_action_panel(ctx);

        // Main content
        let form_action = egui::CentralPanel::default()
            .show(ctx, |ui| self.render_main_ui(ui))
            .inner;

        // Dialogs block, so run actions after the frame's widgets are laid out
        if let Some(action) = form_action.or(bar_action) {
            self.handle_action(action);
        }
    }
}
