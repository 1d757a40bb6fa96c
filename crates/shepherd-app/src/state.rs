//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};
use shepherd_core::{RegistryEntry, ServiceEndpoint};

use crate::alert::AlertState;
use crate::config::Settings;
use crate::form::FormState;
use crate::registry_view::RegistryView;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Form and table are interactive
    #[default]
    Normal,

    /// A warning is open; only dismiss keys are handled
    Alert,

    /// Confirm quit prompt
    ConfirmQuit,
}

/// Which half of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Form,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// One-line note shown under the table
#[derive(Debug, Clone)]
pub struct StatusNote {
    pub text: String,
    pub level: StatusLevel,
    pub at: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Where the registry service lives
    pub endpoint: ServiceEndpoint,

    pub settings: Settings,

    /// Registration form (tool, name, paths, busy flag)
    pub form: FormState,

    /// Rows shown in the registry table
    pub registry: RegistryView,

    /// Open warning, if any
    pub alert: Option<AlertState>,

    pub ui_mode: UiMode,

    pub pane: Pane,

    pub status: Option<StatusNote>,

    pub phase: AppPhase,

    /// Advances on every tick; drives the busy spinner
    pub tick: u64,
}

impl AppState {
    pub fn new(endpoint: ServiceEndpoint, settings: Settings) -> Self {
        Self {
            form: FormState::new(settings.ui.default_tool),
            endpoint,
            settings,
            registry: RegistryView::new(),
            alert: None,
            ui_mode: UiMode::Normal,
            pane: Pane::Form,
            status: None,
            phase: AppPhase::Running,
            tick: 0,
        }
    }

    /// Open a blocking warning
    pub fn show_alert(&mut self, alert: AlertState) {
        self.alert = Some(alert);
        self.ui_mode = UiMode::Alert;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusNote {
            text: text.into(),
            level: StatusLevel::Info,
            at: Local::now(),
        });
    }

    pub fn set_warning(&mut self, text: impl Into<String>) {
        self.status = Some(StatusNote {
            text: text.into(),
            level: StatusLevel::Warning,
            at: Local::now(),
        });
    }

    /// URL a registered tool is reachable at
    pub fn access_url(&self, entry: &RegistryEntry) -> String {
        self.endpoint.access_url(entry.port)
    }

    pub fn request_quit(&mut self) {
        if self.settings.ui.confirm_quit {
            self.ui_mode = UiMode::ConfirmQuit;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn cancel_quit(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
