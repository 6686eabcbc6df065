//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::dashboard_state::DashboardState;
use crate::login_state::LoginState;
use crate::request::{RequestId, RequestIdGen};

/// Application lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// The mounted top-level component
#[derive(Debug, Clone)]
pub enum Screen {
    Login(LoginState),
    Dashboard(DashboardState),
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Login(LoginState::default())
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Default)]
pub struct AppState {
    pub phase: AppPhase,
    pub screen: Screen,

    /// Backend base URL, shown in the header
    pub base_url: String,

    /// Show demo credentials under the login form
    pub show_demo_hint: bool,

    /// Tick counter driving spinners
    pub tick: u64,

    request_ids: RequestIdGen,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            base_url: settings.api.base_url.clone(),
            show_demo_hint: settings.ui.show_demo_hint,
            ..Default::default()
        }
    }

    pub fn next_request_id(&mut self) -> RequestId {
        self.request_ids.next_id()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn login(&self) -> Option<&LoginState> {
        match &self.screen {
            Screen::Login(login) => Some(login),
            Screen::Dashboard(_) => None,
        }
    }

    pub fn login_mut(&mut self) -> Option<&mut LoginState> {
        match &mut self.screen {
            Screen::Login(login) => Some(login),
            Screen::Dashboard(_) => None,
        }
    }

    pub fn dashboard(&self) -> Option<&DashboardState> {
        match &self.screen {
            Screen::Dashboard(dash) => Some(dash),
            Screen::Login(_) => None,
        }
    }

    pub fn dashboard_mut(&mut self) -> Option<&mut DashboardState> {
        match &mut self.screen {
            Screen::Dashboard(dash) => Some(dash),
            Screen::Login(_) => None,
        }
    }

    /// Spinner glyph for the current tick
    pub fn spinner_frame(&self) -> char {
        const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
        FRAMES[(self.tick % FRAMES.len() as u64) as usize]
    }
}
