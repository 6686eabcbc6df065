//! Configuration types for the lab test tracker
//!
//! Defines:
//! - `Settings` - Application settings (`config.toml`)
//! - `ApiSettings` - Backend location and request timeout
//! - `UiSettings` - Presentation toggles

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Application settings (`<config_dir>/labtrack/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Backend settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL of the lab test service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_base_url() -> String {
    labtrack_api::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    labtrack_api::DEFAULT_TIMEOUT.as_millis() as u64
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the demo credentials under the login form
    #[serde(default = "default_true")]
    pub show_demo_hint: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_demo_hint: true,
        }
    }
}

fn default_true() -> bool {
    true
}
