//! Configuration file parsing for the lab test tracker
//!
//! Supports `<config_dir>/labtrack/config.toml` (or an explicit path), with
//! the backend URL overridable from the environment and command line.

pub mod settings;
pub mod types;

pub use settings::{
    apply_overrides, default_config_path, load_settings, load_startup_settings,
    normalize_base_url, API_URL_ENV_VAR, CONFIG_DIR_NAME, CONFIG_FILENAME,
};
pub use types::*;
