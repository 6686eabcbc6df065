//! Settings loading and override resolution

use std::path::{Path, PathBuf};

use labtrack_core::prelude::*;
use url::Url;

use super::types::Settings;

pub const CONFIG_DIR_NAME: &str = "labtrack";
pub const CONFIG_FILENAME: &str = "config.toml";

/// Environment variable overriding `api.base_url`
pub const API_URL_ENV_VAR: &str = "LABTRACK_API_URL";

/// Default settings file location, `None` when the platform has no config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`.
///
/// A missing file yields defaults. An unreadable or unparseable file is
/// logged and also yields defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings for startup.
///
/// An explicitly requested file must exist; the default location may not.
pub fn load_startup_settings(explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) if !path.exists() => Err(Error::config_not_found(path)),
        Some(path) => Ok(load_settings(path)),
        None => Ok(default_config_path()
            .map(|path| load_settings(&path))
            .unwrap_or_default()),
    }
}

/// Apply the environment and command-line base URL overrides, then validate.
///
/// Precedence, lowest to highest: file, `LABTRACK_API_URL`, `cli_url`.
pub fn apply_overrides(settings: &mut Settings, cli_url: Option<&str>) -> Result<()> {
    if let Ok(env_url) = std::env::var(API_URL_ENV_VAR) {
        if !env_url.trim().is_empty() {
            debug!("Base URL from {}: {}", API_URL_ENV_VAR, env_url);
            settings.api.base_url = env_url;
        }
    }

    if let Some(url) = cli_url {
        debug!("Base URL from command line: {}", url);
        settings.api.base_url = url.to_string();
    }

    settings.api.base_url = normalize_base_url(&settings.api.base_url)?;
    Ok(())
}

/// Validate an http(s) base URL and strip trailing slashes
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|e| Error::invalid_base_url(raw, e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_base_url(
            raw,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    if url.host_str().is_none() {
        return Err(Error::invalid_base_url(raw, "missing host"));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}
