use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:4000";

/// Environment variable that overrides `backend_url` from the settings file.
pub const BACKEND_URL_ENV: &str = "AVATAR_BACKEND_URL";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarSettings {
    /// Root address used to qualify relative avatar paths.
    pub backend_url: String,
}

impl Default for AvatarSettings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl AvatarSettings {
    /// Replace `backend_url` when `value` is present and non-empty.
    pub fn with_backend_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            tracing::debug!("backend url overridden by {BACKEND_URL_ENV}: {url}");
            self.backend_url = url;
        }
        self
    }
}

pub fn config_dir() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("avatar-kit")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

/// Resolve settings once at startup: the settings file, then the environment.
pub fn load_settings() -> AvatarSettings {
    load_settings_from(&settings_path(), std::env::var(BACKEND_URL_ENV).ok())
}

pub fn load_settings_from(path: &Path, env_override: Option<String>) -> AvatarSettings {
    read_settings_file(path).with_backend_override(env_override)
}

fn read_settings_file(path: &Path) -> AvatarSettings {
    if !path.exists() {
        return AvatarSettings::default();
    }
    let data = match std::fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) => {
            tracing::warn!("Failed to read {}: {e}", path.display());
            return AvatarSettings::default();
        }
    };
    match serde_json::from_str(&data) {
        Ok(settings) => {
            tracing::debug!("loaded avatar settings from {}", path.display());
            settings
        }
        Err(e) => {
            tracing::warn!("Invalid settings in {}: {e}", path.display());
            AvatarSettings::default()
        }
    }
}
