//! Settings struct with TOML-based sections.
//!
//! Each section maps to a TOML table. Missing fields take defaults, so a
//! partial or empty file always loads.

use serde::{Deserialize, Serialize};

use crate::client::DEFAULT_BASE_URL;
use crate::logging::LogLevel;
use crate::models::Language;

/// Environment variable that overrides the configured base URL.
pub const ENV_BASE_URL: &str = "GREENLOG_API_URL";

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Remote analysis service settings.
    #[serde(default)]
    pub backend: BackendSettings,

    /// UI state remembered across runs.
    #[serde(default)]
    pub ui: UiSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Base URL with the environment override applied.
    ///
    /// Reads `GREENLOG_API_URL`; an unset or empty variable falls back to
    /// the configured value.
    pub fn effective_base_url(&self) -> String {
        resolve_base_url(&self.backend.base_url, std::env::var(ENV_BASE_URL).ok())
    }
}

/// Pick the base URL: environment wins when set and non-empty.
pub(crate) fn resolve_base_url(configured: &str, env_value: Option<String>) -> String {
    match env_value {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => configured.to_string(),
    }
}

/// Remote analysis service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSettings {
    /// Base URL of the analysis service.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// UI state remembered across runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiSettings {
    /// Last selected target language.
    #[serde(default)]
    pub last_language: Language,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default log level (RUST_LOG overrides).
    #[serde(default)]
    pub level: LogLevel,
}
