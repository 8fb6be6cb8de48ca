//! Configuration management.
//!
//! Settings live in a TOML file (default `.config/settings.toml`) managed
//! by [`ConfigManager`]. The backend base URL can be overridden by the
//! `GREENLOG_API_URL` environment variable at startup.

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{BackendSettings, LoggingSettings, Settings, UiSettings, ENV_BASE_URL};
