//! GreenLog - Main entry point
//!
//! Loads configuration, initializes application-level logging, and
//! launches the iced event loop. The backend base URL comes from the
//! config file, overridable with `GREENLOG_API_URL`.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use greenlog_core::config::ConfigManager;
use greenlog_core::logging::init_tracing;

mod app;
mod handlers;
mod theme;

use app::App;

/// Default config path: .config/settings.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("settings.toml")
}

fn main() -> iced::Result {
    // Load configuration first (needed for the log level)
    let config_path = default_config_path();
    let mut config_manager = ConfigManager::new(&config_path);

    if let Err(e) = config_manager.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }

    init_tracing(config_manager.settings().logging.level);

    tracing::info!("GreenLog starting");
    tracing::info!("Config: {}", config_path.display());
    tracing::info!("Core version: {}", greenlog_core::version());
    tracing::info!(
        "Backend base URL: {}",
        config_manager.settings().effective_base_url()
    );

    // Wrap config in Arc<Mutex> so the app can persist UI state changes
    let config = Arc::new(Mutex::new(config_manager));

    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title("GreenLog - Logistics Document Analysis")
        .subscription(App::subscription)
        .window_size((920.0, 720.0))
        .run()
}
