use std::sync::{Arc, OnceLock};

use super::AppConfig;

static CONFIG: OnceLock<Arc<AppConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks.
pub fn get_config() -> Arc<AppConfig> {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config() first.")
        .clone()
}

/// Initialize the global configuration
///
/// Loads configuration from the given TOML path, or "config.toml" in the
/// current directory when no path is supplied. If the file doesn't exist,
/// uses in-memory defaults (plus environment overrides).
///
/// # Examples
/// ```no_run
/// use workdeck::config::init_config;
/// init_config(None);
/// ```
pub fn init_config(path: Option<&str>) {
    CONFIG.get_or_init(|| Arc::new(AppConfig::load(path)));
}

/// Initialize the global configuration from an already-built value
///
/// Used by tests and by `config show` to bypass file loading. The first
/// initialization wins, later calls are no-ops.
pub fn init_config_with(config: AppConfig) {
    CONFIG.get_or_init(|| Arc::new(config));
}
