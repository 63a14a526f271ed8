use std::sync::OnceLock;

use types::{DashboardConfig, Result};

static CONFIG: OnceLock<DashboardConfig> = OnceLock::new();

const BUNDLED: &str = include_str!("../dashboard.toml");

/// Parse the bundled document. Called once from `main`, before logging is up.
pub fn load() -> Result<DashboardConfig> {
    DashboardConfig::from_toml(BUNDLED)
}

pub fn install(config: DashboardConfig) {
    // Only main installs, a second call would be a bug but is harmless
    let _ = CONFIG.set(config);
}

pub fn config() -> &'static DashboardConfig {
    CONFIG.get_or_init(DashboardConfig::default)
}
