pub mod schema;
pub mod watcher;

pub use schema::{ChartConfig, DemoConfig, StyleConfig, WindowConfig};
pub use watcher::ConfigWatcher;

use chart_core::{ChartError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `ChartConfig::default()`
/// if the file doesn't exist so the demo always starts with the shipped
/// widget parameters.
pub fn load(path: impl AsRef<Path>) -> Result<ChartConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(ChartConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| ChartError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| ChartError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("freqchart").join("freqchart.toml")
}
