//! Core TOML config loading: read from path or platform default.

use crate::schema::ServerConfig;
use std::io::ErrorKind;
use std::path::Path;
use tint_common::ConfigError;
use tracing::info;

use super::paths::default_config_path;

/// Load config from a specific TOML file path.
///
/// Missing fields fall back to their serde defaults. The result is not
/// validated here; see [`crate::validation::validate`].
pub fn load_from_path(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config: ServerConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/tint/config.toml`
/// On macOS: `~/Library/Application Support/tint/config.toml`
///
/// A missing file is not an error; defaults are returned instead.
pub fn load_default() -> Result<ServerConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, using defaults", path.display());
            Ok(ServerConfig::default())
        }
        Err(e) => Err(e),
    }
}
