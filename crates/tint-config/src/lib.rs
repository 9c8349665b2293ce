//! tint server configuration.
//!
//! TOML-based; every section has defaults so a partial (or missing) file
//! works out of the box.
//!
//! ```rust,no_run
//! use tint_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ListenConfig, LoggingConfig, PaletteConfig, ServerConfig, MAX_PALETTE_STEPS};
pub use toml_loader::{default_config_path, load_default, load_from_path};

use std::path::Path;

use tint_common::ConfigError;

/// Load config from `path`, or from the platform default location when no
/// path is given, and validate the result.
pub fn load_config(path: Option<&Path>) -> Result<ServerConfig, ConfigError> {
    let config = match path {
        Some(path) => load_from_path(path)?,
        None => load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ServerConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
