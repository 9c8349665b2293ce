//! Configuration schema. Each section lives in its own submodule.

mod logging;
mod palette;
mod server;

pub use logging::LoggingConfig;
pub use palette::{PaletteConfig, MAX_PALETTE_STEPS};
pub use server::ListenConfig;

use serde::{Deserialize, Serialize};

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: ListenConfig,
    pub palette: PaletteConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.server.listen, "127.0.0.1:5173");
        assert_eq!(config.palette.min, 25);
        assert_eq!(config.palette.max, 75);
        assert_eq!(config.palette.steps, 10);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: ServerConfig = toml::from_str("[palette]\nmax = 90\n").unwrap();
        assert_eq!(config.palette.max, 90);
        assert_eq!(config.palette.min, 25);
        assert_eq!(config.server, ListenConfig::default());
    }

    #[test]
    fn empty_toml_is_default() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config, ServerConfig::default());
    }
}
