use tint_color::Color;
use tint_config::{PaletteConfig, ServerConfig};

/// Shared handler state. Cheap to clone; nothing in it is mutable.
#[derive(Debug, Clone)]
pub struct AppState {
    pub color: Color,
    pub palette: PaletteConfig,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            color: Color::new(),
            palette: config.palette,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&ServerConfig::default())
    }
}
