use serde::{Deserialize, Serialize};

/// Upper bound on `steps`, for the config file and per-request overrides alike.
pub const MAX_PALETTE_STEPS: usize = 101;

/// Luminosity ramp used by `/generate/palette` when a request leaves
/// `min`, `max` or `steps` out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub min: i32,
    pub max: i32,
    pub steps: usize,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            min: 25,
            max: 75,
            steps: 10,
        }
    }
}
