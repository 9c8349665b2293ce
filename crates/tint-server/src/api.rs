//! Request and response bodies.

use serde::{Deserialize, Serialize};
use tint_color::{Hex, Hsl, StepOptions};
use tint_config::PaletteConfig;

/// Body of `POST /generate` and `POST /generate/palette`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    /// A color in hex, `rgb(...)` or `hsl(...)` form.
    pub base: String,
    #[serde(default)]
    pub min: Option<i32>,
    #[serde(default)]
    pub max: Option<i32>,
    #[serde(default)]
    pub steps: Option<usize>,
}

impl GenerateRequest {
    /// Step options from the request, falling back to `defaults` per field.
    pub fn step_options(&self, defaults: &PaletteConfig) -> StepOptions {
        StepOptions {
            min: self.min.unwrap_or(defaults.min),
            max: self.max.unwrap_or(defaults.max),
            count: self.steps.unwrap_or(defaults.steps),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PaletteResponse {
    pub base: Hex,
    pub hsl: Hsl,
    pub steps: Vec<i32>,
    pub palette: Vec<Hex>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_fields_override_defaults() {
        let request: GenerateRequest =
            serde_json::from_str(r##"{"base": "#fff", "max": 90}"##).unwrap();
        let options = request.step_options(&PaletteConfig::default());
        assert_eq!(
            options,
            StepOptions {
                min: 25,
                max: 90,
                count: 10
            }
        );
    }

    #[test]
    fn request_requires_string_base() {
        assert!(serde_json::from_str::<GenerateRequest>(r#"{}"#).is_err());
        assert!(serde_json::from_str::<GenerateRequest>(r#"{"base": 12}"#).is_err());
        assert!(serde_json::from_str::<GenerateRequest>(r#"{"base": null}"#).is_err());
    }
}
