use serde::{Deserialize, Serialize};
use tint_common::{ColorError, ColorKind, Hex, Hsl, Rgb};

use super::{Color, ColorFunctions};

/// Which of the three grammars accepted the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validity {
    pub hex: bool,
    pub rgb: bool,
    pub hsl: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalStrings {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
}

/// Values recovered by parsing the canonical `rgb(...)` text again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTrip {
    pub rgb: Rgb,
    pub hex: Hex,
    pub hsl: Hsl,
}

/// Everything tint can say about one color string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorReport {
    pub input: String,
    pub kind: ColorKind,
    pub valid: Validity,
    pub hex: Hex,
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub strings: CanonicalStrings,
    pub round_trip: RoundTrip,
}

impl ColorReport {
    pub(super) fn build(color: &Color, value: &str) -> Result<Self, ColorError> {
        let kind = color
            .classify(value)
            .ok_or_else(|| ColorError::Unrecognized(value.to_string()))?;

        let (hex, rgb, hsl) = match kind {
            ColorKind::Hex => {
                let hex = color.hex.parse(value)?;
                let rgb = color.hex.to_rgb(&hex);
                let hsl = color.hex.to_hsl(&hex);
                (hex, rgb, hsl)
            }
            ColorKind::Rgb => {
                let rgb = color.rgb.parse(value)?;
                (color.rgb.to_hex(rgb), rgb, color.rgb.to_hsl(rgb))
            }
            ColorKind::Hsl => {
                let hsl = color.hsl.parse(value)?;
                (color.hsl.to_hex(hsl), color.hsl.to_rgb(hsl), hsl)
            }
        };

        let strings = CanonicalStrings {
            hex: color.hex.stringify(&hex),
            rgb: color.rgb.stringify(&rgb),
            hsl: color.hsl.stringify(&hsl),
        };

        let reparsed = color.rgb.read(&strings.rgb)?;
        let round_trip = RoundTrip {
            rgb: reparsed,
            hex: color.rgb.to_hex(reparsed),
            hsl: color.rgb.to_hsl(reparsed),
        };

        Ok(Self {
            input: value.to_string(),
            kind,
            valid: Validity {
                hex: color.hex.validate(value),
                rgb: color.rgb.validate(value),
                hsl: color.hsl.validate(value),
            },
            hex,
            rgb,
            hsl,
            strings,
            round_trip,
        })
    }
}
