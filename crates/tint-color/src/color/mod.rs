//! One contract per color kind, plus classification.
//!
//! [`Color`] bundles the three per-kind handles and the theme helpers.
//! It holds no state and is `Copy`; construct one wherever it is needed.

mod functions;
mod report;


pub use functions::{HexFunctions, HslFunctions, RgbFunctions};
pub use report::{CanonicalStrings, ColorReport, RoundTrip, Validity};

use tint_common::{ColorError, ColorKind};

use crate::theme::Theme;
use crate::validator;

/// Validate, parse and render one color kind.
pub trait ColorFunctions {
    type Value;

    fn kind(&self) -> ColorKind;

    fn validate(&self, value: &str) -> bool;

    /// Parse text that already passed [`ColorFunctions::validate`].
    fn parse(&self, value: &str) -> Result<Self::Value, ColorError>;

    fn stringify(&self, value: &Self::Value) -> String;

    /// Validate first, then parse.
    fn read(&self, value: &str) -> Result<Self::Value, ColorError> {
        if !self.validate(value) {
            return Err(ColorError::malformed(self.kind(), value));
        }
        self.parse(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Color {
    pub hex: HexFunctions,
    pub rgb: RgbFunctions,
    pub hsl: HslFunctions,
    pub theme: Theme,
}

impl Color {
    pub const fn new() -> Self {
        Self {
            hex: HexFunctions,
            rgb: RgbFunctions,
            hsl: HslFunctions,
            theme: Theme,
        }
    }

    /// See [`validator::classify`].
    pub fn classify<'a>(&self, value: impl Into<Option<&'a str>>) -> Option<ColorKind> {
        validator::classify(value)
    }

    /// Every structured form, canonical string and conversion of `value`.
    pub fn describe(&self, value: &str) -> Result<ColorReport, ColorError> {
        ColorReport::build(self, value)
    }
}
