use tint_common::{ColorError, ColorKind, Hex, Hsl, Rgb};

use super::ColorFunctions;
use crate::{converter, parser, stringifier, validator};

#[derive(Debug, Clone, Copy, Default)]
pub struct HexFunctions;

impl ColorFunctions for HexFunctions {
    type Value = Hex;

    fn kind(&self) -> ColorKind {
        ColorKind::Hex
    }

    fn validate(&self, value: &str) -> bool {
        validator::is_hex(value)
    }

    fn parse(&self, value: &str) -> Result<Hex, ColorError> {
        parser::parse_hex(value)
    }

    fn stringify(&self, value: &Hex) -> String {
        stringifier::hex(value)
    }
}

impl HexFunctions {
    pub fn to_rgb(&self, value: &Hex) -> Rgb {
        converter::hex_to_rgb(value)
    }

    pub fn to_hsl(&self, value: &Hex) -> Hsl {
        converter::hex_to_hsl(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RgbFunctions;

impl ColorFunctions for RgbFunctions {
    type Value = Rgb;

    fn kind(&self) -> ColorKind {
        ColorKind::Rgb
    }

    fn validate(&self, value: &str) -> bool {
        validator::is_rgb(value)
    }

    fn parse(&self, value: &str) -> Result<Rgb, ColorError> {
        parser::parse_rgb(value)
    }

    fn stringify(&self, value: &Rgb) -> String {
        stringifier::rgb(*value)
    }
}

impl RgbFunctions {
    pub fn to_hex(&self, value: Rgb) -> Hex {
        converter::rgb_to_hex(value)
    }

    pub fn to_hsl(&self, value: Rgb) -> Hsl {
        converter::rgb_to_hsl(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HslFunctions;

impl ColorFunctions for HslFunctions {
    type Value = Hsl;

    fn kind(&self) -> ColorKind {
        ColorKind::Hsl
    }

    fn validate(&self, value: &str) -> bool {
        validator::is_hsl(value)
    }

    fn parse(&self, value: &str) -> Result<Hsl, ColorError> {
        parser::parse_hsl(value)
    }

    fn stringify(&self, value: &Hsl) -> String {
        stringifier::hsl(*value)
    }
}

impl HslFunctions {
    pub fn to_hex(&self, value: Hsl) -> Hex {
        converter::hsl_to_hex(value)
    }

    pub fn to_rgb(&self, value: Hsl) -> Rgb {
        converter::hsl_to_rgb(value)
    }
}
