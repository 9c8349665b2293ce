//! Structured values back to canonical text.

use tint_common::{Hex, Hsl, Rgb};

pub fn hex(value: &Hex) -> String {
    value.as_str().to_string()
}

/// `rgb(R,G,B)`
pub fn rgb(value: Rgb) -> String {
    value.to_string()
}

/// `hsl(H,S%,L%)`. The percent suffixes keep the output acceptable to
/// [`crate::validator::is_hsl`].
pub fn hsl(value: Hsl) -> String {
    value.to_string()
}
