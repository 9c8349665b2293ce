//! Numeric transforms between hex, RGB and HSL.
//!
//! Pure functions over already-structured values. Hex ↔ RGB is exact; any
//! trip through HSL rounds hue to whole degrees and saturation/luminosity to
//! whole percent, so RGB → HSL → RGB is close but not always identical.

use tint_common::{Hex, Hsl, Rgb};

/// Read the three digit pairs of a canonical `#RRGGBB` value.
///
/// A pair that is missing or not hex reads as 0; hex values built by
/// [`crate::parser::parse_hex`] or [`rgb_to_hex`] are always well formed.
pub fn hex_to_rgb(value: &Hex) -> Rgb {
    let digits = value.digits();
    let channel = |at: usize| {
        digits
            .get(at..at + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .unwrap_or(0)
    };

    Rgb::new(channel(0), channel(2), channel(4))
}

pub fn rgb_to_hex(value: Rgb) -> Hex {
    Hex::new(format!(
        "#{:02x}{:02x}{:02x}",
        value.red, value.green, value.blue
    ))
}

pub fn hex_to_hsl(value: &Hex) -> Hsl {
    rgb_to_hsl(hex_to_rgb(value))
}

pub fn hsl_to_hex(value: Hsl) -> Hex {
    rgb_to_hex(hsl_to_rgb(value))
}

pub fn rgb_to_hsl(value: Rgb) -> Hsl {
    let red = f64::from(value.red) / 255.0;
    let green = f64::from(value.green) / 255.0;
    let blue = f64::from(value.blue) / 255.0;

    let min = red.min(green).min(blue);
    let max = red.max(green).max(blue);
    let delta = max - min;

    let sector = if delta == 0.0 {
        0.0
    } else if max == red {
        ((green - blue) / delta) % 6.0
    } else if max == green {
        (blue - red) / delta + 2.0
    } else {
        (red - green) / delta + 4.0
    };
    let mut degrees = sector * 60.0;
    if degrees < 0.0 {
        degrees += 360.0;
    }
    let hue = degrees.round() as u16 % 360;

    // Saturation is derived from the unrounded midpoint, not the rounded
    // luminosity.
    let mid = (max + min) / 2.0;
    let luminosity = (mid * 100.0).round();
    let saturation = if delta == 0.0 {
        0.0
    } else {
        (delta / (1.0 - (2.0 * mid - 1.0).abs()) * 100.0).round()
    };

    Hsl::new(
        hue,
        saturation.clamp(0.0, 100.0) as u8,
        luminosity.clamp(0.0, 100.0) as u8,
    )
}

pub fn hsl_to_rgb(value: Hsl) -> Rgb {
    let hue = f64::from(value.hue % 360);
    let saturation = f64::from(value.saturation) / 100.0;
    let luminosity = f64::from(value.luminosity) / 100.0;

    let primary = (1.0 - (2.0 * luminosity - 1.0).abs()) * saturation;
    let secondary = primary * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());

    let (red, green, blue) = match (hue / 60.0).floor() as u8 % 6 {
        0 => (primary, secondary, 0.0),
        1 => (secondary, primary, 0.0),
        2 => (0.0, primary, secondary),
        3 => (0.0, secondary, primary),
        4 => (secondary, 0.0, primary),
        _ => (primary, 0.0, secondary),
    };

    let lighten = |component: f64| {
        ((component + luminosity - primary / 2.0) * 255.0)
            .round()
            .clamp(0.0, 255.0) as u8
    };

    Rgb::new(lighten(red), lighten(green), lighten(blue))
}
