//! Text to structured color values.
//!
//! The parser expects text that has already passed the matching validator,
//! but it never panics on anything else: malformed text is reported as a
//! [`ColorError`] instead of producing garbage values.

use tint_common::{ColorError, ColorKind, Hex, Hsl, Rgb};

/// Parse hex text, expanding the `#RGB` shorthand to `#RRGGBB`.
///
/// Six-digit input is returned unchanged, including its letter case.
pub fn parse_hex(value: &str) -> Result<Hex, ColorError> {
    let malformed = || ColorError::malformed(ColorKind::Hex, value);

    let digits = value.strip_prefix('#').ok_or_else(malformed)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    match digits.len() {
        3 => {
            let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
            Ok(Hex::new(format!("#{expanded}")))
        }
        6 => Ok(Hex::new(value)),
        _ => Err(malformed()),
    }
}

/// Parse `rgb(r,g,b)` text.
pub fn parse_rgb(value: &str) -> Result<Rgb, ColorError> {
    let [red, green, blue] = split_fields(ColorKind::Rgb, value)?;
    let channel = |n: f64| to_int(ColorKind::Rgb, value, n, 255.0);

    Ok(Rgb::new(
        channel(red)? as u8,
        channel(green)? as u8,
        channel(blue)? as u8,
    ))
}

/// Parse `hsl(h,s%,l%)` text. Fractional fields are rounded to the nearest
/// whole degree or percent; a hue of 360 is stored as 0.
pub fn parse_hsl(value: &str) -> Result<Hsl, ColorError> {
    let [hue, saturation, luminosity] = split_fields(ColorKind::Hsl, value)?;
    let percent = |n: f64| to_int(ColorKind::Hsl, value, n, 100.0);

    Ok(Hsl::new(
        to_int(ColorKind::Hsl, value, hue, 360.0)? as u16,
        percent(saturation)? as u8,
        percent(luminosity)? as u8,
    ))
}

/// Strip `name(` and `)`, then split the remainder into three numbers.
fn split_fields(kind: ColorKind, value: &str) -> Result<[f64; 3], ColorError> {
    let malformed = || ColorError::malformed(kind, value);

    let (name, rest) = value.split_once('(').ok_or_else(malformed)?;
    if name != kind.as_str() {
        return Err(malformed());
    }
    let inner = rest.strip_suffix(')').ok_or_else(malformed)?;

    let fields: Vec<f64> = inner
        .split(',')
        .map(number)
        .collect::<Option<_>>()
        .ok_or_else(malformed)?;

    <[f64; 3]>::try_from(fields).map_err(|_| malformed())
}

/// Read the numeric part of a field, ignoring one trailing `%`.
fn number(field: &str) -> Option<f64> {
    let digits = field.strip_suffix('%').unwrap_or(field);
    let well_formed = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && digits.bytes().filter(|&b| b == b'.').count() <= 1;
    if !well_formed {
        return None;
    }
    digits.parse().ok()
}

fn to_int(kind: ColorKind, value: &str, n: f64, max: f64) -> Result<u32, ColorError> {
    let rounded = n.round();
    if !(0.0..=max).contains(&rounded) {
        return Err(ColorError::out_of_range(kind, value));
    }
    Ok(rounded as u32)
}
