//! Syntax checks for the three textual color encodings.

use regex::Regex;
use std::sync::LazyLock;
use tint_common::ColorKind;

/// `#RGB` or `#RRGGBB`, case-insensitive.
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{6}|[0-9a-fA-F]{3})$").unwrap());

/// `rgb(r,g,b)` with every channel in 0..=255 and no whitespace.
static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    let channel = r"([01]?[0-9]{1,2}|2[0-4][0-9]|25[0-5])";
    Regex::new(&format!(r"^rgb\({channel},{channel},{channel}\)$")).unwrap()
});

/// `hsl(h,s%,l%)` with hue in 0..=360 and percentages in 0..=100. A decimal
/// field has at most two digits before the point, so it never rounds past
/// either bound.
static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let hue = r"([0-9]{1,2}|[12][0-9]{2}|3[0-5][0-9]|360|[0-9]{1,2}\.[0-9]+)";
    let percent = r"([0-9]{1,2}|100|[0-9]{1,2}\.[0-9]+)%";
    Regex::new(&format!(r"^hsl\({hue},{percent},{percent}\)$")).unwrap()
});

pub fn is_hex(value: &str) -> bool {
    HEX_RE.is_match(value)
}

pub fn is_rgb(value: &str) -> bool {
    RGB_RE.is_match(value)
}

pub fn is_hsl(value: &str) -> bool {
    HSL_RE.is_match(value)
}

/// Check `value` against a single encoding.
pub fn is_kind(kind: ColorKind, value: &str) -> bool {
    match kind {
        ColorKind::Hex => is_hex(value),
        ColorKind::Rgb => is_rgb(value),
        ColorKind::Hsl => is_hsl(value),
    }
}

/// Classify arbitrary text as one of the three encodings.
///
/// Tries hex, then rgb, then hsl. Absent or empty input is `None`, as is
/// anything none of the three grammars accept.
pub fn classify<'a>(value: impl Into<Option<&'a str>>) -> Option<ColorKind> {
    let value = value.into().filter(|v| !v.is_empty())?;

    [ColorKind::Hex, ColorKind::Rgb, ColorKind::Hsl]
        .into_iter()
        .find(|&kind| is_kind(kind, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_accepts_short_and_long_forms() {
        assert!(is_hex("#fff"));
        assert!(is_hex("#00fbff"));
        assert!(is_hex("#00FBFF"));
        assert!(is_hex("#0bF"));
    }

    #[test]
    fn hex_rejects_wrong_lengths() {
        assert!(!is_hex("#"));
        assert!(!is_hex("#ff"));
        assert!(!is_hex("#ffff"));
        assert!(!is_hex("#fffff"));
        assert!(!is_hex("#fffffff"));
        assert!(!is_hex("#ffffffff"));
    }

    #[test]
    fn hex_rejects_non_hex_digits() {
        assert!(!is_hex("#gg3344"));
        assert!(!is_hex("#xyz"));
        assert!(!is_hex("ffffff"));
        assert!(!is_hex(" #ffffff"));
        assert!(!is_hex("#ffffff "));
    }

    #[test]
    fn rgb_accepts_channel_bounds() {
        assert!(is_rgb("rgb(255,255,255)"));
        assert!(is_rgb("rgb(0,0,0)"));
        assert!(is_rgb("rgb(0,251,255)"));
        assert!(is_rgb("rgb(199,249,100)"));
        assert!(is_rgb("rgb(007,08,9)"));
    }

    #[test]
    fn rgb_rejects_out_of_range_and_spacing() {
        assert!(!is_rgb("rgb(256,0,0)"));
        assert!(!is_rgb("rgb(0,300,0)"));
        assert!(!is_rgb("rgb(0,0,1000)"));
        assert!(!is_rgb("rgb(0, 0, 0)"));
        assert!(!is_rgb("rgb(0,0)"));
        assert!(!is_rgb("rgb(0,0,0,0)"));
        assert!(!is_rgb("rgba(0,0,0)"));
        assert!(!is_rgb("hsl(0,75%,60%)"));
    }

    #[test]
    fn rgb_is_anchored() {
        assert!(!is_rgb("xrgb(0,0,0)"));
        assert!(!is_rgb("rgb(0,0,0)x"));
    }

    #[test]
    fn hsl_accepts_integer_and_decimal_fields() {
        assert!(is_hsl("hsl(0,0%,100%)"));
        assert!(is_hsl("hsl(181,100%,50%)"));
        assert!(is_hsl("hsl(12.5,40.25%,3.5%)"));
        assert!(is_hsl("hsl(360,100%,0%)"));
        assert!(is_hsl("hsl(99.99,99.5%,0.5%)"));
    }

    #[test]
    fn hsl_requires_percent_suffixes() {
        assert!(!is_hsl("hsl(0,100,0)"));
        assert!(!is_hsl("hsl(0,100%,0)"));
        assert!(!is_hsl("hsl(0,100,0%)"));
        assert!(!is_hsl("hsl(0%,100%,0%)"));
        assert!(!is_hsl("hsl(0,100%)"));
        assert!(!is_hsl("hsl(0, 100%, 0%)"));
    }

    #[test]
    fn hsl_rejects_out_of_range_fields() {
        assert!(!is_hsl("hsl(361,0%,0%)"));
        assert!(!is_hsl("hsl(999,0%,0%)"));
        assert!(!is_hsl("hsl(359.9,0%,0%)"));
        assert!(!is_hsl("hsl(0,101%,0%)"));
        assert!(!is_hsl("hsl(0,100.5%,0%)"));
        assert!(!is_hsl("hsl(0,0%,150%)"));
    }

    #[test]
    fn accepted_hsl_always_parses() {
        let hues = (0..=400).map(|h| h.to_string()).chain(
            ["0.5", "59.99", "99.5", "100.5", "359.9", "360.4"].map(String::from),
        );
        let percents: Vec<String> = (0..=120)
            .map(|p| p.to_string())
            .chain(["0.4", "99.5", "99.99", "100.5"].map(String::from))
            .collect();

        for hue in hues {
            for percent in &percents {
                let text = format!("hsl({hue},{percent}%,{percent}%)");
                if is_hsl(&text) {
                    assert!(
                        crate::parser::parse_hsl(&text).is_ok(),
                        "{text:?} validates but does not parse"
                    );
                }
            }
        }
    }

    #[test]
    fn accepted_rgb_always_parses() {
        for channel in 0..=300 {
            let text = format!("rgb({channel},{channel},{channel})");
            if is_rgb(&text) {
                assert!(crate::parser::parse_rgb(&text).is_ok(), "{text:?}");
            }
        }
    }

    #[test]
    fn classify_orders_hex_rgb_hsl() {
        assert_eq!(classify("#fff"), Some(ColorKind::Hex));
        assert_eq!(classify("rgb(255,255,255)"), Some(ColorKind::Rgb));
        assert_eq!(classify("hsl(0,0%,100%)"), Some(ColorKind::Hsl));
    }

    #[test]
    fn classify_rejects_everything_else() {
        assert_eq!(classify("not-a-color"), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify(None::<&str>), None);
        assert_eq!(classify(Some("#ffff")), None);
        assert_eq!(classify("hsl(0,100,0)"), None);
    }

    #[test]
    fn classify_is_total_over_odd_input() {
        let inputs = [
            "#", "(", ")", ",", "rgb(", "hsl(", "rgb()", "hsl(,,)", "🎨", "#ＦＦＦ",
            "rgb(١,٢,٣)", "\0", "\n#fff",
        ];
        for input in inputs {
            assert_eq!(classify(input), None, "unexpected match for {input:?}");
        }
    }

    #[test]
    fn is_kind_dispatches() {
        assert!(is_kind(ColorKind::Hex, "#abc"));
        assert!(!is_kind(ColorKind::Rgb, "#abc"));
        assert!(is_kind(ColorKind::Hsl, "hsl(1,2%,3%)"));
    }
}
