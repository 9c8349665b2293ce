//! Color model conversion and validation.
//!
//! Parses `#RRGGBB` / `#RGB`, `rgb(r,g,b)` and `hsl(h,s%,l%)` text, converts
//! between the three models and renders canonical text back. Every function
//! here is pure; there is no shared state.
//!
//! ```rust
//! use tint_color::{Color, ColorFunctions};
//!
//! let color = Color::new();
//! let hex = color.hex.parse("#0bf").unwrap();
//! assert_eq!(hex.as_str(), "#00bbff");
//! assert_eq!(color.hex.to_rgb(&hex).to_string(), "rgb(0,187,255)");
//! ```

pub mod color;
pub mod converter;
pub mod parser;
pub mod stringifier;
pub mod theme;
pub mod validator;

pub use color::{
    CanonicalStrings, Color, ColorFunctions, ColorReport, HexFunctions, HslFunctions,
    RgbFunctions, RoundTrip, Validity,
};
pub use theme::{create_steps, luminosity_ramp, StepOptions, Theme, MAX_STEP_COUNT};
pub use validator::classify;

pub use tint_common::{ColorError, ColorKind, Hex, Hsl, Rgb, ThemeError};
