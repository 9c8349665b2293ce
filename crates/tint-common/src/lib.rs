pub mod errors;
pub mod types;

pub use errors::{ColorError, ConfigError, ThemeError, TintError};
pub use types::{ColorKind, Hex, Hsl, Rgb};
