use std::path::PathBuf;

use crate::types::ColorKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("unrecognized color: {0:?}")]
    Unrecognized(String),

    #[error("malformed {kind} color: {input:?}")]
    Malformed { kind: ColorKind, input: String },

    #[error("{kind} component out of range: {input:?}")]
    OutOfRange { kind: ColorKind, input: String },
}

impl ColorError {
    pub fn malformed(kind: ColorKind, input: &str) -> Self {
        Self::Malformed {
            kind,
            input: input.to_string(),
        }
    }

    pub fn out_of_range(kind: ColorKind, input: &str) -> Self {
        Self::OutOfRange {
            kind,
            input: input.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid step count: {0} (at least 2 steps are required)")]
    InvalidStepCount(usize),

    #[error("too many steps: {count} (at most {max} are allowed)")]
    TooManySteps { count: usize, max: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TintError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
