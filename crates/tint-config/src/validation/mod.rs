//! Configuration validation.
//!
//! Every check pushes onto a shared error list so a single
//! `ConfigError::ValidationError` reports all problems at once.

mod helpers;


use std::net::SocketAddr;

use crate::schema::{ServerConfig, MAX_PALETTE_STEPS};
use helpers::validate_range;
use tint_common::ConfigError;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ServerConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_server(&mut errors, config);
    validate_palette(&mut errors, config);
    validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_server(errors: &mut Vec<String>, config: &ServerConfig) {
    if config.server.listen.parse::<SocketAddr>().is_err() {
        errors.push(format!(
            "server.listen = {:?} is not a socket address",
            config.server.listen
        ));
    }
}

fn validate_palette(errors: &mut Vec<String>, config: &ServerConfig) {
    let palette = &config.palette;
    validate_range(errors, "palette.min", i64::from(palette.min), 0, 100);
    validate_range(errors, "palette.max", i64::from(palette.max), 0, 100);
    if palette.min > palette.max {
        errors.push(format!(
            "palette.min = {} is greater than palette.max = {}",
            palette.min, palette.max
        ));
    }
    if palette.steps < 2 {
        errors.push(format!("palette.steps = {} must be at least 2", palette.steps));
    }
    if palette.steps > MAX_PALETTE_STEPS {
        errors.push(format!(
            "palette.steps = {} must be at most {MAX_PALETTE_STEPS}",
            palette.steps
        ));
    }
}

fn validate_logging(errors: &mut Vec<String>, config: &ServerConfig) {
    if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} is not one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}
