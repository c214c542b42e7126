//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (dimensions, timeouts > 0)
//! - Check addresses, URLs and colors parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: StudioConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;

use alloy::primitives::Address;

use crate::canvas::Color;
use crate::config::schema::StudioConfig;

/// Largest accepted surface edge in pixels.
pub const MAX_CANVAS_EDGE: u32 = 4096;

/// Largest accepted brush size in pixels.
pub const MAX_LINE_WIDTH: u32 = 64;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    /// What is wrong with it.
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &StudioConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<std::net::SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    let canvas = &config.canvas;
    if canvas.width == 0 || canvas.width > MAX_CANVAS_EDGE {
        errors.push(ValidationError::new(
            "canvas.width",
            format!("must be between 1 and {}", MAX_CANVAS_EDGE),
        ));
    }
    if canvas.height == 0 || canvas.height > MAX_CANVAS_EDGE {
        errors.push(ValidationError::new(
            "canvas.height",
            format!("must be between 1 and {}", MAX_CANVAS_EDGE),
        ));
    }
    if canvas.line_width == 0 || canvas.line_width > MAX_LINE_WIDTH {
        errors.push(ValidationError::new(
            "canvas.line_width",
            format!("must be between 1 and {}", MAX_LINE_WIDTH),
        ));
    }
    if let Err(e) = canvas.default_color.parse::<Color>() {
        errors.push(ValidationError::new("canvas.default_color", e.to_string()));
    }

    let wallet = &config.wallet;
    if wallet.enabled {
        if wallet.rpc_url.parse::<url::Url>().is_err() {
            errors.push(ValidationError::new(
                "wallet.rpc_url",
                format!("'{}' is not a valid URL", wallet.rpc_url),
            ));
        }
        if wallet.private_key_env.trim().is_empty() {
            errors.push(ValidationError::new("wallet.private_key_env", "must not be empty"));
        }
    }
    if wallet.rpc_timeout_secs == 0 {
        errors.push(ValidationError::new("wallet.rpc_timeout_secs", "must be greater than 0"));
    }

    let contract = &config.contract;
    if contract.address.parse::<Address>().is_err() {
        errors.push(ValidationError::new(
            "contract.address",
            format!("'{}' is not an Ethereum address", contract.address),
        ));
    }
    if contract.abi_path.trim().is_empty() {
        errors.push(ValidationError::new("contract.abi_path", "must not be empty"));
    }
    if contract.confirmation_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "contract.confirmation_timeout_secs",
            "must be greater than 0",
        ));
    }
    if contract.poll_interval_ms == 0 {
        errors.push(ValidationError::new("contract.poll_interval_ms", "must be greater than 0"));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new("timeouts.request_secs", "must be greater than 0"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
