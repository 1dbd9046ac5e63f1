//! Error types for the Jumble core
//!
//! Generation itself cannot fail; the only fallible step is building a
//! [`GenerationConfig`](crate::GenerationConfig) from caller-supplied limits.

use thiserror::Error;

/// Errors raised while validating generation limits
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A limit that must be positive was zero
    #[error("Configuration error: {field} must be a positive integer")]
    NonPositive { field: &'static str },
}

/// Result alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
