#![allow(missing_docs)]
//! Core functionality for the Jumble random data service.
//!
//! This crate owns the recursive value generator, the random source it draws
//! from, and the rules that turn raw request parameters into bounded ones.

/// Generation limits and their defaults
pub mod config;
/// Shared constants for generation and parameter handling
pub mod constants;
/// Error types for core operations
pub mod error;
/// Recursive random value generation
pub mod generator;
/// Request parameter parsing and clamping
pub mod params;
/// Abstraction over the randomness the generator consumes
pub mod random;

pub use config::GenerationConfig;
pub use error::{ConfigError, ConfigResult};
pub use generator::Generator;
pub use jumble_types::{Value, ValueKind};
pub use params::{RequestParams, parse_int_prefix};
pub use random::{RandomSource, RngSource, choose};
