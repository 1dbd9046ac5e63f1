//! Jumble Types
//!
//! This crate defines the value tree produced by the Jumble generator and shared
//! by `jumble-core` and `jumble-api`. Keeping it separate lets the HTTP layer
//! serialize generated data without depending on the generator itself.

#![warn(missing_docs)]

mod types;
pub use types::{Value, ValueKind};
