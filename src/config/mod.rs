//! Configuration model for linescope.
//!
//! This module defines the Config struct that represents `.linescope.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of config values.

mod model;
mod operations;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::{CONFIG_FILE_NAME, Config};
