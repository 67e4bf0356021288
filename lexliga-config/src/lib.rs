//! Configuration system for the lexliga ligature font generator.
//!
//! This crate provides configuration loading, validation, and default
//! values for a generation run. It includes:
//!
//! - The `Config` struct covering generation, staging and compilation knobs
//! - Per-field serde defaults backed by the `defaults` module
//! - Environment-variable substitution in the raw config text
//! - Typed `ConfigError` for callers that match on failure modes

pub mod config;
pub mod defaults;
pub mod env_vars;
mod error;

// Re-export main types for convenience
pub use config::Config;
pub use env_vars::substitute_variables;
pub use error::ConfigError;
