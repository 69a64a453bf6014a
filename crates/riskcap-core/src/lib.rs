//! # riskcap-core
//!
//! Foundation crate for the riskcap inference engine.
//! Defines errors, config, tracing setup, and constants shared by the
//! inference crate.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use config::RiskcapConfig;
pub use errors::{ConfigError, InferenceError, ModelError, RiskcapError};
