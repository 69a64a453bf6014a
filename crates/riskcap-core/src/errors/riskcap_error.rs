//! Top-level error aggregating subsystem errors via `From` conversions.

use super::error_code::RiskcapErrorCode;
use super::{ConfigError, InferenceError, ModelError};

#[derive(Debug, thiserror::Error)]
pub enum RiskcapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Inference error: {0}")]
    Inference(#[from] InferenceError),
}

impl RiskcapErrorCode for RiskcapError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Model(e) => e.error_code(),
            Self::Inference(e) => e.error_code(),
        }
    }
}

pub type RiskcapResult<T> = Result<T, RiskcapError>;
