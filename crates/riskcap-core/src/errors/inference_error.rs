//! Inference errors.
//!
//! The only failure class at evaluation time is an internal computation
//! fault. The scoring façade converts every variant into its fallback.

use super::error_code::{self, RiskcapErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("Input {variable} is not a number: {value}")]
    NonFiniteInput { variable: String, value: f64 },

    #[error("Expected {expected} crisp inputs, got {got}")]
    InputArity { expected: usize, got: usize },

    #[error("Aggregated output for {variable} has zero area; no rule fired")]
    ZeroArea { variable: String },
}

impl RiskcapErrorCode for InferenceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NonFiniteInput { .. } => error_code::NON_FINITE_INPUT,
            Self::InputArity { .. } => error_code::INPUT_ARITY,
            Self::ZeroArea { .. } => error_code::ZERO_AREA,
        }
    }
}

pub type InferenceResult<T> = Result<T, InferenceError>;
