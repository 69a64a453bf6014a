//! Model construction errors.
//!
//! Raised while building linguistic variables and resolving the rule base.
//! A model that builds successfully cannot produce these during inference.

use super::error_code::{self, RiskcapErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid domain for {variable}: [{min}, {max}] step {step}")]
    InvalidDomain {
        variable: String,
        min: f64,
        max: f64,
        step: f64,
    },

    #[error("Invalid term {term} on {variable}: {message}")]
    InvalidTerm {
        variable: String,
        term: String,
        message: String,
    },

    #[error("Variable {variable} needs at least {min} terms, got {got}")]
    TooFewTerms {
        variable: String,
        min: usize,
        got: usize,
    },

    #[error("Duplicate term {term} on {variable}")]
    DuplicateTerm { variable: String, term: String },

    #[error("Variable {variable} is declared more than once")]
    DuplicateVariable { variable: String },

    #[error("Rule {rule} references unknown variable {variable}")]
    UnknownVariable { rule: String, variable: String },

    #[error("Rule {rule} references unknown term {variable}.{term}")]
    UnknownTerm {
        rule: String,
        variable: String,
        term: String,
    },

    #[error("Rule {rule} has an empty {operator} expression")]
    EmptyExpression { rule: String, operator: &'static str },

    #[error("Rule {rule} weight {weight} is outside [0, 1]")]
    InvalidWeight { rule: String, weight: f64 },

    #[error("Unknown defuzzification method: {0}")]
    UnknownDefuzzMethod(String),
}

impl RiskcapErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        error_code::MODEL_ERROR
    }
}
