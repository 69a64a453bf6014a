//! RiskcapErrorCode trait for boundary conversion.

/// Trait for mapping riskcap errors to stable error code strings.
/// The API layer that embeds the engine logs and reports these codes
/// instead of matching on message text.
pub trait RiskcapErrorCode {
    /// Returns the error code string (e.g., "ZERO_AREA").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted coded string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const MODEL_ERROR: &str = "MODEL_ERROR";
pub const NON_FINITE_INPUT: &str = "NON_FINITE_INPUT";
pub const INPUT_ARITY: &str = "INPUT_ARITY";
pub const ZERO_AREA: &str = "ZERO_AREA";
