//! Error handling for riskcap.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod inference_error;
pub mod model_error;
pub mod riskcap_error;

pub use config_error::ConfigError;
pub use error_code::RiskcapErrorCode;
pub use inference_error::{InferenceError, InferenceResult};
pub use model_error::ModelError;
pub use riskcap_error::{RiskcapError, RiskcapResult};
