//! Configuration system for riskcap.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod engine_config;
pub mod profile_config;
pub mod riskcap_config;
pub mod variable_config;

pub use engine_config::EngineConfig;
pub use profile_config::ProfileConfig;
pub use riskcap_config::RiskcapConfig;
pub use variable_config::{TermConfig, TermShape, VariableConfig};
