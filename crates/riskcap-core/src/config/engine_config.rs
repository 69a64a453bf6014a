//! Inference engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Defuzzification method names accepted in `[engine] defuzzification`.
pub const DEFUZZ_METHODS: [&str; 5] = [
    "centroid",
    "bisector",
    "mean_of_maximum",
    "smallest_of_maximum",
    "largest_of_maximum",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Defuzzification method. Default: "centroid".
    pub defuzzification: Option<String>,
}

impl EngineConfig {
    pub fn effective_defuzzification(&self) -> &str {
        self.defuzzification
            .as_deref()
            .unwrap_or(constants::DEFAULT_DEFUZZIFICATION)
    }
}
