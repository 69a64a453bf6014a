//! Investor profile thresholds and tolerance mapping.
//!
//! The boundaries have moved between releases of the API layer (`<= 4 / <= 7`
//! and `<= 3.5 / <= 6.5`). Deployments should pin them here rather than
//! rely on the compiled default.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Scores at or below this are Conservative. Default: 4.0.
    pub conservative_max: Option<f64>,
    /// Scores at or below this (and above `conservative_max`) are Balanced. Default: 7.0.
    pub balanced_max: Option<f64>,
    /// Preference for a "low" tolerance. Default: 3.
    pub low_preference: Option<f64>,
    /// Preference for a "medium" (or unrecognized) tolerance. Default: 5.
    pub medium_preference: Option<f64>,
    /// Preference for a "high" tolerance. Default: 8.
    pub high_preference: Option<f64>,
}

impl ProfileConfig {
    pub fn effective_conservative_max(&self) -> f64 {
        self.conservative_max
            .unwrap_or(constants::DEFAULT_CONSERVATIVE_MAX)
    }

    pub fn effective_balanced_max(&self) -> f64 {
        self.balanced_max.unwrap_or(constants::DEFAULT_BALANCED_MAX)
    }

    pub fn effective_low_preference(&self) -> f64 {
        self.low_preference
            .unwrap_or(constants::DEFAULT_LOW_PREFERENCE)
    }

    pub fn effective_medium_preference(&self) -> f64 {
        self.medium_preference
            .unwrap_or(constants::DEFAULT_MEDIUM_PREFERENCE)
    }

    pub fn effective_high_preference(&self) -> f64 {
        self.high_preference
            .unwrap_or(constants::DEFAULT_HIGH_PREFERENCE)
    }
}
