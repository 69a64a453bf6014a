//! Qualitative tolerance in, investor profile out.
//!
//! These sit on either side of the engine: a caller's stated tolerance is
//! mapped onto the ordinal preference scale before scoring, and the score
//! is bucketed into a profile afterwards.

use std::fmt;

use riskcap_core::config::ProfileConfig;
use riskcap_core::constants;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl RiskTolerance {
    /// Case-insensitive; `None` for anything other than low/medium/high.
    pub fn recognize(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Like [`recognize`](Self::recognize) but unknown input maps to `Medium`.
    pub fn parse(input: &str) -> Self {
        Self::recognize(input).unwrap_or(Self::Medium)
    }
}

/// Ordinal preference assigned to each tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToleranceMapping {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for ToleranceMapping {
    fn default() -> Self {
        Self {
            low: constants::DEFAULT_LOW_PREFERENCE,
            medium: constants::DEFAULT_MEDIUM_PREFERENCE,
            high: constants::DEFAULT_HIGH_PREFERENCE,
        }
    }
}

impl ToleranceMapping {
    pub fn from_config(config: &ProfileConfig) -> Self {
        Self {
            low: config.effective_low_preference(),
            medium: config.effective_medium_preference(),
            high: config.effective_high_preference(),
        }
    }

    pub fn preference(&self, tolerance: RiskTolerance) -> f64 {
        match tolerance {
            RiskTolerance::Low => self.low,
            RiskTolerance::Medium => self.medium,
            RiskTolerance::High => self.high,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestorProfile {
    Conservative,
    Balanced,
    GrowthOriented,
}

impl InvestorProfile {
    pub fn label(self) -> &'static str {
        match self {
            Self::Conservative => "Conservative Investor",
            Self::Balanced => "Balanced Investor",
            Self::GrowthOriented => "Growth-Oriented Investor",
        }
    }
}

impl fmt::Display for InvestorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Upper bounds (inclusive) of the Conservative and Balanced buckets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileThresholds {
    pub conservative_max: f64,
    pub balanced_max: f64,
}

impl Default for ProfileThresholds {
    fn default() -> Self {
        Self {
            conservative_max: constants::DEFAULT_CONSERVATIVE_MAX,
            balanced_max: constants::DEFAULT_BALANCED_MAX,
        }
    }
}

impl ProfileThresholds {
    /// The tighter `3.5 / 6.5` boundaries of the revised API layer.
    pub fn revised() -> Self {
        Self {
            conservative_max: constants::REVISED_CONSERVATIVE_MAX,
            balanced_max: constants::REVISED_BALANCED_MAX,
        }
    }

    pub fn from_config(config: &ProfileConfig) -> Self {
        Self {
            conservative_max: config.effective_conservative_max(),
            balanced_max: config.effective_balanced_max(),
        }
    }

    pub fn classify(&self, score: f64) -> InvestorProfile {
        if score <= self.conservative_max {
            InvestorProfile::Conservative
        } else if score <= self.balanced_max {
            InvestorProfile::Balanced
        } else {
            InvestorProfile::GrowthOriented
        }
    }
}
