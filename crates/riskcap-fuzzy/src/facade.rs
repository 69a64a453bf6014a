//! Scoring façade: the entry point the API layer calls.
//!
//! Always answers. Any inference failure is logged and replaced by the
//! caller's own preference value.

use riskcap_core::config::RiskcapConfig;
use riskcap_core::errors::{RiskcapErrorCode, RiskcapResult};
use serde::Serialize;
use tracing::warn;

use crate::engine::{InferenceEngine, RiskInputs};
use crate::profile::{InvestorProfile, ProfileThresholds, RiskTolerance, ToleranceMapping};

/// Risk capacity for the given signals, or `user_preference` itself if the
/// engine cannot produce a score.
pub fn calculate_risk_profile(
    engine: &InferenceEngine,
    income: f64,
    savings: f64,
    user_preference: f64,
) -> f64 {
    score_with_fallback(engine, RiskInputs::new(income, savings, user_preference)).0
}

/// Returns the score and whether it is the fallback value.
fn score_with_fallback(engine: &InferenceEngine, inputs: RiskInputs) -> (f64, bool) {
    match engine.evaluate(inputs) {
        Ok(score) => (score, false),
        Err(e) => {
            warn!(
                code = e.error_code(),
                error = %e,
                income = inputs.income,
                savings = inputs.savings,
                user_preference = inputs.user_preference,
                "risk inference failed, falling back to user preference"
            );
            (inputs.user_preference, true)
        }
    }
}

/// Outcome of scoring a client end to end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub tolerance: RiskTolerance,
    pub user_preference: f64,
    pub score: f64,
    /// True when `score` is the preference fallback.
    pub fallback: bool,
    pub profile: InvestorProfile,
}

/// Engine plus the mapping and thresholds around it, built once at startup.
#[derive(Debug, Clone)]
pub struct RiskScorer {
    engine: InferenceEngine,
    mapping: ToleranceMapping,
    thresholds: ProfileThresholds,
}

impl RiskScorer {
    pub fn new(engine: InferenceEngine, mapping: ToleranceMapping, thresholds: ProfileThresholds) -> Self {
        Self {
            engine,
            mapping,
            thresholds,
        }
    }

    /// Validate `config`, then build the engine, mapping, and thresholds
    /// from it.
    pub fn from_config(config: &RiskcapConfig) -> RiskcapResult<Self> {
        RiskcapConfig::validate(config)?;
        Ok(Self::new(
            InferenceEngine::from_config(config)?,
            ToleranceMapping::from_config(&config.profile),
            ProfileThresholds::from_config(&config.profile),
        ))
    }

    pub fn engine(&self) -> &InferenceEngine {
        &self.engine
    }

    /// See [`calculate_risk_profile`].
    pub fn score(&self, income: f64, savings: f64, user_preference: f64) -> f64 {
        calculate_risk_profile(&self.engine, income, savings, user_preference)
    }

    /// Map a qualitative tolerance, score it, and bucket the result.
    pub fn assess(&self, tolerance: &str, income: f64, savings: f64) -> RiskAssessment {
        let tolerance = RiskTolerance::parse(tolerance);
        let user_preference = self.mapping.preference(tolerance);
        let (score, fallback) =
            score_with_fallback(&self.engine, RiskInputs::new(income, savings, user_preference));
        RiskAssessment {
            tolerance,
            user_preference,
            score,
            fallback,
            profile: self.thresholds.classify(score),
        }
    }
}
