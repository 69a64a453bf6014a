//! # riskcap-fuzzy
//!
//! Mamdani fuzzy inference for risk-capacity scoring.
//! Stages: fuzzification, rule firing (AND = min, OR = max), min implication
//! with max aggregation, and defuzzification (centroid by default).
//! The model is built once and shared; each call runs in its own session.

pub mod defuzzify;
pub mod engine;
pub mod facade;
pub mod membership;
pub mod model;
pub mod profile;
pub mod rules;
pub mod session;
pub mod variable;

pub use defuzzify::DefuzzMethod;
pub use engine::{InferenceEngine, RiskInputs};
pub use facade::{calculate_risk_profile, RiskAssessment, RiskScorer};
pub use membership::MembershipFunction;
pub use model::RiskModel;
pub use profile::{InvestorProfile, ProfileThresholds, RiskTolerance, ToleranceMapping};
pub use rules::{Antecedent, Rule, RuleBase};
pub use session::{InferenceBreakdown, InferenceSession};
pub use variable::{FuzzySet, LinguisticVariable, Universe};
