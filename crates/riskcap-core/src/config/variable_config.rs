//! Linguistic variable configuration: domain, sampling step, and terms.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Shape of a hand-specified membership function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermShape {
    /// `[a, b, c]`: zero at `a`, peak at `b`, zero at `c`.
    Triangular,
    /// `[a, b, c, d]`: rises on `a..b`, flat on `b..c`, falls on `c..d`.
    Trapezoidal,
    /// `[top, zero]`: 1 at or below `top`, 0 at or above `zero`.
    LeftShoulder,
    /// `[zero, top]`: 0 at or below `zero`, 1 at or above `top`.
    RightShoulder,
}

impl TermShape {
    /// Number of breakpoints the shape takes.
    pub fn arity(self) -> usize {
        match self {
            Self::Triangular => 3,
            Self::Trapezoidal => 4,
            Self::LeftShoulder | Self::RightShoulder => 2,
        }
    }
}

/// A single named fuzzy set with explicit breakpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermConfig {
    pub name: String,
    pub shape: TermShape,
    pub points: Vec<f64>,
}

impl TermConfig {
    pub fn triangular(name: impl Into<String>, points: [f64; 3]) -> Self {
        Self {
            name: name.into(),
            shape: TermShape::Triangular,
            points: points.to_vec(),
        }
    }

    /// Checks breakpoint count and ordering. Returns a message on failure.
    pub fn check(&self) -> Result<(), String> {
        if self.points.len() != self.shape.arity() {
            return Err(format!(
                "{:?} takes {} points, got {}",
                self.shape,
                self.shape.arity(),
                self.points.len()
            ));
        }
        if self.points.iter().any(|p| !p.is_finite()) {
            return Err("points must be finite".to_string());
        }
        if self.points.windows(2).any(|w| w[0] > w[1]) {
            return Err("points must be non-decreasing".to_string());
        }
        Ok(())
    }
}

/// The hand-specified `user_preference` terms on the 0–10 scale.
pub fn default_preference_terms() -> Vec<TermConfig> {
    vec![
        TermConfig::triangular(constants::LOW, constants::DEFAULT_PREFERENCE_LOW),
        TermConfig::triangular(constants::MEDIUM, constants::DEFAULT_PREFERENCE_MEDIUM),
        TermConfig::triangular(constants::HIGH, constants::DEFAULT_PREFERENCE_HIGH),
    ]
}

/// Configuration for one linguistic variable.
///
/// Unset fields fall back to the per-variable compiled defaults supplied by
/// the caller of the `effective_*` accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariableConfig {
    /// Lower bound of the domain.
    pub min: Option<f64>,
    /// Upper bound of the domain.
    pub max: Option<f64>,
    /// Discretization step used when the variable is sampled.
    pub step: Option<f64>,
    /// Labels for automatic partitioning. Empty means low/medium/high.
    pub labels: Vec<String>,
    /// Explicit terms. When non-empty, automatic partitioning is skipped.
    pub terms: Vec<TermConfig>,
}

impl VariableConfig {
    pub fn effective_min(&self, default: f64) -> f64 {
        self.min.unwrap_or(default)
    }

    pub fn effective_max(&self, default: f64) -> f64 {
        self.max.unwrap_or(default)
    }

    pub fn effective_step(&self, default: f64) -> f64 {
        self.step.unwrap_or(default)
    }

    pub fn effective_labels(&self) -> Vec<String> {
        if self.labels.is_empty() {
            constants::DEFAULT_LABELS.iter().map(|l| l.to_string()).collect()
        } else {
            self.labels.clone()
        }
    }

    /// Overlay `other` onto `self`, keeping values `other` leaves unset.
    pub fn merge_from(&mut self, other: &VariableConfig) {
        if other.min.is_some() {
            self.min = other.min;
        }
        if other.max.is_some() {
            self.max = other.max;
        }
        if other.step.is_some() {
            self.step = other.step;
        }
        if !other.labels.is_empty() {
            self.labels = other.labels.clone();
        }
        if !other.terms.is_empty() {
            self.terms = other.terms.clone();
        }
    }
}
