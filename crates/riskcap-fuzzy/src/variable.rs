//! Linguistic variables: a sampled numeric domain plus named fuzzy sets.

use riskcap_core::config::TermConfig;
use riskcap_core::constants::MAX_UNIVERSE_SAMPLES;
use riskcap_core::errors::ModelError;
use serde::{Deserialize, Serialize};

use crate::membership::MembershipFunction;

/// Closed numeric domain with a discretization step.
///
/// The step may not split the domain into more than
/// [`MAX_UNIVERSE_SAMPLES`] intervals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Universe {
    min: f64,
    max: f64,
    step: f64,
}

impl Universe {
    pub fn new(variable: &str, min: f64, max: f64, step: f64) -> Result<Self, ModelError> {
        let valid = min.is_finite()
            && max.is_finite()
            && min < max
            && step.is_finite()
            && step > 0.0
            && (max - min) / step <= MAX_UNIVERSE_SAMPLES as f64;
        if !valid {
            return Err(ModelError::InvalidDomain {
                variable: variable.to_string(),
                min,
                max,
                step,
            });
        }
        Ok(Self { min, max, step })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Clamp a crisp value into the domain. NaN passes through unchanged.
    pub fn saturate(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    /// Sample points `min, min + step, ...`, always ending exactly at `max`.
    pub fn samples(&self) -> Vec<f64> {
        let span = self.max - self.min;
        let count = (span / self.step).floor() as usize;
        let mut points: Vec<f64> = (0..=count)
            .map(|i| self.min + i as f64 * self.step)
            .filter(|x| *x < self.max)
            .collect();
        points.push(self.max);
        points
    }
}

/// A named fuzzy set on a linguistic variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzySet {
    pub name: String,
    pub membership: MembershipFunction,
}

impl FuzzySet {
    pub fn new(name: impl Into<String>, membership: MembershipFunction) -> Self {
        Self {
            name: name.into(),
            membership,
        }
    }
}

/// A named numeric axis described by an ordered list of fuzzy sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinguisticVariable {
    name: String,
    universe: Universe,
    terms: Vec<FuzzySet>,
}

impl LinguisticVariable {
    /// Partition the domain into `labels.len()` equally spaced sets.
    ///
    /// Anchors sit at `linspace(min, max, n)`. The first set is a left
    /// shoulder falling to zero at the second anchor, the last a right
    /// shoulder rising from the penultimate anchor, and each interior set a
    /// triangle peaking at its anchor and reaching zero at its neighbours.
    pub fn auto_partition<S: AsRef<str>>(
        name: &str,
        universe: Universe,
        labels: &[S],
    ) -> Result<Self, ModelError> {
        let n = labels.len();
        if n < 2 {
            return Err(ModelError::TooFewTerms {
                variable: name.to_string(),
                min: 2,
                got: n,
            });
        }

        let width = (universe.max - universe.min) / (n - 1) as f64;
        let anchor = |i: usize| {
            if i == n - 1 {
                universe.max
            } else {
                universe.min + i as f64 * width
            }
        };

        let terms = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let membership = if i == 0 {
                    MembershipFunction::left_shoulder(anchor(0), anchor(1))
                } else if i == n - 1 {
                    MembershipFunction::right_shoulder(anchor(n - 2), anchor(n - 1))
                } else {
                    MembershipFunction::triangular(anchor(i - 1), anchor(i), anchor(i + 1))
                };
                FuzzySet::new(label.as_ref(), membership)
            })
            .collect();

        Self::explicit(name, universe, terms)
    }

    /// Build from hand-specified sets.
    pub fn explicit(name: &str, universe: Universe, terms: Vec<FuzzySet>) -> Result<Self, ModelError> {
        if terms.is_empty() {
            return Err(ModelError::TooFewTerms {
                variable: name.to_string(),
                min: 1,
                got: 0,
            });
        }
        for (i, term) in terms.iter().enumerate() {
            if terms[..i].iter().any(|t| t.name == term.name) {
                return Err(ModelError::DuplicateTerm {
                    variable: name.to_string(),
                    term: term.name.clone(),
                });
            }
        }
        Ok(Self {
            name: name.to_string(),
            universe,
            terms,
        })
    }

    /// Build from configured terms, checking each one.
    pub fn from_terms(name: &str, universe: Universe, terms: &[TermConfig]) -> Result<Self, ModelError> {
        let sets = terms
            .iter()
            .map(|term| {
                term.check().map_err(|message| ModelError::InvalidTerm {
                    variable: name.to_string(),
                    term: term.name.clone(),
                    message,
                })?;
                let membership =
                    MembershipFunction::from_config(term).ok_or_else(|| ModelError::InvalidTerm {
                        variable: name.to_string(),
                        term: term.name.clone(),
                        message: "shape does not match points".to_string(),
                    })?;
                Ok(FuzzySet::new(term.name.clone(), membership))
            })
            .collect::<Result<Vec<_>, ModelError>>()?;
        Self::explicit(name, universe, sets)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn terms(&self) -> &[FuzzySet] {
        &self.terms
    }

    pub fn term(&self, label: &str) -> Option<&FuzzySet> {
        self.terms.iter().find(|t| t.name == label)
    }

    pub fn term_index(&self, label: &str) -> Option<usize> {
        self.terms.iter().position(|t| t.name == label)
    }

    /// Degree of membership in every term, in term order. The input is
    /// saturated into the domain first.
    pub fn fuzzify(&self, x: f64) -> Vec<f64> {
        let x = self.universe.saturate(x);
        self.terms.iter().map(|t| t.membership.degree(x)).collect()
    }

    /// The term with the highest degree at `x`, first one on ties.
    pub fn dominant_term(&self, x: f64) -> Option<(&str, f64)> {
        self.fuzzify(x)
            .into_iter()
            .zip(&self.terms)
            .fold(None, |best: Option<(&str, f64)>, (degree, term)| match best {
                Some((_, d)) if d >= degree => best,
                _ => Some((term.name.as_str(), degree)),
            })
    }
}
