//! Per-call inference working state.
//!
//! A session borrows the shared model, owns everything it computes, and is
//! consumed by [`InferenceSession::run`]. Nothing is carried between calls.

use riskcap_core::errors::{InferenceError, InferenceResult};
use serde::Serialize;
use tracing::debug;

use crate::defuzzify::DefuzzMethod;
use crate::model::RiskModel;

/// Every intermediate stage of one evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct InferenceBreakdown {
    /// Crisp inputs after saturation into each domain.
    pub inputs: Vec<f64>,
    /// `fuzzified[input][term]` degrees of membership.
    pub fuzzified: Vec<Vec<f64>>,
    /// `(rule name, firing strength)` in rule order.
    pub firing_strengths: Vec<(String, f64)>,
    /// Peak activation per output term: the max over rules targeting it.
    pub activations: Vec<(String, f64)>,
    /// Aggregated output membership sampled over the output domain.
    pub aggregated: Vec<(f64, f64)>,
    /// Defuzzification method used.
    pub method: DefuzzMethod,
    /// Final crisp score.
    pub score: f64,
}

pub struct InferenceSession<'m> {
    model: &'m RiskModel,
    method: DefuzzMethod,
    inputs: Vec<f64>,
}

impl<'m> InferenceSession<'m> {
    /// Create a session for one set of crisp inputs, in model input order.
    pub fn new(model: &'m RiskModel, method: DefuzzMethod, inputs: &[f64]) -> InferenceResult<Self> {
        let expected = model.inputs().len();
        if inputs.len() != expected {
            return Err(InferenceError::InputArity {
                expected,
                got: inputs.len(),
            });
        }
        if let Some((variable, value)) = model
            .inputs()
            .iter()
            .zip(inputs)
            .find(|(_, value)| value.is_nan())
        {
            return Err(InferenceError::NonFiniteInput {
                variable: variable.name().to_string(),
                value: *value,
            });
        }
        Ok(Self {
            model,
            method,
            inputs: inputs.to_vec(),
        })
    }

    /// Run all four stages and return the breakdown.
    pub fn run(self) -> InferenceResult<InferenceBreakdown> {
        let model = self.model;

        let inputs: Vec<f64> = model
            .inputs()
            .iter()
            .zip(&self.inputs)
            .map(|(v, x)| v.universe().saturate(*x))
            .collect();
        let fuzzified: Vec<Vec<f64>> = model
            .inputs()
            .iter()
            .zip(&inputs)
            .map(|(v, x)| v.fuzzify(*x))
            .collect();
        debug!(?inputs, ?fuzzified, "fuzzified inputs");

        let rules = model.resolved_rules();
        let strengths: Vec<f64> = rules.iter().map(|r| r.firing_strength(&fuzzified)).collect();
        debug!(?strengths, "rule firing strengths");

        let output = model.output();
        let mut activations = vec![0.0_f64; output.terms().len()];
        for (rule, strength) in rules.iter().zip(&strengths) {
            let slot = &mut activations[rule.consequent_term];
            *slot = slot.max(*strength);
        }

        // Mamdani implication (clip at firing strength) then max aggregation.
        let aggregated: Vec<(f64, f64)> = output
            .universe()
            .samples()
            .into_iter()
            .map(|x| {
                let mu = rules
                    .iter()
                    .zip(&strengths)
                    .filter(|(_, s)| **s > 0.0)
                    .map(|(rule, s)| {
                        output.terms()[rule.consequent_term].membership.degree(x).min(*s)
                    })
                    .fold(0.0, f64::max);
                (x, mu)
            })
            .collect();

        let score = self
            .method
            .apply(&aggregated)
            .ok_or_else(|| InferenceError::ZeroArea {
                variable: output.name().to_string(),
            })?;
        let score = output.universe().saturate(score);
        debug!(score, method = %self.method, "defuzzified");

        Ok(InferenceBreakdown {
            inputs,
            fuzzified,
            firing_strengths: rules
                .iter()
                .zip(strengths)
                .map(|(r, s)| (r.name.clone(), s))
                .collect(),
            activations: output
                .terms()
                .iter()
                .zip(activations)
                .map(|(t, a)| (t.name.clone(), a))
                .collect(),
            aggregated,
            method: self.method,
            score,
        })
    }
}
