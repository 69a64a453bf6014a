use std::sync::Arc;

use riskcap_core::config::RiskcapConfig;
use riskcap_core::errors::{InferenceResult, ModelError};

use crate::defuzzify::DefuzzMethod;
use crate::model::RiskModel;
use crate::session::{InferenceBreakdown, InferenceSession};

/// The three client signals, in model input order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskInputs {
    pub income: f64,
    pub savings: f64,
    /// Ordinal risk appetite on the 0–10 scale.
    pub user_preference: f64,
}

impl RiskInputs {
    pub fn new(income: f64, savings: f64, user_preference: f64) -> Self {
        Self {
            income,
            savings,
            user_preference,
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.income, self.savings, self.user_preference]
    }
}

/// Mamdani inference engine over a shared, immutable [`RiskModel`].
///
/// Cloning is cheap and clones share the model. Each evaluation opens its
/// own [`InferenceSession`], so the engine can be used from many threads at
/// once.
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    model: Arc<RiskModel>,
    method: DefuzzMethod,
}

impl InferenceEngine {
    /// Engine with centroid defuzzification.
    pub fn new(model: Arc<RiskModel>) -> Self {
        Self {
            model,
            method: DefuzzMethod::Centroid,
        }
    }

    /// Standard model and rule base with compiled defaults.
    pub fn standard() -> Result<Self, ModelError> {
        Ok(Self::new(Arc::new(RiskModel::standard()?)))
    }

    /// Model and defuzzification method taken from configuration.
    pub fn from_config(config: &RiskcapConfig) -> Result<Self, ModelError> {
        let method: DefuzzMethod = config.engine.effective_defuzzification().parse()?;
        Ok(Self::new(Arc::new(RiskModel::from_config(config)?)).with_method(method))
    }

    pub fn with_method(mut self, method: DefuzzMethod) -> Self {
        self.method = method;
        self
    }

    pub fn model(&self) -> &Arc<RiskModel> {
        &self.model
    }

    pub fn method(&self) -> DefuzzMethod {
        self.method
    }

    /// Crisp risk capacity for the given inputs.
    pub fn evaluate(&self, inputs: RiskInputs) -> InferenceResult<f64> {
        self.evaluate_crisp(&inputs.as_array())
    }

    /// Crisp output for an input vector in model input order.
    pub fn evaluate_crisp(&self, inputs: &[f64]) -> InferenceResult<f64> {
        InferenceSession::new(&self.model, self.method, inputs)?
            .run()
            .map(|b| b.score)
    }

    /// Evaluate and keep every intermediate stage.
    pub fn evaluate_breakdown(&self, inputs: RiskInputs) -> InferenceResult<InferenceBreakdown> {
        InferenceSession::new(&self.model, self.method, &inputs.as_array())?.run()
    }
}
