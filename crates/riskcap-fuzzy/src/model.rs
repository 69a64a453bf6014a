//! The immutable inference model: antecedents, consequent, resolved rules.
//!
//! Built once at startup and shared read-only (typically behind an `Arc`)
//! by every inference session.

use riskcap_core::config::variable_config::default_preference_terms;
use riskcap_core::config::{RiskcapConfig, VariableConfig};
use riskcap_core::constants::{self, INCOME, RISK_CAPACITY, SAVINGS, USER_PREFERENCE};
use riskcap_core::errors::ModelError;
use tracing::debug;

use crate::rules::{self, ResolvedRule, RuleBase};
use crate::variable::{LinguisticVariable, Universe};

#[derive(Debug, Clone)]
pub struct RiskModel {
    inputs: Vec<LinguisticVariable>,
    output: LinguisticVariable,
    resolved: Vec<ResolvedRule>,
}

impl RiskModel {
    /// Assemble a model from variables and rules, resolving every rule
    /// reference up front.
    pub fn new(
        inputs: Vec<LinguisticVariable>,
        output: LinguisticVariable,
        rule_base: &RuleBase,
    ) -> Result<Self, ModelError> {
        for (i, v) in inputs.iter().enumerate() {
            if inputs[..i].iter().any(|w| w.name() == v.name()) || v.name() == output.name() {
                return Err(ModelError::DuplicateVariable {
                    variable: v.name().to_string(),
                });
            }
        }

        let resolved = rule_base
            .rules()
            .iter()
            .map(|rule| rules::resolve(rule, &inputs, &output))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            inputs = inputs.len(),
            rules = resolved.len(),
            output = output.name(),
            "risk model built"
        );

        Ok(Self {
            inputs,
            output,
            resolved,
        })
    }

    /// Model with compiled defaults and the standard rule base.
    pub fn standard() -> Result<Self, ModelError> {
        Self::from_config(&RiskcapConfig::default())
    }

    /// Model built from configuration, using the standard rule base.
    pub fn from_config(config: &RiskcapConfig) -> Result<Self, ModelError> {
        Self::from_config_with_rules(config, &RuleBase::standard())
    }

    pub fn from_config_with_rules(
        config: &RiskcapConfig,
        rule_base: &RuleBase,
    ) -> Result<Self, ModelError> {
        let income = build_variable(
            INCOME,
            &config.income,
            (constants::DEFAULT_INCOME_MIN, constants::DEFAULT_INCOME_MAX, constants::DEFAULT_INCOME_STEP),
            DefaultPartition::Auto,
        )?;
        let savings = build_variable(
            SAVINGS,
            &config.savings,
            (constants::DEFAULT_SAVINGS_MIN, constants::DEFAULT_SAVINGS_MAX, constants::DEFAULT_SAVINGS_STEP),
            DefaultPartition::Auto,
        )?;
        let preference = build_variable(
            USER_PREFERENCE,
            &config.user_preference,
            (
                constants::DEFAULT_PREFERENCE_MIN,
                constants::DEFAULT_PREFERENCE_MAX,
                constants::DEFAULT_PREFERENCE_STEP,
            ),
            DefaultPartition::Preference,
        )?;
        let risk = build_variable(
            RISK_CAPACITY,
            &config.risk_capacity,
            (constants::DEFAULT_RISK_MIN, constants::DEFAULT_RISK_MAX, constants::DEFAULT_RISK_STEP),
            DefaultPartition::Auto,
        )?;

        Self::new(vec![income, savings, preference], risk, rule_base)
    }

    pub fn inputs(&self) -> &[LinguisticVariable] {
        &self.inputs
    }

    pub fn output(&self) -> &LinguisticVariable {
        &self.output
    }

    pub(crate) fn resolved_rules(&self) -> &[ResolvedRule] {
        &self.resolved
    }
}

/// What a variable falls back to when its config lists no explicit terms.
enum DefaultPartition {
    Auto,
    Preference,
}

fn build_variable(
    name: &str,
    config: &VariableConfig,
    (min, max, step): (f64, f64, f64),
    default: DefaultPartition,
) -> Result<LinguisticVariable, ModelError> {
    let universe = Universe::new(
        name,
        config.effective_min(min),
        config.effective_max(max),
        config.effective_step(step),
    )?;

    if !config.terms.is_empty() {
        return LinguisticVariable::from_terms(name, universe, &config.terms);
    }
    match default {
        DefaultPartition::Preference if config.labels.is_empty() => {
            LinguisticVariable::from_terms(name, universe, &default_preference_terms())
        }
        _ => LinguisticVariable::auto_partition(name, universe, config.effective_labels().as_slice()),
    }
}
