//! IF-THEN rules over linguistic terms.
//!
//! Rules are written against variable and term names and resolved to
//! indices once, when the model is built. Resolved rules evaluate without
//! any lookups and cannot fail.

use riskcap_core::constants::{HIGH, INCOME, LOW, MEDIUM, RISK_CAPACITY, SAVINGS, USER_PREFERENCE};
use riskcap_core::errors::ModelError;
use serde::{Deserialize, Serialize};

use crate::variable::LinguisticVariable;

/// Boolean combination of `variable IS term` clauses.
/// AND takes the minimum of its operands, OR the maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Antecedent {
    Is { variable: String, term: String },
    And(Vec<Antecedent>),
    Or(Vec<Antecedent>),
}

impl Antecedent {
    pub fn is(variable: impl Into<String>, term: impl Into<String>) -> Self {
        Self::Is {
            variable: variable.into(),
            term: term.into(),
        }
    }

    pub fn and(operands: impl IntoIterator<Item = Antecedent>) -> Self {
        Self::And(operands.into_iter().collect())
    }

    pub fn or(operands: impl IntoIterator<Item = Antecedent>) -> Self {
        Self::Or(operands.into_iter().collect())
    }
}

/// `IF antecedent THEN variable IS term`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub antecedent: Antecedent,
    pub consequent_variable: String,
    pub consequent_term: String,
    /// Scales the firing strength. 1.0 leaves it unchanged.
    pub weight: f64,
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        antecedent: Antecedent,
        consequent_variable: impl Into<String>,
        consequent_term: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            antecedent,
            consequent_variable: consequent_variable.into(),
            consequent_term: consequent_term.into(),
            weight: 1.0,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

/// An ordered collection of rules. Order does not affect the result since
/// aggregation is a maximum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The four risk-capacity rules.
    ///
    /// 1. income low OR savings low OR preference low → low
    /// 2. income, savings, preference all medium → medium
    /// 3. income, savings, preference all high → high
    /// 4. income high AND preference high → high
    pub fn standard() -> Self {
        Self::new(vec![
            Rule::new(
                "any_low",
                Antecedent::or([
                    Antecedent::is(INCOME, LOW),
                    Antecedent::is(SAVINGS, LOW),
                    Antecedent::is(USER_PREFERENCE, LOW),
                ]),
                RISK_CAPACITY,
                LOW,
            ),
            Rule::new(
                "all_medium",
                Antecedent::and([
                    Antecedent::is(INCOME, MEDIUM),
                    Antecedent::is(SAVINGS, MEDIUM),
                    Antecedent::is(USER_PREFERENCE, MEDIUM),
                ]),
                RISK_CAPACITY,
                MEDIUM,
            ),
            Rule::new(
                "all_high",
                Antecedent::and([
                    Antecedent::is(INCOME, HIGH),
                    Antecedent::is(SAVINGS, HIGH),
                    Antecedent::is(USER_PREFERENCE, HIGH),
                ]),
                RISK_CAPACITY,
                HIGH,
            ),
            Rule::new(
                "income_and_preference_high",
                Antecedent::and([
                    Antecedent::is(INCOME, HIGH),
                    Antecedent::is(USER_PREFERENCE, HIGH),
                ]),
                RISK_CAPACITY,
                HIGH,
            ),
        ])
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Antecedent with names replaced by `(input, term)` indices.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
    Term { input: usize, term: usize },
    And(Vec<Expr>),
    Or(Vec<Expr>),
}

impl Expr {
    /// `degrees[input][term]` holds the fuzzified inputs.
    pub(crate) fn eval(&self, degrees: &[Vec<f64>]) -> f64 {
        match self {
            Self::Term { input, term } => degrees[*input][*term],
            Self::And(ops) => ops.iter().map(|e| e.eval(degrees)).fold(1.0, f64::min),
            Self::Or(ops) => ops.iter().map(|e| e.eval(degrees)).fold(0.0, f64::max),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedRule {
    pub name: String,
    pub expr: Expr,
    pub consequent_term: usize,
    pub weight: f64,
}

impl ResolvedRule {
    pub(crate) fn firing_strength(&self, degrees: &[Vec<f64>]) -> f64 {
        (self.expr.eval(degrees) * self.weight).clamp(0.0, 1.0)
    }
}

pub(crate) fn resolve(
    rule: &Rule,
    inputs: &[LinguisticVariable],
    output: &LinguisticVariable,
) -> Result<ResolvedRule, ModelError> {
    if !(0.0..=1.0).contains(&rule.weight) {
        return Err(ModelError::InvalidWeight {
            rule: rule.name.clone(),
            weight: rule.weight,
        });
    }
    if rule.consequent_variable != output.name() {
        return Err(ModelError::UnknownVariable {
            rule: rule.name.clone(),
            variable: rule.consequent_variable.clone(),
        });
    }
    let consequent_term =
        output
            .term_index(&rule.consequent_term)
            .ok_or_else(|| ModelError::UnknownTerm {
                rule: rule.name.clone(),
                variable: rule.consequent_variable.clone(),
                term: rule.consequent_term.clone(),
            })?;

    Ok(ResolvedRule {
        name: rule.name.clone(),
        expr: resolve_expr(&rule.name, &rule.antecedent, inputs)?,
        consequent_term,
        weight: rule.weight,
    })
}

fn resolve_expr(
    rule: &str,
    antecedent: &Antecedent,
    inputs: &[LinguisticVariable],
) -> Result<Expr, ModelError> {
    match antecedent {
        Antecedent::Is { variable, term } => {
            let input = inputs
                .iter()
                .position(|v| v.name() == variable)
                .ok_or_else(|| ModelError::UnknownVariable {
                    rule: rule.to_string(),
                    variable: variable.clone(),
                })?;
            let term_idx = inputs[input]
                .term_index(term)
                .ok_or_else(|| ModelError::UnknownTerm {
                    rule: rule.to_string(),
                    variable: variable.clone(),
                    term: term.clone(),
                })?;
            Ok(Expr::Term {
                input,
                term: term_idx,
            })
        }
        Antecedent::And(ops) | Antecedent::Or(ops) => {
            let is_and = matches!(antecedent, Antecedent::And(_));
            if ops.is_empty() {
                return Err(ModelError::EmptyExpression {
                    rule: rule.to_string(),
                    operator: if is_and { "AND" } else { "OR" },
                });
            }
            let resolved = ops
                .iter()
                .map(|op| resolve_expr(rule, op, inputs))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(if is_and {
                Expr::And(resolved)
            } else {
                Expr::Or(resolved)
            })
        }
    }
}
