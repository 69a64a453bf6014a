//! Rule firing on a small two-input model.

use riskcap_core::constants::{HIGH, RISK_CAPACITY};
use riskcap_fuzzy::*;

/// Inputs `a` and `b` on [0, 1], each split into `lo` / `hi` shoulders, so
/// `lo(x) = 1 - x` and `hi(x) = x`.
fn two_input_model(rules: Vec<Rule>) -> RiskModel {
    let u = Universe::new("unit", 0.0, 1.0, 0.1).unwrap();
    let a = LinguisticVariable::auto_partition("a", u, &["lo", "hi"]).unwrap();
    let b = LinguisticVariable::auto_partition("b", u, &["lo", "hi"]).unwrap();
    let y = LinguisticVariable::auto_partition("y", u, &["lo", "hi"]).unwrap();
    RiskModel::new(vec![a, b], y, &RuleBase::new(rules)).unwrap()
}

fn strengths(rules: Vec<Rule>, a: f64, b: f64) -> Vec<f64> {
    let model = two_input_model(rules);
    InferenceSession::new(&model, DefuzzMethod::Centroid, &[a, b])
        .unwrap()
        .run()
        .unwrap()
        .firing_strengths
        .into_iter()
        .map(|(_, s)| s)
        .collect()
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-12, "{actual} != {expected}");
}

#[test]
fn and_is_min_or_is_max() {
    let s = strengths(
        vec![
            Rule::new(
                "and",
                Antecedent::and([Antecedent::is("a", "hi"), Antecedent::is("b", "lo")]),
                "y",
                "hi",
            ),
            Rule::new(
                "or",
                Antecedent::or([Antecedent::is("a", "lo"), Antecedent::is("b", "hi")]),
                "y",
                "lo",
            ),
        ],
        0.2,
        0.6,
    );
    assert_close(s[0], 0.2);
    assert_close(s[1], 0.8);
}

#[test]
fn nested_expressions_evaluate_bottom_up() {
    let s = strengths(
        vec![Rule::new(
            "nested",
            Antecedent::or([
                Antecedent::and([Antecedent::is("a", "lo"), Antecedent::is("b", "hi")]),
                Antecedent::is("b", "lo"),
            ]),
            "y",
            "hi",
        )],
        0.2,
        0.6,
    );
    assert_close(s[0], 0.6);
}

#[test]
fn weight_scales_firing_strength() {
    let s = strengths(
        vec![Rule::new("w", Antecedent::is("a", "lo"), "y", "lo").with_weight(0.5)],
        0.2,
        0.0,
    );
    assert_close(s[0], 0.4);
}

#[test]
fn consequent_on_wrong_variable_is_rejected() {
    let u = Universe::new("unit", 0.0, 1.0, 0.1).unwrap();
    let a = LinguisticVariable::auto_partition("a", u, &["lo", "hi"]).unwrap();
    let y = LinguisticVariable::auto_partition("y", u, &["lo", "hi"]).unwrap();
    let rules = RuleBase::new(vec![Rule::new("r", Antecedent::is("a", "lo"), "a", "hi")]);
    let err = RiskModel::new(vec![a], y, &rules).unwrap_err();
    assert!(matches!(
        err,
        riskcap_core::errors::ModelError::UnknownVariable { .. }
    ));
}

#[test]
fn standard_rule_base_has_four_rules() {
    let rb = RuleBase::standard();
    assert_eq!(rb.len(), 4);
    assert!(!rb.is_empty());
    let high_targets = rb
        .rules()
        .iter()
        .filter(|r| r.consequent_variable == RISK_CAPACITY && r.consequent_term == HIGH)
        .count();
    assert_eq!(high_targets, 2);
}
