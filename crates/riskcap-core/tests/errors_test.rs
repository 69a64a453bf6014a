use riskcap_core::errors::*;

#[test]
fn zero_area_carries_variable_and_code() {
    let err = InferenceError::ZeroArea {
        variable: "risk_capacity".into(),
    };
    assert!(err.to_string().contains("risk_capacity"));
    assert_eq!(err.error_code(), "ZERO_AREA");
    assert!(err.coded_string().starts_with("[ZERO_AREA] "));
}

#[test]
fn non_finite_input_carries_name() {
    let err = InferenceError::NonFiniteInput {
        variable: "savings".into(),
        value: f64::NAN,
    };
    assert!(err.to_string().contains("savings"));
    assert_eq!(err.error_code(), "NON_FINITE_INPUT");
}

#[test]
fn arity_carries_counts() {
    let err = InferenceError::InputArity { expected: 3, got: 1 };
    let msg = err.to_string();
    assert!(msg.contains('3'));
    assert!(msg.contains('1'));
}

#[test]
fn model_error_unknown_term_names_both_sides() {
    let err = ModelError::UnknownTerm {
        rule: "r1".into(),
        variable: "income".into(),
        term: "huge".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("r1"));
    assert!(msg.contains("income.huge"));
    assert_eq!(err.error_code(), "MODEL_ERROR");
}

#[test]
fn riskcap_error_wraps_and_forwards_codes() {
    let inner = InferenceError::ZeroArea {
        variable: "risk_capacity".into(),
    };
    let err: RiskcapError = inner.into();
    assert_eq!(err.error_code(), "ZERO_AREA");
    assert!(err.to_string().starts_with("Inference error:"));

    let err: RiskcapError = ConfigError::FileNotFound {
        path: "riskcap.toml".into(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");

    let err: RiskcapError = ModelError::UnknownDefuzzMethod("median".into()).into();
    assert_eq!(err.error_code(), "MODEL_ERROR");
}
