//! Universes, automatic partitions, and explicit term sets.

use riskcap_core::constants::MAX_UNIVERSE_SAMPLES;
use riskcap_core::errors::ModelError;
use riskcap_fuzzy::*;

fn income() -> LinguisticVariable {
    let u = Universe::new("income", 0.0, 15_000.0, 1.0).unwrap();
    LinguisticVariable::auto_partition("income", u, &["low", "medium", "high"]).unwrap()
}

// ── Universe ─────────────────────────────────────────────────────────────

#[test]
fn universe_keeps_its_bounds() {
    let u = Universe::new("savings", 0.0, 100_000.0, 1.0).unwrap();
    assert_eq!(u.min(), 0.0);
    assert_eq!(u.max(), 100_000.0);
    assert_eq!(u.step(), 1.0);
    assert_eq!(u.saturate(-1.0), 0.0);
    assert_eq!(u.saturate(1e9), 100_000.0);
}

#[test]
fn universe_rejects_bad_domains() {
    assert!(Universe::new("x", 1.0, 1.0, 1.0).is_err());
    assert!(Universe::new("x", 0.0, 1.0, 0.0).is_err());
    assert!(Universe::new("x", 0.0, f64::INFINITY, 1.0).is_err());
}

#[test]
fn universe_rejects_step_finer_than_sample_cap() {
    let err = Universe::new("risk_capacity", 0.0, 10.0, 1e-300).unwrap_err();
    assert!(matches!(err, ModelError::InvalidDomain { .. }));

    let cap = MAX_UNIVERSE_SAMPLES as f64;
    assert!(Universe::new("risk_capacity", 0.0, 10.0, 10.0 / (cap / 2.0)).is_ok());
    assert!(Universe::new("risk_capacity", 0.0, 10.0, 10.0 / (cap * 2.0)).is_err());
}

#[test]
fn samples_end_at_max() {
    let u = Universe::new("risk", 0.0, 10.0, 1.0).unwrap();
    let s = u.samples();
    assert_eq!(s.len(), 11);
    assert_eq!(s[0], 0.0);
    assert_eq!(s[10], 10.0);

    let uneven = Universe::new("x", 0.0, 1.0, 0.3).unwrap();
    assert_eq!(*uneven.samples().last().unwrap(), 1.0);
}

// ── Automatic partitioning ───────────────────────────────────────────────

#[test]
fn auto_partition_matches_three_way_layout() {
    let v = income();
    assert_eq!(
        v.term("low").unwrap().membership,
        MembershipFunction::left_shoulder(0.0, 7_500.0)
    );
    assert_eq!(
        v.term("medium").unwrap().membership,
        MembershipFunction::triangular(0.0, 7_500.0, 15_000.0)
    );
    assert_eq!(
        v.term("high").unwrap().membership,
        MembershipFunction::right_shoulder(7_500.0, 15_000.0)
    );
    assert_eq!(v.term_index("high"), Some(2));
}

#[test]
fn auto_partition_covers_domain() {
    let v = income();
    for x in [0.0, 1.0, 3_000.0, 7_500.0, 11_111.0, 15_000.0] {
        let degrees = v.fuzzify(x);
        assert!(degrees.iter().any(|d| *d > 0.0), "no cover at {x}");
        let sum: f64 = degrees.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "partition of unity broken at {x}: {sum}");
    }
}

#[test]
fn auto_partition_five_labels() {
    let u = Universe::new("x", 0.0, 4.0, 1.0).unwrap();
    let v = LinguisticVariable::auto_partition("x", u, &["a", "b", "c", "d", "e"]).unwrap();
    assert_eq!(v.terms().len(), 5);
    assert_eq!(v.fuzzify(2.0), vec![0.0, 0.0, 1.0, 0.0, 0.0]);
    assert_eq!(v.fuzzify(0.5), vec![0.5, 0.5, 0.0, 0.0, 0.0]);
}

#[test]
fn auto_partition_rejects_single_label() {
    let u = Universe::new("x", 0.0, 1.0, 0.1).unwrap();
    let err = LinguisticVariable::auto_partition("x", u, &["only"]).unwrap_err();
    assert!(matches!(err, ModelError::TooFewTerms { got: 1, .. }));
}

#[test]
fn fuzzify_saturates_out_of_domain() {
    let v = income();
    assert_eq!(v.fuzzify(-500.0), vec![1.0, 0.0, 0.0]);
    assert_eq!(v.fuzzify(1e12), vec![0.0, 0.0, 1.0]);
}

#[test]
fn dominant_term_picks_highest_degree() {
    let v = income();
    assert_eq!(v.dominant_term(14_000.0).map(|(n, _)| n), Some("high"));
    assert_eq!(v.dominant_term(7_500.0).map(|(n, _)| n), Some("medium"));
}

// ── Explicit terms ───────────────────────────────────────────────────────

#[test]
fn duplicate_terms_rejected() {
    let u = Universe::new("x", 0.0, 1.0, 0.1).unwrap();
    let mf = MembershipFunction::triangular(0.0, 0.5, 1.0);
    let err = LinguisticVariable::explicit(
        "x",
        u,
        vec![FuzzySet::new("a", mf), FuzzySet::new("a", mf)],
    )
    .unwrap_err();
    assert!(matches!(err, ModelError::DuplicateTerm { .. }));
}

#[test]
fn empty_term_list_rejected() {
    let u = Universe::new("x", 0.0, 1.0, 0.1).unwrap();
    let err = LinguisticVariable::explicit("x", u, vec![]).unwrap_err();
    assert!(matches!(err, ModelError::TooFewTerms { got: 0, .. }));
}
