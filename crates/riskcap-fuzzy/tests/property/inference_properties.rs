use proptest::prelude::*;
use riskcap_fuzzy::*;

fn engine() -> InferenceEngine {
    InferenceEngine::standard().unwrap()
}

// ── Range closure ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn score_stays_in_output_domain(
        income in 0.0f64..20_000.0,
        savings in 0.0f64..150_000.0,
        pref in 0.0f64..=10.0,
    ) {
        if let Ok(score) = engine().evaluate(RiskInputs::new(income, savings, pref)) {
            prop_assert!((0.0..=10.0).contains(&score), "score {} out of range", score);
        }
    }

    #[test]
    fn facade_stays_in_output_domain(
        income in 0.0f64..20_000.0,
        savings in 0.0f64..150_000.0,
        pref in 0u8..=10,
    ) {
        let score = calculate_risk_profile(&engine(), income, savings, pref as f64);
        prop_assert!((0.0..=10.0).contains(&score), "score {} out of range", score);
    }

    #[test]
    fn fuzzified_degrees_are_unit_interval(
        income in -1e6f64..1e6,
        savings in -1e6f64..1e6,
        pref in -20.0f64..20.0,
    ) {
        let e = engine();
        let model = e.model();
        for (var, x) in model.inputs().iter().zip([income, savings, pref]) {
            let degrees = var.fuzzify(x);
            prop_assert!(degrees.iter().all(|d| (0.0..=1.0).contains(d)));
            prop_assert!(degrees.iter().any(|d| *d > 0.0), "{} has no cover at {}", var.name(), x);
        }
    }
}

// ── Determinism ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn evaluation_is_deterministic(
        income in 0.0f64..15_000.0,
        savings in 0.0f64..100_000.0,
        pref in 0.0f64..=10.0,
    ) {
        let e = engine();
        let inputs = RiskInputs::new(income, savings, pref);
        let a = calculate_risk_profile(&e, income, savings, pref);
        let b = calculate_risk_profile(&e, income, savings, pref);
        prop_assert_eq!(a.to_bits(), b.to_bits());
        let fresh = engine().evaluate(inputs).ok().map(f64::to_bits);
        prop_assert_eq!(e.evaluate(inputs).ok().map(f64::to_bits), fresh);
    }
}

// ── Directional monotonicity in income ───────────────────────────────────

proptest! {
    #[test]
    fn higher_income_region_scores_no_lower_on_average(
        savings in 0.0f64..100_000.0,
        pref in 0.0f64..=10.0,
    ) {
        let e = engine();
        let mean_over = |from: u32, to: u32| {
            let scores: Vec<f64> = (from..to)
                .step_by(250)
                .filter_map(|i| e.evaluate(RiskInputs::new(i as f64, savings, pref)).ok())
                .collect();
            if scores.is_empty() {
                None
            } else {
                Some(scores.iter().sum::<f64>() / scores.len() as f64)
            }
        };

        // Some rule fires in each half: `income IS low` covers the lower
        // half, and the upper half always meets a medium or high rule.
        let (low, high) = match (mean_over(0, 7_500), mean_over(7_500, 15_001)) {
            (Some(low), Some(high)) => (low, high),
            other => return Err(TestCaseError::fail(format!("empty income half: {:?}", other))),
        };
        prop_assert!(high >= low - 1e-9, "low-income mean {} > high-income mean {}", low, high);
    }

    #[test]
    fn top_income_never_scores_below_zero_income(
        savings in 0.0f64..100_000.0,
        pref in 0.0f64..=10.0,
    ) {
        let e = engine();
        let bottom = e.evaluate(RiskInputs::new(0.0, savings, pref));
        prop_assert!(bottom.is_ok(), "zero income always fires `income IS low`");
        let top = e.evaluate(RiskInputs::new(15_000.0, savings, pref));
        if let (Ok(bottom), Ok(top)) = (bottom, top) {
            prop_assert!(top >= bottom - 1e-9, "{} < {}", top, bottom);
        }
    }
}
