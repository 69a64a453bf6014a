//! Compiled defaults for the linguistic variables and profile thresholds.

/// Canonical antecedent and consequent names.
pub const INCOME: &str = "income";
pub const SAVINGS: &str = "savings";
pub const USER_PREFERENCE: &str = "user_preference";
pub const RISK_CAPACITY: &str = "risk_capacity";

/// Labels used by the 3-way partitions.
pub const LOW: &str = "low";
pub const MEDIUM: &str = "medium";
pub const HIGH: &str = "high";

pub const DEFAULT_LABELS: [&str; 3] = [LOW, MEDIUM, HIGH];

// Declared monthly income, in currency units.
pub const DEFAULT_INCOME_MIN: f64 = 0.0;
pub const DEFAULT_INCOME_MAX: f64 = 15_000.0;
pub const DEFAULT_INCOME_STEP: f64 = 1.0;

// Declared savings, in currency units.
pub const DEFAULT_SAVINGS_MIN: f64 = 0.0;
pub const DEFAULT_SAVINGS_MAX: f64 = 100_000.0;
pub const DEFAULT_SAVINGS_STEP: f64 = 1.0;

// Ordinal preference scale: 0 = very low appetite, 10 = very high.
pub const DEFAULT_PREFERENCE_MIN: f64 = 0.0;
pub const DEFAULT_PREFERENCE_MAX: f64 = 10.0;
pub const DEFAULT_PREFERENCE_STEP: f64 = 1.0;

/// Hand-specified triangular breakpoints for `user_preference`.
pub const DEFAULT_PREFERENCE_LOW: [f64; 3] = [0.0, 0.0, 5.0];
pub const DEFAULT_PREFERENCE_MEDIUM: [f64; 3] = [2.0, 5.0, 8.0];
pub const DEFAULT_PREFERENCE_HIGH: [f64; 3] = [5.0, 10.0, 10.0];

// Output scale. Integer granularity drives the centroid sampling.
pub const DEFAULT_RISK_MIN: f64 = 0.0;
pub const DEFAULT_RISK_MAX: f64 = 10.0;
pub const DEFAULT_RISK_STEP: f64 = 1.0;

/// Profile boundaries used by the current API layer (`<= 4`, `<= 7`).
pub const DEFAULT_CONSERVATIVE_MAX: f64 = 4.0;
pub const DEFAULT_BALANCED_MAX: f64 = 7.0;

/// Profile boundaries used by the revised API layer (`<= 3.5`, `<= 6.5`).
pub const REVISED_CONSERVATIVE_MAX: f64 = 3.5;
pub const REVISED_BALANCED_MAX: f64 = 6.5;

/// Qualitative tolerance to ordinal preference.
pub const DEFAULT_LOW_PREFERENCE: f64 = 3.0;
pub const DEFAULT_MEDIUM_PREFERENCE: f64 = 5.0;
pub const DEFAULT_HIGH_PREFERENCE: f64 = 8.0;

/// Default defuzzification method name.
pub const DEFAULT_DEFUZZIFICATION: &str = "centroid";

/// Upper bound on `(max - min) / step` for any variable. Keeps the per-call
/// output sampling bounded.
pub const MAX_UNIVERSE_SAMPLES: usize = 1_000_000;
