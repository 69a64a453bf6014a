//! Piecewise-linear membership functions.

use riskcap_core::config::{TermConfig, TermShape};
use serde::{Deserialize, Serialize};

/// A membership function mapping a domain value to a degree in [0, 1].
///
/// Every shape is piecewise linear. Evaluation is total: NaN yields 0 and the
/// result is always clamped to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum MembershipFunction {
    /// Zero at `a`, one at `b`, zero at `c`. `a == b` or `b == c` gives a
    /// vertical edge with degree 1 at the peak.
    Triangular { a: f64, b: f64, c: f64 },
    /// Rises on `a..b`, one on `b..=c`, falls on `c..d`.
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
    /// One at or below `top`, falling to zero at `zero`.
    LeftShoulder { top: f64, zero: f64 },
    /// Zero at or below `zero`, rising to one at `top`.
    RightShoulder { zero: f64, top: f64 },
}

impl MembershipFunction {
    pub fn triangular(a: f64, b: f64, c: f64) -> Self {
        Self::Triangular { a, b, c }
    }

    pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::Trapezoidal { a, b, c, d }
    }

    pub fn left_shoulder(top: f64, zero: f64) -> Self {
        Self::LeftShoulder { top, zero }
    }

    pub fn right_shoulder(zero: f64, top: f64) -> Self {
        Self::RightShoulder { zero, top }
    }

    /// Build from configured breakpoints. The caller has already checked
    /// arity via [`TermConfig::check`].
    pub fn from_config(term: &TermConfig) -> Option<Self> {
        let p = &term.points;
        match (term.shape, p.as_slice()) {
            (TermShape::Triangular, [a, b, c]) => Some(Self::triangular(*a, *b, *c)),
            (TermShape::Trapezoidal, [a, b, c, d]) => Some(Self::trapezoidal(*a, *b, *c, *d)),
            (TermShape::LeftShoulder, [top, zero]) => Some(Self::left_shoulder(*top, *zero)),
            (TermShape::RightShoulder, [zero, top]) => Some(Self::right_shoulder(*zero, *top)),
            _ => None,
        }
    }

    /// Degree of membership of `x`.
    pub fn degree(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.0;
        }
        let raw = match *self {
            Self::Triangular { a, b, c } => {
                if x == b {
                    1.0
                } else if x <= a || x >= c {
                    0.0
                } else if x < b {
                    (x - a) / (b - a)
                } else {
                    (c - x) / (c - b)
                }
            }
            Self::Trapezoidal { a, b, c, d } => {
                if (b..=c).contains(&x) {
                    1.0
                } else if x <= a || x >= d {
                    0.0
                } else if x < b {
                    (x - a) / (b - a)
                } else {
                    (d - x) / (d - c)
                }
            }
            Self::LeftShoulder { top, zero } => {
                if x <= top {
                    1.0
                } else if x >= zero {
                    0.0
                } else {
                    (zero - x) / (zero - top)
                }
            }
            Self::RightShoulder { zero, top } => {
                if x >= top {
                    1.0
                } else if x <= zero {
                    0.0
                } else {
                    (x - zero) / (top - zero)
                }
            }
        };
        if raw.is_nan() {
            0.0
        } else {
            raw.clamp(0.0, 1.0)
        }
    }
}
