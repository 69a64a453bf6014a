//! Defuzzification over a sampled output membership function.

use std::fmt;
use std::str::FromStr;

use riskcap_core::errors::ModelError;
use serde::{Deserialize, Serialize};

/// Tolerance used to group samples that share the maximum degree.
const MAX_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefuzzMethod {
    /// Center of area: `Σ x·μ(x) / Σ μ(x)`.
    #[default]
    Centroid,
    /// First sample where the cumulative area reaches half the total.
    Bisector,
    /// Mean of the samples holding the maximum degree.
    MeanOfMaximum,
    /// Smallest sample holding the maximum degree.
    SmallestOfMaximum,
    /// Largest sample holding the maximum degree.
    LargestOfMaximum,
}

impl DefuzzMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Centroid => "centroid",
            Self::Bisector => "bisector",
            Self::MeanOfMaximum => "mean_of_maximum",
            Self::SmallestOfMaximum => "smallest_of_maximum",
            Self::LargestOfMaximum => "largest_of_maximum",
        }
    }

    /// Collapse `(x, μ(x))` samples into one crisp value.
    ///
    /// Returns `None` when every degree is zero; there is no area to
    /// summarize and no meaningful answer.
    pub fn apply(self, samples: &[(f64, f64)]) -> Option<f64> {
        let area: f64 = samples.iter().map(|(_, mu)| mu).sum();
        if area.is_nan() || area <= 0.0 {
            return None;
        }

        match self {
            Self::Centroid => {
                let moment: f64 = samples.iter().map(|(x, mu)| x * mu).sum();
                Some(moment / area)
            }
            Self::Bisector => {
                let half = area / 2.0;
                let mut cumulative = 0.0;
                samples
                    .iter()
                    .find(|(_, mu)| {
                        cumulative += mu;
                        cumulative >= half
                    })
                    .map(|(x, _)| *x)
            }
            Self::MeanOfMaximum => {
                let maxima = maxima(samples);
                Some(maxima.iter().sum::<f64>() / maxima.len() as f64)
            }
            Self::SmallestOfMaximum => maxima(samples).first().copied(),
            Self::LargestOfMaximum => maxima(samples).last().copied(),
        }
    }
}

fn maxima(samples: &[(f64, f64)]) -> Vec<f64> {
    let peak = samples.iter().map(|(_, mu)| *mu).fold(0.0, f64::max);
    samples
        .iter()
        .filter(|(_, mu)| (peak - mu).abs() <= MAX_TOLERANCE)
        .map(|(x, _)| *x)
        .collect()
}

impl fmt::Display for DefuzzMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DefuzzMethod {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "centroid" => Ok(Self::Centroid),
            "bisector" => Ok(Self::Bisector),
            "mean_of_maximum" => Ok(Self::MeanOfMaximum),
            "smallest_of_maximum" => Ok(Self::SmallestOfMaximum),
            "largest_of_maximum" => Ok(Self::LargestOfMaximum),
            other => Err(ModelError::UnknownDefuzzMethod(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plateau() -> Vec<(f64, f64)> {
        vec![(0.0, 0.0), (1.0, 0.5), (2.0, 1.0), (3.0, 1.0), (4.0, 0.5), (5.0, 0.0)]
    }

    #[test]
    fn centroid_of_symmetric_shape_is_center() {
        assert_eq!(DefuzzMethod::Centroid.apply(&plateau()), Some(2.5));
    }

    #[test]
    fn zero_area_yields_none_for_every_method() {
        let flat = vec![(0.0, 0.0), (1.0, 0.0)];
        for m in [
            DefuzzMethod::Centroid,
            DefuzzMethod::Bisector,
            DefuzzMethod::MeanOfMaximum,
            DefuzzMethod::SmallestOfMaximum,
            DefuzzMethod::LargestOfMaximum,
        ] {
            assert_eq!(m.apply(&flat), None, "{m}");
        }
        assert_eq!(DefuzzMethod::Centroid.apply(&[]), None);
    }

    #[test]
    fn maximum_family() {
        let s = plateau();
        assert_eq!(DefuzzMethod::MeanOfMaximum.apply(&s), Some(2.5));
        assert_eq!(DefuzzMethod::SmallestOfMaximum.apply(&s), Some(2.0));
        assert_eq!(DefuzzMethod::LargestOfMaximum.apply(&s), Some(3.0));
    }

    #[test]
    fn bisector_splits_area() {
        // Area 3.0; cumulative reaches 1.5 at x = 2.
        assert_eq!(DefuzzMethod::Bisector.apply(&plateau()), Some(2.0));
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Centroid".parse::<DefuzzMethod>().unwrap(), DefuzzMethod::Centroid);
        assert_eq!(
            " mean_of_maximum ".parse::<DefuzzMethod>().unwrap(),
            DefuzzMethod::MeanOfMaximum
        );
        assert!("median".parse::<DefuzzMethod>().is_err());
    }

    #[test]
    fn names_agree_with_config_list() {
        for name in riskcap_core::config::engine_config::DEFUZZ_METHODS {
            let m: DefuzzMethod = name.parse().unwrap();
            assert_eq!(m.as_str(), name);
        }
    }
}
