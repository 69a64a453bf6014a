//! Top-level riskcap configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::engine_config::DEFUZZ_METHODS;
use super::{EngineConfig, ProfileConfig, VariableConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = "riskcap.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`RISKCAP_*`)
/// 2. Project config (`riskcap.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskcapConfig {
    pub income: VariableConfig,
    pub savings: VariableConfig,
    pub user_preference: VariableConfig,
    pub risk_capacity: VariableConfig,
    pub engine: EngineConfig,
    pub profile: ProfileConfig,
}

impl RiskcapConfig {
    /// Load configuration with 3-layer resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &RiskcapConfig) -> Result<(), ConfigError> {
        let variables = [
            (
                constants::INCOME,
                &config.income,
                (constants::DEFAULT_INCOME_MIN, constants::DEFAULT_INCOME_MAX, constants::DEFAULT_INCOME_STEP),
            ),
            (
                constants::SAVINGS,
                &config.savings,
                (constants::DEFAULT_SAVINGS_MIN, constants::DEFAULT_SAVINGS_MAX, constants::DEFAULT_SAVINGS_STEP),
            ),
            (
                constants::USER_PREFERENCE,
                &config.user_preference,
                (
                    constants::DEFAULT_PREFERENCE_MIN,
                    constants::DEFAULT_PREFERENCE_MAX,
                    constants::DEFAULT_PREFERENCE_STEP,
                ),
            ),
            (
                constants::RISK_CAPACITY,
                &config.risk_capacity,
                (constants::DEFAULT_RISK_MIN, constants::DEFAULT_RISK_MAX, constants::DEFAULT_RISK_STEP),
            ),
        ];

        for (name, variable, (min, max, step)) in variables {
            Self::validate_variable(name, variable, min, max, step)?;
        }

        let method = config.engine.effective_defuzzification();
        if !DEFUZZ_METHODS.contains(&method) {
            return Err(ConfigError::ValidationFailed {
                field: "engine.defuzzification".to_string(),
                message: format!("unknown method {method:?}, expected one of {DEFUZZ_METHODS:?}"),
            });
        }

        let conservative = config.profile.effective_conservative_max();
        let balanced = config.profile.effective_balanced_max();
        if !conservative.is_finite() || !balanced.is_finite() {
            return Err(ConfigError::ValidationFailed {
                field: "profile".to_string(),
                message: "thresholds must be finite".to_string(),
            });
        }
        if conservative > balanced {
            return Err(ConfigError::ValidationFailed {
                field: "profile.conservative_max".to_string(),
                message: format!("{conservative} exceeds profile.balanced_max {balanced}"),
            });
        }

        Ok(())
    }

    fn validate_variable(
        name: &str,
        variable: &VariableConfig,
        default_min: f64,
        default_max: f64,
        default_step: f64,
    ) -> Result<(), ConfigError> {
        let min = variable.effective_min(default_min);
        let max = variable.effective_max(default_max);
        let step = variable.effective_step(default_step);

        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ConfigError::ValidationFailed {
                field: format!("{name}.min"),
                message: format!("domain [{min}, {max}] must be finite with min < max"),
            });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: format!("{name}.step"),
                message: "must be greater than 0".to_string(),
            });
        }
        if (max - min) / step > constants::MAX_UNIVERSE_SAMPLES as f64 {
            return Err(ConfigError::ValidationFailed {
                field: format!("{name}.step"),
                message: format!(
                    "step {step} splits [{min}, {max}] into more than {} samples",
                    constants::MAX_UNIVERSE_SAMPLES
                ),
            });
        }
        if variable.terms.is_empty() && variable.effective_labels().len() < 2 {
            return Err(ConfigError::ValidationFailed {
                field: format!("{name}.labels"),
                message: "automatic partitioning needs at least 2 labels".to_string(),
            });
        }
        for term in &variable.terms {
            term.check().map_err(|message| ConfigError::ValidationFailed {
                field: format!("{name}.terms.{}", term.name),
                message,
            })?;
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut RiskcapConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: RiskcapConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` sets them.
    fn merge(base: &mut RiskcapConfig, other: &RiskcapConfig) {
        base.income.merge_from(&other.income);
        base.savings.merge_from(&other.savings);
        base.user_preference.merge_from(&other.user_preference);
        base.risk_capacity.merge_from(&other.risk_capacity);

        if other.engine.defuzzification.is_some() {
            base.engine.defuzzification = other.engine.defuzzification.clone();
        }

        if other.profile.conservative_max.is_some() {
            base.profile.conservative_max = other.profile.conservative_max;
        }
        if other.profile.balanced_max.is_some() {
            base.profile.balanced_max = other.profile.balanced_max;
        }
        if other.profile.low_preference.is_some() {
            base.profile.low_preference = other.profile.low_preference;
        }
        if other.profile.medium_preference.is_some() {
            base.profile.medium_preference = other.profile.medium_preference;
        }
        if other.profile.high_preference.is_some() {
            base.profile.high_preference = other.profile.high_preference;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `RISKCAP_INCOME_MAX`, `RISKCAP_PROFILE_BALANCED_MAX`, etc.
    fn apply_env_overrides(config: &mut RiskcapConfig) {
        if let Some(v) = env_f64("RISKCAP_INCOME_MAX") {
            config.income.max = Some(v);
        }
        if let Some(v) = env_f64("RISKCAP_SAVINGS_MAX") {
            config.savings.max = Some(v);
        }
        if let Some(v) = env_f64("RISKCAP_RISK_CAPACITY_STEP") {
            config.risk_capacity.step = Some(v);
        }
        if let Ok(val) = std::env::var("RISKCAP_ENGINE_DEFUZZIFICATION") {
            config.engine.defuzzification = Some(val);
        }
        if let Some(v) = env_f64("RISKCAP_PROFILE_CONSERVATIVE_MAX") {
            config.profile.conservative_max = Some(v);
        }
        if let Some(v) = env_f64("RISKCAP_PROFILE_BALANCED_MAX") {
            config.profile.balanced_max = Some(v);
        }
    }
}

fn env_f64(key: &str) -> Option<f64> {
    std::env::var(key).ok().and_then(|v| v.parse::<f64>().ok())
}
