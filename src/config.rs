//! Policy thresholds for the weather evaluator, the weekly gate and staffing.
//!
//! Every field has a documented default, and partial JSON documents only
//! override the keys they name.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid policy json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid policy: {0}")]
    Invalid(String),
}

/// Thresholds applied to a single day's forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherPolicy {
    /// A day is suitable only when precipitation probability is strictly below this.
    pub max_precipitation_probability: f64,
    /// A day is suitable only when precipitation hours are at most this.
    pub max_precipitation_hours: f64,
    /// Probabilities above this (and up to `avoid_probability`) recommend caution.
    pub caution_probability: f64,
    /// Probabilities above this recommend avoiding outdoor work.
    pub avoid_probability: f64,
    pub heat_advisory_celsius: f64,
    pub heat_severe_celsius: f64,
    pub cold_advisory_celsius: f64,
    pub cold_severe_celsius: f64,
    pub wind_advisory_kmh: f64,
    pub wind_severe_kmh: f64,
}

impl Default for WeatherPolicy {
    fn default() -> Self {
        Self {
            max_precipitation_probability: 40.0,
            max_precipitation_hours: 2.0,
            caution_probability: 60.0,
            avoid_probability: 90.0,
            heat_advisory_celsius: 35.0,
            heat_severe_celsius: 40.0,
            cold_advisory_celsius: -5.0,
            cold_severe_celsius: -10.0,
            wind_advisory_kmh: 50.0,
            wind_severe_kmh: 70.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatePolicy {
    /// Absolute floor of good days a window needs before work may progress.
    pub min_good_days: usize,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self { min_good_days: 3 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffingPolicy {
    pub workday_hours: f64,
}

impl Default for StaffingPolicy {
    fn default() -> Self {
        Self { workday_hours: 8.0 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub weather: WeatherPolicy,
    pub gate: GatePolicy,
    pub staffing: StaffingPolicy,
}

impl PolicyConfig {
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: PolicyConfig = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.weather;
        let finite = [
            w.max_precipitation_probability,
            w.max_precipitation_hours,
            w.caution_probability,
            w.avoid_probability,
            w.heat_advisory_celsius,
            w.heat_severe_celsius,
            w.cold_advisory_celsius,
            w.cold_severe_celsius,
            w.wind_advisory_kmh,
            w.wind_severe_kmh,
            self.staffing.workday_hours,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::Invalid("thresholds must be finite numbers".into()));
        }
        if !(0.0..=100.0).contains(&w.max_precipitation_probability) {
            return Err(ConfigError::Invalid(format!(
                "max_precipitation_probability {} must be between 0 and 100",
                w.max_precipitation_probability
            )));
        }
        if w.max_precipitation_hours < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "max_precipitation_hours {} must not be negative",
                w.max_precipitation_hours
            )));
        }
        if w.caution_probability >= w.avoid_probability {
            return Err(ConfigError::Invalid(format!(
                "caution_probability {} must be below avoid_probability {}",
                w.caution_probability, w.avoid_probability
            )));
        }
        if w.heat_advisory_celsius > w.heat_severe_celsius {
            return Err(ConfigError::Invalid(
                "heat_advisory_celsius must not exceed heat_severe_celsius".into(),
            ));
        }
        if w.cold_advisory_celsius < w.cold_severe_celsius {
            return Err(ConfigError::Invalid(
                "cold_advisory_celsius must not be below cold_severe_celsius".into(),
            ));
        }
        if w.wind_advisory_kmh > w.wind_severe_kmh {
            return Err(ConfigError::Invalid(
                "wind_advisory_kmh must not exceed wind_severe_kmh".into(),
            ));
        }
        if self.staffing.workday_hours <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "workday_hours {} must be positive",
                self.staffing.workday_hours
            )));
        }
        Ok(())
    }
}

pub fn load_policy_from_json<P: AsRef<Path>>(path: P) -> Result<PolicyConfig, ConfigError> {
    let file = File::open(path)?;
    let config: PolicyConfig = serde_json::from_reader(file)?;
    config.validate()?;
    Ok(config)
}
