use super::WeatherObservation;
use crate::config::WeatherPolicy;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Optimal,
    Caution,
    Avoid,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Optimal => "optimal",
            Recommendation::Caution => "caution",
            Recommendation::Avoid => "avoid",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::Optimal => "Optimal conditions for outdoor work.",
            Recommendation::Caution => {
                "Proceed with caution: plan weather protection and indoor fallback tasks."
            }
            Recommendation::Avoid => "Avoid outdoor work: severe precipitation expected.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryKind {
    Heat,
    Cold,
    Wind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Moderate,
    Severe,
}

/// Informational alert. Never changes whether a day is suitable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityVerdict {
    pub location: String,
    pub date: NaiveDate,
    pub suitable: bool,
    pub recommendation: Recommendation,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advisories: Vec<Advisory>,
}

impl SuitabilityVerdict {
    pub fn message(&self) -> &'static str {
        self.recommendation.message()
    }
}

/// Threshold test shared by the evaluator and the weekly gate.
///
/// Missing probability or hours count as zero, so absent data never blocks work.
pub fn is_good_day(observation: &WeatherObservation, policy: &WeatherPolicy) -> bool {
    let probability = observation.precipitation_probability.unwrap_or(0.0);
    let hours = observation.precipitation_hours.unwrap_or(0.0);
    probability < policy.max_precipitation_probability && hours <= policy.max_precipitation_hours
}

fn recommend(probability: f64, suitable: bool, policy: &WeatherPolicy) -> Recommendation {
    if probability > policy.avoid_probability {
        Recommendation::Avoid
    } else if probability > policy.caution_probability {
        Recommendation::Caution
    } else if suitable {
        Recommendation::Optimal
    } else {
        Recommendation::Caution
    }
}

fn advisories(observation: &WeatherObservation, policy: &WeatherPolicy) -> Vec<Advisory> {
    let mut alerts = Vec::new();

    let t_max = observation.temperature_max;
    if t_max > policy.heat_severe_celsius {
        alerts.push(Advisory {
            kind: AdvisoryKind::Heat,
            severity: Severity::Severe,
            message: format!("Extreme heat ({t_max:.1}°C): stop strenuous outdoor work at midday."),
        });
    } else if t_max > policy.heat_advisory_celsius {
        alerts.push(Advisory {
            kind: AdvisoryKind::Heat,
            severity: Severity::Moderate,
            message: format!("High temperature ({t_max:.1}°C): schedule breaks and hydration."),
        });
    }

    let t_min = observation.temperature_min;
    if t_min < policy.cold_severe_celsius {
        alerts.push(Advisory {
            kind: AdvisoryKind::Cold,
            severity: Severity::Severe,
            message: format!("Severe frost ({t_min:.1}°C): no concrete pours or masonry."),
        });
    } else if t_min < policy.cold_advisory_celsius {
        alerts.push(Advisory {
            kind: AdvisoryKind::Cold,
            severity: Severity::Moderate,
            message: format!("Frost ({t_min:.1}°C): protect fresh concrete and watch for ice."),
        });
    }

    let wind = observation.wind_speed;
    if wind > policy.wind_severe_kmh {
        alerts.push(Advisory {
            kind: AdvisoryKind::Wind,
            severity: Severity::Severe,
            message: format!("Storm winds ({wind:.0} km/h): suspend crane and roof work."),
        });
    } else if wind > policy.wind_advisory_kmh {
        alerts.push(Advisory {
            kind: AdvisoryKind::Wind,
            severity: Severity::Moderate,
            message: format!("Strong wind ({wind:.0} km/h): secure materials, limit work at height."),
        });
    }

    alerts
}

pub fn evaluate(observation: &WeatherObservation, policy: &WeatherPolicy) -> SuitabilityVerdict {
    let suitable = is_good_day(observation, policy);
    let probability = observation.precipitation_probability.unwrap_or(0.0);
    SuitabilityVerdict {
        location: observation.location.clone(),
        date: observation.date,
        suitable,
        recommendation: recommend(probability, suitable, policy),
        advisories: advisories(observation, policy),
    }
}

pub fn evaluate_all(
    observations: &[WeatherObservation],
    policy: &WeatherPolicy,
) -> Vec<SuitabilityVerdict> {
    observations.iter().map(|o| evaluate(o, policy)).collect()
}
