use super::evaluator::is_good_day;
use super::{DateRange, WeatherObservation};
use crate::config::PolicyConfig;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Why the gate decided what it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateOutcome {
    Proceed,
    /// Forecast evaluated and too wet.
    Hold,
    /// No forecast for the location and range.
    NoData,
}

impl GateOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            GateOutcome::Proceed => "proceed",
            GateOutcome::Hold => "hold",
            GateOutcome::NoData => "no_data",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyGateResult {
    pub location: String,
    pub range: DateRange,
    pub total_days: usize,
    pub good_days: usize,
    pub bad_days: usize,
    pub suitability_percentage: f64,
    pub can_progress: bool,
    pub outcome: GateOutcome,
}

impl WeeklyGateResult {
    pub fn to_cli_summary(&self) -> String {
        format!(
            "{} {}..={}: {} ({}/{} good days, {:.1}%)",
            self.location,
            self.range.start(),
            self.range.end(),
            self.outcome.as_str(),
            self.good_days,
            self.total_days,
            self.suitability_percentage
        )
    }
}

/// Go/no-go for outdoor work at `location` over `range`.
///
/// Work may progress when the window has at least `max(min_good_days,
/// total / 2)` good days. A window without observations reports `NoData`.
pub fn gate(
    location: &str,
    range: DateRange,
    observations: &[WeatherObservation],
    policy: &PolicyConfig,
) -> WeeklyGateResult {
    let mut total_days = 0usize;
    let mut good_days = 0usize;
    for observation in observations
        .iter()
        .filter(|o| o.is_at(location) && range.contains(o.date))
    {
        total_days += 1;
        if is_good_day(observation, &policy.weather) {
            good_days += 1;
        }
    }

    let required = policy.gate.min_good_days.max(total_days / 2);
    let can_progress = total_days > 0 && good_days >= required;
    let outcome = if total_days == 0 {
        GateOutcome::NoData
    } else if can_progress {
        GateOutcome::Proceed
    } else {
        GateOutcome::Hold
    };
    let suitability_percentage = if total_days == 0 {
        0.0
    } else {
        good_days as f64 / total_days as f64 * 100.0
    };

    match outcome {
        GateOutcome::NoData => warn!(
            location,
            start = %range.start(),
            end = %range.end(),
            "no forecast data for progression gate"
        ),
        _ => info!(
            location,
            start = %range.start(),
            end = %range.end(),
            good_days,
            total_days,
            outcome = outcome.as_str(),
            "evaluated progression gate"
        ),
    }

    WeeklyGateResult {
        location: location.to_string(),
        range,
        total_days,
        good_days,
        bad_days: total_days - good_days,
        suitability_percentage,
        can_progress,
        outcome,
    }
}

/// Gate many `(location, range)` requests in parallel. Results keep request order.
pub fn gate_many(
    requests: &[(String, DateRange)],
    observations: &[WeatherObservation],
    policy: &PolicyConfig,
) -> Vec<WeeklyGateResult> {
    requests
        .par_iter()
        .map(|(location, range)| gate(location, *range, observations, policy))
        .collect()
}
