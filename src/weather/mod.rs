//! Weather-gated progression.
//!
//! Forecast values are fetched by the caller; this module only judges them
//! against the thresholds in [`crate::config::WeatherPolicy`].

pub mod evaluator;
pub mod gate;
pub mod impact;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// One day of forecast for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub location: String,
    pub date: NaiveDate,
    /// Chance of precipitation in percent, 0-100. Absent means unknown.
    #[serde(default)]
    pub precipitation_probability: Option<f64>,
    /// Expected hours of precipitation. Absent means unknown.
    #[serde(default)]
    pub precipitation_hours: Option<f64>,
    pub temperature_min: f64,
    pub temperature_max: f64,
    /// km/h
    pub wind_speed: f64,
}

impl WeatherObservation {
    /// A dry, mild day. Handy as a base for building fixtures.
    pub fn new(location: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            location: location.into(),
            date,
            precipitation_probability: Some(0.0),
            precipitation_hours: Some(0.0),
            temperature_min: 10.0,
            temperature_max: 20.0,
            wind_speed: 10.0,
        }
    }

    pub fn with_precipitation(mut self, probability: Option<f64>, hours: Option<f64>) -> Self {
        self.precipitation_probability = probability;
        self.precipitation_hours = hours;
        self
    }

    pub fn with_temperatures(mut self, min: f64, max: f64) -> Self {
        self.temperature_min = min;
        self.temperature_max = max;
        self
    }

    pub fn with_wind(mut self, wind_speed: f64) -> Self {
        self.wind_speed = wind_speed;
        self
    }

    pub fn is_at(&self, location: &str) -> bool {
        self.location.trim().eq_ignore_ascii_case(location.trim())
    }
}

/// Inclusive date window. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DateRangeBounds")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct DateRangeBounds {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<DateRangeBounds> for DateRange {
    type Error = String;

    fn try_from(bounds: DateRangeBounds) -> Result<Self, Self::Error> {
        if bounds.start > bounds.end {
            return Err(format!(
                "date range starts on {} after it ends on {}",
                bounds.start, bounds.end
            ));
        }
        Ok(Self {
            start: bounds.start,
            end: bounds.end,
        })
    }
}

impl DateRange {
    /// Builds a range, swapping the bounds if they arrive reversed.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Seven days starting at `start`.
    pub fn week_of(start: NaiveDate) -> Self {
        Self::new(start, start.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

pub use evaluator::{Advisory, AdvisoryKind, Recommendation, Severity, SuitabilityVerdict};
pub use gate::{GateOutcome, WeeklyGateResult};
pub use impact::TaskWeatherConflict;

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reversed_bounds_are_normalized_by_new() {
        let range = DateRange::new(d(2025, 6, 8), d(2025, 6, 2));
        assert_eq!((range.start(), range.end()), (d(2025, 6, 2), d(2025, 6, 8)));
        assert_eq!(range.days(), 7);
        assert!(range.contains(d(2025, 6, 5)));
    }

    #[test]
    fn reversed_bounds_are_rejected_when_deserializing() {
        let err = serde_json::from_str::<DateRange>(r#"{"start":"2025-06-08","end":"2025-06-02"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("after it ends"), "unexpected message: {err}");

        let range: DateRange =
            serde_json::from_str(r#"{"start":"2025-06-02","end":"2025-06-08"}"#).unwrap();
        assert_eq!(range, DateRange::week_of(d(2025, 6, 2)));
    }

    #[test]
    fn week_of_saturates_at_the_last_date() {
        let range = DateRange::week_of(NaiveDate::MAX);
        assert_eq!(range.days(), 1);
    }
}
