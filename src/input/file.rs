use super::{InputError, InputResult};
use crate::resource::{Availability, Resource};
use crate::task_validation;
use crate::template::ProjectScheduleInput;
use crate::weather::WeatherObservation;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

pub fn load_project_from_json<P: AsRef<Path>>(path: P) -> InputResult<ProjectScheduleInput> {
    let file = File::open(path)?;
    let input: ProjectScheduleInput = serde_json::from_reader(file)?;
    validate_project(&input)?;
    Ok(input)
}

pub fn validate_project(input: &ProjectScheduleInput) -> InputResult<()> {
    if input.phases.is_empty() {
        return Err(InputError::InvalidData(format!(
            "project '{}' has no phases",
            input.name
        )));
    }
    for pair in input.phases.windows(2) {
        if pair[1].sequence <= pair[0].sequence {
            return Err(InputError::InvalidData(format!(
                "phase '{}' (sequence {}) must come after '{}' (sequence {})",
                pair[1].name, pair[1].sequence, pair[0].name, pair[0].sequence
            )));
        }
    }
    task_validation::validate_phase_templates(&input.phases)?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct ObservationCsvRecord {
    location: String,
    date: String,
    #[serde(default)]
    precipitation_probability: String,
    #[serde(default)]
    precipitation_hours: String,
    temperature_min: String,
    temperature_max: String,
    wind_speed: String,
}

impl ObservationCsvRecord {
    fn into_observation(self) -> InputResult<WeatherObservation> {
        let location = self.location.trim().to_string();
        if location.is_empty() {
            return Err(InputError::InvalidData(
                "observation row requires a location".into(),
            ));
        }
        let date = parse_date(&self.date)?;

        let precipitation_probability = parse_f64(&self.precipitation_probability)?;
        if let Some(p) = precipitation_probability {
            if !(0.0..=100.0).contains(&p) {
                return Err(InputError::InvalidData(format!(
                    "{location} {date}: precipitation_probability {p} must be between 0 and 100"
                )));
            }
        }
        let precipitation_hours = parse_f64(&self.precipitation_hours)?;
        if let Some(h) = precipitation_hours {
            if h < 0.0 {
                return Err(InputError::InvalidData(format!(
                    "{location} {date}: precipitation_hours {h} must not be negative"
                )));
            }
        }

        Ok(WeatherObservation {
            location,
            date,
            precipitation_probability,
            precipitation_hours,
            temperature_min: require_f64("temperature_min", &self.temperature_min)?,
            temperature_max: require_f64("temperature_max", &self.temperature_max)?,
            wind_speed: require_f64("wind_speed", &self.wind_speed)?,
        })
    }
}

pub fn load_observations_from_csv<P: AsRef<Path>>(path: P) -> InputResult<Vec<WeatherObservation>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut observations = Vec::new();
    for record in reader.deserialize::<ObservationCsvRecord>() {
        observations.push(record?.into_observation()?);
    }
    Ok(observations)
}

#[derive(Debug, Deserialize)]
struct ResourceCsvRecord {
    name: String,
    #[serde(default)]
    profession: String,
    hourly_rate: String,
    #[serde(default)]
    availability: String,
    #[serde(default)]
    experience_years: String,
}

impl ResourceCsvRecord {
    fn into_resource(self) -> InputResult<Resource> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(InputError::InvalidData("resource row requires a name".into()));
        }
        let hourly_rate = require_f64("hourly_rate", &self.hourly_rate)?;
        if hourly_rate < 0.0 {
            return Err(InputError::InvalidData(format!(
                "resource '{name}' has invalid hourly_rate {hourly_rate}"
            )));
        }
        let availability = if self.availability.trim().is_empty() {
            Availability::Available
        } else {
            self.availability.parse::<Availability>().map_err(|e| {
                InputError::InvalidData(format!("resource '{name}' has {e}"))
            })?
        };
        let experience_years = if self.experience_years.trim().is_empty() {
            0
        } else {
            self.experience_years.trim().parse::<u32>().map_err(|e| {
                InputError::InvalidData(format!(
                    "resource '{name}' has invalid experience_years '{}': {e}",
                    self.experience_years
                ))
            })?
        };

        Ok(Resource {
            name,
            profession: self.profession.trim().to_string(),
            hourly_rate,
            availability,
            experience_years,
        })
    }
}

pub fn load_resources_from_csv<P: AsRef<Path>>(path: P) -> InputResult<Vec<Resource>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut resources = Vec::new();
    for record in reader.deserialize::<ResourceCsvRecord>() {
        resources.push(record?.into_resource()?);
    }
    Ok(resources)
}

fn parse_date(input: &str) -> InputResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| InputError::InvalidData(format!("invalid date '{input}': {e}")))
}

fn parse_f64(input: &str) -> InputResult<Option<f64>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    let value = input
        .trim()
        .parse::<f64>()
        .map_err(|e| InputError::InvalidData(format!("invalid float '{input}': {e}")))?;
    if !value.is_finite() {
        return Err(InputError::InvalidData(format!(
            "invalid float '{input}': must be a finite number"
        )));
    }
    Ok(Some(value))
}

fn require_f64(column: &str, input: &str) -> InputResult<f64> {
    parse_f64(input)?
        .ok_or_else(|| InputError::InvalidData(format!("missing value for {column}")))
}
