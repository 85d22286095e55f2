use crate::config::StaffingPolicy;
use crate::error::ParseLabelError;
use crate::task::TaskInstance;
use crate::template::normalize_profession;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    #[default]
    Available,
    Busy,
    OnLeave,
    Sick,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Busy => "busy",
            Availability::OnLeave => "on_leave",
            Availability::Sick => "sick",
        }
    }
}

impl FromStr for Availability {
    type Err = ParseLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(Availability::Available),
            "busy" => Ok(Availability::Busy),
            "on_leave" | "onleave" | "leave" => Ok(Availability::OnLeave),
            "sick" => Ok(Availability::Sick),
            _ => Err(ParseLabelError {
                kind: "availability",
                value: value.to_string(),
            }),
        }
    }
}

/// A person who can be assigned to site tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    /// Profession tag such as "electrician". Empty or "generic" marks a generalist.
    #[serde(default)]
    pub profession: String,
    /// Cost per hour. Non-negative.
    pub hourly_rate: f64,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub experience_years: u32,
}

impl Resource {
    pub fn new(name: impl Into<String>, profession: impl Into<String>, hourly_rate: f64) -> Self {
        Self {
            name: name.into(),
            profession: profession.into(),
            hourly_rate,
            availability: Availability::Available,
            experience_years: 0,
        }
    }

    pub fn with_experience(mut self, years: u32) -> Self {
        self.experience_years = years;
        self
    }

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    pub fn is_generalist(&self) -> bool {
        let tag = self.profession.trim();
        tag.is_empty() || tag.eq_ignore_ascii_case("generic")
    }

    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    /// Permissive match: equal tags, a profession-agnostic task, or a generalist.
    pub fn can_staff(&self, task_profession: Option<&str>) -> bool {
        match normalize_profession(task_profession) {
            None => true,
            Some(_) if self.is_generalist() => true,
            Some(required) => self.profession.trim().eq_ignore_ascii_case(required),
        }
    }
}

fn rank(a: &Resource, b: &Resource) -> Ordering {
    b.experience_years
        .cmp(&a.experience_years)
        .then_with(|| a.hourly_rate.total_cmp(&b.hourly_rate))
}

/// Available resources able to staff `task_profession`, most experienced
/// first and cheapest first among equals.
///
/// The full eligible list is returned; an empty list is a staffing gap, not
/// an error.
pub fn match_resources<'a>(
    task_profession: Option<&str>,
    pool: &'a [Resource],
) -> Vec<&'a Resource> {
    let mut candidates: Vec<&Resource> = pool
        .iter()
        .filter(|r| r.is_available() && r.can_staff(task_profession))
        .collect();
    candidates.sort_by(|a, b| rank(a, b));
    candidates
}

/// Top candidates for one task, trimmed to its headcount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffingPlan<'a> {
    pub task_name: String,
    pub required_people: u32,
    pub assigned: Vec<&'a Resource>,
    /// People still missing after every eligible candidate was assigned.
    pub shortfall: u32,
    /// Sum of assigned hourly rates times workday hours times task duration.
    pub estimated_labor_cost: f64,
}

impl StaffingPlan<'_> {
    pub fn is_fully_staffed(&self) -> bool {
        self.shortfall == 0
    }
}

pub fn plan_staffing<'a>(
    task: &TaskInstance,
    pool: &'a [Resource],
    policy: &StaffingPolicy,
) -> StaffingPlan<'a> {
    let mut assigned = match_resources(task.required_profession(), pool);
    assigned.truncate(task.required_people as usize);
    let shortfall = task.required_people.saturating_sub(assigned.len() as u32);
    let day_rate: f64 = assigned.iter().map(|r| r.hourly_rate).sum::<f64>() * policy.workday_hours;
    let estimated_labor_cost = day_rate * task.duration_days() as f64;

    if shortfall > 0 {
        warn!(
            task = %task.name,
            profession = task.required_profession().unwrap_or("any"),
            required = task.required_people,
            shortfall,
            "staffing gap"
        );
    }

    StaffingPlan {
        task_name: task.name.clone(),
        required_people: task.required_people,
        assigned,
        shortfall,
        estimated_labor_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generalists_and_agnostic_tasks_match_permissively() {
        let generalist = Resource::new("Gen", "generic", 20.0);
        let blank = Resource::new("Blank", "", 20.0);
        let welder = Resource::new("Weld", "Welder", 30.0);

        assert!(generalist.can_staff(Some("electrician")));
        assert!(blank.can_staff(Some("electrician")));
        assert!(welder.can_staff(None));
        assert!(welder.can_staff(Some("none")));
        assert!(welder.can_staff(Some("welder")));
        assert!(!welder.can_staff(Some("plumber")));
    }

    #[test]
    fn availability_parses_csv_spellings() {
        assert_eq!("On_Leave".parse::<Availability>(), Ok(Availability::OnLeave));
        assert_eq!(" busy ".parse::<Availability>(), Ok(Availability::Busy));
        assert!("retired".parse::<Availability>().is_err());
    }
}
