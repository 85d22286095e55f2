use super::WeatherObservation;
use super::evaluator::is_good_day;
use crate::config::WeatherPolicy;
use crate::schedule::Schedule;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An outdoor task whose window contains forecast days unfit for work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskWeatherConflict {
    pub phase_index: usize,
    pub task_index: usize,
    pub task_name: String,
    pub unsuitable_dates: Vec<NaiveDate>,
    /// Forecast days found inside the task window, good or bad.
    pub observed_days: usize,
}

/// Outdoor tasks that are not yet completed and overlap unsuitable days at `location`.
pub fn weather_conflicts(
    schedule: &Schedule,
    location: &str,
    observations: &[WeatherObservation],
    policy: &WeatherPolicy,
) -> Vec<TaskWeatherConflict> {
    let local: Vec<&WeatherObservation> =
        observations.iter().filter(|o| o.is_at(location)).collect();

    schedule
        .all_tasks()
        .filter(|task| task.outdoor && !task.is_completed())
        .filter_map(|task| {
            let in_window: Vec<&&WeatherObservation> =
                local.iter().filter(|o| task.covers(o.date)).collect();
            let mut unsuitable_dates: Vec<NaiveDate> = in_window
                .iter()
                .filter(|o| !is_good_day(o, policy))
                .map(|o| o.date)
                .collect();
            if unsuitable_dates.is_empty() {
                return None;
            }
            unsuitable_dates.sort();
            unsuitable_dates.dedup();
            Some(TaskWeatherConflict {
                phase_index: task.phase_index,
                task_index: task.task_index,
                task_name: task.name.clone(),
                unsuitable_dates,
                observed_days: in_window.len(),
            })
        })
        .collect()
}
