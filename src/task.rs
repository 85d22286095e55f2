use crate::error::ParseLabelError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    OnHold,
}

impl WorkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkStatus::NotStarted => "not_started",
            WorkStatus::InProgress => "in_progress",
            WorkStatus::Completed => "completed",
            WorkStatus::OnHold => "on_hold",
        }
    }
}

impl FromStr for WorkStatus {
    type Err = ParseLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "not_started" | "notstarted" => Ok(WorkStatus::NotStarted),
            "in_progress" | "inprogress" => Ok(WorkStatus::InProgress),
            "completed" | "done" => Ok(WorkStatus::Completed),
            "on_hold" | "onhold" => Ok(WorkStatus::OnHold),
            _ => Err(ParseLabelError {
                kind: "work status",
                value: value.to_string(),
            }),
        }
    }
}

/// A dated realization of a [`crate::TaskTemplate`] for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInstance {
    pub phase_index: usize,
    pub task_index: usize,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    pub required_people: u32,
    pub outdoor: bool,
    pub start_date: NaiveDate,
    /// Exclusive: the next task starts on this date.
    pub end_date: NaiveDate,
    pub status: WorkStatus,
    pub progress_percent: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<NaiveDate>,
}

impl TaskInstance {
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    pub fn is_completed(&self) -> bool {
        self.status == WorkStatus::Completed
    }

    pub fn required_profession(&self) -> Option<&str> {
        crate::template::normalize_profession(self.profession.as_deref())
    }

    /// Whether `date` falls inside `[start_date, end_date)`.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date < self.end_date
    }

    pub fn mark_completed(&mut self, on: Option<NaiveDate>) {
        self.status = WorkStatus::Completed;
        self.progress_percent = 100;
        if self.completed_date.is_none() {
            self.completed_date = on;
        }
    }

    pub fn reopen(&mut self) {
        self.status = WorkStatus::NotStarted;
        self.progress_percent = 0;
        self.completed_date = None;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseInstance {
    pub phase_index: usize,
    pub name: String,
    pub sequence: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: WorkStatus,
    pub progress_percent: u8,
}

impl PhaseInstance {
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
