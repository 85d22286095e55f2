//! Error types for the scheduling engine.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("task '{task}' in phase '{phase}' has invalid duration {duration_days} (must be at least 1 day)")]
    InvalidDuration {
        phase: String,
        task: String,
        duration_days: i64,
    },

    #[error("task '{task}' in phase '{phase}' requires {required_people} people (must be at least 1)")]
    InvalidHeadcount {
        phase: String,
        task: String,
        required_people: u32,
    },

    #[error("task '{task}' in phase '{phase}' ends outside the supported calendar range")]
    DateOutOfRange { phase: String, task: String },
}

/// An unrecognised label for a status-like enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
