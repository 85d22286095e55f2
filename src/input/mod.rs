//! File loaders for the inputs the engines consume.

use crate::error::ScheduleError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

pub type InputResult<T> = Result<T, InputError>;

pub mod file;

pub use file::{load_observations_from_csv, load_project_from_json, load_resources_from_csv};
