use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A reusable unit of work inside a phase template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskTemplate {
    pub name: String,
    /// Profession tag required to staff the task. `None`, an empty tag or
    /// `"none"` make the task profession-agnostic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    /// Calendar days, at least 1.
    pub duration_days: i64,
    #[serde(default = "default_required_people")]
    pub required_people: u32,
    /// Only outdoor tasks are checked against the forecast.
    #[serde(default = "default_outdoor")]
    pub outdoor: bool,
}

fn default_required_people() -> u32 {
    1
}

fn default_outdoor() -> bool {
    true
}

impl TaskTemplate {
    pub fn new(name: impl Into<String>, duration_days: i64) -> Self {
        Self {
            name: name.into(),
            profession: None,
            duration_days,
            required_people: 1,
            outdoor: true,
        }
    }

    pub fn with_profession(mut self, profession: impl Into<String>) -> Self {
        self.profession = Some(profession.into());
        self
    }

    pub fn with_required_people(mut self, required_people: u32) -> Self {
        self.required_people = required_people;
        self
    }

    pub fn indoor(mut self) -> Self {
        self.outdoor = false;
        self
    }

    /// The profession tag, or `None` when any profession may take the task.
    pub fn required_profession(&self) -> Option<&str> {
        normalize_profession(self.profession.as_deref())
    }
}

pub(crate) fn normalize_profession(tag: Option<&str>) -> Option<&str> {
    match tag.map(str::trim) {
        None | Some("") => None,
        Some(tag) if tag.eq_ignore_ascii_case("none") => None,
        Some(tag) => Some(tag),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseTemplate {
    pub name: String,
    pub sequence: u32,
    #[serde(default)]
    pub tasks: Vec<TaskTemplate>,
}

impl PhaseTemplate {
    pub fn new(name: impl Into<String>, sequence: u32) -> Self {
        Self {
            name: name.into(),
            sequence,
            tasks: Vec::new(),
        }
    }

    pub fn with_task(mut self, task: TaskTemplate) -> Self {
        self.tasks.push(task);
        self
    }

    /// Sum of the task durations, or `None` if it overflows. Recomputed on every call.
    pub fn total_duration_days(&self) -> Option<i64> {
        self.tasks
            .iter()
            .try_fold(0i64, |acc, t| acc.checked_add(t.duration_days))
    }
}

/// Per-task completion flags indexed `[phase][task]`.
///
/// Rows may be missing or shorter than the phase; absent cells read as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionTable {
    rows: Vec<Vec<bool>>,
}

impl CompletionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }

    /// A table with every flag cleared, shaped after `phases`.
    pub fn for_templates(phases: &[PhaseTemplate]) -> Self {
        Self {
            rows: phases.iter().map(|p| vec![false; p.tasks.len()]).collect(),
        }
    }

    pub fn is_done(&self, phase: usize, task: usize) -> bool {
        self.rows
            .get(phase)
            .and_then(|row| row.get(task))
            .copied()
            .unwrap_or(false)
    }

    pub fn set(&mut self, phase: usize, task: usize, done: bool) {
        if self.rows.len() <= phase {
            self.rows.resize_with(phase + 1, Vec::new);
        }
        let row = &mut self.rows[phase];
        if row.len() <= task {
            row.resize(task + 1, false);
        }
        row[task] = done;
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }
}

/// Everything needed to generate one project's schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectScheduleInput {
    pub name: String,
    pub start_date: NaiveDate,
    /// Site location used to look up forecasts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub phases: Vec<PhaseTemplate>,
    #[serde(default)]
    pub completion: CompletionTable,
}
