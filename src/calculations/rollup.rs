use crate::calculations::critical_path::{CriticalPath, critical_path};
use crate::schedule::Schedule;
use crate::task::WorkStatus;
use crate::template::CompletionTable;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseProgress {
    pub phase_index: usize,
    pub name: String,
    pub completed_tasks: usize,
    pub total_tasks: usize,
    pub progress_percent: u8,
    pub status: WorkStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRollup {
    pub phases: Vec<PhaseProgress>,
    pub completed_tasks: usize,
    pub total_tasks: usize,
    pub project_progress: u8,
    pub critical_path: CriticalPath,
}

impl ProgressRollup {
    /// Write percentages and derived statuses back into the schedule's phases.
    pub fn apply_to(&self, schedule: &mut Schedule) {
        for (phase, progress) in schedule.phases_mut().iter_mut().zip(&self.phases) {
            phase.progress_percent = progress.progress_percent;
            phase.status = progress.status;
        }
    }

    pub fn to_cli_summary(&self) -> String {
        let mut parts = vec![format!(
            "project={}% ({}/{})",
            self.project_progress, self.completed_tasks, self.total_tasks
        )];
        for phase in &self.phases {
            parts.push(format!(
                "{}={}% [{}]",
                phase.name,
                phase.progress_percent,
                phase.status.as_str()
            ));
        }
        parts.join(", ")
    }
}

/// `done * 100 / total` with integer division, or 0 for an empty scope.
pub fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // done never exceeds total, so the quotient fits in 0..=100
    (done.min(total) * 100 / total) as u8
}

fn derive_status(done: usize, total: usize, current: WorkStatus) -> WorkStatus {
    if total > 0 && done == total {
        WorkStatus::Completed
    } else if done > 0 {
        WorkStatus::InProgress
    } else if current == WorkStatus::OnHold {
        WorkStatus::OnHold
    } else {
        WorkStatus::NotStarted
    }
}

/// Roll completion flags up into phase and project percentages and attach
/// the simplified critical path.
pub fn rollup(schedule: &Schedule, completion: &CompletionTable) -> ProgressRollup {
    let mut phases = Vec::with_capacity(schedule.phases().len());
    let mut completed_tasks = 0usize;
    let mut total_tasks = 0usize;

    for phase in schedule.phases() {
        let tasks = schedule.tasks_in(phase.phase_index);
        let total = tasks.len();
        let done = tasks
            .iter()
            .filter(|t| completion.is_done(t.phase_index, t.task_index))
            .count();
        completed_tasks += done;
        total_tasks += total;

        phases.push(PhaseProgress {
            phase_index: phase.phase_index,
            name: phase.name.clone(),
            completed_tasks: done,
            total_tasks: total,
            progress_percent: percent(done, total),
            status: derive_status(done, total, phase.status),
        });
    }

    let project_progress = percent(completed_tasks, total_tasks);
    debug!(completed_tasks, total_tasks, project_progress, "rolled up progress");

    ProgressRollup {
        phases,
        completed_tasks,
        total_tasks,
        project_progress,
        critical_path: critical_path(schedule),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_uses_integer_division() {
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 66);
        assert_eq!(percent(3, 3), 100);
        assert_eq!(percent(0, 0), 0);
    }

    #[test]
    fn on_hold_survives_until_work_is_done() {
        assert_eq!(derive_status(0, 2, WorkStatus::OnHold), WorkStatus::OnHold);
        assert_eq!(derive_status(1, 2, WorkStatus::OnHold), WorkStatus::InProgress);
        assert_eq!(derive_status(2, 2, WorkStatus::OnHold), WorkStatus::Completed);
        assert_eq!(derive_status(0, 0, WorkStatus::NotStarted), WorkStatus::NotStarted);
    }
}
