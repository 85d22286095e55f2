use crate::calculations::forward_pass::ForwardPass;
use crate::error::ScheduleError;
use crate::task::{PhaseInstance, TaskInstance};
use crate::template::{CompletionTable, PhaseTemplate, ProjectScheduleInput};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Dated phases and tasks for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    project_start: NaiveDate,
    project_end: NaiveDate,
    phases: Vec<PhaseInstance>,
    tasks: Vec<Vec<TaskInstance>>,
}

/// Lay the phase templates end-to-end from `start_date`.
///
/// Phases and tasks are strictly sequential. Tasks flagged in `completion`
/// come out `Completed`; everything else starts `NotStarted`. Durations below
/// one day or headcounts below one person are rejected.
pub fn generate(
    start_date: NaiveDate,
    phases: &[PhaseTemplate],
    completion: &CompletionTable,
) -> Result<Schedule, ScheduleError> {
    let (phase_instances, mut task_instances, project_end) =
        ForwardPass::new(phases).execute(start_date)?;

    for task in task_instances.iter_mut().flatten() {
        if completion.is_done(task.phase_index, task.task_index) {
            task.mark_completed(None);
        }
    }

    debug!(
        phases = phase_instances.len(),
        tasks = task_instances.iter().map(Vec::len).sum::<usize>(),
        %start_date,
        %project_end,
        "generated schedule"
    );

    Ok(Schedule {
        project_start: start_date,
        project_end,
        phases: phase_instances,
        tasks: task_instances,
    })
}

impl Schedule {
    pub fn from_input(input: &ProjectScheduleInput) -> Result<Self, ScheduleError> {
        generate(input.start_date, &input.phases, &input.completion)
    }

    pub fn project_start_date(&self) -> NaiveDate {
        self.project_start
    }

    pub fn project_end_date(&self) -> NaiveDate {
        self.project_end
    }

    pub fn phases(&self) -> &[PhaseInstance] {
        &self.phases
    }

    pub fn phases_mut(&mut self) -> &mut [PhaseInstance] {
        &mut self.phases
    }

    pub fn tasks(&self) -> &[Vec<TaskInstance>] {
        &self.tasks
    }

    pub fn tasks_in(&self, phase_index: usize) -> &[TaskInstance] {
        self.tasks
            .get(phase_index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn task(&self, phase_index: usize, task_index: usize) -> Option<&TaskInstance> {
        self.tasks.get(phase_index)?.get(task_index)
    }

    pub fn task_count(&self) -> usize {
        self.tasks.iter().map(Vec::len).sum()
    }

    pub fn all_tasks(&self) -> impl Iterator<Item = &TaskInstance> + '_ {
        self.tasks.iter().flatten()
    }

    /// Re-sync task statuses with an edited completion table.
    ///
    /// Newly completed tasks are stamped with `on`; tasks whose flag was
    /// cleared go back to `NotStarted`.
    pub fn apply_completion(&mut self, completion: &CompletionTable, on: NaiveDate) {
        for task in self.tasks.iter_mut().flatten() {
            let done = completion.is_done(task.phase_index, task.task_index);
            match (done, task.is_completed()) {
                (true, false) => task.mark_completed(Some(on)),
                (false, true) => task.reopen(),
                _ => {}
            }
        }
    }
}
