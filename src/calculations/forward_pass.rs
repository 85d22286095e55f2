use crate::error::ScheduleError;
use crate::task::{PhaseInstance, TaskInstance, WorkStatus};
use crate::task_validation;
use crate::template::PhaseTemplate;
use chrono::{NaiveDate, TimeDelta};

/// Output of a forward pass: dated phases, dated tasks per phase, and the
/// date the last phase ends.
pub type ForwardPassResult = (Vec<PhaseInstance>, Vec<Vec<TaskInstance>>, NaiveDate);

/// Walks the phase templates in order and lays phases and their tasks
/// end-to-end on the calendar.
pub struct ForwardPass<'a> {
    phases: &'a [PhaseTemplate],
}

impl<'a> ForwardPass<'a> {
    pub fn new(phases: &'a [PhaseTemplate]) -> Self {
        Self { phases }
    }

    pub fn execute(&self, project_start: NaiveDate) -> Result<ForwardPassResult, ScheduleError> {
        task_validation::validate_phase_templates(self.phases)?;

        let mut phase_instances = Vec::with_capacity(self.phases.len());
        let mut task_instances = Vec::with_capacity(self.phases.len());
        let mut cursor = project_start;

        for (phase_index, phase) in self.phases.iter().enumerate() {
            let phase_start = cursor;

            let mut tasks = Vec::with_capacity(phase.tasks.len());
            let mut task_cursor = phase_start;
            for (task_index, task) in phase.tasks.iter().enumerate() {
                let task_end = TimeDelta::try_days(task.duration_days)
                    .and_then(|span| task_cursor.checked_add_signed(span))
                    .ok_or_else(|| ScheduleError::DateOutOfRange {
                        phase: phase.name.clone(),
                        task: task.name.clone(),
                    })?;
                tasks.push(TaskInstance {
                    phase_index,
                    task_index,
                    name: task.name.clone(),
                    profession: task.profession.clone(),
                    required_people: task.required_people,
                    outdoor: task.outdoor,
                    start_date: task_cursor,
                    end_date: task_end,
                    status: WorkStatus::NotStarted,
                    progress_percent: 0,
                    completed_date: None,
                });
                task_cursor = task_end;
            }

            // tasks run back to back, so the phase ends where its last task does
            let phase_end = task_cursor;
            phase_instances.push(PhaseInstance {
                phase_index,
                name: phase.name.clone(),
                sequence: phase.sequence,
                start_date: phase_start,
                end_date: phase_end,
                status: WorkStatus::NotStarted,
                progress_percent: 0,
            });
            task_instances.push(tasks);
            cursor = phase_end;
        }

        Ok((phase_instances, task_instances, cursor))
    }
}
