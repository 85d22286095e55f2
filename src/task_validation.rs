use crate::error::ScheduleError;
use crate::template::{PhaseTemplate, TaskTemplate};

pub fn validate_task(phase: &PhaseTemplate, task: &TaskTemplate) -> Result<(), ScheduleError> {
    if task.duration_days < 1 {
        return Err(ScheduleError::InvalidDuration {
            phase: phase.name.clone(),
            task: task.name.clone(),
            duration_days: task.duration_days,
        });
    }
    if task.required_people < 1 {
        return Err(ScheduleError::InvalidHeadcount {
            phase: phase.name.clone(),
            task: task.name.clone(),
            required_people: task.required_people,
        });
    }
    Ok(())
}

pub fn validate_phase_templates(phases: &[PhaseTemplate]) -> Result<(), ScheduleError> {
    for phase in phases {
        for task in &phase.tasks {
            validate_task(phase, task)?;
        }
    }
    Ok(())
}
