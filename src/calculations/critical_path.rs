use crate::schedule::Schedule;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalPathEntry {
    pub phase_name: String,
    pub task_name: String,
    pub duration_days: i64,
}

/// One representative task per phase, chained across the sequential phases.
///
/// This is not a CPM longest path: phases are the only dependency edges, so
/// the longest task of each phase stands in for the phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriticalPath {
    entries: Vec<CriticalPathEntry>,
}

impl CriticalPath {
    pub fn entries(&self) -> &[CriticalPathEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn total_duration_days(&self) -> i64 {
        self.entries.iter().map(|e| e.duration_days).sum()
    }

    pub fn to_cli_summary(&self) -> String {
        if self.entries.is_empty() {
            return "critical path is empty".to_string();
        }
        let chain = self
            .entries
            .iter()
            .map(|e| format!("{}:{}({}d)", e.phase_name, e.task_name, e.duration_days))
            .collect::<Vec<_>>()
            .join(" -> ");
        format!("{chain} = {}d", self.total_duration_days())
    }
}

pub fn critical_path(schedule: &Schedule) -> CriticalPath {
    let mut entries = Vec::with_capacity(schedule.phases().len());
    for phase in schedule.phases() {
        let mut longest = None;
        for task in schedule.tasks_in(phase.phase_index) {
            // strict comparison keeps the earliest task on ties
            match longest {
                Some((_, best)) if task.duration_days() <= best => {}
                _ => longest = Some((task, task.duration_days())),
            }
        }
        if let Some((task, duration_days)) = longest {
            entries.push(CriticalPathEntry {
                phase_name: phase.name.clone(),
                task_name: task.name.clone(),
                duration_days,
            });
        }
    }
    CriticalPath { entries }
}
