use chrono::NaiveDate;
use site_schedule::{
    CompletionTable, PhaseTemplate, Schedule, TaskTemplate, WorkStatus, critical_path, generate,
    rollup,
};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn house() -> Vec<PhaseTemplate> {
    vec![
        PhaseTemplate::new("Foundation", 1)
            .with_task(TaskTemplate::new("Excavation", 2))
            .with_task(TaskTemplate::new("Footings", 3))
            .with_task(TaskTemplate::new("Slab", 3)),
        PhaseTemplate::new("Inspection", 2),
        PhaseTemplate::new("Framing", 3)
            .with_task(TaskTemplate::new("Walls", 5))
            .with_task(TaskTemplate::new("Roof trusses", 4)),
    ]
}

fn schedule_for(table: &CompletionTable) -> Schedule {
    generate(d(2025, 4, 7), &house(), table).unwrap()
}

#[test]
fn phase_and_project_progress_use_integer_division() {
    let table = CompletionTable::from_rows(vec![vec![true, false, false], vec![], vec![true, true]]);
    let summary = rollup(&schedule_for(&table), &table);

    assert_eq!(summary.phases[0].progress_percent, 33);
    assert_eq!(summary.phases[0].status, WorkStatus::InProgress);
    assert_eq!(summary.phases[1].progress_percent, 0);
    assert_eq!(summary.phases[1].total_tasks, 0);
    assert_eq!(summary.phases[2].progress_percent, 100);
    assert_eq!(summary.phases[2].status, WorkStatus::Completed);

    assert_eq!((summary.completed_tasks, summary.total_tasks), (3, 5));
    assert_eq!(summary.project_progress, 60);
}

#[test]
fn progress_hits_100_only_when_everything_is_done() {
    let mut table = CompletionTable::for_templates(&house());
    let schedule = schedule_for(&table);
    let coords: Vec<(usize, usize)> = schedule
        .all_tasks()
        .map(|t| (t.phase_index, t.task_index))
        .collect();

    for (i, (phase, task)) in coords.iter().enumerate() {
        let summary = rollup(&schedule, &table);
        assert!(summary.project_progress < 100, "step {i} reached 100 early");
        assert!(summary.phases.iter().all(|p| p.progress_percent <= 100));
        table.set(*phase, *task, true);
    }

    let summary = rollup(&schedule, &table);
    assert_eq!(summary.project_progress, 100);
}

#[test]
fn no_tasks_means_zero_progress() {
    let plan = vec![PhaseTemplate::new("Permits", 1)];
    let table = CompletionTable::new();
    let schedule = generate(d(2025, 4, 7), &plan, &table).unwrap();
    let summary = rollup(&schedule, &table);
    assert_eq!(summary.project_progress, 0);
    assert!(summary.critical_path.is_empty());
}

#[test]
fn apply_to_writes_phase_progress_and_status() {
    let table = CompletionTable::from_rows(vec![vec![true, true, true], vec![], vec![false, true]]);
    let mut schedule = schedule_for(&table);
    rollup(&schedule, &table).apply_to(&mut schedule);

    let phases = schedule.phases();
    assert_eq!((phases[0].progress_percent, phases[0].status), (100, WorkStatus::Completed));
    assert_eq!((phases[1].progress_percent, phases[1].status), (0, WorkStatus::NotStarted));
    assert_eq!((phases[2].progress_percent, phases[2].status), (50, WorkStatus::InProgress));
}

#[test]
fn critical_path_takes_longest_task_per_phase_and_skips_empty_phases() {
    let path = critical_path(&schedule_for(&CompletionTable::new()));
    let entries = path.entries();
    assert_eq!(entries.len(), 2);

    // Footings and Slab tie at 3 days; the earlier task wins
    assert_eq!(entries[0].phase_name, "Foundation");
    assert_eq!(entries[0].task_name, "Footings");
    assert_eq!(entries[0].duration_days, 3);

    assert_eq!(entries[1].phase_name, "Framing");
    assert_eq!(entries[1].task_name, "Walls");
    assert_eq!(entries[1].duration_days, 5);

    assert_eq!(path.total_duration_days(), 8);
}
