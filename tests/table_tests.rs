use chrono::NaiveDate;
use site_schedule::table::{render_text_table, schedule_frame, verdict_frame};
use site_schedule::{
    CompletionTable, PhaseTemplate, TaskTemplate, WeatherObservation, WeatherPolicy,
    evaluate_all, generate,
};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn schedule_frame_has_one_row_per_task() {
    let plan = vec![
        PhaseTemplate::new("Foundation", 1)
            .with_task(TaskTemplate::new("Excavation", 2).with_profession("operator"))
            .with_task(TaskTemplate::new("Footings", 3)),
        PhaseTemplate::new("Framing", 2).with_task(TaskTemplate::new("Walls", 5)),
    ];
    let table = CompletionTable::from_rows(vec![vec![true]]);
    let schedule = generate(d(2025, 1, 1), &plan, &table).unwrap();
    let df = schedule_frame(&schedule).unwrap();

    assert_eq!(df.height(), 3);
    let tasks = df.column("task").unwrap().str().unwrap();
    assert_eq!(tasks.get(2), Some("Walls"));
    let phases = df.column("phase").unwrap().str().unwrap();
    assert_eq!(phases.get(2), Some("Framing"));
    let profession = df.column("profession").unwrap().str().unwrap();
    assert_eq!(profession.get(0), Some("operator"));
    assert_eq!(profession.get(1), None);

    let epoch = d(1970, 1, 1);
    let start = df.column("start_date").unwrap().date().unwrap();
    assert_eq!(start.get(2), Some((d(2025, 1, 6) - epoch).num_days() as i32));
    let status = df.column("status").unwrap().str().unwrap();
    assert_eq!(status.get(0), Some("completed"));

    let rendered = render_text_table(&df);
    assert!(rendered.contains("Excavation"));
    assert!(rendered.contains("2025-01-06"));
}

#[test]
fn verdict_frame_renders_advisories() {
    let observations = vec![
        WeatherObservation::new("Lyon", d(2025, 6, 2)),
        WeatherObservation::new("Lyon", d(2025, 6, 3))
            .with_precipitation(Some(95.0), Some(8.0))
            .with_wind(60.0),
    ];
    let verdicts = evaluate_all(&observations, &WeatherPolicy::default());
    let df = verdict_frame(&verdicts).unwrap();

    assert_eq!(df.height(), 2);
    let suitable = df.column("suitable").unwrap().bool().unwrap();
    assert_eq!(suitable.get(0), Some(true));
    assert_eq!(suitable.get(1), Some(false));
    let recommendation = df.column("recommendation").unwrap().str().unwrap();
    assert_eq!(recommendation.get(1), Some("avoid"));

    let rendered = render_text_table(&df);
    assert!(rendered.contains("Strong wind"));
}
