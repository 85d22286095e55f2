use chrono::NaiveDate;
use site_schedule::{
    Availability, InputError, Schedule, load_observations_from_csv, load_project_from_json,
    load_resources_from_csv,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const PROJECT_JSON: &str = r#"{
    "name": "Riverside duplex",
    "start_date": "2025-01-01",
    "location": "Lyon",
    "phases": [
        {
            "name": "Foundation",
            "sequence": 1,
            "tasks": [
                { "name": "Excavation", "profession": "operator", "duration_days": 2 },
                { "name": "Footings", "profession": "mason", "duration_days": 3, "required_people": 2 }
            ]
        },
        {
            "name": "Interior",
            "sequence": 2,
            "tasks": [
                { "name": "Drywall", "duration_days": 5, "outdoor": false }
            ]
        }
    ],
    "completion": [[true]]
}"#;

#[test]
fn project_json_loads_with_defaults_and_generates() {
    let file = write_temp(PROJECT_JSON);
    let project = load_project_from_json(file.path()).unwrap();

    assert_eq!(project.location.as_deref(), Some("Lyon"));
    let excavation = &project.phases[0].tasks[0];
    assert_eq!(excavation.required_people, 1);
    assert!(excavation.outdoor);
    assert!(!project.phases[1].tasks[0].outdoor);
    assert!(project.completion.is_done(0, 0));

    let schedule = Schedule::from_input(&project).unwrap();
    assert_eq!(schedule.project_end_date(), d(2025, 1, 11));
    assert!(schedule.task(0, 0).unwrap().is_completed());
}

#[test]
fn project_with_zero_duration_is_rejected() {
    let file = write_temp(&PROJECT_JSON.replace("\"duration_days\": 5", "\"duration_days\": 0"));
    match load_project_from_json(file.path()) {
        Err(InputError::Schedule(err)) => {
            assert!(err.to_string().contains("Drywall"), "unexpected message: {err}")
        }
        Err(other) => panic!("expected schedule validation error, got {other:?}"),
        Ok(_) => panic!("expected zero duration to be rejected"),
    }
}

#[test]
fn project_with_unordered_phases_is_rejected() {
    let file = write_temp(&PROJECT_JSON.replace("\"sequence\": 2", "\"sequence\": 1"));
    match load_project_from_json(file.path()) {
        Err(InputError::InvalidData(msg)) => {
            assert!(msg.contains("must come after"), "unexpected message: {msg}")
        }
        Err(other) => panic!("expected InvalidData error, got {other:?}"),
        Ok(_) => panic!("expected sequence validation failure"),
    }
}

#[test]
fn observations_csv_treats_blank_precipitation_as_absent() {
    let file = write_temp(
        "location,date,precipitation_probability,precipitation_hours,temperature_min,temperature_max,wind_speed\n\
         Lyon,2025-06-02,35,1.5,12,24,18\n\
         Lyon,2025-06-03,,,11,22,9\n",
    );
    let observations = load_observations_from_csv(file.path()).unwrap();
    assert_eq!(observations.len(), 2);
    assert_eq!(observations[0].precipitation_probability, Some(35.0));
    assert_eq!(observations[0].precipitation_hours, Some(1.5));
    assert_eq!(observations[1].date, d(2025, 6, 3));
    assert_eq!(observations[1].precipitation_probability, None);
    assert_eq!(observations[1].precipitation_hours, None);
}

#[test]
fn observations_csv_rejects_out_of_range_probability() {
    let file = write_temp(
        "location,date,precipitation_probability,precipitation_hours,temperature_min,temperature_max,wind_speed\n\
         Lyon,2025-06-02,135,0,12,24,18\n",
    );
    match load_observations_from_csv(file.path()) {
        Err(InputError::InvalidData(msg)) => {
            assert!(msg.contains("between 0 and 100"), "unexpected message: {msg}")
        }
        Err(other) => panic!("expected InvalidData error, got {other:?}"),
        Ok(_) => panic!("expected probability validation failure"),
    }
}

#[test]
fn observations_csv_rejects_non_finite_values() {
    for row in [
        "Lyon,2025-06-02,10,NaN,5,20,10",
        "Lyon,2025-06-02,10,0,5,inf,10",
        "Lyon,2025-06-02,10,0,5,20,NaN",
    ] {
        let file = write_temp(&format!(
            "location,date,precipitation_probability,precipitation_hours,temperature_min,temperature_max,wind_speed\n{row}\n"
        ));
        match load_observations_from_csv(file.path()) {
            Err(InputError::InvalidData(msg)) => {
                assert!(msg.contains("finite"), "unexpected message: {msg}")
            }
            Err(other) => panic!("expected InvalidData error, got {other:?}"),
            Ok(obs) => panic!("expected '{row}' to be rejected, loaded {obs:?}"),
        }
    }
}

#[test]
fn resources_csv_rejects_non_finite_rate() {
    let file = write_temp(
        "name,profession,hourly_rate,availability,experience_years\n\
         Ana,electrician,inf,available,8\n",
    );
    assert!(matches!(
        load_resources_from_csv(file.path()),
        Err(InputError::InvalidData(msg)) if msg.contains("finite")
    ));
}

#[test]
fn resources_csv_parses_availability_and_defaults() {
    let file = write_temp(
        "name,profession,hourly_rate,availability,experience_years\n\
         Ana,electrician,42.5,available,8\n\
         Ben,,25,on_leave,\n\
         Cleo,plumber,35,,12\n",
    );
    let resources = load_resources_from_csv(file.path()).unwrap();
    assert_eq!(resources.len(), 3);
    assert_eq!(resources[0].hourly_rate, 42.5);
    assert!(resources[1].is_generalist());
    assert_eq!(resources[1].availability, Availability::OnLeave);
    assert_eq!(resources[1].experience_years, 0);
    assert_eq!(resources[2].availability, Availability::Available);
}

#[test]
fn resources_csv_rejects_negative_rate() {
    let file = write_temp(
        "name,profession,hourly_rate,availability,experience_years\n\
         Ana,electrician,-1,available,8\n",
    );
    match load_resources_from_csv(file.path()) {
        Err(InputError::InvalidData(msg)) => {
            assert!(msg.contains("invalid hourly_rate"), "unexpected message: {msg}")
        }
        Err(other) => panic!("expected InvalidData error, got {other:?}"),
        Ok(_) => panic!("expected negative rate to be rejected"),
    }
}

#[test]
fn resources_csv_names_unknown_availability() {
    let file = write_temp(
        "name,profession,hourly_rate,availability,experience_years\n\
         Ana,electrician,40,retired,8\n",
    );
    match load_resources_from_csv(file.path()) {
        Err(InputError::InvalidData(msg)) => assert_eq!(
            msg,
            "resource 'Ana' has unknown availability 'retired'"
        ),
        Err(other) => panic!("expected InvalidData error, got {other:?}"),
        Ok(_) => panic!("expected availability to be rejected"),
    }
}
