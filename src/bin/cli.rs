use chrono::{Local, NaiveDate};
use site_schedule::table::{render_text_table, schedule_frame, verdict_frame};
use site_schedule::{
    DateRange, PolicyConfig, ProjectScheduleInput, Resource, Schedule, WeatherObservation,
    critical_path, evaluate_all, gate, load_observations_from_csv, load_policy_from_json,
    load_project_from_json, load_resources_from_csv, match_resources, plan_staffing, rollup,
    weather_conflicts,
};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct Session {
    policy: PolicyConfig,
    project: Option<ProjectScheduleInput>,
    schedule: Option<Schedule>,
    observations: Vec<WeatherObservation>,
    resources: Vec<Resource>,
}

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  policy <json_path>                 Load policy thresholds\n  project <json_path>                Load a project plan and generate its schedule\n  weather <csv_path>                 Load forecast observations\n  resources <csv_path>               Load the resource pool\n  generate                           Regenerate the schedule from the project plan\n  show                               Show the current schedule\n  done <phase> <task>                Mark a task completed (0-based indexes)\n  undo <phase> <task>                Clear a task's completion flag\n  rollup                             Show phase/project progress\n  critical                           Show the simplified critical path\n  match <profession|->               Rank available resources for a profession\n  staff <phase> <task>               Plan staffing for a task\n  forecast                           Show daily suitability verdicts\n  gate <location> <start> <end>      Weekly progression gate (YYYY-MM-DD)\n  conflicts                          Outdoor tasks overlapping unsuitable days\n  quit|exit                          Exit"
    );
}

fn parse_index(value: Option<&str>) -> Option<usize> {
    value.and_then(|v| v.parse::<usize>().ok())
}

fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok())
}

fn show_schedule(schedule: &Schedule) {
    match schedule_frame(schedule) {
        Ok(df) => println!(
            "{}Project {} -> {}",
            render_text_table(&df),
            schedule.project_start_date(),
            schedule.project_end_date()
        ),
        Err(e) => println!("Error rendering schedule: {}", e),
    }
}

impl Session {
    fn regenerate(&mut self) {
        let Some(project) = &self.project else {
            println!("No project loaded.");
            return;
        };
        match Schedule::from_input(project) {
            Ok(mut schedule) => {
                rollup(&schedule, &project.completion).apply_to(&mut schedule);
                show_schedule(&schedule);
                self.schedule = Some(schedule);
            }
            Err(e) => {
                self.schedule = None;
                println!("Schedule error: {}", e);
            }
        }
    }

    fn set_done(&mut self, phase: usize, task: usize, done: bool) {
        let (Some(project), Some(schedule)) = (&mut self.project, &mut self.schedule) else {
            println!("No schedule generated.");
            return;
        };
        if schedule.task(phase, task).is_none() {
            println!("Task {phase}/{task} not found.");
            return;
        }
        project.completion.set(phase, task, done);
        schedule.apply_completion(&project.completion, Local::now().date_naive());
        let summary = rollup(schedule, &project.completion);
        summary.apply_to(schedule);
        println!(
            "Task {phase}/{task} {}. {}",
            if done { "completed" } else { "reopened" },
            summary.to_cli_summary()
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut session = Session::default();
    println!("Site Schedule (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "policy" => match parts.next() {
                Some(path) => match load_policy_from_json(path) {
                    Ok(policy) => {
                        session.policy = policy;
                        println!("Policy loaded from {path}.");
                    }
                    Err(e) => println!("Policy error: {}", e),
                },
                None => println!("Usage: policy <json_path>"),
            },
            "project" => match parts.next() {
                Some(path) => match load_project_from_json(path) {
                    Ok(project) => {
                        println!("Project '{}' loaded from {path}.", project.name);
                        session.project = Some(project);
                        session.regenerate();
                    }
                    Err(e) => println!("Project error: {}", e),
                },
                None => println!("Usage: project <json_path>"),
            },
            "weather" => match parts.next() {
                Some(path) => match load_observations_from_csv(path) {
                    Ok(observations) => {
                        println!("Loaded {} observations.", observations.len());
                        session.observations = observations;
                    }
                    Err(e) => println!("Weather error: {}", e),
                },
                None => println!("Usage: weather <csv_path>"),
            },
            "resources" => match parts.next() {
                Some(path) => match load_resources_from_csv(path) {
                    Ok(resources) => {
                        println!("Loaded {} resources.", resources.len());
                        session.resources = resources;
                    }
                    Err(e) => println!("Resources error: {}", e),
                },
                None => println!("Usage: resources <csv_path>"),
            },
            "generate" => session.regenerate(),
            "show" => match &session.schedule {
                Some(schedule) => show_schedule(schedule),
                None => println!("No schedule generated."),
            },
            "done" | "undo" => match (parse_index(parts.next()), parse_index(parts.next())) {
                (Some(phase), Some(task)) => session.set_done(phase, task, cmd == "done"),
                _ => println!("Usage: {cmd} <phase> <task>"),
            },
            "rollup" => match (&session.project, &session.schedule) {
                (Some(project), Some(schedule)) => {
                    println!("{}", rollup(schedule, &project.completion).to_cli_summary());
                }
                _ => println!("No schedule generated."),
            },
            "critical" => match &session.schedule {
                Some(schedule) => println!("{}", critical_path(schedule).to_cli_summary()),
                None => println!("No schedule generated."),
            },
            "match" => {
                let profession = parts.next().filter(|p| *p != "-");
                let ranked = match_resources(profession, &session.resources);
                if ranked.is_empty() {
                    println!("No available resources match.");
                }
                for (rank, r) in ranked.iter().enumerate() {
                    println!(
                        "{:>2}. {:<20} {:<14} {:>3}y {:>8.2}/h",
                        rank + 1,
                        r.name,
                        r.profession,
                        r.experience_years,
                        r.hourly_rate
                    );
                }
            }
            "staff" => {
                let (phase, task) = (parse_index(parts.next()), parse_index(parts.next()));
                let found = match (&session.schedule, phase, task) {
                    (Some(schedule), Some(p), Some(t)) => schedule.task(p, t),
                    _ => None,
                };
                match found {
                    Some(task) => {
                        let plan = plan_staffing(task, &session.resources, &session.policy.staffing);
                        let names = plan
                            .assigned
                            .iter()
                            .map(|r| r.name.as_str())
                            .collect::<Vec<_>>()
                            .join(", ");
                        println!(
                            "{}: assigned [{}], shortfall={}, cost={:.2}",
                            plan.task_name, names, plan.shortfall, plan.estimated_labor_cost
                        );
                    }
                    None => println!("Usage: staff <phase> <task> (after generate)"),
                }
            }
            "forecast" => {
                let verdicts = evaluate_all(&session.observations, &session.policy.weather);
                match verdict_frame(&verdicts) {
                    Ok(df) => println!("{}", render_text_table(&df)),
                    Err(e) => println!("Error rendering forecast: {}", e),
                }
            }
            "gate" => {
                let location = parts.next();
                let start = parse_date(parts.next());
                let end = parse_date(parts.next());
                match (location, start, end) {
                    (Some(location), Some(start), Some(end)) => {
                        let result = gate(
                            location,
                            DateRange::new(start, end),
                            &session.observations,
                            &session.policy,
                        );
                        println!("{}", result.to_cli_summary());
                    }
                    _ => println!("Usage: gate <location> <YYYY-MM-DD> <YYYY-MM-DD>"),
                }
            }
            "conflicts" => {
                let location = session.project.as_ref().and_then(|p| p.location.clone());
                match (&session.schedule, location) {
                    (Some(schedule), Some(location)) => {
                        let conflicts = weather_conflicts(
                            schedule,
                            &location,
                            &session.observations,
                            &session.policy.weather,
                        );
                        if conflicts.is_empty() {
                            println!("No weather conflicts.");
                        }
                        for c in conflicts {
                            let dates = c
                                .unsuitable_dates
                                .iter()
                                .map(ToString::to_string)
                                .collect::<Vec<_>>()
                                .join(",");
                            println!(
                                "{}/{} {}: unsuitable on {}",
                                c.phase_index, c.task_index, c.task_name, dates
                            );
                        }
                    }
                    _ => println!("Need a generated schedule with a project location."),
                }
            }
            _ => println!("Unknown command. Type 'help'."),
        }
    }
}
