//! Tabular views of engine output for the presentation layer.

use crate::schedule::Schedule;
use crate::weather::SuitabilityVerdict;
use chrono::NaiveDate;
use polars::prelude::*;
use polars::prelude::PlSmallStr;

fn date_to_i32(date: NaiveDate) -> i32 {
    (date - NaiveDate::default()).num_days() as i32
}

fn date_series(name: &str, dates: Vec<i32>) -> PolarsResult<Series> {
    Series::new(name.into(), dates).cast(&DataType::Date)
}

/// One row per task, in phase then task order.
pub fn schedule_frame(schedule: &Schedule) -> PolarsResult<DataFrame> {
    let height = schedule.task_count();
    let mut phase = Vec::with_capacity(height);
    let mut task = Vec::with_capacity(height);
    let mut profession: Vec<Option<&str>> = Vec::with_capacity(height);
    let mut people = Vec::with_capacity(height);
    let mut start = Vec::with_capacity(height);
    let mut end = Vec::with_capacity(height);
    let mut duration = Vec::with_capacity(height);
    let mut status = Vec::with_capacity(height);
    let mut progress = Vec::with_capacity(height);

    for t in schedule.all_tasks() {
        let phase_name = schedule
            .phases()
            .get(t.phase_index)
            .map(|p| p.name.as_str())
            .unwrap_or("");
        phase.push(phase_name);
        task.push(t.name.as_str());
        profession.push(t.required_profession());
        people.push(t.required_people);
        start.push(date_to_i32(t.start_date));
        end.push(date_to_i32(t.end_date));
        duration.push(t.duration_days());
        status.push(t.status.as_str());
        progress.push(t.progress_percent as u32);
    }

    let columns = vec![
        Series::new(PlSmallStr::from_static("phase"), phase).into_column(),
        Series::new(PlSmallStr::from_static("task"), task).into_column(),
        Series::new(PlSmallStr::from_static("profession"), profession).into_column(),
        Series::new(PlSmallStr::from_static("required_people"), people).into_column(),
        date_series("start_date", start)?.into_column(),
        date_series("end_date", end)?.into_column(),
        Series::new(PlSmallStr::from_static("duration_days"), duration).into_column(),
        Series::new(PlSmallStr::from_static("status"), status).into_column(),
        Series::new(PlSmallStr::from_static("progress_percent"), progress).into_column(),
    ];
    DataFrame::new(columns)
}

pub fn verdict_frame(verdicts: &[SuitabilityVerdict]) -> PolarsResult<DataFrame> {
    let location: Vec<&str> = verdicts.iter().map(|v| v.location.as_str()).collect();
    let date: Vec<i32> = verdicts.iter().map(|v| date_to_i32(v.date)).collect();
    let suitable: Vec<bool> = verdicts.iter().map(|v| v.suitable).collect();
    let recommendation: Vec<&str> = verdicts.iter().map(|v| v.recommendation.as_str()).collect();
    let advisories: Vec<String> = verdicts
        .iter()
        .map(|v| {
            v.advisories
                .iter()
                .map(|a| a.message.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        })
        .collect();

    DataFrame::new(vec![
        Series::new(PlSmallStr::from_static("location"), location).into_column(),
        date_series("date", date)?.into_column(),
        Series::new(PlSmallStr::from_static("suitable"), suitable).into_column(),
        Series::new(PlSmallStr::from_static("recommendation"), recommendation).into_column(),
        Series::new(PlSmallStr::from_static("advisories"), advisories).into_column(),
    ])
}

fn cell(column: &Column, row: usize) -> String {
    match column.get(row) {
        Ok(AnyValue::Null) | Err(_) => String::new(),
        Ok(AnyValue::String(s)) => s.to_string(),
        Ok(other) => other.to_string(),
    }
}

/// Render a frame as a boxed ASCII grid.
pub fn render_text_table(df: &DataFrame) -> String {
    let columns = df.get_columns();
    let names: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();
    let rows: Vec<Vec<String>> = (0..df.height())
        .map(|row| columns.iter().map(|c| cell(c, row)).collect())
        .collect();

    let mut widths: Vec<usize> = names.iter().map(|n| n.chars().count()).collect();
    for row in &rows {
        for (ci, value) in row.iter().enumerate() {
            widths[ci] = widths[ci].max(value.chars().count());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let line = |values: &[String]| {
        let mut out = String::from("|");
        for (ci, value) in values.iter().enumerate() {
            let pad = widths[ci].saturating_sub(value.chars().count());
            out.push(' ');
            out.push_str(value);
            out.push_str(&" ".repeat(pad));
            out.push_str(" |");
        }
        out
    };

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&line(&names));
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    for row in &rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out.push_str(&sep);
    out.push('\n');
    out
}
