//! Output Rendering
//!
//! Text and JSON renderings of command results. Everything here returns a
//! `String`; printing is left to the command handlers.

use serde::Serialize;

use crate::application::{AllocationOutcome, PlannedSource};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
}

/// Two left/right aligned columns with a header row
fn columns(header: (&str, &str), rows: &[(String, String)]) -> Vec<String> {
    let left = rows
        .iter()
        .map(|(l, _)| l.chars().count())
        .chain(std::iter::once(header.0.chars().count()))
        .max()
        .unwrap_or(0);
    let right = rows
        .iter()
        .map(|(_, r)| r.chars().count())
        .chain(std::iter::once(header.1.chars().count()))
        .max()
        .unwrap_or(0);

    std::iter::once((header.0.to_string(), header.1.to_string()))
        .chain(rows.iter().cloned())
        .map(|(l, r)| format!("{:<left$}  {:>right$}", l, r))
        .collect()
}

pub fn render_outcome(outcome: &AllocationOutcome, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(outcome),
        OutputFormat::Text => render_outcome_text(outcome),
    }
}

fn render_outcome_text(outcome: &AllocationOutcome) -> String {
    let rows: Vec<(String, String)> = outcome
        .table
        .rows()
        .iter()
        .map(|row| (row.layer.clone(), format!("{:.1}", row.area_ha)))
        .collect();

    let mut lines = columns(("Layer", "area_ha"), &rows);
    lines.push(String::new());
    lines.push(format!(
        "master {:.1} ha, allocated {:.1} ha, unallocated {:.1} ha ({})",
        outcome.master_ha, outcome.allocated_ha, outcome.remaining_ha, outcome.crs
    ));
    if outcome.exhausted && outcome.skipped() > 0 {
        lines.push(format!(
            "master fully allocated after {} of {} sources; {} not visited",
            outcome.visited,
            outcome.discovered,
            outcome.skipped()
        ));
    }
    lines.join("\n")
}

pub fn render_plan(plan: &[PlannedSource], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(&plan),
        OutputFormat::Text => {
            if plan.is_empty() {
                return "no component sources found".to_string();
            }
            plan.iter()
                .enumerate()
                .map(|(i, source)| format!("{:>3}  {}  {}", i + 1, source.name, source.path.display()))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

#[derive(Serialize)]
struct CrsRow<'a> {
    code: &'a str,
    description: &'a str,
}

pub fn render_crs(rows: &[(String, String)], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let rows: Vec<CrsRow<'_>> = rows
                .iter()
                .map(|(code, description)| CrsRow { code, description })
                .collect();
            to_json(&rows)
        }
        OutputFormat::Text => columns(("CRS", "Description"), rows)
            .into_iter()
            .map(|line| line.trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
