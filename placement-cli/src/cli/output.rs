// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Result formatting for CLI output

use super::commands::OutputFormat;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use placement::Session;
use placement_sdk::Job;
use serde_json::{json, Value};

/// Formatter for command results
pub struct OutputFormatter;

impl OutputFormatter {
    /// Format saved sessions (never their tokens)
    pub fn sessions(sessions: &[Session], format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::pretty(&Value::Array(
                sessions
                    .iter()
                    .map(|s| {
                        json!({
                            "role": s.role,
                            "dashboard": s.role.dashboard_route(),
                            "user": s.user_record.as_value(),
                        })
                    })
                    .collect(),
            )),
            OutputFormat::Table => {
                if sessions.is_empty() {
                    return format!("{}\n", "Not signed in".yellow());
                }
                let mut table = Self::table(&["Role", "User", "Dashboard"]);
                for session in sessions {
                    table.add_row(vec![
                        session.role.to_string(),
                        session.user_record.display_name().unwrap_or("-").to_string(),
                        session.role.dashboard_route().to_string(),
                    ]);
                }
                format!("{}\n", table)
            }
        }
    }

    pub fn jobs(jobs: &[Job], format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => match serde_json::to_value(jobs) {
                Ok(value) => Self::pretty(&value),
                Err(e) => format!("{{\"status\": \"error\", \"error\": \"{}\"}}", e),
            },
            OutputFormat::Table => {
                if jobs.is_empty() {
                    return format!("{}\n", "No jobs found".yellow());
                }
                let mut table = Self::table(&["Id", "Title", "Company", "Location", "Deadline"]);
                for job in jobs {
                    table.add_row(vec![
                        job.id.clone(),
                        job.title.clone(),
                        job.company_name.clone().unwrap_or_default(),
                        job.location.clone().unwrap_or_default(),
                        job.deadline
                            .map(|d| d.format("%Y-%m-%d").to_string())
                            .unwrap_or_default(),
                    ]);
                }
                format!("{}\nJobs: {}\n", table, jobs.len())
            }
        }
    }

    /// Format an arbitrary backend response
    ///
    /// In table mode an array of objects becomes one row per element, an
    /// object becomes field/value rows and anything else is printed as is.
    pub fn value(value: &Value, format: OutputFormat) -> String {
        if format == OutputFormat::Json {
            return Self::pretty(value);
        }
        match value {
            Value::Array(items) if items.iter().all(Value::is_object) && !items.is_empty() => {
                let mut columns: Vec<&str> = Vec::new();
                for item in items.iter().filter_map(Value::as_object) {
                    for key in item.keys() {
                        if !columns.contains(&key.as_str()) {
                            columns.push(key.as_str());
                        }
                    }
                }
                let mut table = Self::table(&columns);
                for item in items {
                    table.add_row(
                        columns
                            .iter()
                            .map(|c| Self::cell_text(item.get(*c).unwrap_or(&Value::Null)))
                            .collect::<Vec<_>>(),
                    );
                }
                format!("{}\nRows: {}\n", table, items.len())
            }
            Value::Object(fields) => {
                let mut table = Self::table(&["Field", "Value"]);
                for (key, field) in fields {
                    table.add_row(vec![key.clone(), Self::cell_text(field)]);
                }
                format!("{}\n", table)
            }
            Value::Array(items) if items.is_empty() => {
                format!("{}\n", "No results found".yellow())
            }
            other => format!("{}\n", Self::cell_text(other)),
        }
    }

    fn table(header: &[&str]) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(
            header
                .iter()
                .map(|h| Cell::new(h).fg(Color::Green))
                .collect::<Vec<_>>(),
        );
        table
    }

    fn cell_text(value: &Value) -> String {
        match value {
            Value::Null => "NULL".to_string(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    fn pretty(value: &Value) -> String {
        serde_json::to_string_pretty(value)
            .unwrap_or_else(|_| "{\"status\": \"error\"}".to_string())
    }
}
