//! Plain-text views for the terminal

use std::fmt::Write as _;

use serde_json::Value;

use crate::console::{DataSource, Loaded, Overview, SessionState};
use crate::records::{Alarm, DashboardSummary, Device};

const PLACEHOLDER_NOTE: &str = "(server unavailable, showing placeholder data)";

fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&pad_row(headers.iter().copied(), &widths));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for row in rows {
        out.push_str(&pad_row(row.iter().map(String::as_str), &widths));
        out.push('\n');
    }
    out
}

fn pad_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    padded.join("  ").trim_end().to_string()
}

fn with_source(title: &str, source: DataSource, body: String) -> String {
    let mut out = format!("{}\n", title);
    if source == DataSource::Placeholder {
        out.push_str(PLACEHOLDER_NOTE);
        out.push('\n');
    }
    out.push_str(&body);
    out
}

pub fn summary(loaded: &Loaded<DashboardSummary>) -> String {
    let s = &loaded.data;
    let body = format!(
        "Total alarms:   {}\nPending alarms: {}\nTotal energy:   {:.2}\nPeak load:      {:.2}\n",
        s.total_alarms, s.pending_alarms, s.total_energy, s.peak_load
    );
    with_source("Dashboard", loaded.source, body)
}

pub fn alarms(loaded: &Loaded<Vec<Alarm>>) -> String {
    let rows: Vec<Vec<String>> = loaded
        .data
        .iter()
        .map(|a| {
            vec![
                a.alarm_id.to_string(),
                a.device_label().to_string(),
                a.alarm_type.clone(),
                a.alarm_time.clone(),
                a.alarm_level.clone(),
                a.alarm_content.clone(),
                a.status_label().to_string(),
                a.handle_target()
                    .map(|id| format!("gridwatch handle {}", id))
                    .unwrap_or_default(),
            ]
        })
        .collect();
    let body = table(
        &[
            "ID", "Device", "Type", "Time", "Level", "Content", "Status", "Action",
        ],
        &rows,
    );
    with_source("Alarms", loaded.source, body)
}

pub fn devices(loaded: &Loaded<Vec<Device>>) -> String {
    let rows: Vec<Vec<String>> = loaded
        .data
        .iter()
        .map(|d| {
            let status = if d.is_normal() {
                d.status_label().to_string()
            } else {
                format!("{} (!)", d.status_label())
            };
            vec![
                d.device_id.clone(),
                d.device_name.clone(),
                d.device_type.clone(),
                d.installation_location.clone(),
                status,
            ]
        })
        .collect();
    let body = table(&["ID", "Name", "Type", "Location", "Status"], &rows);
    with_source("Devices", loaded.source, body)
}

pub fn overview(overview: &Overview) -> String {
    [
        summary(&overview.summary),
        alarms(&overview.alarms),
        devices(&overview.devices),
    ]
    .join("\n")
}

pub fn session(state: &SessionState) -> String {
    match state {
        SessionState::SignedOut => "Not logged in\n".to_string(),
        SessionState::SignedIn { user: Some(user) } => {
            let mut out = format!("Welcome, {}\n", user.username);
            if let Some(name) = &user.full_name {
                let _ = writeln!(out, "Name:  {}", name);
            }
            if let Some(email) = &user.email {
                let _ = writeln!(out, "Email: {}", email);
            }
            out
        }
        SessionState::SignedIn { user: None } => "Logged in\n".to_string(),
    }
}

/// Pretty JSON for pass-through payloads
pub fn payload(payload: &Option<Value>) -> String {
    match payload {
        None => "(no data)\n".to_string(),
        Some(value) => {
            let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            format!("{}\n", text)
        }
    }
}
