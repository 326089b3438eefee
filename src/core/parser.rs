use crate::core::{ExtractResult, Milestone};
use crate::utils::error::{Result, SyncError};
use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// One row of the OmniPlan export. Columns other than `End` may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CsvRow {
    #[serde(rename = "Task", default)]
    pub task: String,
    #[serde(rename = "Start", default)]
    pub start: String,
    #[serde(rename = "Assigned", default)]
    pub assigned: String,
    #[serde(rename = "Completed", default)]
    pub completed: String,
    #[serde(rename = "End", default)]
    pub end: Option<String>,
}

fn deadline_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // M/D/YY, optionally followed by whitespace or a slash and free text
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(\d{1,2})/(\d{1,2})/(\d{1,2})(?:[\s/].*)?$").expect("static regex")
    })
}

/// Parses `M/D/YY[ suffix]` into a date in the 2000s.
pub fn parse_deadline(value: &str) -> Result<NaiveDate> {
    let caps = deadline_pattern()
        .captures(value)
        .ok_or_else(|| SyncError::parse(None, format!("End '{}' is not M/D/YY", value)))?;

    let number = |i: usize| -> Result<u32> {
        caps[i]
            .parse::<u32>()
            .map_err(|e| SyncError::parse(None, format!("End '{}': {}", value, e)))
    };
    let (month, day, year) = (number(1)?, number(2)?, number(3)?);

    NaiveDate::from_ymd_opt(2000 + year as i32, month, day).ok_or_else(|| {
        SyncError::parse(None, format!("End '{}' is not a valid calendar date", value))
    })
}

/// First whitespace-delimited token, so "Jane Doe" becomes "Jane".
pub fn first_name(assigned: &str) -> &str {
    assigned.split_whitespace().next().unwrap_or("")
}

impl Milestone {
    pub fn from_csv_row(row: CsvRow) -> Result<Self> {
        let end = row
            .end
            .ok_or_else(|| SyncError::parse(None, "End column is missing or empty"))?;
        let date = parse_deadline(&end)?;

        Ok(Milestone {
            assigned: first_name(&row.assigned).to_string(),
            name: row.task,
            start: row.start,
            date,
            assigned_id: None,
            completed: row.completed,
        })
    }
}

/// Parses every record and collects the distinct assignee names.
pub fn read_milestones(csv_data: &str) -> Result<ExtractResult> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(csv_data.as_bytes());

    let mut milestones = Vec::new();
    let mut assignees = BTreeSet::new();

    for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
        let record_number = index as u64 + 1;
        let milestone = Milestone::from_csv_row(row?).map_err(|e| match e {
            SyncError::Parse { line: None, message } => SyncError::parse(Some(record_number), message),
            other => other,
        })?;

        tracing::debug!("Parsed milestone '{}' due {}", milestone.name, milestone.date);
        if !milestone.assigned.is_empty() {
            assignees.insert(milestone.assigned.clone());
        }
        milestones.push(milestone);
    }

    Ok(ExtractResult {
        milestones,
        assignees,
    })
}
