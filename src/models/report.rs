// src/models/report.rs

use crate::models::duration::{format_duration, seconds_to_hours};
use crate::models::issue::IssueId;
use serde::{Serialize, Serializer};

/// Time total for one description, with the issue id found in it.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub description: String,
    pub issue: Option<IssueId>,
    /// `None` when the summary file has no duration for this row.
    pub seconds: Option<u64>,
}

/// One output row of the combiner. Field order is the output column order.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MergedRow {
    #[serde(rename = "Issue")]
    pub issue: Option<IssueId>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Comment")]
    pub comment: Option<String>,
    #[serde(rename = "Duration", serialize_with = "serialize_duration")]
    pub duration: Option<u64>,
}

/// Header for CSV / JSON / XLSX / HTML
pub(crate) fn merged_headers() -> [&'static str; 4] {
    ["Issue", "Title", "Comment", "Duration"]
}

impl MergedRow {
    /// Cells as display strings; missing values become empty strings.
    pub fn to_cells(&self) -> [String; 4] {
        [
            self.issue.map(|i| i.to_string()).unwrap_or_default(),
            self.title.clone().unwrap_or_default(),
            self.comment.clone().unwrap_or_default(),
            self.duration.map(format_duration).unwrap_or_default(),
        ]
    }
}

fn serialize_duration<S: Serializer>(value: &Option<u64>, s: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(secs) => s.serialize_some(&format_duration(*secs)),
        None => s.serialize_none(),
    }
}

/// One output row of the daily summarizer.
#[derive(Clone, Debug, PartialEq)]
pub struct DailyRow {
    pub project: String,
    /// `None` when grouping by project only.
    pub description: Option<String>,
    pub start_date: String,
    pub seconds: u64,
}

impl DailyRow {
    pub fn hours(&self) -> f64 {
        seconds_to_hours(self.seconds)
    }

    /// Output cells; `Hours` uses the shortest exact float form (`1.5`, `2.0`).
    pub fn to_record(&self) -> Vec<String> {
        let mut record = vec![self.project.clone()];
        if let Some(d) = &self.description {
            record.push(d.clone());
        }
        record.push(self.start_date.clone());
        record.push(format!("{:?}", self.hours()));
        record
    }
}

pub(crate) fn daily_headers(by_project: bool) -> Vec<&'static str> {
    if by_project {
        vec!["Project", "Start date", "Hours"]
    } else {
        vec!["Project", "Description", "Start date", "Hours"]
    }
}
