// src/core/daily.rs

use crate::errors::AppResult;
use crate::models::duration::parse_duration;
use crate::models::{DailyRow, Table};
use crate::ui::messages::info;
use std::collections::BTreeMap;

const ENTRIES_TABLE: &str = "time entries";

/// Sum time entries per (project, date), or per (project, description, date)
/// unless `by_project` is set. Groups come out sorted by key.
///
/// Every `Duration` must be a valid `HH:MM:SS`; the first bad one aborts.
/// Entries with an empty cell in any grouping column belong to no group.
pub fn daily_totals(table: &Table, by_project: bool) -> AppResult<Vec<DailyRow>> {
    let project_idx = table.require_column("Project", ENTRIES_TABLE)?;
    let date_idx = table.require_column("Start date", ENTRIES_TABLE)?;
    let dur_idx = table.require_column("Duration", ENTRIES_TABLE)?;
    let desc_idx = if by_project {
        None
    } else {
        Some(table.require_column("Description", ENTRIES_TABLE)?)
    };

    let mut groups: BTreeMap<(&str, Option<&str>, &str), u64> = BTreeMap::new();

    for (i, row) in table.rows().iter().enumerate() {
        let seconds = parse_duration(&row[dur_idx], i + 1)?;
        let key = (
            row[project_idx].as_str(),
            desc_idx.map(|idx| row[idx].as_str()),
            row[date_idx].as_str(),
        );
        if key.0.is_empty() || key.1.is_some_and(str::is_empty) || key.2.is_empty() {
            continue;
        }
        *groups.entry(key).or_default() += seconds;
    }

    info(format!(
        "Summed {} entries into {} groups",
        table.len(),
        groups.len()
    ));

    Ok(groups
        .into_iter()
        .map(|((project, description, start_date), seconds)| DailyRow {
            project: project.to_string(),
            description: description.map(str::to_string),
            start_date: start_date.to_string(),
            seconds,
        })
        .collect())
}
