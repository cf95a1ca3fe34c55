// src/core/combine.rs

use crate::core::filter::RowFilter;
use crate::errors::AppResult;
use crate::models::duration::{format_duration, parse_duration};
use crate::models::issue::{parse_issue_id, parse_ready};
use crate::models::{Issue, IssueId, IssueMatcher, MergedRow, SummaryRow, Table};
use crate::ui::messages::info;
use std::collections::BTreeMap;

const REPORT_TABLE: &str = "report file";
const ISSUES_TABLE: &str = "issues list";

/// Where the time totals come from.
#[derive(Debug, Clone)]
pub enum ReportSource {
    /// Summary report, already one row per description.
    Summary(Table),
    /// Raw time entries, collapsed by description before joining.
    TimeEntries(Table),
}

/// Run the whole combine pipeline on in-memory tables.
pub fn combine(
    source: ReportSource,
    issues: &Table,
    filter: Option<&RowFilter>,
    matcher: &IssueMatcher,
) -> AppResult<Vec<MergedRow>> {
    let summary = match source {
        ReportSource::Summary(mut table) => {
            if let Some(f) = filter {
                f.apply(&mut table);
            }
            read_summary(&table, matcher)?
        }
        ReportSource::TimeEntries(table) => {
            // the filter sees the collapsed report: Description and Duration only
            let mut collapsed = summary_table(&collapse_time_entries(&table, matcher)?);
            if let Some(f) = filter {
                f.apply(&mut collapsed);
            }
            read_summary(&collapsed, matcher)?
        }
    };

    let issues = read_issues(issues)?;
    info(format!(
        "Joining {} report rows with {} issues",
        summary.len(),
        issues.len()
    ));

    Ok(outer_join(&summary, &issues))
}

/// Summary report rows, one per input row.
pub fn read_summary(table: &Table, matcher: &IssueMatcher) -> AppResult<Vec<SummaryRow>> {
    let desc_idx = table.require_column("Description", REPORT_TABLE)?;
    let dur_idx = table.require_column("Duration", REPORT_TABLE)?;

    table
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let raw = row[dur_idx].trim();
            let seconds = if raw.is_empty() {
                None
            } else {
                Some(parse_duration(raw, i + 1)?)
            };
            Ok(SummaryRow {
                description: row[desc_idx].clone(),
                issue: matcher.extract(&row[desc_idx]),
                seconds,
            })
        })
        .collect()
}

/// Sum raw time entries per distinct description, sorted by description.
///
/// Entries without a description have no group and are dropped; entries
/// without a duration add nothing.
pub fn collapse_time_entries(table: &Table, matcher: &IssueMatcher) -> AppResult<Vec<SummaryRow>> {
    let desc_idx = table.require_column("Description", REPORT_TABLE)?;
    let dur_idx = table.require_column("Duration", REPORT_TABLE)?;

    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();

    for (i, row) in table.rows().iter().enumerate() {
        let description = row[desc_idx].as_str();
        if description.is_empty() {
            continue;
        }
        let raw = row[dur_idx].trim();
        let seconds = if raw.is_empty() {
            0
        } else {
            parse_duration(raw, i + 1)?
        };
        *totals.entry(description).or_default() += seconds;
    }

    Ok(totals
        .into_iter()
        .map(|(description, seconds)| SummaryRow {
            description: description.to_string(),
            issue: matcher.extract(description),
            seconds: Some(seconds),
        })
        .collect())
}

/// Summary rows as a `Description,Duration` table, the shape of a summary report.
pub fn summary_table(rows: &[SummaryRow]) -> Table {
    Table::new(
        vec!["Description".to_string(), "Duration".to_string()],
        rows.iter()
            .map(|r| {
                vec![
                    r.description.clone(),
                    r.seconds.map(format_duration).unwrap_or_default(),
                ]
            })
            .collect(),
    )
}

/// Coerce the issues list: numeric `Issue`, boolean `Ready`.
pub fn read_issues(table: &Table) -> AppResult<Vec<Issue>> {
    let issue_idx = table.require_column("Issue", ISSUES_TABLE)?;
    let title_idx = table.require_column("Title", ISSUES_TABLE)?;
    let comment_idx = table.require_column("Comment", ISSUES_TABLE)?;
    let ready_idx = table.column_index("Ready");

    Ok(table
        .rows()
        .iter()
        .map(|row| Issue {
            id: parse_issue_id(&row[issue_idx]),
            title: non_empty(&row[title_idx]),
            comment: non_empty(&row[comment_idx]),
            ready: ready_idx.is_some_and(|idx| parse_ready(&row[idx])),
        })
        .collect())
}

/// Full outer join on issue id.
///
/// Keyed rows come first in ascending id order; within an id every report
/// row is paired with every issue row. A missing id is not equal to another
/// missing id: such rows are never paired and follow at the end, report rows
/// before issue rows.
pub fn outer_join(summary: &[SummaryRow], issues: &[Issue]) -> Vec<MergedRow> {
    let mut keyed: BTreeMap<IssueId, (Vec<&SummaryRow>, Vec<&Issue>)> = BTreeMap::new();
    let mut loose_summary = Vec::new();
    let mut loose_issues = Vec::new();

    for s in summary {
        match s.issue {
            Some(id) => keyed.entry(id).or_default().0.push(s),
            None => loose_summary.push(s),
        }
    }
    for i in issues {
        match i.id {
            Some(id) => keyed.entry(id).or_default().1.push(i),
            None => loose_issues.push(i),
        }
    }

    let mut merged = Vec::with_capacity(summary.len() + issues.len());

    for (id, (times, tracked)) in keyed {
        match (times.is_empty(), tracked.is_empty()) {
            (false, false) => {
                for s in &times {
                    for i in &tracked {
                        merged.push(joined(Some(id), Some(*s), Some(*i)));
                    }
                }
            }
            (false, true) => merged.extend(times.iter().map(|s| joined(Some(id), Some(*s), None))),
            (true, false) => merged.extend(tracked.iter().map(|i| joined(Some(id), None, Some(*i)))),
            (true, true) => {}
        }
    }

    merged.extend(loose_summary.into_iter().map(|s| joined(None, Some(s), None)));
    merged.extend(loose_issues.into_iter().map(|i| joined(None, None, Some(i))));
    merged
}

fn joined(id: Option<IssueId>, summary: Option<&SummaryRow>, issue: Option<&Issue>) -> MergedRow {
    MergedRow {
        issue: id,
        title: issue.and_then(|i| i.title.clone()),
        comment: issue.and_then(|i| i.comment.clone()),
        duration: summary.and_then(|s| s.seconds),
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
