mod common;
use common::{ISSUES_CSV, SUMMARY_CSV, TIME_ENTRIES_CSV};
use toggl_tools::core::combine::{collapse_time_entries, outer_join, read_issues, read_summary};
use toggl_tools::core::{ReportSource, RowFilter, combine};
use toggl_tools::errors::AppError;
use toggl_tools::models::issue::{parse_issue_id, parse_ready};
use toggl_tools::models::{IssueMatcher, MergedRow, Table};

fn table(csv: &str) -> Table {
    Table::from_reader(csv.as_bytes(), b',').expect("parse test table")
}

fn matcher() -> IssueMatcher {
    IssueMatcher::new(r"#(\d+)").expect("default pattern")
}

fn row(issue: Option<i16>, title: Option<&str>, comment: Option<&str>, secs: Option<u64>) -> MergedRow {
    MergedRow {
        issue,
        title: title.map(str::to_string),
        comment: comment.map(str::to_string),
        duration: secs,
    }
}

#[test]
fn test_extract_issue_from_description() {
    let m = matcher();
    assert_eq!(m.extract("Fix login #42"), Some(42));
    assert_eq!(m.extract("#7 first, then #8"), Some(7));
    assert_eq!(m.extract("Team meeting"), None);
    assert_eq!(m.extract("issue # 42"), None);
    // does not fit in 16 bits
    assert_eq!(m.extract("Huge #99999"), None);
}

#[test]
fn test_custom_issue_pattern() {
    let m = IssueMatcher::new(r"GH-(\d+)").unwrap();
    assert_eq!(m.extract("GH-12 cleanup"), Some(12));
    assert_eq!(m.extract("#12 cleanup"), None);

    assert!(matches!(
        IssueMatcher::new(r"#\d+"),
        Err(AppError::InvalidPattern(_))
    ));
    assert!(matches!(
        IssueMatcher::new(r"#(\d+"),
        Err(AppError::InvalidPattern(_))
    ));
}

#[test]
fn test_issue_column_coercion() {
    assert_eq!(parse_issue_id("42"), Some(42));
    assert_eq!(parse_issue_id(" 42 "), Some(42));
    assert_eq!(parse_issue_id("42.0"), Some(42));
    assert_eq!(parse_issue_id("42.5"), None);
    assert_eq!(parse_issue_id("abc"), None);
    assert_eq!(parse_issue_id(""), None);
    assert_eq!(parse_issue_id("70000"), None);
}

#[test]
fn test_ready_only_for_one() {
    assert!(parse_ready("1"));
    assert!(parse_ready("1.0"));
    assert!(!parse_ready("0"));
    assert!(!parse_ready("2"));
    assert!(!parse_ready(""));
    assert!(!parse_ready("yes"));

    let issues = read_issues(&table(ISSUES_CSV)).unwrap();
    let ready: Vec<bool> = issues.iter().map(|i| i.ready).collect();
    assert_eq!(ready, vec![true, false, false]);
}

#[test]
fn test_ready_column_is_optional() {
    let issues = read_issues(&table("Issue,Title,Comment\n5,Five,\n")).unwrap();
    assert_eq!(issues.len(), 1);
    assert!(!issues[0].ready);
    assert_eq!(issues[0].comment, None);
}

#[test]
fn test_outer_join_keeps_both_sides() {
    let merged = combine(
        ReportSource::Summary(table(SUMMARY_CSV)),
        &table(ISSUES_CSV),
        None,
        &matcher(),
    )
    .unwrap();

    assert_eq!(
        merged,
        vec![
            row(Some(7), Some("Cache refactor"), None, Some(45 * 60)),
            row(Some(42), Some("Login broken"), Some("needs review"), Some(5400)),
            row(Some(99), Some("Dark mode"), Some("later"), None),
            row(None, None, None, Some(7200)),
        ]
    );
}

#[test]
fn test_outer_join_pairs_duplicate_ids() {
    let summary = read_summary(
        &table("Description,Duration\nA #3,00:10:00\nB #3,00:20:00\n"),
        &matcher(),
    )
    .unwrap();
    let issues = read_issues(&table("Issue,Title,Comment\n3,Three,x\n")).unwrap();

    let merged = outer_join(&summary, &issues);
    assert_eq!(merged.len(), 2);
    assert!(merged.iter().all(|r| r.title.as_deref() == Some("Three")));
    assert_eq!(merged[0].duration, Some(600));
    assert_eq!(merged[1].duration, Some(1200));
}

#[test]
fn test_missing_ids_never_match() {
    let summary = read_summary(&table("Description,Duration\nMeeting,00:10:00\n"), &matcher()).unwrap();
    let issues = read_issues(&table("Issue,Title,Comment\nn/a,Untracked,\n")).unwrap();

    let merged = outer_join(&summary, &issues);
    assert_eq!(
        merged,
        vec![
            row(None, None, None, Some(600)),
            row(None, Some("Untracked"), None, None),
        ]
    );
}

#[test]
fn test_time_entries_collapse_by_description() {
    let rows = collapse_time_entries(&table(TIME_ENTRIES_CSV), &matcher()).unwrap();

    let got: Vec<(&str, Option<i16>, Option<u64>)> = rows
        .iter()
        .map(|r| (r.description.as_str(), r.issue, r.seconds))
        .collect();
    assert_eq!(
        got,
        vec![
            ("Deploy #7", Some(7), Some(900)),
            ("Fix login #42", Some(42), Some(5400)),
        ]
    );
}

#[test]
fn test_filter_restricts_report_rows() {
    let filter = RowFilter::parse("Project=Web").unwrap();
    let merged = combine(
        ReportSource::Summary(table(SUMMARY_CSV)),
        &table(ISSUES_CSV),
        Some(&filter),
        &matcher(),
    )
    .unwrap();

    // the meeting row (Ops) is gone, issue 99 is still there
    assert_eq!(merged.len(), 3);
    assert!(merged.iter().all(|r| r.issue.is_some()));
}

#[test]
fn test_filter_on_collapsed_entries_ignores_entry_columns() {
    // after collapsing only Description and Duration are left
    let filter = RowFilter::parse("Project=Web").unwrap();
    let merged = combine(
        ReportSource::TimeEntries(table(
            "Project,Description,Start date,Duration\n\
             Web,A #1,2024-01-01,00:10:00\n\
             Ops,B #2,2024-01-01,00:20:00\n",
        )),
        &table("Issue,Title,Comment\n"),
        Some(&filter),
        &matcher(),
    )
    .unwrap();

    assert_eq!(
        merged,
        vec![
            row(Some(1), None, None, Some(600)),
            row(Some(2), None, None, Some(1200)),
        ]
    );
}

#[test]
fn test_filter_on_collapsed_description() {
    let filter = RowFilter::parse("Description=Fix login #42").unwrap();
    let merged = combine(
        ReportSource::TimeEntries(table(TIME_ENTRIES_CSV)),
        &table(ISSUES_CSV),
        Some(&filter),
        &matcher(),
    )
    .unwrap();

    let login = merged.iter().find(|r| r.issue == Some(42)).unwrap();
    assert_eq!(login.duration, Some(5400));
    let deploy = merged.iter().find(|r| r.issue == Some(7)).unwrap();
    assert_eq!(deploy.duration, None);
}

#[test]
fn test_filter_on_collapsed_duration() {
    let filter = RowFilter::parse("Duration=00:15:00").unwrap();
    let merged = combine(
        ReportSource::TimeEntries(table(TIME_ENTRIES_CSV)),
        &table(ISSUES_CSV),
        Some(&filter),
        &matcher(),
    )
    .unwrap();

    let with_time: Vec<Option<i16>> = merged
        .iter()
        .filter(|r| r.duration.is_some())
        .map(|r| r.issue)
        .collect();
    assert_eq!(with_time, vec![Some(7)]);
}

#[test]
fn test_filter_noop_cases() {
    let mut t = table(SUMMARY_CSV);
    RowFilter::parse("Client=Acme").unwrap().apply(&mut t);
    assert_eq!(t.len(), 3);

    RowFilter::parse("Project=").unwrap().apply(&mut t);
    assert_eq!(t.len(), 3);
}

#[test]
fn test_filter_parsing() {
    let f = RowFilter::parse("Tags=a=b").unwrap();
    assert_eq!(f.column, "Tags");
    assert_eq!(f.value, "a=b");

    assert!(matches!(
        RowFilter::parse("Project"),
        Err(AppError::InvalidFilter(_))
    ));
}

#[test]
fn test_missing_description_column() {
    let err = combine(
        ReportSource::Summary(table("Project,Duration\nWeb,00:10:00\n")),
        &table(ISSUES_CSV),
        None,
        &matcher(),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "No Description column in report file");
}

#[test]
fn test_missing_issue_column() {
    let err = combine(
        ReportSource::Summary(table(SUMMARY_CSV)),
        &table("Id,Title,Comment\n1,x,y\n"),
        None,
        &matcher(),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "No Issue column in issues list");
}

#[test]
fn test_bad_summary_duration() {
    let err = read_summary(&table("Description,Duration\nA #1,ten minutes\n"), &matcher()).unwrap_err();
    match err {
        AppError::InvalidDuration { value, row } => {
            assert_eq!(value, "ten minutes");
            assert_eq!(row, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}
