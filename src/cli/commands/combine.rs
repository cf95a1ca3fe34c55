use crate::cli::parser::CombineCli;
use crate::config::Config;
use crate::core::{ReportSource, RowFilter, combine};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportLogic, OutputTarget};
use crate::models::{IssueMatcher, Table};
use crate::ui::messages::info;

pub fn handle(cli: &CombineCli, cfg: &Config) -> AppResult<()> {
    // Usage checks come first: nothing is read before they pass.
    let source_path = match (&cli.summary, &cli.time) {
        (Some(path), _) | (None, Some(path)) => path,
        (None, None) => return Err(AppError::MissingSource),
    };
    let issues_path = cli.issues.as_ref().ok_or(AppError::MissingIssues)?;
    let target = OutputTarget::resolve(cli.output.as_deref())?;
    let filter = cli.filter.as_deref().map(RowFilter::parse).transpose()?;
    let matcher = IssueMatcher::new(&cfg.issue_pattern)?;
    let delimiter = cfg.delimiter_byte()?;

    info(format!("Reading report: {}", source_path.display()));
    let table = Table::from_path(source_path, delimiter)?;
    let source = if cli.summary.is_some() {
        ReportSource::Summary(table)
    } else {
        ReportSource::TimeEntries(table)
    };

    info(format!("Reading issues: {}", issues_path.display()));
    let issues = Table::from_path(issues_path, delimiter)?;

    let merged = combine(source, &issues, filter.as_ref(), &matcher)?;
    ExportLogic::write_merged(&merged, &target, delimiter)
}
