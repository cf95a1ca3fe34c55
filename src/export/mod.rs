// src/export/mod.rs

mod excel_date;
mod html;
mod json_csv;
pub mod logic;
mod xlsx;

pub use logic::ExportLogic;

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use regex::RegexBuilder;
use std::path::{Path, PathBuf};

/// Completion message shared by the file writers.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Html,
    Json,
    Xlsx,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
            OutputFormat::Xlsx => "xlsx",
        }
    }

    /// Detect the format from the file extension, ignoring case.
    ///
    /// Accepted: `.csv`, `.htm`, `.html`, `.js`, `.json`, `.xlsx`.
    pub fn from_path(path: &str) -> AppResult<Self> {
        let unknown = || AppError::UnsupportedOutput(path.to_string());

        let re = RegexBuilder::new(r"\.(csv|html?|js(?:on)?|xlsx)$")
            .case_insensitive(true)
            .build()
            .map_err(|_| unknown())?;

        let ext = re
            .captures(path)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_ascii_lowercase())
            .ok_or_else(unknown)?;

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "htm" | "html" => Ok(OutputFormat::Html),
            "js" | "json" => Ok(OutputFormat::Json),
            "xlsx" => Ok(OutputFormat::Xlsx),
            _ => Err(unknown()),
        }
    }
}

/// Destination of a report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    /// CSV on standard output.
    Stdout,
    File { path: PathBuf, format: OutputFormat },
}

impl OutputTarget {
    /// Resolve `--output`; no path means CSV on stdout.
    pub fn resolve(output: Option<&str>) -> AppResult<Self> {
        match output {
            None | Some("") => Ok(OutputTarget::Stdout),
            Some(path) => Ok(OutputTarget::File {
                path: PathBuf::from(path),
                format: OutputFormat::from_path(path)?,
            }),
        }
    }
}
