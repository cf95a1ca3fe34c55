// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::html::write_html;
use crate::export::json_csv::{write_csv, write_daily_csv, write_json};
use crate::export::xlsx::write_xlsx;
use crate::export::{OutputFormat, OutputTarget, notify_export_success};
use crate::models::{DailyRow, MergedRow};
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

/// Chooses the writer for a report destination.
pub struct ExportLogic;

impl ExportLogic {
    /// Write combined rows to `target` in the format its extension selects.
    pub fn write_merged(rows: &[MergedRow], target: &OutputTarget, delimiter: u8) -> AppResult<()> {
        match target {
            OutputTarget::Stdout => write_csv(rows, io::stdout().lock(), delimiter),
            OutputTarget::File { path, format } => {
                info(format!(
                    "Exporting {} rows to {}: {}",
                    rows.len(),
                    format.as_str().to_uppercase(),
                    path.display()
                ));

                match format {
                    OutputFormat::Csv => write_csv(rows, create(path)?, delimiter)?,
                    OutputFormat::Html => write_html(rows, create(path)?)?,
                    OutputFormat::Json => write_json(rows, create(path)?)?,
                    OutputFormat::Xlsx => write_xlsx(rows, path)?,
                }

                notify_export_success(&format.as_str().to_uppercase(), path);
                Ok(())
            }
        }
    }

    /// Daily totals are always CSV, to a file or stdout.
    pub fn write_daily(
        rows: &[DailyRow],
        by_project: bool,
        output: Option<&Path>,
        delimiter: u8,
    ) -> AppResult<()> {
        match output {
            None => write_daily_csv(rows, by_project, io::stdout().lock(), delimiter),
            Some(path) => {
                write_daily_csv(rows, by_project, create(path)?, delimiter)?;
                notify_export_success("CSV", path);
                Ok(())
            }
        }
    }
}

fn create(path: &Path) -> AppResult<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}
