// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::models::MergedRow;
use crate::models::report::{DailyRow, daily_headers, merged_headers};
use std::io::Write;

/// JSON pretty-printed: an array of records, missing values as `null`.
pub(crate) fn write_json<W: Write>(rows: &[MergedRow], mut out: W) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, rows)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// CSV with the `Issue,Title,Comment,Duration` header. Missing values are empty fields.
pub(crate) fn write_csv<W: Write>(rows: &[MergedRow], out: W, delimiter: u8) -> AppResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    if rows.is_empty() {
        // serde only emits the header together with the first record
        wtr.write_record(merged_headers())?;
    }
    for item in rows {
        wtr.serialize(item)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Daily totals as CSV; the `Description` column is present only when
/// the rows carry one.
pub(crate) fn write_daily_csv<W: Write>(
    rows: &[DailyRow],
    by_project: bool,
    out: W,
    delimiter: u8,
) -> AppResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    wtr.write_record(daily_headers(by_project))?;
    for row in rows {
        wtr.write_record(row.to_record())?;
    }

    wtr.flush()?;
    Ok(())
}
