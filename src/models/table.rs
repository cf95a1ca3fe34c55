// src/models/table.rs

use crate::errors::{AppError, AppResult};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// A CSV export loaded in memory: header row plus string cells.
///
/// Empty cells are kept as empty strings; callers decide whether an empty
/// cell counts as a missing value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Read a table from a CSV file with a header row.
    pub fn from_path(path: &Path, delimiter: u8) -> AppResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(file, delimiter)
    }

    /// Read a table from standard input.
    pub fn from_stdin(delimiter: u8) -> AppResult<Self> {
        Self::from_reader(io::stdin().lock(), delimiter)
    }

    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> AppResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        let width = headers.len();
        let mut rows = Vec::new();

        for record in rdr.records() {
            let record = record?;
            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            // short rows are padded, long rows truncated
            row.resize(width, String::new());
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Index of a column that must be present, or a `MissingColumn` error
    /// labelled with `table`.
    pub fn require_column(&self, name: &str, table: &'static str) -> AppResult<usize> {
        self.column_index(name).ok_or_else(|| AppError::MissingColumn {
            column: name.to_string(),
            table,
        })
    }

    /// Keep only the rows for which `keep` returns true.
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[String]) -> bool,
    {
        self.rows.retain(|row| keep(row));
    }
}
