// src/core/filter.rs

use crate::errors::{AppError, AppResult};
use crate::models::Table;
use crate::ui::messages::{info, warning};

/// Equality filter parsed from `column=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFilter {
    pub column: String,
    pub value: String,
}

impl RowFilter {
    /// Parse `column=value`; only the first `=` separates the two parts.
    pub fn parse(expr: &str) -> AppResult<Self> {
        let (column, value) = expr
            .split_once('=')
            .ok_or_else(|| AppError::InvalidFilter(expr.to_string()))?;

        Ok(Self {
            column: column.to_string(),
            value: value.to_string(),
        })
    }

    /// Drop every row whose `column` cell differs from `value`.
    ///
    /// No-op when the column is absent or the value is empty.
    pub fn apply(&self, table: &mut Table) {
        if self.value.is_empty() {
            warning(format!(
                "Filter on '{}' has an empty value, ignored",
                self.column
            ));
            return;
        }

        let Some(idx) = table.column_index(&self.column) else {
            warning(format!(
                "Filter column '{}' not found in report file, ignored",
                self.column
            ));
            return;
        };

        let before = table.len();
        table.retain_rows(|row| row[idx] == self.value);
        info(format!(
            "Filter {}={} kept {} of {} rows",
            self.column,
            self.value,
            table.len(),
            before
        ));
    }
}
