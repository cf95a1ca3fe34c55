//! Unified application error type.
//! Every module (cli, core, models, export) returns AppError so that both
//! binaries can report failures the same way.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / encoding
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    // ---------------------------
    // Usage errors
    // ---------------------------
    #[error("Specify --summary or --time input file.\nUse -h or --help to get usage help.")]
    MissingSource,

    #[error("Specify --issues input file.\nUse -h or --help to get usage help.")]
    MissingIssues,

    #[error("Output file {0} has unknown type. Only CSV, HTML, JSON and XLSX are available.")]
    UnsupportedOutput(String),

    #[error("Invalid filter expression '{0}': expected column=value")]
    InvalidFilter(String),

    // ---------------------------
    // Validation / parsing
    // ---------------------------
    #[error("No {column} column in {table}")]
    MissingColumn { column: String, table: &'static str },

    #[error("Invalid duration '{value}' in row {row}: expected HH:MM:SS")]
    InvalidDuration { value: String, row: usize },

    #[error("Invalid issue pattern '{0}'")]
    InvalidPattern(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("CSV delimiter must be a single ASCII character, got '{0}'")]
    InvalidDelimiter(char),
}

pub type AppResult<T> = Result<T, AppError>;
