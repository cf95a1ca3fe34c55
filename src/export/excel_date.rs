// src/export/excel_date.rs

/// Number format for elapsed time; `[h]` keeps counting past 24 hours.
pub(crate) const DURATION_NUM_FORMAT: &str = "[h]:mm:ss";

/// Excel stores durations as fractions of a day.
pub(crate) fn seconds_to_excel_serial(seconds: u64) -> f64 {
    seconds as f64 / 86400.0
}
