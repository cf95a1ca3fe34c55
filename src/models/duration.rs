//! Duration utilities: parsing Toggl `HH:MM:SS` strings and formatting totals.

use crate::errors::{AppError, AppResult};

/// Convert an `HH:MM:SS` duration string to whole seconds.
///
/// `row` is only used to label the error.
pub fn parse_duration(value: &str, row: usize) -> AppResult<u64> {
    let invalid = || AppError::InvalidDuration {
        value: value.to_string(),
        row,
    };

    let parts: Vec<&str> = value.trim().split(':').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }

    let mut nums = [0u64; 3];
    for (slot, part) in nums.iter_mut().zip(&parts) {
        *slot = part.trim().parse().map_err(|_| invalid())?;
    }

    let [h, m, s] = nums;
    h.checked_mul(3600)
        .and_then(|hs| m.checked_mul(60).and_then(|ms| hs.checked_add(ms)))
        .and_then(|hm| hm.checked_add(s))
        .ok_or_else(invalid)
}

/// Format seconds as `HH:MM:SS`; hours are not wrapped at 24.
pub fn format_duration(seconds: u64) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    format!("{h:02}:{m:02}:{s:02}")
}

pub fn seconds_to_hours(seconds: u64) -> f64 {
    seconds as f64 / 3600.0
}
