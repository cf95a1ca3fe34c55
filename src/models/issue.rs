// src/models/issue.rs

use crate::errors::{AppError, AppResult};
use regex::Regex;

pub const DEFAULT_ISSUE_PATTERN: &str = r"#(\d+)";

/// Issue ids are 16-bit; anything that does not fit is treated as missing.
pub type IssueId = i16;

/// Extracts issue numbers from free-text time-entry descriptions.
#[derive(Debug, Clone)]
pub struct IssueMatcher {
    re: Regex,
}

impl IssueMatcher {
    /// Build a matcher from a pattern whose first capture group holds the number.
    pub fn new(pattern: &str) -> AppResult<Self> {
        let re = Regex::new(pattern).map_err(|_| AppError::InvalidPattern(pattern.to_string()))?;
        if re.captures_len() < 2 {
            return Err(AppError::InvalidPattern(pattern.to_string()));
        }
        Ok(Self { re })
    }

    /// First issue number referenced in `description`, if any.
    pub fn extract(&self, description: &str) -> Option<IssueId> {
        let caps = self.re.captures(description)?;
        parse_issue_id(caps.get(1)?.as_str())
    }
}

/// Numeric coercion of a raw `Issue` cell. Integral floats such as `42.0`
/// are accepted; everything else is missing.
pub fn parse_issue_id(raw: &str) -> Option<IssueId> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        return IssueId::try_from(n).ok();
    }
    let f = s.parse::<f64>().ok()?;
    if f.fract() != 0.0 || f < IssueId::MIN as f64 || f > IssueId::MAX as f64 {
        return None;
    }
    Some(f as IssueId)
}

/// `Ready` is set only when the raw value is the number 1.
pub fn parse_ready(raw: &str) -> bool {
    raw.trim().parse::<f64>().is_ok_and(|v| v == 1.0)
}

/// One row of the issues list after coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub id: Option<IssueId>,
    pub title: Option<String>,
    pub comment: Option<String>,
    pub ready: bool,
}
