use crate::errors::{AppError, AppResult};
use crate::models::issue::DEFAULT_ISSUE_PATTERN;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Regex whose first group is the issue number inside a description.
    #[serde(default = "default_issue_pattern")]
    pub issue_pattern: String,
    /// CSV field delimiter, used for reading and writing.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default)]
    pub verbose: bool,
}

fn default_issue_pattern() -> String {
    DEFAULT_ISSUE_PATTERN.to_string()
}
fn default_delimiter() -> char {
    ','
}

impl Default for Config {
    fn default() -> Self {
        Self {
            issue_pattern: default_issue_pattern(),
            delimiter: default_delimiter(),
            verbose: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("toggl-tools")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".toggl-tools")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Load configuration from `path` (or the default location).
    /// Only the default location may be missing; an explicit path must exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let content = match path {
            Some(p) => fs::read_to_string(p)?,
            None => {
                let default = Self::config_file();
                if !default.exists() {
                    return Ok(Self::default());
                }
                fs::read_to_string(&default)?
            }
        };

        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Delimiter as the single byte the CSV reader and writer expect.
    pub fn delimiter_byte(&self) -> AppResult<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(AppError::InvalidDelimiter(self.delimiter))
        }
    }
}
