#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn combine_cmd() -> Command {
    cargo_bin_cmd!("toggl-combine")
}

pub fn daily_cmd() -> Command {
    cargo_bin_cmd!("toggl-daily-sum")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_toggl_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh file in the temp dir and return its path
pub fn write_input(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_toggl_in.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write test input");
    p
}

pub const SUMMARY_CSV: &str = "\
Project,Description,Duration,Start date
Web,Fix login #42,01:30:00,2024-01-01
Web,Refactor #7 cache,00:45:00,2024-01-02
Ops,Team meeting,02:00:00,2024-01-02
";

pub const TIME_ENTRIES_CSV: &str = "\
Project,Description,Start date,Duration
Web,Fix login #42,2024-01-01,01:00:00
Web,Fix login #42,2024-01-02,00:30:00
Ops,Deploy #7,2024-01-02,00:15:00
Ops,,2024-01-02,00:10:00
";

pub const ISSUES_CSV: &str = "\
Issue,Title,Comment,Ready
42,Login broken,needs review,1
7,Cache refactor,,0
99,Dark mode,later,
";
