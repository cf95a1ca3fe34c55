use clap::Parser;
use std::path::PathBuf;

/// Command-line interface of toggl-combine
/// Combine a Toggl report with an issues list
#[derive(Parser, Debug)]
#[command(
    name = "toggl-combine",
    version = env!("CARGO_PKG_VERSION"),
    about = "Combine Toggl report with issues list",
    long_about = None
)]
pub struct CombineCli {
    /// Read summary report from file
    #[arg(short = 's', long = "summary", value_name = "FILE", conflicts_with = "time")]
    pub summary: Option<PathBuf>,

    /// Read time entries from file
    #[arg(short = 't', long = "time", value_name = "FILE")]
    pub time: Option<PathBuf>,

    /// Issues list
    #[arg(short = 'i', long = "issues", value_name = "FILE")]
    pub issues: Option<PathBuf>,

    /// Filter input file by column=value
    #[arg(short = 'f', long = "filter", value_name = "COLUMN=VALUE")]
    pub filter: Option<String>,

    /// Output to file (.csv, .html, .json or .xlsx); CSV on stdout otherwise
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<String>,

    /// Override configuration file path
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print progress messages on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Command-line interface of toggl-daily-sum
#[derive(Parser, Debug)]
#[command(
    name = "toggl-daily-sum",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sum Toggl report entries daily",
    long_about = None
)]
pub struct DailySumCli {
    /// Read time entries from file instead of standard input
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output to file instead of standard output
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Group by project, ignore issue description
    #[arg(short = 'p', long = "project")]
    pub project: bool,

    /// Override configuration file path
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print progress messages on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
