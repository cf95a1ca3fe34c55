pub mod duration;
pub mod issue;
pub mod report;
pub mod table;

pub use issue::{Issue, IssueId, IssueMatcher};
pub use report::{DailyRow, MergedRow, SummaryRow};
pub use table::Table;
