pub mod combine;
pub mod daily;
pub mod filter;

pub use combine::{ReportSource, combine};
pub use daily::daily_totals;
pub use filter::RowFilter;
