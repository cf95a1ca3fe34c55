//! toggl-daily-sum entrypoint.

use toggl_tools::run_daily_sum;
use toggl_tools::ui::messages::error;

fn main() {
    if let Err(e) = run_daily_sum() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
