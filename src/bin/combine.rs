//! toggl-combine entrypoint.

use toggl_tools::run_combine;
use toggl_tools::ui::messages::error;

fn main() {
    if let Err(e) = run_combine() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
