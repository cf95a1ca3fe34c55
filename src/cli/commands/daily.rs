use crate::cli::parser::DailySumCli;
use crate::config::Config;
use crate::core::daily_totals;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::Table;
use crate::ui::messages::info;

pub fn handle(cli: &DailySumCli, cfg: &Config) -> AppResult<()> {
    let delimiter = cfg.delimiter_byte()?;

    let entries = match &cli.input {
        Some(path) => {
            info(format!("Reading time entries: {}", path.display()));
            Table::from_path(path, delimiter)?
        }
        None => Table::from_stdin(delimiter)?,
    };

    let totals = daily_totals(&entries, cli.project)?;
    ExportLogic::write_daily(&totals, cli.project, cli.output.as_deref(), delimiter)
}
