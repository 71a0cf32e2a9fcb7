//! CLI command for the expense summary
//!
//! Loads the configured tables, aggregates them and prints the total,
//! category breakdown and bar chart, or exports them to a file.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::config::settings::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_report, ExportFormat};
use crate::models::TableSource;
use crate::reports::ExpenseReport;
use crate::storage::Storage;

/// Arguments for `summary`
#[derive(Args, Debug, Default)]
pub struct SummaryArgs {
    /// Only summarise the monthly table
    #[arg(long, conflicts_with = "daily_only")]
    pub monthly_only: bool,

    /// Only summarise the daily table
    #[arg(long)]
    pub daily_only: bool,

    /// Show top N categories only
    #[arg(long)]
    pub top: Option<usize>,

    /// Export the summary to a file instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,
}

impl SummaryArgs {
    /// Tables selected by the flags
    pub fn sources(&self, storage: &Storage) -> Vec<TableSource> {
        if self.monthly_only {
            vec![storage.monthly().clone()]
        } else if self.daily_only {
            vec![storage.daily().clone()]
        } else {
            storage.sources()
        }
    }
}

/// Handle the summary command
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    args: SummaryArgs,
) -> ExpenseResult<()> {
    let report = ExpenseReport::generate(storage, &args.sources(storage))?;

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        export_report(&report, args.format, &mut writer)?;
        println!("Expense summary exported to: {}", path.display());
    } else if let Some(n) = args.top {
        print!(
            "{}",
            report.format_top(n, &settings.currency_symbol, settings.chart_width)
        );
    } else {
        print!(
            "{}",
            report.format_terminal(&settings.currency_symbol, settings.chart_width)
        );
    }

    Ok(())
}
