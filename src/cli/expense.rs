//! Expense CLI commands
//!
//! Implements `add` (append to the daily table) and `list` (show records).

use clap::{Args, ValueEnum};

use crate::config::settings::Settings;
use crate::display::format_table;
use crate::error::ExpenseResult;
use crate::models::TableSource;
use crate::reports::ExpenseReport;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Expense category
    pub category: String,

    /// Amount spent (e.g. "12.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Expense date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Don't print the refreshed summary afterwards
    #[arg(long)]
    pub quiet: bool,
}

/// Which table(s) `list` shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableChoice {
    Monthly,
    Daily,
    All,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Table to list
    #[arg(short, long, value_enum, default_value = "all")]
    pub table: TableChoice,
}

/// Handle the add command
pub fn handle_add_command(
    storage: &Storage,
    settings: &Settings,
    args: AddArgs,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive().format("%Y-%m-%d").to_string());

    let added = service.add_expense(&args.category, &args.amount, &date)?;
    println!(
        "Expense added to {}: {}",
        storage.daily().name,
        added.record.format_with_symbol(&settings.currency_symbol)
    );
    if let Some(e) = &added.audit_error {
        eprintln!("Warning: expense saved but not recorded in the audit log: {}", e);
    }

    if !args.quiet {
        let report = ExpenseReport::generate(storage, &storage.sources())?;
        println!();
        print!(
            "{}",
            report.format_terminal(&settings.currency_symbol, settings.chart_width)
        );
    }

    Ok(())
}

/// Handle the list command
pub fn handle_list_command(
    storage: &Storage,
    settings: &Settings,
    args: ListArgs,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    let sources: Vec<TableSource> = match args.table {
        TableChoice::Monthly => vec![storage.monthly().clone()],
        TableChoice::Daily => vec![storage.daily().clone()],
        TableChoice::All => storage.sources(),
    };

    let loaded = service.load_many(&sources)?;
    for (i, table) in loaded.tables.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", format_table(table, &settings.currency_symbol));
    }
    for missing in &loaded.missing {
        println!("\n{}\n  Table not found.", missing);
    }

    Ok(())
}
