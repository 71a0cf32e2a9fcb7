//! CLI command for the audit log

use clap::Args;

use crate::config::settings::Settings;
use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Arguments for `log`
#[derive(Args, Debug)]
pub struct LogArgs {
    /// Number of entries to show
    #[arg(short = 'n', long, default_value = "20")]
    pub limit: usize,
}

/// Handle the log command
pub fn handle_log_command(
    storage: &Storage,
    settings: &Settings,
    args: LogArgs,
) -> ExpenseResult<()> {
    let audit = storage.audit();
    let entries = audit.read_recent(args.limit)?;

    if entries.is_empty() {
        println!("No expenses have been added yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable(&settings.currency_symbol));
    }
    println!(
        "\nShowing {} of {} entries ({})",
        entries.len(),
        audit.entry_count()?,
        audit.path().display()
    );

    Ok(())
}
