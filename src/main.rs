use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add_command, handle_list_command, handle_log_command, handle_summary_command, AddArgs,
    ListArgs, LogArgs, SummaryArgs,
};
use expense_tracker::config::settings::{DAILY_TABLE, MONTHLY_TABLE};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::models::TableSource;
use expense_tracker::storage::{initialize_storage, needs_initialization, Storage};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track expenses in CSV files and summarise them by category",
    long_about = "Expense Tracker reads a monthly and a daily expense table (CSV files \
                  with Category, Amount and Date columns), totals them by category \
                  and appends new daily expenses."
)]
struct Cli {
    /// Monthly expense table to read instead of the configured one
    #[arg(long, global = true, env = "EXPENSE_TRACKER_MONTHLY")]
    monthly: Option<PathBuf>,

    /// Daily expense table to read and append to instead of the configured one
    #[arg(long, global = true, env = "EXPENSE_TRACKER_DAILY")]
    daily: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show total expenses, the category breakdown and a bar chart
    #[command(alias = "show")]
    Summary(SummaryArgs),

    /// Add a daily expense
    Add(AddArgs),

    /// List the records in the expense tables
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show recently added expenses from the audit log
    Log(LogArgs),

    /// Create the data directory, settings file and an empty daily table
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths, &settings)?;
    if let Some(monthly) = cli.monthly {
        storage = storage.with_monthly(TableSource::new(MONTHLY_TABLE, monthly));
    }
    if let Some(daily) = cli.daily {
        storage = storage.with_daily(TableSource::new(DAILY_TABLE, daily));
    }

    match cli.command {
        Some(Commands::Summary(args)) => handle_summary_command(&storage, &settings, args)?,
        Some(Commands::Add(args)) => handle_add_command(&storage, &settings, args)?,
        Some(Commands::List(args)) => handle_list_command(&storage, &settings, args)?,
        Some(Commands::Log(args)) => handle_log_command(&storage, &settings, args)?,
        Some(Commands::Init) => {
            let paths = storage.paths();
            if needs_initialization(paths) {
                println!("Initializing Expense Tracker at: {}", paths.base_dir().display());
            } else {
                println!("Already initialized at: {}", paths.base_dir().display());
            }
            initialize_storage(paths, &settings)?;
            println!("Daily table: {}", storage.daily().path.display());
            println!(
                "Place your monthly expenses in: {}",
                storage.monthly().path.display()
            );
            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            let paths = storage.paths();
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Monthly table:  {}", storage.monthly().path.display());
            println!("Daily table:    {}", storage.daily().path.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Chart width:     {}", settings.chart_width);
            println!("  Audit log:       {}", settings.audit_enabled);
        }
        None => handle_summary_command(&storage, &settings, SummaryArgs::default())?,
    }

    Ok(())
}
