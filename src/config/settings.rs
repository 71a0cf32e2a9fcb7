//! User settings for the expense tracker
//!
//! Manages table file names, the currency symbol used for display, chart
//! width and whether appends are written to the audit log.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::TableSource;
use crate::storage::file_io::write_json_atomic;

/// Display name of the read-only monthly table
pub const MONTHLY_TABLE: &str = "monthly";
/// Display name of the daily table new expenses are appended to
pub const DAILY_TABLE: &str = "daily";

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// File name (relative to the data directory) or path of the monthly table
    #[serde(default = "default_monthly_table")]
    pub monthly_table: String,

    /// File name (relative to the data directory) or path of the daily table
    #[serde(default = "default_daily_table")]
    pub daily_table: String,

    /// Width of the bar chart in characters
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,

    /// Whether appended expenses are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_monthly_table() -> String {
    "monthly_expenses.csv".to_string()
}

fn default_daily_table() -> String {
    "daily_expenses.csv".to_string()
}

fn default_chart_width() -> usize {
    40
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            monthly_table: default_monthly_table(),
            daily_table: default_daily_table(),
            chart_width: default_chart_width(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// The monthly table as configured
    pub fn monthly_source(&self, paths: &ExpensePaths) -> TableSource {
        TableSource::new(MONTHLY_TABLE, paths.table_file(&self.monthly_table))
    }

    /// The daily table as configured
    pub fn daily_source(&self, paths: &ExpensePaths) -> TableSource {
        TableSource::new(DAILY_TABLE, paths.table_file(&self.daily_table))
    }
}
