//! Report export
//!
//! Writes an expense report as CSV, JSON or YAML.

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::ExpenseResult;
use crate::reports::ExpenseReport;

/// Supported export formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per category plus a TOTAL row
    #[default]
    Csv,
    /// JSON document
    Json,
    /// YAML document (human-readable)
    Yaml,
}

/// Serializable form of a report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryExport {
    pub exported_at: DateTime<Local>,
    pub app_version: String,
    pub tables: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_tables: Vec<String>,
    pub grand_total: f64,
    pub record_count: usize,
    pub categories: Vec<CategoryExport>,
}

/// One category of an exported report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryExport {
    pub category: String,
    pub amount: f64,
    pub count: usize,
    pub percentage: f64,
}

impl SummaryExport {
    pub fn from_report(report: &ExpenseReport) -> Self {
        Self {
            exported_at: report.generated_at,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            tables: report.sources.iter().map(|s| s.name.clone()).collect(),
            missing_tables: report
                .missing_tables
                .iter()
                .map(|s| s.name.clone())
                .collect(),
            grand_total: report.grand_total().as_f64(),
            record_count: report.summary.record_count,
            categories: report
                .category_lines()
                .into_iter()
                .map(|line| CategoryExport {
                    category: line.category,
                    amount: line.total.as_f64(),
                    count: line.count,
                    percentage: line.percentage,
                })
                .collect(),
        }
    }
}

/// Write a report in the requested format
pub fn export_report<W: Write>(
    report: &ExpenseReport,
    format: ExportFormat,
    writer: &mut W,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv => csv::export_report_csv(report, writer),
        ExportFormat::Json => json::export_report_json(report, writer, true),
        ExportFormat::Yaml => yaml::export_report_yaml(report, writer),
    }
}
