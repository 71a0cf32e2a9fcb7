//! Expense Summary Report
//!
//! Grand total, per-category breakdown and bar chart over one or more tables.

use chrono::{DateTime, Local};

use crate::display::chart::format_bar_chart;
use crate::display::format::{format_percentage, separator, truncate};
use crate::error::ExpenseResult;
use crate::models::{Money, SkippedRow, TableSource};
use crate::services::{CategoryTotal, ExpenseService, ExpenseSummary};
use crate::storage::Storage;

/// A skipped row and the table it came from
#[derive(Debug, Clone)]
pub struct TableSkip {
    pub table: String,
    pub row: SkippedRow,
}

/// One line of the category breakdown
#[derive(Debug, Clone)]
pub struct CategoryLine {
    pub category: String,
    pub total: Money,
    pub count: usize,
    /// Percentage of the grand total
    pub percentage: f64,
}

/// Expense Summary Report
#[derive(Debug, Clone)]
pub struct ExpenseReport {
    /// When the report was generated
    pub generated_at: DateTime<Local>,
    /// Tables that were loaded
    pub sources: Vec<TableSource>,
    /// Tables that did not exist and were counted as empty
    pub missing_tables: Vec<TableSource>,
    /// Rows the loader could not read
    pub skipped: Vec<TableSkip>,
    /// Totals across all loaded tables
    pub summary: ExpenseSummary,
}

impl ExpenseReport {
    /// Generate a report over the given tables
    pub fn generate(storage: &Storage, sources: &[TableSource]) -> ExpenseResult<Self> {
        let service = ExpenseService::new(storage);
        let loaded = service.load_many(sources)?;

        let skipped = loaded
            .tables
            .iter()
            .flat_map(|t| {
                t.skipped.iter().map(move |row| TableSkip {
                    table: t.source.name.clone(),
                    row: row.clone(),
                })
            })
            .collect();

        Ok(Self {
            generated_at: Local::now(),
            sources: loaded.tables.iter().map(|t| t.source.clone()).collect(),
            missing_tables: loaded.missing.clone(),
            skipped,
            summary: loaded.summary(),
        })
    }

    /// Build a report from an already computed summary
    pub fn from_summary(sources: Vec<TableSource>, summary: ExpenseSummary) -> Self {
        Self {
            generated_at: Local::now(),
            sources,
            missing_tables: Vec::new(),
            skipped: Vec::new(),
            summary,
        }
    }

    pub fn grand_total(&self) -> Money {
        self.summary.grand_total
    }

    /// Category lines, largest total first
    pub fn category_lines(&self) -> Vec<CategoryLine> {
        self.summary
            .ranked()
            .into_iter()
            .map(|(name, CategoryTotal { total, count })| CategoryLine {
                category: name.to_string(),
                total,
                count,
                percentage: self.summary.percentage_of(total),
            })
            .collect()
    }

    /// Get top spending categories
    pub fn top_categories(&self, limit: usize) -> Vec<CategoryLine> {
        self.category_lines().into_iter().take(limit).collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str, chart_width: usize) -> String {
        self.format_lines(&self.category_lines(), currency_symbol, chart_width)
    }

    /// Format only the top `limit` categories
    pub fn format_top(&self, limit: usize, currency_symbol: &str, chart_width: usize) -> String {
        self.format_lines(&self.top_categories(limit), currency_symbol, chart_width)
    }

    fn format_lines(
        &self,
        lines: &[CategoryLine],
        currency_symbol: &str,
        chart_width: usize,
    ) -> String {
        let mut output = String::new();

        output.push_str("Expense Summary\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        let names: Vec<&str> = self.sources.iter().map(|s| s.name.as_str()).collect();
        output.push_str(&format!("Tables: {}\n", display_list(&names)));
        for missing in &self.missing_tables {
            output.push_str(&format!(
                "Not found (counted as empty): {}\n",
                missing.path.display()
            ));
        }
        output.push_str(&format!(
            "Total Expenses: {}\n",
            self.grand_total().format_grouped(currency_symbol)
        ));
        output.push_str(&format!("Records: {}\n\n", self.summary.record_count));

        if lines.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<30} {:>14} {:>7} {:>7}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&separator(60));
        output.push('\n');

        for line in lines {
            output.push_str(&format!(
                "{:<30} {:>14} {:>7} {:>7}\n",
                truncate(&line.category, 30),
                line.total.format_grouped(currency_symbol),
                line.count,
                format_percentage(line.percentage)
            ));
        }

        output.push_str(&separator(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>14} {:>7}\n\n",
            "TOTAL",
            self.grand_total().format_grouped(currency_symbol),
            self.summary.record_count
        ));

        output.push_str("Expense Distribution by Category\n");
        let bars: Vec<(&str, Money)> = lines
            .iter()
            .map(|l| (l.category.as_str(), l.total))
            .collect();
        output.push_str(&format_bar_chart(&bars, currency_symbol, chart_width));

        if !self.skipped.is_empty() {
            output.push_str(&format!("\nSkipped {} unreadable row(s):\n", self.skipped.len()));
            for skip in &self.skipped {
                output.push_str(&format!(
                    "  {} row {}: {}\n",
                    skip.table, skip.row.row, skip.row.reason
                ));
            }
        }

        output
    }
}

fn display_list(names: &[&str]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}
