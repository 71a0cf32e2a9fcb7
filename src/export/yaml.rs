//! YAML Export functionality
//!
//! Exports a report to YAML for human-readable archiving.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::ExpenseReport;

use super::SummaryExport;

/// Export a report as YAML with a short comment header
pub fn export_report_yaml<W: Write>(report: &ExpenseReport, writer: &mut W) -> ExpenseResult<()> {
    let export = SummaryExport::from_report(report);

    writeln!(writer, "# Expense Summary Export")
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, ExpenseTable, Money, TableSource};
    use crate::services::aggregate;

    #[test]
    fn test_export_report_yaml() {
        let table = ExpenseTable::with_records(
            TableSource::new("daily", "daily.csv"),
            vec![ExpenseRecord::new("Coffee", Money::from_cents(450), "2024-01-01")],
        );
        let summary = aggregate(std::slice::from_ref(&table));
        let report = ExpenseReport::from_summary(vec![table.source], summary);

        let mut output = Vec::new();
        export_report_yaml(&report, &mut output).unwrap();

        let yaml = String::from_utf8(output).unwrap();
        assert!(yaml.starts_with("# Expense Summary Export"));

        let parsed: SummaryExport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.grand_total, 4.5);
        assert_eq!(parsed.categories[0].category, "Coffee");
    }
}
