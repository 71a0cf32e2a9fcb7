//! CSV Export functionality
//!
//! Exports the per-category breakdown of a report to CSV.

use std::io::Write;

use crate::error::ExpenseResult;
use crate::reports::ExpenseReport;

/// Export the category breakdown, largest first, followed by a TOTAL row
pub fn export_report_csv<W: Write>(report: &ExpenseReport, writer: &mut W) -> ExpenseResult<()> {
    let mut csv_writer = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(["Category", "Amount", "Count", "Percentage"])?;

    for line in report.category_lines() {
        csv_writer
            .write_record([
                line.category,
                line.total.to_decimal_string(),
                line.count.to_string(),
                format!("{:.2}", line.percentage),
            ])?;
    }

    let total_percentage = if report.summary.is_empty() { "0.00" } else { "100.00" };
    csv_writer
        .write_record([
            "TOTAL".to_string(),
            report.grand_total().to_decimal_string(),
            report.summary.record_count.to_string(),
            total_percentage.to_string(),
        ])?;

    csv_writer.flush()?;

    Ok(())
}
