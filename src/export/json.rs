//! JSON Export functionality

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::ExpenseReport;

use super::SummaryExport;

/// Export a report as JSON
pub fn export_report_json<W: Write>(
    report: &ExpenseReport,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = SummaryExport::from_report(report);

    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    written.map_err(|e| ExpenseError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
