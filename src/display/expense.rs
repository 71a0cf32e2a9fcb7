//! Expense table display formatting

use crate::models::ExpenseTable;

use super::format::truncate;

/// Format the records of a table, followed by any skipped rows
pub fn format_table(table: &ExpenseTable, currency_symbol: &str) -> String {
    let mut output = format!("{}\n", table.source);

    if table.is_empty() {
        output.push_str("  No expenses recorded.\n");
    } else {
        let category_width = table
            .records
            .iter()
            .map(|r| r.category.chars().count())
            .max()
            .unwrap_or(8)
            .clamp(8, 30);

        output.push_str(&format!(
            "  {:<12} {:<width$} {:>14}\n",
            "Date",
            "Category",
            "Amount",
            width = category_width
        ));

        for record in &table.records {
            output.push_str(&format!(
                "  {:<12} {:<width$} {:>14}\n",
                truncate(&record.date, 12),
                truncate(&record.category, category_width),
                record.amount.format_grouped(currency_symbol),
                width = category_width
            ));
        }

        output.push_str(&format!(
            "  {} record(s), total {}\n",
            table.len(),
            table.total().format_grouped(currency_symbol)
        ));
    }

    for skipped in &table.skipped {
        output.push_str(&format!("  skipped row {}: {}\n", skipped.row, skipped.reason));
    }

    output
}
