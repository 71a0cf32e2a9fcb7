//! Record appender
//!
//! Validates user input and appends the resulting record to a table. Input
//! arrives as plain text parameters; nothing here reads shared state.

use crate::error::{ExpenseResult, ValidationError};
use crate::models::{ExpenseRecord, Money, TableSource};
use crate::storage::tables::append_record;

/// Turn raw input into a record
///
/// Checks run in order and the first failure wins: empty category, amount or
/// date (after trimming) gives `MissingField`; an amount that is not a finite
/// number gives `InvalidAmount`. The date is free-form text and is not checked
/// against the calendar.
pub fn validate_expense(
    category: &str,
    amount_text: &str,
    date: &str,
) -> Result<ExpenseRecord, ValidationError> {
    let category = category.trim();
    let amount_text = amount_text.trim();
    let date = date.trim();

    for (field, value) in [("category", category), ("amount", amount_text), ("date", date)] {
        if value.is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }

    let amount = Money::parse(amount_text)
        .map_err(|_| ValidationError::InvalidAmount(amount_text.to_string()))?;

    Ok(ExpenseRecord::new(category, amount, date))
}

/// Validate the input and append it to `target`
///
/// Validation failures leave the table untouched. On success the new record
/// is returned; totals are not refreshed here.
pub fn append_expense(
    category: &str,
    amount_text: &str,
    date: &str,
    target: &TableSource,
) -> ExpenseResult<ExpenseRecord> {
    let record = validate_expense(category, amount_text, date)?;
    append_record(target, &record)?;
    Ok(record)
}
