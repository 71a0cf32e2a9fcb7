//! Expense aggregation
//!
//! Combines any number of expense tables into a grand total and per-category
//! subtotals. Categories are kept in a sorted map and amounts are whole cents,
//! so the result does not depend on record or table order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{ExpenseTable, Money};

/// Subtotal for one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub total: Money,
    /// Number of records contributing to the total
    pub count: usize,
}

/// Grand total and per-category totals over one or more tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpenseSummary {
    pub grand_total: Money,
    pub categories: BTreeMap<String, CategoryTotal>,
    pub record_count: usize,
}

impl ExpenseSummary {
    /// Category name to summed amount
    pub fn category_totals(&self) -> BTreeMap<&str, Money> {
        self.categories
            .iter()
            .map(|(name, total)| (name.as_str(), total.total))
            .collect()
    }

    /// Total for a category, zero if it has no records
    pub fn total_for(&self, category: &str) -> Money {
        self.categories
            .get(category)
            .map(|c| c.total)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Categories ordered by total, largest first; ties by name
    pub fn ranked(&self) -> Vec<(&str, CategoryTotal)> {
        let mut ranked: Vec<_> = self
            .categories
            .iter()
            .map(|(name, total)| (name.as_str(), *total))
            .collect();
        ranked.sort_by(|a, b| b.1.total.cmp(&a.1.total).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// Share of the grand total, in percent
    pub fn percentage_of(&self, amount: Money) -> f64 {
        if self.grand_total.is_zero() {
            0.0
        } else {
            amount.micros() as f64 / self.grand_total.micros() as f64 * 100.0
        }
    }
}

/// Aggregate every record of every table
///
/// Categories present in only some tables get an implicit zero from the rest.
/// An empty slice yields a zero total and no categories.
pub fn aggregate(tables: &[ExpenseTable]) -> ExpenseSummary {
    let mut summary = ExpenseSummary::default();

    for record in tables.iter().flat_map(|t| &t.records) {
        let entry = summary
            .categories
            .entry(record.category.clone())
            .or_default();
        entry.total += record.amount;
        entry.count += 1;

        summary.grand_total += record.amount;
        summary.record_count += 1;
    }

    summary
}
