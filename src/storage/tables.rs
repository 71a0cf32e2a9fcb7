//! Expense table storage
//!
//! Reads CSV expense tables into memory and appends records to them. Columns
//! are located by header name, so extra columns and any column order are
//! accepted. Appends rewrite the whole file through an atomic temp-file swap.

use std::fs::{self, File};
use std::io::{self, BufReader, ErrorKind, Read, Write};

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseRecord, ExpenseTable, Money, SkippedRow, TableSource, TABLE_HEADERS};

use super::file_io::write_atomic;

/// Positions of the required columns within a table's header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnLayout {
    category: usize,
    amount: usize,
    date: usize,
    width: usize,
}

impl ColumnLayout {
    /// Layout of a table created by this crate
    fn standard() -> Self {
        Self {
            category: 0,
            amount: 1,
            date: 2,
            width: TABLE_HEADERS.len(),
        }
    }

    /// Locate the required columns, matching names case-insensitively
    fn from_headers(headers: &StringRecord) -> Result<Self, String> {
        let find = |name: &str| {
            headers.iter().position(|h| {
                h.trim_start_matches('\u{feff}')
                    .trim()
                    .eq_ignore_ascii_case(name)
            })
        };

        let mut missing = Vec::new();
        let category = find("category");
        let amount = find("amount");
        let date = find("date");
        for (name, column) in TABLE_HEADERS.iter().zip([category, amount, date]) {
            if column.is_none() {
                missing.push(*name);
            }
        }

        match (category, amount, date) {
            (Some(category), Some(amount), Some(date)) => Ok(Self {
                category,
                amount,
                date,
                width: headers.len(),
            }),
            _ => Err(format!("missing column(s): {}", missing.join(", "))),
        }
    }

    fn parse_record(&self, record: &StringRecord) -> Result<ExpenseRecord, String> {
        let category = record
            .get(self.category)
            .ok_or_else(|| "Missing category field".to_string())?;
        if category.trim().is_empty() {
            return Err("Empty category".to_string());
        }

        let amount_text = record
            .get(self.amount)
            .ok_or_else(|| "Missing amount field".to_string())?;
        let amount =
            Money::parse(amount_text).map_err(|e| format!("Invalid amount ({})", e))?;

        let date = record
            .get(self.date)
            .ok_or_else(|| "Missing date field".to_string())?;

        Ok(ExpenseRecord::new(category, amount, date))
    }

    /// Lay out a record according to this header, leaving extra columns empty
    fn row_for(&self, record: &ExpenseRecord) -> Vec<String> {
        let mut row = vec![String::new(); self.width];
        row[self.category] = record.category.clone();
        row[self.amount] = record.amount.to_decimal_string();
        row[self.date] = record.date.clone();
        row
    }
}

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}

/// Read the header of a table; `None` for a table with no header at all
fn read_layout<R: Read>(reader: &mut csv::Reader<R>) -> Result<Option<ColumnLayout>, String> {
    let headers = reader
        .headers()
        .map_err(|e| format!("unreadable header: {}", e))?;
    if headers.is_empty() {
        return Ok(None);
    }
    ColumnLayout::from_headers(headers).map(Some)
}

/// Load every well-formed record from a table
///
/// A missing file is reported as [`ExpenseError::AbsentTable`]. Rows whose
/// amount is not numeric, whose category is empty, or which lack a required
/// field are recorded in [`ExpenseTable::skipped`] instead of failing the load.
pub fn load_table(source: &TableSource) -> ExpenseResult<ExpenseTable> {
    let path = source.path();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ExpenseError::absent_table(&source.name, path));
        }
        Err(e) => {
            return Err(ExpenseError::Io(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let mut reader = reader_builder().from_reader(BufReader::new(file));
    let layout = match read_layout(&mut reader) {
        Ok(Some(layout)) => layout,
        Ok(None) => return Ok(ExpenseTable::empty(source.clone())),
        Err(reason) => {
            return Err(ExpenseError::MalformedTable {
                path: path.to_path_buf(),
                reason,
            })
        }
    };

    let mut table = ExpenseTable::empty(source.clone());
    for (idx, result) in reader.records().enumerate() {
        let row = idx + 1;
        let parsed = result
            .map_err(|e| format!("Unreadable row: {}", e))
            .and_then(|record| layout.parse_record(&record));

        match parsed {
            Ok(record) => table.records.push(record),
            Err(reason) => table.skipped.push(SkippedRow { row, reason }),
        }
    }

    Ok(table)
}

/// Append one record to a table, creating the table if needed
///
/// Existing rows are kept byte for byte. The new row follows the existing
/// header's column order. The rewrite goes through a temp file and an atomic
/// rename, so a failed write leaves the previous table in place.
pub fn append_record(target: &TableSource, record: &ExpenseRecord) -> ExpenseResult<()> {
    let path = target.path();

    let existing = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
        Err(e) => return Err(ExpenseError::persistence(path, e)),
    };

    let layout = {
        let mut reader = reader_builder().from_reader(existing.as_slice());
        read_layout(&mut reader).map_err(|reason| ExpenseError::MalformedTable {
            path: path.to_path_buf(),
            reason,
        })?
    };

    let row = layout.unwrap_or_else(ColumnLayout::standard).row_for(record);

    write_atomic(path, |writer| {
        if layout.is_some() {
            writer.write_all(&existing)?;
            if !existing.ends_with(b"\n") {
                writer.write_all(b"\n")?;
            }
        }

        let mut csv_writer = csv_writer(&mut *writer);
        if layout.is_none() {
            csv_writer.write_record(TABLE_HEADERS)?;
        }
        csv_writer.write_record(&row)?;
        csv_writer.flush()
    })
    .map_err(|e| ExpenseError::persistence(path, e))
}

/// Create an empty table (header only) unless the file already exists
///
/// Returns true if a new file was written.
pub fn create_table(source: &TableSource) -> ExpenseResult<bool> {
    let path = source.path();
    if path.exists() {
        return Ok(false);
    }

    write_atomic(path, |writer| {
        let mut csv_writer = csv_writer(&mut *writer);
        csv_writer.write_record(TABLE_HEADERS)?;
        csv_writer.flush()
    })
    .map_err(|e| ExpenseError::persistence(path, e))?;

    Ok(true)
}

fn csv_writer<W: io::Write>(writer: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer)
}
