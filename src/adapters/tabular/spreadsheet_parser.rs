//! Spreadsheet/CSV parser adapter.
//!
//! Implements the `TabularParser` port with `csv` for comma-separated files
//! and `calamine` for Excel workbooks (`.xls` and `.xlsx`). Decoding is
//! CPU-bound, so it runs on tokio's blocking pool.

use std::io::Cursor;

use async_trait::async_trait;
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use serde_json::{Map, Number, Value};

use crate::ports::{TabularData, TabularError, TabularFormat, TabularParser};

/// `TabularParser` backed by `csv` and `calamine`.
///
/// Only the first worksheet of a workbook is read; its first row supplies
/// the column names. Rows with no values are kept as all-null records.
#[derive(Debug, Clone, Default)]
pub struct SpreadsheetParser;

impl SpreadsheetParser {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous decode, shared by the async port method and tests.
    pub fn parse_bytes(filename: &str, bytes: &[u8]) -> Result<TabularData, TabularError> {
        match TabularFormat::from_filename(filename) {
            Some(TabularFormat::Csv) => decode_csv(bytes),
            Some(format) if format.is_spreadsheet() => decode_workbook(bytes.to_vec()),
            _ => Err(TabularError::UnsupportedFormat(filename.to_string())),
        }
    }
}

#[async_trait]
impl TabularParser for SpreadsheetParser {
    async fn parse(&self, filename: &str, bytes: Vec<u8>) -> Result<TabularData, TabularError> {
        let filename = filename.to_string();
        tokio::task::spawn_blocking(move || Self::parse_bytes(&filename, &bytes))
            .await
            .map_err(|e| TabularError::io(format!("Parser task failed: {}", e)))?
    }
}

fn decode_csv(bytes: &[u8]) -> Result<TabularData, TabularError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(bytes);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| TabularError::csv(e.to_string()))?
        .iter()
        .enumerate()
        .map(|(idx, name)| header_name(idx, name.trim_start_matches('\u{feff}')))
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| TabularError::csv(e.to_string()))?;
        let values: Vec<Value> = (0..columns.len())
            .map(|idx| record.get(idx).map(csv_cell).unwrap_or(Value::Null))
            .collect();
        rows.push(build_row(&columns, values));
    }

    Ok(TabularData { columns, rows })
}

fn decode_workbook(bytes: Vec<u8>) -> Result<TabularData, TabularError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| TabularError::spreadsheet(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(TabularError::NoWorksheet)?
        .map_err(|e| TabularError::spreadsheet(e.to_string()))?;

    let mut sheet_rows = range.rows();
    let columns: Vec<String> = match sheet_rows.next() {
        Some(header) => header
            .iter()
            .enumerate()
            .map(|(idx, cell)| header_name(idx, &cell.to_string()))
            .collect(),
        None => return Ok(TabularData::default()),
    };

    let rows = sheet_rows
        .map(|cells| {
            let values = (0..columns.len())
                .map(|idx| cells.get(idx).map(workbook_cell).unwrap_or(Value::Null))
                .collect();
            build_row(&columns, values)
        })
        .collect();

    Ok(TabularData { columns, rows })
}

/// Blank header cells get positional names so no column is silently dropped.
fn header_name(idx: usize, raw: &str) -> String {
    if raw.trim().is_empty() {
        format!("Unnamed: {}", idx)
    } else {
        raw.to_string()
    }
}

fn build_row(columns: &[String], values: Vec<Value>) -> Map<String, Value> {
    columns.iter().cloned().zip(values).collect()
}

/// CSV cells are untyped text; numeric-looking cells become numbers.
fn csv_cell(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::from(int);
    }
    if let Ok(float) = trimmed.parse::<f64>() {
        return float_value(float);
    }
    Value::String(raw.to_string())
}

fn workbook_cell(cell: &Data) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => Value::Null,
        Data::Int(int) => Value::from(*int),
        Data::Float(float) => float_value(*float),
        Data::Bool(b) => Value::Bool(*b),
        Data::String(s) if s.trim().is_empty() => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        other => Value::String(other.to_string()),
    }
}

/// NaN and infinities have no JSON form and become null.
fn float_value(float: f64) -> Value {
    Number::from_f64(float)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
