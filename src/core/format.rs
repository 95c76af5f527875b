//! Format adapters for payload parsing
//!
//! Turns raw payload bytes into the document shapes the engine transforms:
//! structured payloads into [`serde_json::Value`] trees, tabular payloads
//! into [`TabularDocument`] columns. Parse failures are reported as
//! [`FormatError::Malformed`]; the caller decides the format beforehand via
//! [`PayloadFormat::from_content_type`](crate::domain::PayloadFormat::from_content_type).

use serde_json::Value;

use crate::domain::document::{Column, TabularDocument};
use crate::domain::errors::FormatError;

/// Parses a structured (JSON) payload.
pub fn parse_structured(bytes: &[u8]) -> Result<Value, FormatError> {
    serde_json::from_slice(bytes).map_err(|e| FormatError::Malformed(format!("invalid JSON: {e}")))
}

/// Parses a tabular (CSV) payload.
///
/// The first record is the header row and is mandatory. Every data row must
/// carry exactly one field per header; short or long rows are malformed.
/// Cells are trimmed and typed by inference: empty cells become null,
/// integer-looking cells i64, numeric cells f64, everything else strings.
pub fn parse_tabular(bytes: &[u8]) -> Result<TabularDocument, FormatError> {
    if bytes.is_empty() {
        return Err(FormatError::Malformed("empty tabular payload".to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| FormatError::Malformed(format!("invalid CSV header: {e}")))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(FormatError::Malformed("missing CSV header row".to_string()));
    }

    let mut columns: Vec<Column> = headers
        .into_iter()
        .map(|name| Column::new(name, Vec::new()))
        .collect();

    for record in reader.records() {
        let record = record.map_err(|e| FormatError::Malformed(format!("invalid CSV row: {e}")))?;
        for (column, cell) in columns.iter_mut().zip(record.iter()) {
            column.values.push(infer_cell(cell));
        }
    }

    Ok(TabularDocument::from_columns(columns))
}

/// Types a trimmed CSV cell the way a dataframe loader would.
fn infer_cell(cell: &str) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    if let Ok(integer) = cell.parse::<i64>() {
        return Value::from(integer);
    }
    if let Ok(float) = cell.parse::<f64>() {
        if let Some(number) = serde_json::Number::from_f64(float) {
            return Value::Number(number);
        }
    }
    Value::String(cell.to_string())
}
