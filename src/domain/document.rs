//! Document shapes and payload format rules
//!
//! This module holds the parsed document representations the engine works
//! on, the payload format signal, and the readiness status reported to
//! clients. Structured documents are plain [`serde_json::Value`] trees; the
//! tabular shape lives here as [`TabularDocument`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::errors::FormatError;

/// Payload format the engine can process
///
/// Derived from the content type recorded when the file was uploaded:
/// a signal containing `json` is structured, one containing `csv` is
/// tabular, anything else is unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadFormat {
    /// Nested JSON document
    Structured,
    /// CSV with a header row
    Tabular,
}

impl PayloadFormat {
    /// Maps a content-type signal onto a payload format.
    pub fn from_content_type(content_type: &str) -> Result<Self, FormatError> {
        let normalized = content_type.to_ascii_lowercase();
        if normalized.contains("json") {
            Ok(PayloadFormat::Structured)
        } else if normalized.contains("csv") {
            Ok(PayloadFormat::Tabular)
        } else {
            Err(FormatError::Unsupported(content_type.to_string()))
        }
    }

    /// Returns the format name used in logs and result envelopes.
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadFormat::Structured => "structured",
            PayloadFormat::Tabular => "tabular",
        }
    }
}

impl fmt::Display for PayloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Infers a content type from a file name's extension.
///
/// Local files carry no upload metadata, so the extension stands in:
/// `.json` and `.csv` map to their types, anything else maps to
/// `application/octet-stream`, which the engine then rejects as
/// unsupported.
pub fn infer_content_type(name: &str) -> &'static str {
    let lowered = name.to_ascii_lowercase();
    if lowered.ends_with(".json") {
        "application/json"
    } else if lowered.ends_with(".csv") {
        "text/csv"
    } else {
        "application/octet-stream"
    }
}

/// One named column of cell values, aligned by row index
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name from the header row
    pub name: String,

    /// Cell values, one per data row
    pub values: Vec<Value>,
}

impl Column {
    /// Creates a new column
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// A parsed tabular payload: ordered columns of equal length
///
/// The column order mirrors the header row of the source CSV. All columns
/// hold the same number of values; the format adapter enforces this when
/// parsing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabularDocument {
    columns: Vec<Column>,
}

impl TabularDocument {
    /// Builds a table from parsed columns.
    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Returns the columns in header order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the columns mutably, for in-place transformation.
    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Converts the table into its record-oriented output shape: one JSON
    /// object per row, keyed by column name.
    pub fn into_records(self) -> Vec<Value> {
        let rows = self.row_count();
        let mut records = Vec::with_capacity(rows);
        for row in 0..rows {
            let mut record = Map::new();
            for column in &self.columns {
                let cell = column.values.get(row).cloned().unwrap_or(Value::Null);
                record.insert(column.name.clone(), cell);
            }
            records.push(Value::Object(record));
        }
        records
    }
}

/// Raw bytes fetched from a byte source, with their upload content type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Payload bytes as uploaded
    pub bytes: Vec<u8>,

    /// Content type recorded at upload time
    pub content_type: String,
}

impl StoredObject {
    /// Creates a new stored object
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
        }
    }
}

/// Readiness of an anonymized output object
///
/// Both states are ordinary answers, not errors: a file that is still
/// queued or mid-processing reports `NotReady`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStatus {
    /// The anonymized output exists in the sink
    Ready,
    /// The anonymized output has not appeared yet
    NotReady,
}

impl ProcessingStatus {
    /// Returns the wire word reported to clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingStatus::Ready => "ready",
            ProcessingStatus::NotReady => "not_ready",
        }
    }
}

impl fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case("application/json", PayloadFormat::Structured ; "json content type")]
    #[test_case("application/json; charset=utf-8", PayloadFormat::Structured ; "json with charset")]
    #[test_case("text/csv", PayloadFormat::Tabular ; "csv content type")]
    #[test_case("application/csv", PayloadFormat::Tabular ; "application csv")]
    #[test_case("TEXT/CSV", PayloadFormat::Tabular ; "uppercase signal")]
    fn test_format_from_content_type(signal: &str, expected: PayloadFormat) {
        assert_eq!(PayloadFormat::from_content_type(signal).unwrap(), expected);
    }

    #[test_case("text/plain" ; "plain text")]
    #[test_case("application/pdf" ; "pdf")]
    #[test_case("application/octet-stream" ; "octet stream")]
    #[test_case("" ; "empty signal")]
    fn test_unsupported_content_type(signal: &str) {
        let err = PayloadFormat::from_content_type(signal).unwrap_err();
        assert!(matches!(err, FormatError::Unsupported(_)));
    }

    #[test]
    fn test_infer_content_type_from_extension() {
        assert_eq!(infer_content_type("records.json"), "application/json");
        assert_eq!(infer_content_type("RECORDS.JSON"), "application/json");
        assert_eq!(infer_content_type("people.csv"), "text/csv");
        assert_eq!(infer_content_type("notes.txt"), "application/octet-stream");
        assert_eq!(infer_content_type("archive"), "application/octet-stream");
    }

    #[test]
    fn test_table_row_and_column_counts() {
        let table = TabularDocument::from_columns(vec![
            Column::new("name", vec![json!("Ann"), json!("Bob")]),
            Column::new("age", vec![json!(34), json!(28)]),
        ]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_empty_table_counts() {
        let table = TabularDocument::default();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_into_records_shape() {
        let table = TabularDocument::from_columns(vec![
            Column::new("name", vec![json!("Ann"), json!("Bob")]),
            Column::new("age", vec![json!(34), json!(28)]),
        ]);
        let records = table.into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], json!({"name": "Ann", "age": 34}));
        assert_eq!(records[1], json!({"name": "Bob", "age": 28}));
    }

    #[test]
    fn test_into_records_of_headers_only_table() {
        let table = TabularDocument::from_columns(vec![
            Column::new("name", vec![]),
            Column::new("age", vec![]),
        ]);
        assert!(table.into_records().is_empty());
    }

    #[test]
    fn test_processing_status_wire_words() {
        assert_eq!(ProcessingStatus::Ready.as_str(), "ready");
        assert_eq!(ProcessingStatus::NotReady.as_str(), "not_ready");
    }

    #[test]
    fn test_payload_format_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PayloadFormat::Structured).unwrap(),
            "\"structured\""
        );
        assert_eq!(
            serde_json::to_string(&PayloadFormat::Tabular).unwrap(),
            "\"tabular\""
        );
    }
}
