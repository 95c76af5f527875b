//! Edge case tests for the anonymization engine
//!
//! Covers degenerate documents, unicode values, and tabular pathologies
//! that the happy-path tests skip over.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::json;

use veil::core::engine::AnonymizationEngine;
use veil::core::generator::NameGenerator;
use veil::core::schema::{ValidationSchema, ROOT_FIELD};
use veil::domain::{FormatError, VeilError, ViolationReason};

struct SequenceGenerator {
    counter: AtomicUsize,
}

impl SequenceGenerator {
    fn new() -> Self {
        Self {
            counter: AtomicUsize::new(0),
        }
    }
}

impl NameGenerator for SequenceGenerator {
    fn first_name(&self) -> String {
        format!("First{}", self.counter.fetch_add(1, Ordering::Relaxed))
    }

    fn last_name(&self) -> String {
        format!("Last{}", self.counter.fetch_add(1, Ordering::Relaxed))
    }
}

fn engine() -> AnonymizationEngine {
    AnonymizationEngine::new(None, Arc::new(SequenceGenerator::new()))
}

#[test]
fn test_empty_object_is_valid_and_untouched() {
    let result = engine()
        .process(b"{}", "application/json")
        .expect("Processing failed");

    assert_eq!(result.document, json!({}));
    assert_eq!(result.replaced_values, 0);
}

#[test]
fn test_root_array_of_records_is_transformed() {
    let payload = br#"[{"name": "Ann"}, {"name": "Bob"}]"#;

    let result = engine()
        .process(payload, "application/json")
        .expect("Processing failed");

    assert_eq!(result.document, json!([{"name": "First0"}, {"name": "First1"}]));
    assert_eq!(result.replaced_values, 2);
}

#[test]
fn test_scalar_array_elements_pass_through() {
    // Bare strings in a sequence carry no field context, so they stay.
    let payload = br#"{"tags": ["John Smith", "alpha"], "ids": [1, 2]}"#;

    let result = engine()
        .process(payload, "application/json")
        .expect("Processing failed");

    assert_eq!(
        result.document,
        json!({"tags": ["John Smith", "alpha"], "ids": [1, 2]})
    );
    assert_eq!(result.replaced_values, 0);
}

#[test]
fn test_scalar_root_is_replaced() {
    let result = engine()
        .process(br#""John Smith""#, "application/json")
        .expect("Processing failed");

    assert_eq!(result.document, json!("First0 Last1"));
    assert_eq!(result.replaced_values, 1);
}

#[test]
fn test_unicode_names_are_eligible() {
    let payload = r#"{"a": "José García", "b": "李小龙"}"#.as_bytes();

    let result = engine()
        .process(payload, "application/json")
        .expect("Processing failed");

    assert_eq!(result.document["a"], json!("First0 Last1"));
    assert_eq!(result.document["b"], json!("First2"));
    assert_eq!(result.replaced_values, 2);
}

#[test]
fn test_replacement_normalizes_surrounding_whitespace() {
    let result = engine()
        .process(br#"{"name": "  Ann   Lee  "}"#, "application/json")
        .expect("Processing failed");

    // Two whitespace-delimited tokens regardless of padding.
    assert_eq!(result.document["name"], json!("First0 Last1"));
}

#[test]
fn test_deeply_nested_mappings_are_reached() {
    let payload = br#"{"a": {"b": {"c": {"d": {"name": "Ann"}}}}}"#;

    let result = engine()
        .process(payload, "application/json")
        .expect("Processing failed");

    assert_eq!(result.document["a"]["b"]["c"]["d"]["name"], json!("First0"));
    assert_eq!(result.replaced_values, 1);
}

#[test]
fn test_schema_rejects_non_mapping_root() {
    let engine = AnonymizationEngine::new(
        Some(ValidationSchema::person_record()),
        Arc::new(SequenceGenerator::new()),
    );

    let err = engine
        .process(br#"["not", "a", "record"]"#, "application/json")
        .expect_err("Expected a schema violation");

    match err {
        VeilError::Schema(violation) => {
            assert_eq!(violation.field, ROOT_FIELD);
            assert_eq!(violation.reason, ViolationReason::WrongType);
        }
        other => panic!("Expected schema violation, got: {other}"),
    }
}

#[test]
fn test_empty_structured_payload_is_malformed() {
    let err = engine()
        .process(b"", "application/json")
        .expect_err("Expected a parse failure");

    assert!(matches!(err, VeilError::Format(FormatError::Malformed(_))));
}

#[test]
fn test_headers_only_csv_yields_empty_output() {
    let result = engine()
        .process(b"name,age\n", "text/csv")
        .expect("Processing failed");

    assert_eq!(result.document, json!([]));
    assert_eq!(result.replaced_values, 0);
}

#[test]
fn test_empty_tabular_payload_is_malformed() {
    let err = engine()
        .process(b"", "text/csv")
        .expect_err("Expected a parse failure");

    match err {
        VeilError::Format(FormatError::Malformed(message)) => {
            assert!(message.contains("empty tabular payload"), "got: {message}");
        }
        other => panic!("Expected malformed format, got: {other}"),
    }
}

#[test]
fn test_ragged_csv_row_is_malformed() {
    let err = engine()
        .process(b"name,age\nAnn,34\nBob\n", "text/csv")
        .expect_err("Expected a parse failure");

    assert!(matches!(err, VeilError::Format(FormatError::Malformed(_))));
}

#[test]
fn test_numeric_first_row_disqualifies_column() {
    // The first row decides: later name-like cells do not re-qualify it.
    let payload = b"code,name\n1234,Ann\nJohn,Bob\n";

    let result = engine().process(payload, "text/csv").expect("Processing failed");

    let records = result.document.as_array().expect("Expected record array");
    assert_eq!(records[0]["code"], json!(1234));
    assert_eq!(records[1]["code"], json!("John"));
    assert_eq!(records[0]["name"], json!("First0"));
    assert_eq!(records[1]["name"], json!("First0"));
    assert_eq!(result.replaced_values, 2);
}

#[test]
fn test_empty_first_cell_disqualifies_column() {
    let payload = b"nickname,age\n,34\nAnn,28\n";

    let result = engine().process(payload, "text/csv").expect("Processing failed");

    let records = result.document.as_array().expect("Expected record array");
    // Empty cells parse as null, and a null first cell ends classification.
    assert_eq!(records[0]["nickname"], json!(null));
    assert_eq!(records[1]["nickname"], json!("Ann"));
    assert_eq!(result.replaced_values, 0);
}

#[test]
fn test_quoted_csv_cell_with_comma_stays_one_column() {
    let payload = b"name,age\n\"Smith, John\",34\n";

    let result = engine().process(payload, "text/csv").expect("Processing failed");

    let records = result.document.as_array().expect("Expected record array");
    assert_eq!(records.len(), 1);
    // "Smith, John" is one two-token cell, not two columns.
    assert_eq!(records[0]["name"], json!("First0 Last1"));
    assert_eq!(records[0]["age"], json!(34));
}
