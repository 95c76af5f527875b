//! Schema validation for structured documents
//!
//! A [`ValidationSchema`] is a declarative shape check applied to structured
//! payloads before any value is replaced: required fields must be present,
//! and declared fields must hold the declared kind of value. Validation is
//! read-only and stops at the first violation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::errors::SchemaViolation;

/// Field name used when the document root itself violates the schema.
pub const ROOT_FIELD: &str = "$";

/// Value kinds a schema can declare for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Any JSON string
    String,
    /// A JSON number with no fractional part
    Integer,
    /// Any JSON number
    Number,
    /// A JSON boolean
    Boolean,
    /// JSON null
    Null,
}

impl FieldKind {
    /// Whether the value holds this kind.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Integer => value.is_i64() || value.is_u64(),
            FieldKind::Number => value.is_number(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::Null => value.is_null(),
        }
    }
}

/// Declarative shape check for structured documents
///
/// `required` lists fields that must be present. `fields` declares the kind
/// expected of a field when it is present; fields the schema does not
/// declare are ignored. The two lists are independent: a required field
/// without a declared kind is only checked for presence.
///
/// # Validation order
///
/// Presence of every required field is checked first, in declaration order,
/// then the kinds of present declared fields, in field-name order. The
/// first violation is returned. A document missing one field and carrying a
/// wrong-typed second field therefore reports the missing field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationSchema {
    required: Vec<String>,
    fields: BTreeMap<String, FieldKind>,
}

impl ValidationSchema {
    /// Creates an empty schema that accepts any mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default shape for incoming person records: `name` and `email`
    /// strings plus an integer `age`, all required.
    pub fn person_record() -> Self {
        Self::new()
            .require("name", FieldKind::String)
            .require("email", FieldKind::String)
            .require("age", FieldKind::Integer)
    }

    /// Adds a required field with a declared kind.
    pub fn require(mut self, field: impl Into<String>, kind: FieldKind) -> Self {
        let field = field.into();
        self.required.push(field.clone());
        self.fields.insert(field, kind);
        self
    }

    /// Adds a required field checked for presence only.
    pub fn require_presence(mut self, field: impl Into<String>) -> Self {
        self.required.push(field.into());
        self
    }

    /// Declares the kind of an optional field.
    pub fn declare(mut self, field: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.insert(field.into(), kind);
        self
    }

    /// Required field names in declaration order.
    pub fn required_fields(&self) -> &[String] {
        &self.required
    }

    /// Declared field kinds.
    pub fn declared_fields(&self) -> &BTreeMap<String, FieldKind> {
        &self.fields
    }

    /// Validates a structured document against this schema.
    ///
    /// The document root must be a mapping. Returns the first violation
    /// found; the document is never modified.
    pub fn validate(&self, document: &Value) -> Result<(), SchemaViolation> {
        let map = match document {
            Value::Object(map) => map,
            _ => return Err(SchemaViolation::wrong_type(ROOT_FIELD)),
        };

        for field in &self.required {
            if !map.contains_key(field) {
                return Err(SchemaViolation::missing(field));
            }
        }

        for (field, kind) in &self.fields {
            if let Some(value) = map.get(field) {
                if !kind.matches(value) {
                    return Err(SchemaViolation::wrong_type(field));
                }
            }
        }

        Ok(())
    }
}
