//! Structural transformation
//!
//! The [`Transformer`] rewrites eligible string values in place with
//! synthetic names while preserving document shape exactly: key sets,
//! sequence lengths, and row/column counts never change. Replacement values
//! come from the injected [`NameGenerator`].

use std::sync::Arc;

use serde_json::Value;

use crate::core::classify::{classify, classify_str, Eligibility, TokenShape};
use crate::core::generator::NameGenerator;
use crate::domain::document::TabularDocument;

/// In-place document rewriter
///
/// Thread-safe; the generator sits behind an `Arc` so one transformer can be
/// shared across tasks.
pub struct Transformer {
    generator: Arc<dyn NameGenerator>,
}

impl Transformer {
    /// Creates a transformer drawing replacements from `generator`.
    pub fn new(generator: Arc<dyn NameGenerator>) -> Self {
        Self { generator }
    }

    /// Recursively replaces eligible strings in a structured document.
    ///
    /// Mappings are processed entry by entry, nested mappings recursively.
    /// Sequence elements are recursed into only when they are themselves
    /// mappings; scalar and sequence elements of sequences pass through.
    /// Returns the number of values replaced.
    pub fn transform_document(&self, document: &mut Value) -> usize {
        match document {
            Value::Object(map) => map
                .values_mut()
                .map(|value| self.transform_document(value))
                .sum(),
            Value::Array(items) => items
                .iter_mut()
                .filter(|item| item.is_object())
                .map(|item| self.transform_document(item))
                .sum(),
            scalar => self.replace_scalar(scalar),
        }
    }

    /// Replaces identifying columns of a tabular document.
    ///
    /// Each column is classified by its first row only. An eligible column
    /// gets one replacement value derived from that first row, broadcast to
    /// every row of the column, so a name column holds a single synthetic
    /// name afterwards. Returns the number of cells overwritten.
    pub fn transform_table(&self, table: &mut TabularDocument) -> usize {
        let mut replaced = 0;
        for column in table.columns_mut() {
            let replacement = match column.values.first() {
                Some(Value::String(first)) => match classify_str(first) {
                    Eligibility::Eligible(shape) => self.replacement(first, shape),
                    Eligibility::NotEligible => continue,
                },
                _ => continue,
            };
            for cell in column.values.iter_mut() {
                *cell = Value::String(replacement.clone());
                replaced += 1;
            }
        }
        replaced
    }

    fn replace_scalar(&self, scalar: &mut Value) -> usize {
        let shape = match classify(scalar) {
            Eligibility::Eligible(shape) => shape,
            Eligibility::NotEligible => return 0,
        };
        let replacement = match scalar {
            Value::String(original) => self.replacement(original, shape),
            _ => return 0,
        };
        *scalar = Value::String(replacement);
        1
    }

    /// Builds the replacement string for one eligible value.
    ///
    /// Single-token values become a fresh first name. Multi-token values
    /// keep their interior tokens: the first token becomes a first name,
    /// the last a last name, and the result is rejoined with single spaces.
    fn replacement(&self, original: &str, shape: TokenShape) -> String {
        match shape {
            TokenShape::Single => self.generator.first_name(),
            TokenShape::Multi => {
                let tokens: Vec<&str> = original.split_whitespace().collect();
                let mut rebuilt = Vec::with_capacity(tokens.len());
                rebuilt.push(self.generator.first_name());
                for interior in &tokens[1..tokens.len() - 1] {
                    rebuilt.push((*interior).to_string());
                }
                rebuilt.push(self.generator.last_name());
                rebuilt.join(" ")
            }
        }
    }
}
