//! Domain identifier types with validation
//!
//! This module provides the newtype wrapper for file references submitted to
//! the pipeline. The type ensures type safety and validates the reference
//! shape once, at the edge, so the rest of the codebase can trust it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// File reference newtype wrapper
///
/// Represents a path-like reference to an uploaded file, e.g.
/// `incoming/2024/records.json`. References are relative keys: segments
/// separated by `/`, no leading slash, no empty or dot segments.
///
/// The final segment is the **object key**: the name the anonymized output
/// is stored under and the identifier the status operation accepts.
///
/// # Examples
///
/// ```
/// use veil::domain::ids::FileRef;
/// use std::str::FromStr;
///
/// let file_ref = FileRef::from_str("incoming/2024/records.json").unwrap();
/// assert_eq!(file_ref.as_str(), "incoming/2024/records.json");
/// assert_eq!(file_ref.object_key(), "records.json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FileRef(String);

impl FileRef {
    /// Creates a new FileRef from a string
    ///
    /// # Arguments
    ///
    /// * `reference` - The file reference string
    ///
    /// # Returns
    ///
    /// Returns `Ok(FileRef)` if the reference is valid, `Err` otherwise
    pub fn new(reference: impl Into<String>) -> Result<Self, String> {
        let reference = reference.into();
        if reference.trim().is_empty() {
            return Err("File reference cannot be empty".to_string());
        }
        if reference.contains('\\') {
            return Err(format!(
                "File reference must use '/' separators, got: {reference}"
            ));
        }
        if reference.starts_with('/') {
            return Err(format!(
                "File reference must be relative, got: {reference}"
            ));
        }
        for segment in reference.split('/') {
            if segment.is_empty() {
                return Err(format!(
                    "File reference contains an empty segment: {reference}"
                ));
            }
            if segment == "." || segment == ".." {
                return Err(format!(
                    "File reference contains a dot segment: {reference}"
                ));
            }
        }
        Ok(Self(reference))
    }

    /// Returns the file reference as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns the object key: the final `/`-separated segment.
    ///
    /// Anonymized output is stored under this key, and the status operation
    /// looks it up by this key.
    pub fn object_key(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FileRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for FileRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FileRef {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FileRef> for String {
    fn from(value: FileRef) -> Self {
        value.0
    }
}
