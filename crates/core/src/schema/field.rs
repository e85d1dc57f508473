//! Field definition of an index mapping.

use alloc::string::String;
use serde_json::Value;

/// A field declared under a document type's `properties`.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    /// Field name.
    name: String,
    /// Document type the field was declared under.
    doc_type: String,
    /// Field metadata as returned by the engine, kept opaque.
    metadata: Value,
}

impl Field {
    /// Creates a new field definition.
    pub fn new(name: impl Into<String>, doc_type: impl Into<String>, metadata: Value) -> Self {
        Self {
            name: name.into(),
            doc_type: doc_type.into(),
            metadata,
        }
    }

    /// Returns the field name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the document type name.
    #[inline]
    pub fn doc_type(&self) -> &str {
        &self.doc_type
    }

    /// Returns the raw field metadata.
    #[inline]
    pub fn metadata(&self) -> &Value {
        &self.metadata
    }

    /// Returns the engine data type (`"integer"`, `"keyword"`, ...), if declared.
    pub fn data_type(&self) -> Option<&str> {
        self.metadata.get("type").and_then(Value::as_str)
    }
}
