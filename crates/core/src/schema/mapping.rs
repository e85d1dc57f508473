//! Index mapping holder.
//!
//! The engine describes an index as
//! `{index: {"mappings": {type: {"properties": {field: metadata}}}}}`.
//! Typeless mappings (`{index: {"mappings": {"properties": {...}}}}`) are
//! accepted as a single type named [`TYPELESS_DOC_TYPE`].

use super::field::Field;
use crate::error::{Error, Result};
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::HashMap;
use serde_json::{Map, Value};

/// Document type name used for mappings without a type level.
pub const TYPELESS_DOC_TYPE: &str = "_doc";

/// The column set of one index, derived from its mapping.
#[derive(Clone, Debug)]
pub struct Schema {
    /// Index name.
    index: String,
    /// Fields in mapping order, unique by name.
    fields: Vec<Field>,
    /// Field position by name.
    lookup: HashMap<String, usize>,
    /// The raw mapping document.
    mapping: Value,
}

impl Schema {
    /// Builds a schema from a mapping document.
    ///
    /// Fails unless the document names exactly one index and declares at
    /// least one field.
    pub fn from_mapping(mapping: Value) -> Result<Self> {
        let indices = mapping
            .as_object()
            .ok_or_else(|| Error::schema(format!("mapping is not an object: {}", mapping)))?;

        let mut entries = indices.iter();
        let (index, body) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            (None, _) => return Err(Error::schema(format!("No index in [{}]", mapping))),
            (Some(_), Some(_)) => {
                let names: Vec<&str> = indices.keys().map(String::as_str).collect();
                return Err(Error::schema(format!(
                    "expected exactly one index, found {}: [{}]",
                    names.len(),
                    names.join(", ")
                )));
            }
        };

        let mappings = body
            .get("mappings")
            .and_then(Value::as_object)
            .ok_or_else(|| Error::schema(format!("index {} has no mappings", index)))?;

        let mut fields = Vec::new();
        let mut lookup = HashMap::new();
        for (doc_type, properties) in doc_types(mappings) {
            for (name, metadata) in properties {
                if lookup.contains_key(name.as_str()) {
                    continue;
                }
                lookup.insert(name.clone(), fields.len());
                fields.push(Field::new(name.as_str(), doc_type, metadata.clone()));
            }
        }

        if fields.is_empty() {
            return Err(Error::schema(format!("0 columns found in [{}]", index)));
        }

        Ok(Self {
            index: index.to_string(),
            fields,
            lookup,
            mapping,
        })
    }

    /// Returns the index name.
    #[inline]
    pub fn index(&self) -> &str {
        &self.index
    }

    /// Returns the fields.
    #[inline]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the column names in mapping order.
    pub fn column_names(&self) -> Vec<&str> {
        self.fields.iter().map(Field::name).collect()
    }

    /// Gets a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.lookup.get(name).map(|&i| &self.fields[i])
    }

    /// Returns true if the mapping declares the column.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    /// Returns the number of columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the raw mapping document.
    #[inline]
    pub fn mapping(&self) -> &Value {
        &self.mapping
    }

    /// Returns every document type with its full properties, duplicates included.
    pub fn doc_types(&self) -> Vec<(&str, &Map<String, Value>)> {
        self.mapping
            .get(self.index.as_str())
            .and_then(|body| body.get("mappings"))
            .and_then(Value::as_object)
            .map(doc_types)
            .unwrap_or_default()
    }
}

/// Yields `(type name, properties)` for each document type that declares properties.
fn doc_types(mappings: &Map<String, Value>) -> Vec<(&str, &Map<String, Value>)> {
    if let Some(properties) = mappings.get("properties").and_then(Value::as_object) {
        return alloc::vec![(TYPELESS_DOC_TYPE, properties)];
    }
    mappings
        .iter()
        .filter_map(|(doc_type, body)| {
            body.get("properties")
                .and_then(Value::as_object)
                .map(|properties| (doc_type.as_str(), properties))
        })
        .collect()
}
