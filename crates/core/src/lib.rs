//! Tabsearch Core - Core types shared by the tabsearch crates.
//!
//! This crate provides the foundational types for treating a remote search
//! index as a table:
//!
//! - `Error`: Error taxonomy for schema, operand, argument, server and response failures
//! - `Row`: A flat mapping from column name to JSON value
//! - `schema`: The index mapping holder (`Schema`, `Field`)
//! - `Value`, `Map`: Re-exported JSON value types used on the wire
//!
//! # Example
//!
//! ```rust
//! use tabsearch_core::schema::Schema;
//! use tabsearch_core::{Row, Value};
//! use serde_json::json;
//!
//! let schema = Schema::from_mapping(json!({
//!     "people": {"mappings": {"person": {"properties": {
//!         "age": {"type": "integer"},
//!         "name": {"type": "string"}
//!     }}}}
//! }))
//! .unwrap();
//!
//! assert_eq!(schema.index(), "people");
//! assert!(schema.contains("age"));
//!
//! let row: Row = [("age".into(), Value::from(12))].into_iter().collect();
//! assert_eq!(row.get("age"), Some(&Value::from(12)));
//! ```

#![no_std]

extern crate alloc;

mod error;
mod row;
pub mod schema;

pub use error::{Error, Result};
pub use row::Row;
pub use serde_json::{Map, Value};
