//! Schema module for tabsearch.
//!
//! This module holds the index mapping as discovered from the search engine
//! and the column names derived from it.

mod field;
mod mapping;

pub use field::Field;
pub use mapping::{Schema, TYPELESS_DOC_TYPE};
