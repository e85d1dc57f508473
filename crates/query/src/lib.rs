//! Tabsearch Query - Query compiler for tabsearch.
//!
//! This crate turns DataFrame-style intent into a single search document
//! and turns the engine's answer back into rows:
//!
//! - `ast`: Column references, boolean filters, sorters, aggregators and dynamic operands
//! - `planner`: The clause snapshot and its compilation into a query document
//! - `response`: Hit-listing and aggregation response interpretation
//!
//! # Example
//!
//! ```rust
//! use tabsearch_query::ast::{avg, Column};
//! use tabsearch_query::planner::Clauses;
//! use serde_json::json;
//!
//! let age = Column::new("age");
//! let clauses = Clauses::new()
//!     .with_filter(age.lt(13))
//!     .with_aggregation(&[avg("age")])
//!     .unwrap();
//!
//! assert_eq!(
//!     clauses.compile(),
//!     json!({
//!         "size": 0,
//!         "query": {"filtered": {"filter": {"range": {"age": {"lt": 13}}}}},
//!         "aggregations": {"avg(age)": {"avg": {"field": "age"}}}
//!     })
//! );
//! ```

#![no_std]

extern crate alloc;

pub mod ast;
pub mod planner;
pub mod response;
