//! Tabsearch Frame - DataFrame API over a remote search index.
//!
//! A `DataFrame` treats an index as named columns and its documents as
//! rows. Builder methods accumulate clauses without any I/O; the terminal
//! operations (`collect`, `count`, `to_tabular`, `show`) compile the
//! clauses into one search document, send it, and interpret the answer.
//!
//! # Core Components
//!
//! - `DataFrame`: Immutable clause snapshot plus the transport to run it on
//! - `RemoteIndex`: Connection settings and schema discovery
//! - `Tabular`: Column-major view of collected rows
//!
//! # Example
//!
//! ```no_run
//! use tabsearch_frame::DataFrame;
//! use tabsearch_frame::query::avg;
//!
//! let df = DataFrame::from_remote("http://localhost:9200", "people", None).unwrap();
//! let age = df.column("age").unwrap();
//!
//! let kids = df.filter(age.lt(13)).select(["name", "age"]).collect().unwrap();
//! let mean = df.filter(df.column("gender").unwrap().eq("male"))
//!     .agg(&[avg("age")])
//!     .unwrap()
//!     .collect()
//!     .unwrap();
//! println!("{} kids, {}", kids.len(), mean[0]);
//! ```

mod dataframe;
mod display;
mod remote;
mod tabular;

pub use dataframe::{DataFrame, Selection};
pub use remote::RemoteIndex;
pub use tabular::Tabular;

pub use tabsearch_core::{Error, Result, Row};

/// Operator algebra re-exports.
pub mod query {
    pub use tabsearch_query::ast::*;
    pub use tabsearch_query::planner::DEFAULT_PAGE_SIZE;
}
