//! Query planning: the clause snapshot and its compiled search document.

mod clauses;

pub use clauses::{Clauses, Projection};

/// A compiled piece of a search document.
pub type Fragment = serde_json::Value;

/// Number of hits requested when no limit is set.
pub const DEFAULT_PAGE_SIZE: u64 = 20;
