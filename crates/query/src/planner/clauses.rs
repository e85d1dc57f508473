//! Clause snapshot and compilation.
//!
//! `Clauses` holds the filter, aggregation, sort, projection and limit a
//! DataFrame has accumulated. Every `with_*` method returns a new snapshot
//! with one clause replaced; nothing accumulates implicitly. `compile`
//! is a pure function of the snapshot.

use super::{Fragment, DEFAULT_PAGE_SIZE};
use crate::ast::{Aggregator, BooleanFilter, Sorter};
use crate::response::ResponseMode;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde_json::{json, Map, Value};
use tabsearch_core::{Error, Result};

/// The `_source` filtering of hits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Projection {
    includes: Vec<String>,
    excludes: Vec<String>,
}

impl Projection {
    /// Projection returning only the given columns.
    pub fn includes<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            includes: columns.into_iter().map(Into::into).collect(),
            excludes: Vec::new(),
        }
    }

    #[inline]
    pub fn included(&self) -> &[String] {
        &self.includes
    }

    #[inline]
    pub fn excluded(&self) -> &[String] {
        &self.excludes
    }

    /// Compiles into `{"includes": [...], "excludes": [...]}`.
    pub fn build(&self) -> Fragment {
        json!({
            "includes": self.includes,
            "excludes": self.excludes,
        })
    }
}

/// Accumulated query clauses.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Clauses {
    filter: Option<Fragment>,
    aggregation: Option<Map<String, Value>>,
    sort: Option<Vec<Fragment>>,
    projection: Option<Projection>,
    limit: Option<u64>,
}

impl Clauses {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the filter clause.
    pub fn with_filter(&self, filter: BooleanFilter) -> Self {
        Self {
            filter: Some(filter.build()),
            ..self.clone()
        }
    }

    /// Replaces the projection clause. Names are not checked against any schema.
    pub fn with_projection<I, S>(&self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            projection: Some(Projection::includes(columns)),
            ..self.clone()
        }
    }

    /// Replaces the row cap. `n` must be positive.
    pub fn with_limit(&self, n: i64) -> Result<Self> {
        if n < 1 {
            return Err(Error::invalid_value(format!(
                "limit must be a positive integer, got {}",
                n
            )));
        }
        Ok(Self {
            limit: Some(n as u64),
            ..self.clone()
        })
    }

    /// Replaces the aggregation clause with the union of the aggregators'
    /// fragments. A later aggregator with the same label overwrites an
    /// earlier one.
    pub fn with_aggregation(&self, aggregators: &[Aggregator]) -> Result<Self> {
        if aggregators.is_empty() {
            return Err(Error::invalid_value("agg requires at least one aggregator"));
        }
        let mut aggregation = Map::new();
        for aggregator in aggregators {
            if let Value::Object(fragment) = aggregator.build() {
                aggregation.extend(fragment);
            }
        }
        Ok(Self {
            aggregation: Some(aggregation),
            ..self.clone()
        })
    }

    /// Replaces the sort clause. Sorters keep call order; repeated columns
    /// are kept as given. An empty list clears the clause.
    pub fn with_sort(&self, sorters: &[Sorter]) -> Self {
        let sort = if sorters.is_empty() {
            None
        } else {
            Some(sorters.iter().map(Sorter::build).collect())
        };
        Self {
            sort,
            ..self.clone()
        }
    }

    #[inline]
    pub fn filter(&self) -> Option<&Fragment> {
        self.filter.as_ref()
    }

    #[inline]
    pub fn aggregation(&self) -> Option<&Map<String, Value>> {
        self.aggregation.as_ref()
    }

    #[inline]
    pub fn sort(&self) -> Option<&[Fragment]> {
        self.sort.as_deref()
    }

    #[inline]
    pub fn projection(&self) -> Option<&Projection> {
        self.projection.as_ref()
    }

    #[inline]
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    /// Returns true when an aggregation clause is set.
    #[inline]
    pub fn is_aggregating(&self) -> bool {
        self.aggregation.is_some()
    }

    /// Selects how a response to this query is interpreted.
    /// Decided by the clauses alone, never by the response.
    pub fn response_mode(&self) -> ResponseMode {
        if self.is_aggregating() {
            ResponseMode::Aggregations
        } else {
            ResponseMode::Hits
        }
    }

    /// Compiles the clauses into one search document.
    pub fn compile(&self) -> Value {
        let mut query = Map::new();

        let size = match (&self.aggregation, self.limit) {
            (Some(_), _) => 0,
            (None, Some(limit)) => limit,
            (None, None) => DEFAULT_PAGE_SIZE,
        };
        query.insert("size".into(), Value::from(size));

        if let Some(aggregation) = &self.aggregation {
            query.insert("aggregations".into(), Value::Object(aggregation.clone()));
        }

        if let Some(filter) = &self.filter {
            query.insert("query".into(), json!({"filtered": {"filter": filter}}));
        }

        if let Some(projection) = &self.projection {
            query.insert("_source".into(), projection.build());
        }

        if let Some(sort) = &self.sort {
            query.insert("sort".into(), Value::Array(sort.clone()));
        }

        let query = Value::Object(query);
        log::trace!("compiled query: {}", query);
        query
    }
}
