//! Aggregator specifications.
//!
//! Every aggregator compiles to a single-key fragment whose key is its
//! label, `"<kind>(<field>)"`. The label is also the column name of the
//! aggregation's value in the result row.

use crate::planner::Fragment;
use alloc::format;
use alloc::string::String;
use serde_json::{json, Map, Value};

/// Label of the document-count aggregator.
pub const COUNT_ALL_LABEL: &str = "count(*)";

/// Field the document-count aggregator counts over; present on every hit.
const COUNT_ALL_FIELD: &str = "_index";

/// Metric aggregation kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Count,
    Sum,
    Avg,
    Min,
    Max,
    Cardinality,
}

impl MetricKind {
    /// Returns the name used in labels.
    pub fn label_name(&self) -> &'static str {
        match self {
            MetricKind::Count => "count",
            MetricKind::Sum => "sum",
            MetricKind::Avg => "avg",
            MetricKind::Min => "min",
            MetricKind::Max => "max",
            MetricKind::Cardinality => "cardinality",
        }
    }

    /// Returns the engine's aggregation type name.
    pub fn wire_name(&self) -> &'static str {
        match self {
            MetricKind::Count => "value_count",
            other => other.label_name(),
        }
    }
}

/// An aggregation over the whole (filtered) index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Aggregator {
    /// A single-value metric over one field.
    Metric { kind: MetricKind, field: String },
    /// Number of matching documents.
    CountAll,
}

impl Aggregator {
    pub fn metric(kind: MetricKind, field: impl Into<String>) -> Self {
        Aggregator::Metric {
            kind,
            field: field.into(),
        }
    }

    /// Returns the label keying this aggregator's fragment and result.
    pub fn label(&self) -> String {
        match self {
            Aggregator::Metric { kind, field } => format!("{}({})", kind.label_name(), field),
            Aggregator::CountAll => COUNT_ALL_LABEL.into(),
        }
    }

    /// Compiles this aggregator into `{label: {kind: {"field": field}}}`.
    pub fn build(&self) -> Fragment {
        let (kind, field) = match self {
            Aggregator::Metric { kind, field } => (kind.wire_name(), field.as_str()),
            Aggregator::CountAll => (MetricKind::Count.wire_name(), COUNT_ALL_FIELD),
        };
        let mut body = Map::new();
        body.insert(kind.into(), json!({ "field": field }));
        let mut fragment = Map::new();
        fragment.insert(self.label(), Value::Object(body));
        Value::Object(fragment)
    }
}

/// Number of non-missing values of a field.
pub fn count(field: impl Into<String>) -> Aggregator {
    Aggregator::metric(MetricKind::Count, field)
}

/// Number of matching documents.
pub fn count_all() -> Aggregator {
    Aggregator::CountAll
}

pub fn sum(field: impl Into<String>) -> Aggregator {
    Aggregator::metric(MetricKind::Sum, field)
}

pub fn avg(field: impl Into<String>) -> Aggregator {
    Aggregator::metric(MetricKind::Avg, field)
}

pub fn min(field: impl Into<String>) -> Aggregator {
    Aggregator::metric(MetricKind::Min, field)
}

pub fn max(field: impl Into<String>) -> Aggregator {
    Aggregator::metric(MetricKind::Max, field)
}

/// Approximate number of distinct values of a field.
pub fn cardinality(field: impl Into<String>) -> Aggregator {
    Aggregator::metric(MetricKind::Cardinality, field)
}
