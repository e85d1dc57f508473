//! Operator algebra: the pure values query clauses are built from.

mod aggregate;
mod column;
mod filter;
mod operand;
mod sorter;

pub use aggregate::{
    avg, cardinality, count, count_all, max, min, sum, Aggregator, MetricKind, COUNT_ALL_LABEL,
};
pub use column::Column;
pub use filter::BooleanFilter;
pub use operand::Operand;
pub use sorter::{SortOrder, Sorter};
