//! Dynamically-kinded operands.
//!
//! The typed API (`Column::lt`, `&`, `DataFrame::filter`) cannot be handed
//! the wrong kind of value. `Operand` is the entry point for callers that
//! assemble expressions at runtime; converting it to the kind a method
//! needs fails with `TypeMismatch`.

use super::aggregate::Aggregator;
use super::column::Column;
use super::filter::BooleanFilter;
use super::sorter::Sorter;
use alloc::string::String;
use serde_json::Value;
use tabsearch_core::{Error, Result};

/// Any value that may appear as an argument to a builder method or combinator.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Column(Column),
    Filter(BooleanFilter),
    Sorter(Sorter),
    Aggregator(Aggregator),
    Literal(Value),
}

impl Operand {
    /// Returns the kind name used in `TypeMismatch` errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Column(_) => "column",
            Operand::Filter(_) => "filter",
            Operand::Sorter(_) => "sorter",
            Operand::Aggregator(_) => "aggregator",
            Operand::Literal(_) => "literal",
        }
    }

    pub fn into_filter(self) -> Result<BooleanFilter> {
        match self {
            Operand::Filter(filter) => Ok(filter),
            other => Err(Error::type_mismatch("filter", other.kind())),
        }
    }

    pub fn into_sorter(self) -> Result<Sorter> {
        match self {
            Operand::Sorter(sorter) => Ok(sorter),
            other => Err(Error::type_mismatch("sorter", other.kind())),
        }
    }

    pub fn into_aggregator(self) -> Result<Aggregator> {
        match self {
            Operand::Aggregator(aggregator) => Ok(aggregator),
            other => Err(Error::type_mismatch("aggregator", other.kind())),
        }
    }
}

impl From<Column> for Operand {
    fn from(column: Column) -> Self {
        Operand::Column(column)
    }
}

impl From<BooleanFilter> for Operand {
    fn from(filter: BooleanFilter) -> Self {
        Operand::Filter(filter)
    }
}

impl From<Sorter> for Operand {
    fn from(sorter: Sorter) -> Self {
        Operand::Sorter(sorter)
    }
}

impl From<Aggregator> for Operand {
    fn from(aggregator: Aggregator) -> Self {
        Operand::Aggregator(aggregator)
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Literal(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Literal(Value::from(value))
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Literal(Value::from(value))
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Operand::Literal(Value::from(value))
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Literal(Value::from(value))
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Literal(Value::from(value))
    }
}

impl From<u64> for Operand {
    fn from(value: u64) -> Self {
        Operand::Literal(Value::from(value))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Literal(Value::from(value))
    }
}
