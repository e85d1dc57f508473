//! Sort specifications.

use super::column::Column;
use crate::planner::Fragment;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Sort order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Returns the wire name of the order.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// A column plus a direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sorter {
    column: Column,
    order: SortOrder,
}

impl Sorter {
    pub fn new(column: Column, order: SortOrder) -> Self {
        Self { column, order }
    }

    #[inline]
    pub fn column(&self) -> &Column {
        &self.column
    }

    #[inline]
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Compiles this sorter into `{field: {"order": "asc"|"desc"}}`.
    pub fn build(&self) -> Fragment {
        let mut fragment = Map::new();
        fragment.insert(
            self.column.name().into(),
            json!({"order": self.order.as_str()}),
        );
        Value::Object(fragment)
    }
}
