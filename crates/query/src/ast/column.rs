//! Column references.
//!
//! A `Column` evaluates nothing locally. Its comparison methods produce
//! `BooleanFilter` values and its ordering methods produce `Sorter` values.

use super::filter::BooleanFilter;
use super::sorter::{SortOrder, Sorter};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde_json::Value;

/// A reference to a field of the index by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Column {
    name: String,
}

#[allow(clippy::should_implement_trait)]
impl Column {
    /// Creates a column reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the column name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creates an equality filter: column == value
    pub fn eq(&self, value: impl Into<Value>) -> BooleanFilter {
        BooleanFilter::Equal {
            field: self.name.clone(),
            value: value.into(),
        }
    }

    /// Creates a not-equal filter: column != value
    pub fn ne(&self, value: impl Into<Value>) -> BooleanFilter {
        BooleanFilter::NotEqual {
            field: self.name.clone(),
            value: value.into(),
        }
    }

    /// Creates a greater-than filter: column > value
    pub fn gt(&self, value: impl Into<Value>) -> BooleanFilter {
        BooleanFilter::GreaterThan {
            field: self.name.clone(),
            value: value.into(),
        }
    }

    /// Creates a greater-than-or-equal filter: column >= value
    pub fn ge(&self, value: impl Into<Value>) -> BooleanFilter {
        BooleanFilter::GreaterEqual {
            field: self.name.clone(),
            value: value.into(),
        }
    }

    /// Creates a less-than filter: column < value
    pub fn lt(&self, value: impl Into<Value>) -> BooleanFilter {
        BooleanFilter::LessThan {
            field: self.name.clone(),
            value: value.into(),
        }
    }

    /// Creates a less-than-or-equal filter: column <= value
    pub fn le(&self, value: impl Into<Value>) -> BooleanFilter {
        BooleanFilter::LessEqual {
            field: self.name.clone(),
            value: value.into(),
        }
    }

    /// Creates a membership filter: column IN (values)
    pub fn isin<I, V>(&self, values: I) -> BooleanFilter
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        BooleanFilter::IsIn {
            field: self.name.clone(),
            values: values.into_iter().map(Into::into).collect::<Vec<_>>(),
        }
    }

    /// Creates an IS NULL filter
    pub fn is_null(&self) -> BooleanFilter {
        BooleanFilter::IsNull {
            field: self.name.clone(),
        }
    }

    /// Creates an IS NOT NULL filter
    pub fn not_null(&self) -> BooleanFilter {
        BooleanFilter::IsNotNull {
            field: self.name.clone(),
        }
    }

    /// Creates a wildcard filter (`*` and `?` placeholders).
    pub fn like(&self, pattern: impl Into<String>) -> BooleanFilter {
        BooleanFilter::Like {
            field: self.name.clone(),
            pattern: pattern.into(),
        }
    }

    /// Creates a regular expression filter.
    pub fn rlike(&self, pattern: impl Into<String>) -> BooleanFilter {
        BooleanFilter::Regex {
            field: self.name.clone(),
            pattern: pattern.into(),
        }
    }

    /// Creates a prefix filter.
    pub fn starts_with(&self, prefix: impl Into<String>) -> BooleanFilter {
        BooleanFilter::Prefix {
            field: self.name.clone(),
            prefix: prefix.into(),
        }
    }

    /// Ascending sorter on this column.
    pub fn asc(&self) -> Sorter {
        Sorter::new(self.clone(), SortOrder::Asc)
    }

    /// Descending sorter on this column.
    pub fn desc(&self) -> Sorter {
        Sorter::new(self.clone(), SortOrder::Desc)
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self {
        Column::new(name)
    }
}

impl From<String> for Column {
    fn from(name: String) -> Self {
        Column::new(name)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Column<{}>", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use serde_json::json;

    #[test]
    fn test_column_equality_by_name() {
        assert_eq!(Column::new("age"), Column::from("age"));
        assert_ne!(Column::new("age"), Column::new("name"));
        assert_eq!(Column::new("age").to_string(), "Column<age>");
    }

    #[test]
    fn test_comparisons_produce_filters() {
        let age = Column::new("age");
        assert_eq!(
            age.lt(13),
            BooleanFilter::LessThan {
                field: "age".into(),
                value: json!(13)
            }
        );
        assert!(matches!(age.eq(12), BooleanFilter::Equal { .. }));
        assert!(matches!(age.ne(12), BooleanFilter::NotEqual { .. }));
        assert!(matches!(age.ge(12), BooleanFilter::GreaterEqual { .. }));
        assert!(matches!(age.is_null(), BooleanFilter::IsNull { .. }));
    }

    #[test]
    fn test_literal_used_verbatim() {
        let name = Column::new("name");
        assert_eq!(name.eq("12").build(), json!({"term": {"name": "12"}}));
        assert_eq!(name.eq(12).build(), json!({"term": {"name": 12}}));
        assert_eq!(name.eq(1.5).build(), json!({"term": {"name": 1.5}}));
    }

    #[test]
    fn test_isin_collects_values() {
        let gender = Column::new("gender");
        assert_eq!(
            gender.isin(vec!["male", "female"]),
            BooleanFilter::IsIn {
                field: "gender".into(),
                values: vec![json!("male"), json!("female")]
            }
        );
    }

    #[test]
    fn test_sorters() {
        let age = Column::new("age");
        assert_eq!(age.asc().order(), SortOrder::Asc);
        assert_eq!(age.desc().order(), SortOrder::Desc);
        assert_eq!(age.desc().column(), &age);
    }
}
