//! Boolean filter definitions.
//!
//! Leaves compare one field against a literal using the engine's native
//! query shapes (`term`, `range`, `terms`, ...). Composites nest their
//! children under a `bool` query.

use super::operand::Operand;
use crate::planner::Fragment;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::{BitAnd, BitOr, Not};
use serde_json::{json, Map, Value};
use tabsearch_core::Result;

/// A predicate over documents, compiled into a filter fragment.
#[derive(Clone, Debug, PartialEq)]
pub enum BooleanFilter {
    Equal { field: String, value: Value },
    NotEqual { field: String, value: Value },
    GreaterThan { field: String, value: Value },
    GreaterEqual { field: String, value: Value },
    LessThan { field: String, value: Value },
    LessEqual { field: String, value: Value },
    IsIn { field: String, values: Vec<Value> },
    IsNull { field: String },
    IsNotNull { field: String },
    /// Wildcard pattern match.
    Like { field: String, pattern: String },
    /// Regular expression match.
    Regex { field: String, pattern: String },
    Prefix { field: String, prefix: String },
    And(Box<BooleanFilter>, Box<BooleanFilter>),
    Or(Box<BooleanFilter>, Box<BooleanFilter>),
    Not(Box<BooleanFilter>),
}

impl BooleanFilter {
    /// Compiles this filter into its wire fragment.
    pub fn build(&self) -> Fragment {
        match self {
            BooleanFilter::Equal { field, value } => single("term", field, value.clone()),
            BooleanFilter::NotEqual { field, value } => {
                json!({"bool": {"must_not": single("term", field, value.clone())}})
            }
            BooleanFilter::GreaterThan { field, value } => range(field, "gt", value),
            BooleanFilter::GreaterEqual { field, value } => range(field, "gte", value),
            BooleanFilter::LessThan { field, value } => range(field, "lt", value),
            BooleanFilter::LessEqual { field, value } => range(field, "lte", value),
            BooleanFilter::IsIn { field, values } => {
                single("terms", field, Value::Array(values.clone()))
            }
            BooleanFilter::IsNull { field } => json!({"missing": {"field": field}}),
            BooleanFilter::IsNotNull { field } => json!({"exists": {"field": field}}),
            BooleanFilter::Like { field, pattern } => {
                single("wildcard", field, Value::String(pattern.clone()))
            }
            BooleanFilter::Regex { field, pattern } => {
                single("regexp", field, Value::String(pattern.clone()))
            }
            BooleanFilter::Prefix { field, prefix } => {
                single("prefix", field, Value::String(prefix.clone()))
            }
            BooleanFilter::And(left, right) => {
                json!({"bool": {"must": [left.build(), right.build()]}})
            }
            BooleanFilter::Or(left, right) => json!({
                "bool": {
                    "should": [left.build(), right.build()],
                    "minimum_should_match": 1
                }
            }),
            BooleanFilter::Not(inner) => json!({"bool": {"must_not": inner.build()}}),
        }
    }

    /// Conjunction of two filters.
    pub fn and(self, other: BooleanFilter) -> BooleanFilter {
        BooleanFilter::And(Box::new(self), Box::new(other))
    }

    /// Disjunction of two filters.
    pub fn or(self, other: BooleanFilter) -> BooleanFilter {
        BooleanFilter::Or(Box::new(self), Box::new(other))
    }

    /// Negation of this filter.
    pub fn negate(self) -> BooleanFilter {
        BooleanFilter::Not(Box::new(self))
    }

    /// Conjunction with an operand that must itself be a filter.
    pub fn try_and(self, other: impl Into<Operand>) -> Result<BooleanFilter> {
        Ok(self.and(other.into().into_filter()?))
    }

    /// Disjunction with an operand that must itself be a filter.
    pub fn try_or(self, other: impl Into<Operand>) -> Result<BooleanFilter> {
        Ok(self.or(other.into().into_filter()?))
    }

    /// Returns true for `And`, `Or` and `Not`.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            BooleanFilter::And(..) | BooleanFilter::Or(..) | BooleanFilter::Not(..)
        )
    }
}

impl BitAnd for BooleanFilter {
    type Output = BooleanFilter;

    fn bitand(self, rhs: BooleanFilter) -> BooleanFilter {
        self.and(rhs)
    }
}

impl BitOr for BooleanFilter {
    type Output = BooleanFilter;

    fn bitor(self, rhs: BooleanFilter) -> BooleanFilter {
        self.or(rhs)
    }
}

impl Not for BooleanFilter {
    type Output = BooleanFilter;

    fn not(self) -> BooleanFilter {
        self.negate()
    }
}

/// `{query: {field: value}}`
fn single(query: &str, field: &str, value: Value) -> Value {
    let mut inner = Map::new();
    inner.insert(field.into(), value);
    let mut outer = Map::new();
    outer.insert(query.into(), Value::Object(inner));
    Value::Object(outer)
}

/// `{"range": {field: {op: value}}}`
fn range(field: &str, op: &str, value: &Value) -> Value {
    let mut bound = Map::new();
    bound.insert(op.into(), value.clone());
    single("range", field, Value::Object(bound))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Column;
    use alloc::vec;
    use tabsearch_core::Error;

    #[test]
    fn test_leaf_fragments() {
        let age = Column::new("age");
        assert_eq!(age.eq(12).build(), json!({"term": {"age": 12}}));
        assert_eq!(age.gt(12).build(), json!({"range": {"age": {"gt": 12}}}));
        assert_eq!(age.ge(12).build(), json!({"range": {"age": {"gte": 12}}}));
        assert_eq!(age.lt(12).build(), json!({"range": {"age": {"lt": 12}}}));
        assert_eq!(age.le(12).build(), json!({"range": {"age": {"lte": 12}}}));
        assert_eq!(
            age.ne(12).build(),
            json!({"bool": {"must_not": {"term": {"age": 12}}}})
        );
    }

    #[test]
    fn test_set_and_null_fragments() {
        let gender = Column::new("gender");
        assert_eq!(
            gender.isin(vec!["male", "other"]).build(),
            json!({"terms": {"gender": ["male", "other"]}})
        );
        assert_eq!(gender.is_null().build(), json!({"missing": {"field": "gender"}}));
        assert_eq!(gender.not_null().build(), json!({"exists": {"field": "gender"}}));
    }

    #[test]
    fn test_pattern_fragments() {
        let name = Column::new("name");
        assert_eq!(name.like("Al*").build(), json!({"wildcard": {"name": "Al*"}}));
        assert_eq!(name.rlike("A.+e").build(), json!({"regexp": {"name": "A.+e"}}));
        assert_eq!(name.starts_with("Al").build(), json!({"prefix": {"name": "Al"}}));
    }

    #[test]
    fn test_composite_fragments() {
        let age = Column::new("age");
        let gender = Column::new("gender");

        let and = age.lt(13) & gender.eq("male");
        assert_eq!(
            and.build(),
            json!({"bool": {"must": [
                {"range": {"age": {"lt": 13}}},
                {"term": {"gender": "male"}}
            ]}})
        );

        let or = age.lt(13) | gender.eq("male");
        assert_eq!(
            or.build(),
            json!({"bool": {
                "should": [{"range": {"age": {"lt": 13}}}, {"term": {"gender": "male"}}],
                "minimum_should_match": 1
            }})
        );

        let not = !gender.eq("male");
        assert_eq!(
            not.build(),
            json!({"bool": {"must_not": {"term": {"gender": "male"}}}})
        );
        assert!(not.is_composite());
        assert!(!age.lt(1).is_composite());
    }

    #[test]
    fn test_nested_composites_keep_structure() {
        let a = Column::new("a").eq(1);
        let b = Column::new("b").eq(2);
        let c = Column::new("c").eq(3);
        let filter = (a | b) & !c;
        assert_eq!(
            filter.build(),
            json!({"bool": {"must": [
                {"bool": {
                    "should": [{"term": {"a": 1}}, {"term": {"b": 2}}],
                    "minimum_should_match": 1
                }},
                {"bool": {"must_not": {"term": {"c": 3}}}}
            ]}})
        );
    }

    #[test]
    fn test_try_combinators_reject_non_filters() {
        let age = Column::new("age");

        let err = age.lt(13).try_and(5).unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch {
                expected: "filter",
                got: "literal"
            }
        ));

        let err = age.lt(13).try_or(age.clone()).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { got: "column", .. }));

        let ok = age.lt(13).try_and(age.gt(3)).unwrap();
        assert_eq!(ok, age.lt(13) & age.gt(3));
    }
}
