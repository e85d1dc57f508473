//! The DataFrame builder.

use crate::display::{render_rows, render_schema};
use crate::remote::RemoteIndex;
use crate::tabular::Tabular;
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tabsearch_client::Transport;
use tabsearch_core::schema::Schema;
use tabsearch_core::{Error, Result, Row};
use tabsearch_query::ast::{
    count_all, Aggregator, BooleanFilter, Column, Operand, Sorter, COUNT_ALL_LABEL,
};
use tabsearch_query::planner::Clauses;

/// Result of indexing a DataFrame with [`DataFrame::index`].
#[derive(Debug)]
pub enum Selection {
    /// Indexing by a column name.
    Column(Column),
    /// Indexing by a filter; same as [`DataFrame::filter`].
    Frame(DataFrame),
}

/// An immutable snapshot of query clauses over one index.
///
/// Every builder method returns a new DataFrame; the receiver is never
/// changed. Only the terminal operations perform I/O.
pub struct DataFrame {
    transport: Arc<dyn Transport>,
    schema: Arc<Schema>,
    clauses: Clauses,
    /// Last document compiled for execution. Diagnostic only.
    last_query: Mutex<Option<Value>>,
}

impl DataFrame {
    /// Creates a DataFrame over a transport bound to the index's search endpoint.
    pub fn new(transport: Arc<dyn Transport>, schema: Schema) -> Self {
        Self {
            transport,
            schema: Arc::new(schema),
            clauses: Clauses::new(),
            last_query: Mutex::new(None),
        }
    }

    /// Creates a DataFrame from a transport and a raw mapping document.
    pub fn from_transport(transport: Arc<dyn Transport>, mapping: Value) -> Result<Self> {
        Ok(Self::new(transport, Schema::from_mapping(mapping)?))
    }

    /// Discovers the schema of `index` on the node at `url` and creates a
    /// DataFrame over it.
    pub fn from_remote(url: &str, index: &str, doc_type: Option<&str>) -> Result<Self> {
        let mut remote = RemoteIndex::new(url, index);
        if let Some(doc_type) = doc_type {
            remote = remote.doc_type(doc_type);
        }
        remote.connect()
    }

    fn with_clauses(&self, clauses: Clauses) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            schema: Arc::clone(&self.schema),
            clauses,
            last_query: Mutex::new(None),
        }
    }

    // transformations

    /// Replaces the filter.
    pub fn filter(&self, condition: BooleanFilter) -> Self {
        self.with_clauses(self.clauses.with_filter(condition))
    }

    /// Alias for [`DataFrame::filter`].
    pub fn where_(&self, condition: BooleanFilter) -> Self {
        self.filter(condition)
    }

    /// Replaces the filter with an operand that must be a filter.
    pub fn try_filter(&self, condition: impl Into<Operand>) -> Result<Self> {
        Ok(self.filter(condition.into().into_filter()?))
    }

    /// Projects a set of columns. Names are not checked against the schema.
    pub fn select<I, S>(&self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_clauses(self.clauses.with_projection(columns))
    }

    /// Limits the result count to `n`, which must be positive.
    pub fn limit(&self, n: i64) -> Result<Self> {
        Ok(self.with_clauses(self.clauses.with_limit(n)?))
    }

    /// Aggregates over the entire DataFrame without groups.
    pub fn agg(&self, aggregators: &[Aggregator]) -> Result<Self> {
        Ok(self.with_clauses(self.clauses.with_aggregation(aggregators)?))
    }

    /// Aggregates with operands that must all be aggregators.
    pub fn try_agg<I>(&self, aggregators: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        let aggregators = aggregators
            .into_iter()
            .map(|operand| operand.into().into_aggregator())
            .collect::<Result<Vec<_>>>()?;
        self.agg(&aggregators)
    }

    /// Replaces the sort order.
    pub fn sort(&self, sorters: &[Sorter]) -> Self {
        self.with_clauses(self.clauses.with_sort(sorters))
    }

    /// Alias for [`DataFrame::sort`].
    pub fn order_by(&self, sorters: &[Sorter]) -> Self {
        self.sort(sorters)
    }

    /// Sorts with operands that must all be sorters.
    pub fn try_sort<I>(&self, sorters: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        let sorters = sorters
            .into_iter()
            .map(|operand| operand.into().into_sorter())
            .collect::<Result<Vec<_>>>()?;
        Ok(self.sort(&sorters))
    }

    // column access

    /// Returns the column with this name, if the schema declares it.
    pub fn column(&self, name: &str) -> Result<Column> {
        if !self.schema.contains(name) {
            return Err(Error::column_not_found(self.schema.index(), name));
        }
        Ok(Column::new(name))
    }

    /// Indexes the DataFrame: a name yields its column, a filter yields the
    /// filtered DataFrame. Any other operand is a type mismatch.
    pub fn index(&self, key: impl Into<Operand>) -> Result<Selection> {
        match key.into() {
            Operand::Literal(Value::String(name)) => self.column(&name).map(Selection::Column),
            Operand::Filter(filter) => Ok(Selection::Frame(self.filter(filter))),
            other => Err(Error::type_mismatch("column name or filter", other.kind())),
        }
    }

    // actions

    /// Compiles the clauses into the search document and records it as the last query.
    pub fn to_query(&self) -> Value {
        let query = self.clauses.compile();
        *self
            .last_query
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(query.clone());
        query
    }

    /// Returns the compiled search document as indented JSON.
    pub fn explain(&self) -> String {
        let query = self.to_query();
        serde_json::to_string_pretty(&query).unwrap_or_else(|_| query.to_string())
    }

    /// Returns the document compiled by the last execution or `to_query` call.
    pub fn last_query(&self) -> Option<Value> {
        self.last_query
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn execute(&self) -> Result<Vec<Row>> {
        let query = self.to_query();
        let mode = self.clauses.response_mode();
        log::debug!("executing {:?} query on index {}", mode, self.schema.index());
        let response = self.transport.post(&query, None)?;
        let rows = mode.interpret(&response)?;
        log::debug!("{} rows from index {}", rows.len(), self.schema.index());
        Ok(rows)
    }

    /// Returns all the records as a list of rows.
    pub fn collect(&self) -> Result<Vec<Row>> {
        self.execute()
    }

    /// Returns the number of matching documents.
    pub fn count(&self) -> Result<u64> {
        let rows = self.agg(&[count_all()])?.collect()?;
        let value = rows
            .first()
            .and_then(|row| row.get(COUNT_ALL_LABEL))
            .ok_or_else(|| Error::malformed_response("aggregations.count(*).value"))?;
        value
            .as_u64()
            .or_else(|| value.as_f64().filter(|v| *v >= 0.0).map(|v| v as u64))
            .ok_or_else(|| Error::malformed_response("numeric count(*) value"))
    }

    /// Collects the records into a column-major table.
    pub fn to_tabular(&self) -> Result<Tabular> {
        Ok(Tabular::from_rows(&self.execute()?))
    }

    /// Renders the first `n` records as a text table over the schema columns.
    pub fn show(&self, n: usize) -> Result<String> {
        if n == 0 {
            return Err(Error::invalid_value("show requires a positive row count"));
        }
        let rows = self.execute()?;
        let rows = &rows[..rows.len().min(n)];
        Ok(render_rows(&self.schema.column_names(), rows))
    }

    /// Renders the mapping as a tree.
    pub fn print_schema(&self) -> String {
        render_schema(&self.schema)
    }

    /// Returns the column names.
    pub fn columns(&self) -> Vec<&str> {
        self.schema.column_names()
    }

    #[inline]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    #[inline]
    pub fn clauses(&self) -> &Clauses {
        &self.clauses
    }
}

impl Clone for DataFrame {
    fn clone(&self) -> Self {
        let copy = self.with_clauses(self.clauses.clone());
        *copy.last_query.lock().unwrap_or_else(PoisonError::into_inner) = self.last_query();
        copy
    }
}

impl fmt::Debug for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataFrame")
            .field("index", &self.schema.index())
            .field("clauses", &self.clauses)
            .finish()
    }
}

impl fmt::Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DataFrame[{}]", self.columns().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tabsearch_client::Params;
    use tabsearch_query::ast::avg;

    struct Unreachable;

    impl Transport for Unreachable {
        fn get(&self, _params: Option<Params<'_>>) -> Result<Value> {
            Err(Error::transport("unreachable"))
        }

        fn post(&self, _body: &Value, _params: Option<Params<'_>>) -> Result<Value> {
            Err(Error::transport("unreachable"))
        }
    }

    fn people() -> DataFrame {
        DataFrame::from_transport(
            Arc::new(Unreachable),
            json!({"people": {"mappings": {"person": {"properties": {
                "age": {"type": "integer"},
                "gender": {"type": "keyword"},
                "name": {"type": "keyword"}
            }}}}}),
        )
        .unwrap()
    }

    #[test]
    fn test_builders_do_not_mutate() {
        let df = people();
        let age = df.column("age").unwrap();
        let filtered = df.filter(age.lt(13)).limit(3).unwrap();
        assert_eq!(df.to_query(), json!({"size": 20}));
        assert_eq!(filtered.to_query()["size"], json!(3));
        assert!(filtered.clauses().filter().is_some());
    }

    #[test]
    fn test_where_is_filter() {
        let df = people();
        let age = Column::new("age");
        assert_eq!(
            df.where_(age.ge(18)).to_query(),
            df.filter(age.ge(18)).to_query()
        );
    }

    #[test]
    fn test_column_access() {
        let df = people();
        assert_eq!(df.column("age").unwrap(), Column::new("age"));
        assert!(matches!(
            df.column("salary"),
            Err(Error::ColumnNotFound { ref column, .. }) if column == "salary"
        ));
    }

    #[test]
    fn test_index_sugar() {
        let df = people();
        match df.index("name").unwrap() {
            Selection::Column(column) => assert_eq!(column.name(), "name"),
            Selection::Frame(_) => panic!("expected a column"),
        }

        let age = Column::new("age");
        match df.index(age.lt(13)).unwrap() {
            Selection::Frame(filtered) => {
                assert_eq!(filtered.to_query(), df.filter(age.lt(13)).to_query());
                assert!(df.clauses().filter().is_none());
            }
            Selection::Column(_) => panic!("expected a frame"),
        }

        assert!(matches!(
            df.index("salary"),
            Err(Error::ColumnNotFound { .. })
        ));
        assert!(matches!(
            df.index(12),
            Err(Error::TypeMismatch { got: "literal", .. })
        ));
        assert!(matches!(
            df.index(age.asc()),
            Err(Error::TypeMismatch { got: "sorter", .. })
        ));
    }

    #[test]
    fn test_try_builders() {
        let df = people();
        let age = Column::new("age");
        assert!(matches!(
            df.try_filter(3),
            Err(Error::TypeMismatch { expected: "filter", .. })
        ));
        assert!(df.try_filter(age.lt(3)).is_ok());

        let operands: Vec<Operand> = vec![avg("age").into(), age.asc().into()];
        assert!(matches!(
            df.try_agg(operands),
            Err(Error::TypeMismatch { expected: "aggregator", got: "sorter" })
        ));
        assert!(matches!(
            df.try_sort(vec![Operand::from(age.desc()), Operand::from("age")]),
            Err(Error::TypeMismatch { expected: "sorter", got: "literal" })
        ));
        assert!(df.try_sort(vec![age.desc()]).is_ok());
    }

    #[test]
    fn test_last_query_recorded() {
        let df = people().select(["name"]);
        assert!(df.last_query().is_none());
        let query = df.to_query();
        assert_eq!(df.last_query(), Some(query));
        assert!(df.select(["age"]).last_query().is_none());
        assert_eq!(df.clone().last_query(), df.last_query());
    }

    #[test]
    fn test_explain_is_pretty() {
        let df = people().limit(7).unwrap();
        let text = df.explain();
        assert!(text.contains('\n'));
        assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), json!({"size": 7}));
    }

    #[test]
    fn test_display() {
        assert_eq!(people().to_string(), "DataFrame[age, gender, name]");
    }

    #[test]
    fn test_show_rejects_zero() {
        assert!(matches!(people().show(0), Err(Error::InvalidValue { .. })));
    }

    #[test]
    fn test_transport_error_propagates() {
        let err = people().collect().unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
    }
}
