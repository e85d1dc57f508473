//! Response interpretation.
//!
//! The engine answers a search either with a hit listing
//! (`{"hits": {"hits": [{"_source": {...}}, ...]}}`) or with aggregation
//! results (`{"aggregations": {label: {"value": ...}}}`). The mode is chosen
//! by the caller from the clauses it compiled, never by sniffing the payload.

use alloc::format;
use alloc::vec::Vec;
use serde_json::{Map, Value};
use tabsearch_core::{Error, Result, Row};

/// How a response is turned into rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseMode {
    /// One row per hit, taken from its `_source`.
    Hits,
    /// One synthetic row keyed by aggregation label.
    Aggregations,
}

impl ResponseMode {
    /// Interprets a raw response as an ordered list of rows.
    pub fn interpret(self, response: &Value) -> Result<Vec<Row>> {
        match self {
            ResponseMode::Hits => hit_rows(response),
            ResponseMode::Aggregations => aggregation_rows(response),
        }
    }

    /// Returns the member this mode requires at the top of a response.
    pub fn expected_key(&self) -> &'static str {
        match self {
            ResponseMode::Hits => "hits.hits",
            ResponseMode::Aggregations => "aggregations",
        }
    }
}

/// Extracts each hit's `_source` in listing order.
///
/// A hit without `_source` (source disabled, or everything excluded by the
/// projection) yields an empty row.
fn hit_rows(response: &Value) -> Result<Vec<Row>> {
    let hits = response
        .get("hits")
        .and_then(|hits| hits.get("hits"))
        .and_then(Value::as_array)
        .ok_or_else(|| Error::malformed_response(ResponseMode::Hits.expected_key()))?;

    hits.iter()
        .enumerate()
        .map(|(i, hit)| match hit.get("_source") {
            None => Ok(Row::new()),
            Some(Value::Object(source)) => Ok(Row::from(source.clone())),
            Some(_) => Err(Error::malformed_response(format!(
                "hits.hits[{}]._source object",
                i
            ))),
        })
        .collect()
}

/// Flattens single-value metric results into one row.
///
/// Entries without a `value` member (multi-value metrics, bucket
/// aggregations) are copied into the row unchanged; bucket lists are not
/// expanded into rows.
fn aggregation_rows(response: &Value) -> Result<Vec<Row>> {
    let aggregations = response
        .get("aggregations")
        .and_then(Value::as_object)
        .ok_or_else(|| Error::malformed_response(ResponseMode::Aggregations.expected_key()))?;

    let row: Map<_, _> = aggregations
        .iter()
        .map(|(label, result)| {
            let value = result.get("value").unwrap_or(result).clone();
            (label.clone(), value)
        })
        .collect();
    Ok(alloc::vec![Row::from(row)])
}
