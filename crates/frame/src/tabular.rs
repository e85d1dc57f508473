//! Column-major view of collected rows.

use hashbrown::{HashMap, HashSet};
use serde::Serialize;
use serde_json::Value;
use tabsearch_core::Row;

/// Rows pivoted into columns.
///
/// Columns appear in first-seen order across the rows. A row lacking a
/// column contributes `null` to it; such cells are tracked apart from
/// explicit `null` values so [`Tabular::row`] rebuilds the original row.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Tabular {
    columns: Vec<String>,
    data: Vec<Vec<Value>>,
    #[serde(skip)]
    rows: usize,
    /// `(column, row)` positions the row did not carry.
    #[serde(skip)]
    absent: HashSet<(usize, usize)>,
}

impl Tabular {
    pub fn from_rows(rows: &[Row]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();
        for row in rows {
            for name in row.names() {
                if !positions.contains_key(name) {
                    positions.insert(name, columns.len());
                    columns.push(name.to_string());
                }
            }
        }

        let mut data = vec![Vec::with_capacity(rows.len()); columns.len()];
        let mut absent = HashSet::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, (column, name)) in data.iter_mut().zip(&columns).enumerate() {
                match row.get(name) {
                    Some(value) => column.push(value.clone()),
                    None => {
                        absent.insert((c, r));
                        column.push(Value::Null);
                    }
                }
            }
        }

        Self {
            columns,
            data,
            rows: rows.len(),
            absent,
        }
    }

    #[inline]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the values of one column.
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|i| self.data[i].as_slice())
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns the number of rows, including rows without any field.
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Rebuilds row `i` as it was collected.
    pub fn row(&self, i: usize) -> Option<Row> {
        if i >= self.rows {
            return None;
        }
        Some(
            self.columns
                .iter()
                .zip(&self.data)
                .enumerate()
                .filter(|(c, _)| !self.absent.contains(&(*c, i)))
                .map(|(_, (name, values))| (name.clone(), values[i].clone()))
                .collect(),
        )
    }
}
