//! Text rendering for rows and schemas.

use serde_json::Value;
use std::fmt::Write;
use tabsearch_core::schema::Schema;
use tabsearch_core::Row;

/// Widest a column grows to fit its values. Longer cells overflow.
const MAX_COLUMN_WIDTH: usize = 15;

const NULL_CELL: &str = "(NULL)";

fn cell(row: &Row, column: &str) -> String {
    match row.get(column) {
        None | Some(Value::Null) => NULL_CELL.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn width_of(s: &str) -> usize {
    s.chars().count()
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push('|');
    for (cell, width) in cells.iter().zip(widths) {
        let _ = write!(out, " {:<width$} |", cell, width = *width);
    }
    out.push('\n');
}

/// Renders rows as a boxed table over `columns`.
pub(crate) fn render_rows(columns: &[&str], rows: &[Row]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|c| cell(row, c)).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            cells
                .iter()
                .map(|row| width_of(&row[i]))
                .fold(width_of(column), usize::max)
                .min(MAX_COLUMN_WIDTH)
        })
        .collect();

    let mut separator = String::from("+");
    for width in &widths {
        separator.push_str(&"-".repeat(width + 2));
        separator.push('+');
    }
    separator.push('\n');

    let header: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
    let mut out = separator.clone();
    push_line(&mut out, &header, &widths);
    out.push_str(&separator);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out.push_str(&separator);
    out
}

/// Renders the mapping as an `index / type / field` tree, every type and field included.
pub(crate) fn render_schema(schema: &Schema) -> String {
    let mut out = format!("{}\n", schema.index());
    for (doc_type, properties) in schema.doc_types() {
        let _ = writeln!(out, "|--{}", doc_type);
        for (name, metadata) in properties {
            let _ = writeln!(out, "  |--{}: {}", name, metadata);
        }
    }
    out
}
