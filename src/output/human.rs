//! Human-readable table listing
//!
//! @module output/human

use crate::grid::Table;
use crate::page::{classify, TableKind};

/// One line per table: index, classification, size, and its name cell
pub fn format_tables(tables: &[Table]) -> String {
    if tables.is_empty() {
        return "No tables found".to_string();
    }

    let mut output = format!("Tables ({}):\n", tables.len());
    for (id, table) in tables.iter().enumerate() {
        let kind = classify(table);
        let label = match kind {
            TableKind::Other => table.cell(0, 0),
            _ => table.cell(1, 0),
        };
        output.push_str(&format!(
            "  [{}] {:<20} {:>3} rows  {}\n",
            id,
            kind.as_str(),
            table.row_count(),
            label
        ));
    }
    output
}
