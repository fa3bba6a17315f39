//! Namespaces declared by import and library tables
//!
//! @module page/namespaces

use crate::grid::Table;

/// Namespaces named in rows 1.. of an import or library table.
///
/// Library rows name a fixture type, so its namespace is everything before
/// the last `.`.
pub fn extract_namespaces(table: &Table, library: bool) -> Vec<String> {
    (1..table.row_count())
        .map(|row| table.cell(0, row).trim())
        .filter(|name| !name.is_empty())
        .map(|name| {
            if library {
                match name.rfind('.') {
                    Some(dot) => &name[..dot],
                    None => name,
                }
            } else {
                name
            }
        })
        .map(str::to_string)
        .collect()
}
