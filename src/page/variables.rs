//! Variable Assignment Detection
//!
//! Any row whose first cell reads `$name=` assigns a symbol, whatever kind
//! of table it sits in.
//!
//! @module page/variables

use crate::grid::{Table, TableId};
use once_cell::sync::Lazy;
use regex::Regex;

static ASSIGNMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\$(\S+)=$").unwrap());

/// A `$name=` assignment found on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableAssignment {
    /// Symbol name without sigil or `=`
    pub name: String,
    /// The defining row, cell by cell
    pub row_cells: Vec<String>,
    pub host_table: TableId,
}

impl VariableAssignment {
    /// How the symbol is referenced in later tables
    pub fn reference(&self) -> String {
        format!("${}", self.name)
    }
}

/// All assignments in a table, in row order
pub fn detect_variables(table: &Table, id: TableId) -> Vec<VariableAssignment> {
    table
        .rows()
        .filter_map(|row| {
            let first = row.first()?;
            let caps = ASSIGNMENT.captures(first)?;
            Some(VariableAssignment {
                name: caps[1].to_string(),
                row_cells: row.to_vec(),
                host_table: id,
            })
        })
        .collect()
}
