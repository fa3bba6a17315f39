//! Cross-Reference Resolver
//!
//! A table template body may invoke other scenarios or templates declared
//! earlier on the page. Their placeholders are parameters of the invoking
//! template too, so pattern matches are collected transitively: every body
//! row whose even cells spell a registered declaration name pulls in the
//! matches from that declaration's table.
//!
//! @module page/resolve

use super::declaration::DeclarationLookup;
use crate::grid::{Table, TableId};
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// =============================================================================
// PATTERNS
// =============================================================================

/// Input placeholder: `@{name}`
pub static INPUT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\{(.+?)\}").unwrap());

/// Output assignment: `$name=`
pub static OUTPUT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$(.+?)=").unwrap());

// =============================================================================
// RESOLVER
// =============================================================================

/// Collects pattern matches across a table and everything it invokes
pub struct Resolver<'a> {
    tables: &'a [Table],
    lookup: &'a DeclarationLookup,
}

impl<'a> Resolver<'a> {
    pub fn new(tables: &'a [Table], lookup: &'a DeclarationLookup) -> Self {
        Self { tables, lookup }
    }

    pub fn table(&self, id: TableId) -> Option<&'a Table> {
        self.tables.get(id)
    }

    /// All first-group matches of `pattern` in the body of `start` and of
    /// every declaration it invokes, de-duplicated in first-seen order.
    ///
    /// Each table is visited at most once, so reference cycles terminate.
    pub fn collect(&self, pattern: &Regex, start: TableId) -> Vec<String> {
        let mut found = IndexSet::new();
        let mut visited = HashSet::new();
        self.collect_into(pattern, start, &mut found, &mut visited);
        found.into_iter().collect()
    }

    fn collect_into(
        &self,
        pattern: &Regex,
        id: TableId,
        found: &mut IndexSet<String>,
        visited: &mut HashSet<TableId>,
    ) {
        if !visited.insert(id) {
            tracing::debug!(table = id, "Already visited, not following reference again");
            return;
        }
        let Some(table) = self.table(id) else {
            return;
        };

        for row in (1..table.row_count()).map(|r| table.row(r)) {
            for cell in row {
                for caps in pattern.captures_iter(cell) {
                    found.insert(caps[1].to_string());
                }
            }

            if let Some(target) = self.lookup.get(&invoked_name(row)) {
                self.collect_into(pattern, target, found, visited);
            }
        }
    }
}

/// The declaration name a body row would invoke: its even cells joined
pub fn invoked_name(row: &[String]) -> String {
    row.iter()
        .step_by(2)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
