//! Declarations extracted from page tables
//!
//! @module page/declaration

use crate::grid::TableId;
use crate::usage;
use serde::Serialize;
use std::collections::HashMap;

// =============================================================================
// TYPES
// =============================================================================

/// Kind of reusable call a table declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Scenario,
    TableTemplate,
}

/// A named, parameterized reusable call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclarationKind,
    /// Display name
    pub name: String,
    /// Parameter names in insertion order
    pub parameters: Vec<String>,
    /// Insertable text, starting with the row delimiter
    pub insert_text: String,
    pub context_help: String,
    /// Table the declaration was read from
    pub source_table: TableId,
}

impl Declaration {
    /// Insert text without its leading delimiter
    pub fn wiki_text(&self) -> &str {
        usage::wiki_text(&self.insert_text)
    }
}

// =============================================================================
// LOOKUP
// =============================================================================

/// Declaration names already seen on the page, used to resolve invocations.
///
/// A later declaration with a colliding name replaces the earlier entry here;
/// the earlier declaration stays in the emitted list.
#[derive(Debug, Default)]
pub struct DeclarationLookup {
    by_name: HashMap<String, TableId>,
}

impl DeclarationLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a name; returns the table it shadowed, if any
    pub fn register(&mut self, name: &str, table: TableId) -> Option<TableId> {
        self.by_name.insert(normalize_name(name), table)
    }

    pub fn get(&self, candidate: &str) -> Option<TableId> {
        self.by_name.get(&normalize_name(candidate)).copied()
    }
}

/// Trim, collapse whitespace runs, and drop one trailing `;` (the
/// sequential-arguments marker)
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    let trimmed = trimmed.strip_suffix(';').unwrap_or(trimmed);
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}
