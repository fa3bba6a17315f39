//! Output Assembler
//!
//! Collects a page's declarations, variables and introspected types into
//! the document the autocomplete widget loads:
//!
//! ```text
//! { "classes": [...], "scenarios": [...], "variables": [...] }
//! ```
//!
//! Declarations and variables carry an HTML preview of their source table.
//!
//! @module output

pub mod human;
pub mod json;

use crate::catalog::{Introspector, TypeInfo};
use crate::grid::{self, render, PageFormat, Table};
use crate::page::{extract_page, Declaration, DeclarationKind, PageData, VariableAssignment};
use serde::Serialize;

pub use json::JsonFormatter;

// =============================================================================
// DOCUMENT
// =============================================================================

/// Everything autocomplete knows about a page
#[derive(Debug, Clone, Default, Serialize)]
pub struct OutputDocument {
    pub classes: Vec<TypeInfo>,
    /// Scenarios and table templates, in page order
    pub scenarios: Vec<DeclarationEntry>,
    pub variables: Vec<VariableEntry>,
}

/// A scenario or table template entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationEntry {
    pub name: String,
    pub kind: DeclarationKind,
    pub parameters: Vec<String>,
    pub wiki_text: String,
    pub insert_text: String,
    #[serde(rename = "contexthelp")]
    pub context_help: String,
    /// The declaring table
    pub html: String,
}

/// A variable entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableEntry {
    pub name: String,
    pub var_name: String,
    /// The defining row
    pub html: String,
    /// The whole table the row sits in
    pub full_table: String,
}

// =============================================================================
// ASSEMBLY
// =============================================================================

/// Run the whole pass over a page's source
pub fn generate(content: &str, format: PageFormat, introspector: &Introspector<'_>) -> OutputDocument {
    let tables = grid::scan(content, format);
    let page = extract_page(&tables);
    let classes = introspector.introspect(&page.namespaces);
    assemble(&tables, &page, classes)
}

/// Build the document for a page. `tables` must be the tables `page` was
/// extracted from.
pub fn assemble(tables: &[Table], page: &PageData, classes: Vec<TypeInfo>) -> OutputDocument {
    OutputDocument {
        classes,
        scenarios: page
            .declarations
            .iter()
            .map(|decl| declaration_entry(tables, decl))
            .collect(),
        variables: page
            .variables
            .iter()
            .map(|var| variable_entry(tables, var))
            .collect(),
    }
}

fn declaration_entry(tables: &[Table], decl: &Declaration) -> DeclarationEntry {
    DeclarationEntry {
        name: decl.name.clone(),
        kind: decl.kind,
        parameters: decl.parameters.clone(),
        wiki_text: decl.wiki_text().to_string(),
        insert_text: decl.insert_text.clone(),
        context_help: decl.context_help.clone(),
        html: tables
            .get(decl.source_table)
            .map(render::table_html)
            .unwrap_or_default(),
    }
}

fn variable_entry(tables: &[Table], var: &VariableAssignment) -> VariableEntry {
    VariableEntry {
        name: var.name.clone(),
        var_name: var.reference(),
        html: render::row_html(&var.row_cells),
        full_table: tables
            .get(var.host_table)
            .map(render::table_html)
            .unwrap_or_default(),
    }
}
