//! Page declaration extraction
//!
//! One linear pass over a page's tables:
//! - import/library tables contribute namespaces
//! - scenario and table template tables contribute declarations, and are
//!   registered by name so later templates can resolve invocations of them
//! - every table, whatever its kind, is scanned for `$name=` assignments
//!
//! Every pass starts from an empty lookup; nothing is shared between pages.
//!
//! @module page

pub mod classify;
pub mod declaration;
pub mod namespaces;
pub mod resolve;
pub mod scenario;
pub mod template;
pub mod variables;

use crate::grid::Table;
use indexmap::IndexSet;
use tracing::{debug, info};

pub use classify::{classify, TableKind};
pub use declaration::{Declaration, DeclarationKind, DeclarationLookup};
pub use resolve::Resolver;
pub use variables::VariableAssignment;

// =============================================================================
// PAGE DATA
// =============================================================================

/// Everything a page declares
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageData {
    /// Namespaces in encounter order, without duplicates
    pub namespaces: IndexSet<String>,
    /// Declarations in table order; name collisions are all kept
    pub declarations: Vec<Declaration>,
    pub variables: Vec<VariableAssignment>,
}

// =============================================================================
// EXTRACTION
// =============================================================================

/// Extract namespaces, declarations and variables from a page's tables
pub fn extract_page(tables: &[Table]) -> PageData {
    let mut data = PageData::default();
    let mut lookup = DeclarationLookup::new();

    for (id, table) in tables.iter().enumerate() {
        let kind = classify(table);
        debug!(table = id, kind = %kind, "Classified table");

        match kind {
            TableKind::Import | TableKind::Library => {
                let library = kind == TableKind::Library;
                data.namespaces
                    .extend(namespaces::extract_namespaces(table, library));
            }
            k if k.is_scenario() => {
                if let Some(decl) = scenario::extract_scenario(table, id) {
                    register(&mut lookup, &decl);
                    data.declarations.push(decl);
                }
            }
            TableKind::TableTemplate => {
                // Resolve against what was declared before this table, then register
                let decl = template::extract_table_template(&Resolver::new(tables, &lookup), id);
                if let Some(decl) = decl {
                    register(&mut lookup, &decl);
                    data.declarations.push(decl);
                }
            }
            TableKind::Other => {}
            // Covered by the `is_scenario` guard above; match guards don't count for exhaustiveness
            TableKind::Scenario | TableKind::LoopingScenario | TableKind::ConditionalScenario => {
                unreachable!()
            }
        }

        data.variables.extend(variables::detect_variables(table, id));
    }

    info!(
        tables = tables.len(),
        namespaces = data.namespaces.len(),
        declarations = data.declarations.len(),
        variables = data.variables.len(),
        "Extracted page"
    );

    data
}

fn register(lookup: &mut DeclarationLookup, decl: &Declaration) {
    if let Some(shadowed) = lookup.register(&decl.name, decl.source_table) {
        debug!(
            name = %decl.name,
            table = decl.source_table,
            shadowed,
            "Declaration name reused, later table wins for invocation lookup"
        );
    }
}
