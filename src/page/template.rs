//! Table template extraction
//!
//! A table template is named by its second header cell. Its parameters are
//! not declared anywhere; they are whatever `@{input}` placeholders and
//! `$output=` assignments its body uses, including the ones contributed by
//! scenarios and templates it invokes.
//!
//! The insert text is the invocation header followed by a column-header
//! row: inputs first, then outputs marked with `?`.
//!
//! @module page/template

use super::declaration::{Declaration, DeclarationKind};
use super::resolve::{Resolver, INPUT_PATTERN, OUTPUT_PATTERN};
use crate::grid::TableId;

/// Row separator inside a multi-row insert text
const ROW_BREAK: &str = "\r\n";

/// Extract the table template declared by table `id`.
///
/// Returns `None` when the header carries no name cell.
pub fn extract_table_template(resolver: &Resolver<'_>, id: TableId) -> Option<Declaration> {
    let name = resolver.table(id)?.cell(1, 0).trim().to_string();
    if name.is_empty() {
        tracing::debug!(table = id, "Table template without a name cell, skipping");
        return None;
    }

    let inputs = resolver.collect(&INPUT_PATTERN, id);
    let outputs = resolver.collect(&OUTPUT_PATTERN, id);

    let mut insert_text = format!("| {} |", name);
    if !inputs.is_empty() || !outputs.is_empty() {
        insert_text.push_str(ROW_BREAK);
        insert_text.push('|');
        for input in &inputs {
            insert_text.push_str(input);
            insert_text.push('|');
        }
        for output in &outputs {
            insert_text.push_str(output);
            insert_text.push_str("?|");
        }
    }

    let mut parameters = inputs;
    parameters.extend(outputs);

    Some(Declaration {
        kind: DeclarationKind::TableTemplate,
        context_help: name.clone(),
        name,
        parameters,
        insert_text,
        source_table: id,
    })
}
