//! Scenario extraction
//!
//! Two header shapes declare a scenario:
//!
//! ```text
//! positional:     | scenario | login with | user | and password | pass |
//! inline markers: | scenario | login with _ and password _ | user, pass |
//! ```
//!
//! In the positional form odd header cells are name words and even cells
//! are parameters. In the inline form each `_` marker in the name cell is a
//! parameter slot, filled left to right from the comma-separated list in
//! the next cell.
//!
//! @module page/scenario

use super::declaration::{Declaration, DeclarationKind};
use crate::grid::{Table, TableId};
use crate::usage;
use std::ops::Range;

/// Extract the scenario declared by a table's header row.
///
/// Returns `None` when the header carries no name cell.
pub fn extract_scenario(table: &Table, id: TableId) -> Option<Declaration> {
    let name_cell = table.cell(1, 0);
    if name_cell.trim().is_empty() {
        tracing::debug!(table = id, "Scenario table without a name cell, skipping");
        return None;
    }

    let (name, parameters, insert_text) = if marker_ranges(name_cell).is_empty() {
        positional_form(table)
    } else {
        inline_form(table)
    };

    Some(Declaration {
        kind: DeclarationKind::Scenario,
        context_help: usage::context_help(usage::wiki_text(&insert_text)),
        name,
        parameters,
        insert_text,
        source_table: id,
    })
}

// =============================================================================
// POSITIONAL FORM
// =============================================================================

fn positional_form(table: &Table) -> (String, Vec<String>, String) {
    let mut words = Vec::new();
    let mut parameters = Vec::new();
    let mut insert_text = String::from("|");

    for col in 1..table.column_count(0) {
        let cell = table.cell(col, 0);
        insert_text.push(' ');
        if col % 2 == 0 {
            insert_text.push('[');
            insert_text.push_str(cell);
            insert_text.push(']');
            parameters.push(cell.to_string());
        } else {
            insert_text.push_str(cell);
            words.push(cell);
        }
        insert_text.push_str(" |");
    }

    (words.join(" "), parameters, insert_text)
}

// =============================================================================
// INLINE-MARKER FORM
// =============================================================================

fn inline_form(table: &Table) -> (String, Vec<String>, String) {
    let text = table.cell(1, 0);
    let markers = marker_ranges(text);
    let parameters: Vec<String> = table
        .cell(2, 0)
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    let mut filled = String::with_capacity(text.len() + 16 * markers.len());
    let mut name = String::with_capacity(text.len());
    let mut cursor = 0;
    for (index, marker) in markers.iter().enumerate() {
        let literal = &text[cursor..marker.start];
        filled.push_str(literal);
        name.push_str(literal);
        name.push(' ');
        match parameters.get(index) {
            Some(param) => filled.push_str(&format!(" | [{}] |", param)),
            // More markers than names: the marker stays as typed
            None => filled.push_str(&text[marker.clone()]),
        }
        cursor = marker.end;
    }
    filled.push_str(&text[cursor..]);
    name.push_str(&text[cursor..]);

    if !filled.ends_with('|') {
        filled.push_str(" |");
    }

    (name, parameters, format!("| {}", filled))
}

/// Byte ranges of `_` markers: a non-word character followed by an
/// underscore, followed by a non-word character or the end of the text.
/// The trailing character is not part of the marker.
fn marker_ranges(text: &str) -> Vec<Range<usize>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut ranges = Vec::new();
    let mut i = 0;

    while i + 1 < chars.len() {
        let (start, c) = chars[i];
        let (_, next) = chars[i + 1];
        let followed_ok = chars.get(i + 2).map_or(true, |&(_, after)| !is_word_char(after));

        if !is_word_char(c) && next == '_' && followed_ok {
            let end = chars.get(i + 2).map_or(text.len(), |&(offset, _)| offset);
            ranges.push(start..end);
            i += 2;
        } else {
            i += 1;
        }
    }

    ranges
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
