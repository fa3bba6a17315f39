//! Wiki markup table scanner
//!
//! A table is a maximal run of lines that start with a pipe, optionally
//! decorated with the `!` (literal) and `-` (hidden) table prefixes.
//! Cells are the pipe-separated segments, trimmed. A `!-literal-!` escape
//! is unwrapped and may itself contain pipes, which do not split the cell.
//!
//! @module grid/wiki

use super::Table;

/// Scan wiki markup into tables
pub fn scan(content: &str) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut rows: Vec<Vec<String>> = Vec::new();

    for line in content.lines() {
        match table_row(line) {
            Some(cells) => rows.push(cells),
            None => {
                if !rows.is_empty() {
                    tables.push(Table::new(std::mem::take(&mut rows)));
                }
            }
        }
    }
    if !rows.is_empty() {
        tables.push(Table::new(rows));
    }

    tables
}

/// Split a table line into cells, `None` if the line is not part of a table
fn table_row(line: &str) -> Option<Vec<String>> {
    let line = line.trim();
    let body = strip_table_prefix(line)?;

    // Everything after the last pipe is trailing noise
    let body = match body.rfind('|') {
        Some(end) if end + 1 == body.len() => &body[..end],
        _ => body,
    };

    Some(split_cells(body).into_iter().map(unescape_cell).collect())
}

/// Split on pipes that sit outside `!- ... -!` escapes. An unterminated
/// escape runs to the end of the line.
fn split_cells(body: &str) -> Vec<&str> {
    let mut cells = Vec::new();
    let mut start = 0;
    let mut literal = false;
    let mut i = 0;

    while i < body.len() {
        let rest = &body[i..];
        if !literal && rest.starts_with("!-") {
            literal = true;
            i += 2;
        } else if literal && rest.starts_with("-!") {
            literal = false;
            i += 2;
        } else if !literal && rest.starts_with('|') {
            cells.push(&body[start..i]);
            i += 1;
            start = i;
        } else {
            i += rest.chars().next().map_or(1, char::len_utf8);
        }
    }
    cells.push(&body[start..]);

    cells
}

/// Strip the leading `|`, `!|`, `-|` or `-!|`
fn strip_table_prefix(line: &str) -> Option<&str> {
    ["-!|", "!|", "-|", "|"]
        .iter()
        .find_map(|prefix| line.strip_prefix(prefix))
}

fn unescape_cell(cell: &str) -> String {
    cell.trim().replace("!-", "").replace("-!", "")
}
