//! Rendered HTML table scanner
//!
//! Pages rendered to HTML carry their tables as `<table>` elements. Each
//! `<tr>` becomes a row, each `<td>`/`<th>` a cell whose text is the inner
//! HTML with tags stripped and the common entities decoded.
//!
//! Tables nest (hash tables render as a `<table>` inside a cell), so the
//! structural tags are walked with a depth counter: only rows and cells of
//! an outermost table count, and a cell holding a nested table keeps that
//! table's markup as its text.
//!
//! @module grid/html

use super::Table;
use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// COMPILED REGEX PATTERNS
// =============================================================================

/// Opening or closing `table`/`tr`/`td`/`th` tag
static STRUCTURE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<(/?)(table|tr|td|th)\b[^>]*>").unwrap());

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

static NESTED_TABLE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<table\b").unwrap());

// =============================================================================
// SCANNING
// =============================================================================

/// Scan rendered HTML into tables
pub fn scan(html: &str) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut depth = 0usize;
    let mut cell_start: Option<usize> = None;

    for caps in STRUCTURE_PATTERN.captures_iter(html) {
        let Some(tag) = caps.get(0) else {
            continue;
        };
        let closing = !caps[1].is_empty();
        let name = caps[2].to_ascii_lowercase();

        match (name.as_str(), closing) {
            ("table", false) => {
                depth += 1;
                if depth == 1 {
                    rows.clear();
                    cell_start = None;
                }
            }
            ("table", true) => {
                // Stray close tag outside any table
                if depth == 0 {
                    continue;
                }
                depth -= 1;
                if depth == 0 {
                    tables.push(Table::new(std::mem::take(&mut rows)));
                }
            }
            // Structure of a nested table belongs to the enclosing cell
            _ if depth != 1 => {}
            ("tr", false) => rows.push(Vec::new()),
            ("td" | "th", false) => cell_start = Some(tag.end()),
            ("td" | "th", true) => {
                if let Some(start) = cell_start.take() {
                    let text = cell_text(&html[start..tag.start()]);
                    match rows.last_mut() {
                        Some(row) => row.push(text),
                        None => rows.push(vec![text]),
                    }
                }
            }
            _ => {}
        }
    }

    tables
}

fn cell_text(inner: &str) -> String {
    if NESTED_TABLE_PATTERN.is_match(inner) {
        return inner.trim().to_string();
    }
    decode_entities(&TAG_PATTERN.replace_all(inner, ""))
        .trim()
        .to_string()
}

/// Decode the entities the wiki renderer emits; `&amp;` goes last
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
