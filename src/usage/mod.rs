//! Usage-String Synthesizer
//!
//! Turns an operation signature into the table row a user types to call it.
//! Name words and parameter placeholders are interleaved so the row reads
//! like the operation name phrased around its arguments:
//!
//! ```text
//! setValue(Int)          ->  | set | [Int] | value |
//! checkValueOf(A, B)     ->  | check | [A] | value | [B] | of |
//! add(Int, String)       ->  | add | [Int], [String],  |
//! echo(String)           ->  | [String] | echo |
//! ```
//!
//! A single-word name with one parameter puts the placeholder first, since
//! the next-to-last cell is the only slot it can take.
//!
//! The same string serves as insertable wiki text (minus its leading `| `)
//! and, after stripping cell delimiters, as prose context help.
//!
//! @module usage

pub mod words;

use once_cell::sync::Lazy;
use regex::Regex;

pub use words::split_camel_case;

/// Leading delimiter every usage row starts with
pub const ROW_START: &str = "| ";

/// A delimited placeholder cell collapses into `&lt;name&gt;` in context help
static PLACEHOLDER_CELL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\| \[(\w+)] \|").unwrap());

// =============================================================================
// SYNTHESIS
// =============================================================================

/// Usage row for an operation.
///
/// `readable_name` is the word-split operation name, `params` the display
/// label of each parameter in declared order. With more parameters than
/// name words the parameters trail the name as a flat list. Otherwise
/// placeholders take every second cell counting back from the next-to-last
/// of `words + params` cells, and the name words fill the rest in order;
/// adjacent words share a cell.
pub fn method_usage<S: AsRef<str>>(readable_name: &str, params: &[S]) -> String {
    let words = words::tokens(readable_name);
    let num_words = words.len();
    let num_params = params.len();

    if num_params > num_words {
        let mut result = format!("{}{} | ", ROW_START, readable_name);
        for param in params {
            result.push_str(&placeholder(param.as_ref()));
            result.push_str(", ");
        }
        result.push_str(" |");
        return result;
    }

    let total = num_words + num_params;
    let mut cells: Vec<String> = Vec::with_capacity(total);
    let mut phrase: Vec<&str> = Vec::new();
    let mut next_word = words.into_iter();
    let mut next_param = params.iter();

    for position in 1..=total {
        if is_placeholder_slot(position, total, num_params) {
            if !phrase.is_empty() {
                cells.push(phrase.join(" "));
                phrase.clear();
            }
            if let Some(param) = next_param.next() {
                cells.push(placeholder(param.as_ref()));
            }
        } else if let Some(word) = next_word.next() {
            phrase.push(word);
        }
    }
    if !phrase.is_empty() {
        cells.push(phrase.join(" "));
    }

    format!("{}{} |", ROW_START, cells.join(" | "))
}

/// Usage row for a constructor: the readable type name, then one
/// placeholder per parameter in declared order
pub fn constructor_usage<S: AsRef<str>>(type_name: &str, params: &[S]) -> String {
    let mut result = format!("{}{} |", ROW_START, split_camel_case(type_name));
    for param in params {
        result.push(' ');
        result.push_str(&placeholder(param.as_ref()));
        result.push_str(" |");
    }
    result
}

/// 1-based cell positions `total-1, total-3, …` hold the placeholders
fn is_placeholder_slot(position: usize, total: usize, num_params: usize) -> bool {
    position < total && (total - position) % 2 == 1 && (total - position) < 2 * num_params
}

fn placeholder(label: &str) -> String {
    format!("[{}]", label)
}

// =============================================================================
// DERIVED TEXT
// =============================================================================

/// Insertable wiki text: the usage row without its leading delimiter
pub fn wiki_text(usage: &str) -> &str {
    usage.strip_prefix(ROW_START).unwrap_or(usage)
}

/// Human-readable help: placeholder cells become `&lt;name&gt;`, remaining
/// delimiters are dropped
pub fn context_help(wiki_text: &str) -> String {
    PLACEHOLDER_CELL
        .replace_all(wiki_text, "&lt;$1&gt;")
        .replace('|', "")
        .trim()
        .to_string()
}
