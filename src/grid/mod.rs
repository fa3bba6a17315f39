//! Grid Model
//!
//! A page is a sequence of independent tables; a table is a grid of text
//! cells whose rows may have differing column counts. Scanners turn page
//! sources (wiki markup, rendered HTML) into tables; the rest of the crate
//! only ever reads them.
//!
//! @module grid

pub mod html;
pub mod render;
pub mod wiki;

// =============================================================================
// TABLE
// =============================================================================

/// A read-only grid of text cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Build a table from string slices (handy for tests and embedding)
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Cell text at (column, row); empty when out of range
    pub fn cell(&self, col: usize, row: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self, row: usize) -> usize {
        self.rows.get(row).map(Vec::len).unwrap_or(0)
    }

    /// Widest row
    pub fn max_columns(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn row(&self, row: usize) -> &[String] {
        self.rows.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

/// Position of a table in the page's table sequence
pub type TableId = usize;

// =============================================================================
// PAGE SOURCES
// =============================================================================

/// Source markup a page is scanned from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageFormat {
    /// Wiki markup (`|cell|cell|` lines)
    #[default]
    Wiki,
    /// Rendered HTML (`<table>` elements)
    Html,
}

impl PageFormat {
    /// Guess the format from content: rendered pages contain `<table`
    pub fn detect(content: &str) -> Self {
        if content.to_ascii_lowercase().contains("<table") {
            Self::Html
        } else {
            Self::Wiki
        }
    }
}

/// Scan a page into its table sequence
pub fn scan(content: &str, format: PageFormat) -> Vec<Table> {
    match format {
        PageFormat::Wiki => wiki::scan(content),
        PageFormat::Html => html::scan(content),
    }
}
