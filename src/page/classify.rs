//! Table Classifier
//!
//! The first cell of a table names its kind. Only a handful of kinds
//! declare anything autocomplete cares about; every other table is left
//! alone apart from the variable scan.
//!
//! @module page/classify

use crate::grid::Table;

/// Declaration kind of a table, from its first cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Namespaces to search for fixture types
    Import,
    /// Library fixtures, one qualified type per row
    Library,
    Scenario,
    LoopingScenario,
    ConditionalScenario,
    TableTemplate,
    /// Anything else (script, decision, query tables, ...)
    Other,
}

impl TableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Library => "library",
            Self::Scenario => "scenario",
            Self::LoopingScenario => "looping scenario",
            Self::ConditionalScenario => "conditional scenario",
            Self::TableTemplate => "table template",
            Self::Other => "other",
        }
    }

    pub fn is_scenario(&self) -> bool {
        matches!(
            self,
            Self::Scenario | Self::LoopingScenario | Self::ConditionalScenario
        )
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a table by its first cell, case-insensitively
pub fn classify(table: &Table) -> TableKind {
    match table.cell(0, 0).to_lowercase().as_str() {
        "import" => TableKind::Import,
        "library" => TableKind::Library,
        "scenario" => TableKind::Scenario,
        "looping scenario" => TableKind::LoopingScenario,
        "conditional scenario" => TableKind::ConditionalScenario,
        "table template" => TableKind::TableTemplate,
        _ => TableKind::Other,
    }
}
