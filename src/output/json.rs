//! JSON output formatter
//!
//! The generated document is consumed by the editor widget; pretty output
//! is the default, compact output is for piping.
//!
//! @module output/json

use serde::Serialize;

/// JSON formatter for the generated document
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter with pretty printing
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a compact JSON formatter (no pretty printing)
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    pub fn with_pretty(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serialize to JSON string
    pub fn format<T: Serialize>(&self, value: &T) -> String {
        if self.pretty {
            serde_json::to_string_pretty(value)
                .unwrap_or_else(|e| format!(r#"{{"error": "JSON serialization failed: {}"}}"#, e))
        } else {
            serde_json::to_string(value)
                .unwrap_or_else(|e| format!(r#"{{"error": "JSON serialization failed: {}"}}"#, e))
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
