//! Documentation Store
//!
//! Per-type API documentation collected ahead of time, one JSON file per
//! type named after its qualified name:
//!
//! ```text
//! <root>/nl.example.EchoFixture.json
//! {
//!   "echo": { "body": "Echoes its input", "params": ["text: what to echo"],
//!             "return": "the text", "throws": "IllegalStateException" }
//! }
//! ```
//!
//! Every field is optional and unknown keys are ignored. Members are keyed by simple name, so overloads share one entry. A missing
//! or unreadable file simply means "undocumented".
//!
//! @module catalog/docs

use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

// =============================================================================
// DOCUMENTATION TYPES
// =============================================================================

/// Documentation of one member
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// `name: description` per documented parameter, in declared order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
    #[serde(default, rename = "return", skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throws: Option<String>,
}

impl MemberDoc {
    /// Documented parameter names, without their descriptions
    pub fn param_names(&self) -> Vec<&str> {
        self.params
            .iter()
            .map(|p| p.split(':').next().unwrap_or(p).trim())
            .collect()
    }
}

/// Documentation of one type, keyed by member name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeDoc {
    members: BTreeMap<String, MemberDoc>,
}

impl TypeDoc {
    pub fn new(members: BTreeMap<String, MemberDoc>) -> Self {
        Self { members }
    }

    pub fn member(&self, name: &str) -> Option<&MemberDoc> {
        self.members.get(name)
    }
}

// =============================================================================
// STORES
// =============================================================================

/// Looks up the documentation of a type by qualified name
pub trait DocumentationStore {
    fn lookup(&self, qualified_name: &str) -> Option<TypeDoc>;
}

/// A store with nothing in it
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDocs;

impl DocumentationStore for NoDocs {
    fn lookup(&self, _qualified_name: &str) -> Option<TypeDoc> {
        None
    }
}

/// Reads `<root>/<qualified name>.json`, first root that has the file wins
#[derive(Debug, Clone, Default)]
pub struct DirDocStore {
    roots: Vec<PathBuf>,
}

impl DirDocStore {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }
}

impl DocumentationStore for DirDocStore {
    fn lookup(&self, qualified_name: &str) -> Option<TypeDoc> {
        let file_name = format!("{}.json", qualified_name);
        for root in &self.roots {
            let path = root.join(&file_name);
            if !path.is_file() {
                continue;
            }
            return match read_type_doc(&path) {
                Ok(doc) => Some(doc),
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "Unreadable documentation file");
                    None
                }
            };
        }
        None
    }
}

fn read_type_doc(path: &Path) -> Result<TypeDoc> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| Error::Documentation {
        message: format!("{}: {}", path.display(), e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_param_names() {
        let doc = MemberDoc {
            params: vec!["text: what to echo".to_string(), "times".to_string()],
            ..Default::default()
        };
        assert_eq!(doc.param_names(), vec!["text", "times"]);
    }

    #[test]
    fn test_dir_store_reads_type_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("nl.example.EchoFixture.json"),
            r#"{"echo": {"body": "Echoes", "params": ["text: input"], "return": "the text", "since": "2.1"}}"#,
        )
        .unwrap();

        let store = DirDocStore::new(vec![dir.path().to_path_buf()]);
        let doc = store.lookup("nl.example.EchoFixture").unwrap();
        let echo = doc.member("echo").unwrap();
        assert_eq!(echo.body.as_deref(), Some("Echoes"));
        assert_eq!(echo.returns.as_deref(), Some("the text"));
        assert!(echo.throws.is_none());
        assert_eq!(echo.param_names(), vec!["text"]);
        assert!(doc.member("other").is_none());
    }

    #[test]
    fn test_missing_or_invalid_is_undocumented() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.Broken.json"), "not json").unwrap();

        let store = DirDocStore::new(vec![dir.path().to_path_buf()]);
        assert!(store.lookup("a.Missing").is_none());
        assert!(store.lookup("a.Broken").is_none());
        assert!(NoDocs.lookup("a.Missing").is_none());
    }

    #[test]
    fn test_documentation_serializes_widget_keys() {
        let doc = MemberDoc {
            body: Some("Adds".to_string()),
            returns: Some("sum".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["body"], "Adds");
        assert_eq!(json["return"], "sum");
        assert!(json.get("params").is_none());
    }
}
