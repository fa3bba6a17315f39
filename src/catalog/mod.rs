//! Type Catalog
//!
//! Fixture types are described, not loaded: a catalog answers "which
//! concrete types live in this namespace" with descriptors listing each
//! type's operations and constructors (name, ordered parameter types,
//! thrown errors, attached markers). How the descriptors are produced is
//! the catalog's business; the introspector only reads them.
//!
//! @module catalog

pub mod docs;
pub mod introspect;
pub mod manifest;

use crate::core::error::Result;
use serde::{Deserialize, Serialize};

pub use docs::{DirDocStore, DocumentationStore, MemberDoc, NoDocs, TypeDoc};
pub use introspect::Introspector;
pub use manifest::ManifestCatalog;

// =============================================================================
// DESCRIPTORS
// =============================================================================

/// A concrete type as reported by a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    pub qualified_name: String,
    #[serde(default)]
    pub operations: Vec<OperationDescriptor>,
    #[serde(default)]
    pub constructors: Vec<OperationDescriptor>,
}

impl TypeDescriptor {
    pub fn simple_name(&self) -> &str {
        simple_name(&self.qualified_name)
    }

    /// Namespace the type lives in: its qualified name minus the last segment
    pub fn namespace(&self) -> &str {
        match self.qualified_name.rfind('.') {
            Some(dot) => &self.qualified_name[..dot],
            None => "",
        }
    }
}

/// An operation or constructor of a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDescriptor {
    pub name: String,
    /// Qualified parameter type names, in declared order
    #[serde(default)]
    pub parameters: Vec<String>,
    /// Qualified names of thrown error types
    #[serde(default)]
    pub thrown: Vec<String>,
    /// Attached annotation/marker type names
    #[serde(default)]
    pub markers: Vec<String>,
    /// Type that declares the operation; absent means the described type itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_by: Option<String>,
}

impl OperationDescriptor {
    /// Whether the described type declares (or overrides) this operation
    pub fn is_declared_by(&self, qualified_name: &str) -> bool {
        self.declared_by
            .as_deref()
            .map_or(true, |owner| owner == qualified_name)
    }
}

/// Last segment of a qualified type name; nested types drop their outer type
pub fn simple_name(qualified: &str) -> &str {
    let tail = qualified.rsplit('.').next().unwrap_or(qualified);
    tail.rsplit('$').next().unwrap_or(tail)
}

// =============================================================================
// CATALOG CAPABILITY
// =============================================================================

/// Enumerates the concrete types reachable under a namespace
pub trait TypeCatalog {
    fn types_in(&self, namespace: &str) -> Result<Vec<TypeDescriptor>>;
}

/// A catalog over a fixed list of descriptors
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    types: Vec<TypeDescriptor>,
}

impl InMemoryCatalog {
    pub fn new(types: Vec<TypeDescriptor>) -> Self {
        Self { types }
    }
}

impl TypeCatalog for InMemoryCatalog {
    fn types_in(&self, namespace: &str) -> Result<Vec<TypeDescriptor>> {
        Ok(self
            .types
            .iter()
            .filter(|t| t.namespace() == namespace)
            .cloned()
            .collect())
    }
}

// =============================================================================
// INTROSPECTED OUTPUT
// =============================================================================

/// A fixture type as offered to autocomplete
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeInfo {
    #[serde(rename = "qualifiedName")]
    pub qualified_name: String,
    #[serde(rename = "readableName")]
    pub display_name: String,
    #[serde(rename = "methods")]
    pub operations: Vec<OperationInfo>,
    pub constructors: Vec<OperationInfo>,
}

/// An invocable operation with its synthesized usage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationInfo {
    pub name: String,
    #[serde(rename = "readableName")]
    pub display_name: String,
    pub parameters: Vec<ParameterInfo>,
    #[serde(rename = "exceptions")]
    pub thrown_errors: Vec<String>,
    #[serde(rename = "annotations")]
    pub markers: Vec<String>,
    #[serde(rename = "usage")]
    pub usage_template: String,
    #[serde(rename = "contexthelp")]
    pub context_help: String,
    #[serde(rename = "wikiText")]
    pub wiki_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<MemberDoc>,
}

/// A parameter slot: its simple type name, plus the documented name when known
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterInfo {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(qualified: &str) -> TypeDescriptor {
        TypeDescriptor {
            qualified_name: qualified.to_string(),
            operations: vec![],
            constructors: vec![],
        }
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(simple_name("java.lang.String"), "String");
        assert_eq!(simple_name("int"), "int");
        assert_eq!(simple_name("nl.example.Outer$Inner"), "Inner");
        assert_eq!(simple_name("java.lang.String[]"), "String[]");
    }

    #[test]
    fn test_namespace() {
        assert_eq!(descriptor("nl.example.EchoFixture").namespace(), "nl.example");
        assert_eq!(descriptor("Standalone").namespace(), "");
    }

    #[test]
    fn test_declared_by() {
        let op = OperationDescriptor {
            name: "equals".to_string(),
            parameters: vec!["java.lang.Object".to_string()],
            thrown: vec![],
            markers: vec![],
            declared_by: Some("java.lang.Object".to_string()),
        };
        assert!(!op.is_declared_by("nl.example.EchoFixture"));
        assert!(op.is_declared_by("java.lang.Object"));

        let own = OperationDescriptor {
            declared_by: None,
            ..op
        };
        assert!(own.is_declared_by("nl.example.EchoFixture"));
    }

    #[test]
    fn test_in_memory_catalog_is_not_recursive() {
        let catalog = InMemoryCatalog::new(vec![
            descriptor("nl.example.A"),
            descriptor("nl.example.sub.B"),
            descriptor("nl.other.C"),
        ]);
        let found = catalog.types_in("nl.example").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].qualified_name, "nl.example.A");
    }

    #[test]
    fn test_descriptor_from_manifest_json() {
        let json = r#"{
            "qualifiedName": "nl.example.EchoFixture",
            "operations": [
                {"name": "echo", "parameters": ["java.lang.String"], "markers": ["Deprecated"]},
                {"name": "hashCode", "declaredBy": "java.lang.Object"}
            ]
        }"#;
        let parsed: TypeDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.simple_name(), "EchoFixture");
        assert_eq!(parsed.operations.len(), 2);
        assert!(parsed.constructors.is_empty());
        assert_eq!(parsed.operations[0].markers, vec!["Deprecated"]);
        assert_eq!(
            parsed.operations[1].declared_by.as_deref(),
            Some("java.lang.Object")
        );
    }
}
