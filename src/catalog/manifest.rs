//! Manifest-backed type catalog
//!
//! Each classpath root is walked for `*.json` manifests of the form
//! `{ "types": [TypeDescriptor, ...] }`, usually written next to the
//! compiled fixtures. Manifests are read once, up front; a manifest that
//! fails to parse is logged and skipped so one bad library does not hide
//! the others.
//!
//! @module catalog/manifest

use super::{TypeCatalog, TypeDescriptor};
use crate::core::error::{Error, Result};
use ignore::WalkBuilder;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    types: Vec<TypeDescriptor>,
}

/// Types from every manifest under a set of roots, keyed by qualified name
#[derive(Debug, Clone, Default)]
pub struct ManifestCatalog {
    types: BTreeMap<String, TypeDescriptor>,
}

impl ManifestCatalog {
    /// Walk `roots` and load every manifest found.
    ///
    /// When two manifests describe the same type the first one read wins.
    pub fn load(roots: &[PathBuf]) -> Self {
        let mut catalog = Self::default();

        for root in roots {
            if !root.exists() {
                warn!(root = %root.display(), "Classpath root does not exist");
                continue;
            }
            for path in manifest_files(root) {
                match read_manifest(&path) {
                    Ok(manifest) => {
                        debug!(path = %path.display(), types = manifest.types.len(), "Loaded manifest");
                        for ty in manifest.types {
                            if ty.qualified_name.trim().is_empty() {
                                warn!(path = %path.display(), "Type without a qualified name, skipping");
                                continue;
                            }
                            catalog.types.entry(ty.qualified_name.clone()).or_insert(ty);
                        }
                    }
                    Err(e) => warn!(error = %e, "Skipping manifest"),
                }
            }
        }

        catalog
    }
}

impl TypeCatalog for ManifestCatalog {
    /// Types directly in `namespace`, sorted by qualified name
    fn types_in(&self, namespace: &str) -> Result<Vec<TypeDescriptor>> {
        if !is_namespace(namespace) {
            return Err(Error::Catalog {
                namespace: namespace.to_string(),
                message: "not a dotted namespace".to_string(),
            });
        }
        Ok(self
            .types
            .values()
            .filter(|t| t.namespace() == namespace)
            .cloned()
            .collect())
    }
}

/// Non-empty dot-separated segments without whitespace
fn is_namespace(namespace: &str) -> bool {
    namespace
        .split('.')
        .all(|segment| !segment.is_empty() && !segment.contains(char::is_whitespace))
}

/// `*.json` files under `root`, in a stable order
fn manifest_files(root: &Path) -> Vec<PathBuf> {
    // Manifests often live in build output, which is usually gitignored
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(true)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    walker
        .flatten()
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && path.extension().map_or(false, |ext| ext == "json"))
        .collect()
}

fn read_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| Error::Manifest {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"{
        "types": [
            {"qualifiedName": "nl.example.Zeta", "operations": [{"name": "run"}]},
            {"qualifiedName": "nl.example.Alpha"},
            {"qualifiedName": "nl.example.sub.Nested"},
            {"qualifiedName": " "}
        ]
    }"#;

    #[test]
    fn test_loads_and_sorts_types() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("lib")).unwrap();
        fs::write(dir.path().join("lib/fixtures.json"), MANIFEST).unwrap();

        let catalog = ManifestCatalog::load(&[dir.path().to_path_buf()]);
        assert_eq!(catalog.types.len(), 3);

        let names: Vec<_> = catalog
            .types_in("nl.example")
            .unwrap()
            .into_iter()
            .map(|t| t.qualified_name)
            .collect();
        assert_eq!(names, vec!["nl.example.Alpha", "nl.example.Zeta"]);
        assert_eq!(catalog.types_in("nl.example.sub").unwrap().len(), 1);
        assert!(catalog.types_in("nl.missing").unwrap().is_empty());
    }

    #[test]
    fn test_bad_manifest_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        fs::write(dir.path().join("good.json"), MANIFEST).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let catalog = ManifestCatalog::load(&[dir.path().to_path_buf()]);
        assert_eq!(catalog.types.len(), 3);
    }

    #[test]
    fn test_first_manifest_wins_on_duplicates() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(
            first.path().join("a.json"),
            r#"{"types": [{"qualifiedName": "p.T", "operations": [{"name": "one"}]}]}"#,
        )
        .unwrap();
        fs::write(
            second.path().join("b.json"),
            r#"{"types": [{"qualifiedName": "p.T", "operations": [{"name": "two"}]}]}"#,
        )
        .unwrap();

        let catalog = ManifestCatalog::load(&[first.path().to_path_buf(), second.path().to_path_buf()]);
        let types = catalog.types_in("p").unwrap();
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].operations[0].name, "one");
    }

    #[test]
    fn test_missing_root_yields_empty_catalog() {
        let catalog = ManifestCatalog::load(&[PathBuf::from("/definitely/not/here")]);
        assert!(catalog.types.is_empty());
    }

    #[test]
    fn test_malformed_namespace_is_a_catalog_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("fixtures.json"), MANIFEST).unwrap();
        let catalog = ManifestCatalog::load(&[dir.path().to_path_buf()]);

        for namespace in ["", " ", "nl example", "nl..example", "nl.example."] {
            let err = catalog.types_in(namespace).unwrap_err();
            assert!(matches!(err, Error::Catalog { .. }), "{:?}", namespace);
        }
        assert!(catalog.types_in("nl").unwrap().is_empty());
    }
}
