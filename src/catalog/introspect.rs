//! Type Introspector
//!
//! Turns catalog descriptors into autocomplete entries: filters out the
//! plumbing every fixture inherits (unless the fixture declares it itself),
//! synthesizes usage rows and context help, and merges in documentation.
//!
//! @module catalog/introspect

use super::docs::{DocumentationStore, MemberDoc, TypeDoc};
use super::{
    simple_name, OperationDescriptor, OperationInfo, ParameterInfo, TypeCatalog,
    TypeDescriptor, TypeInfo,
};
use crate::core::config::DEFAULT_IGNORED_METHODS;
use crate::usage::{self, split_camel_case};
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Describes the types of a page's namespaces
pub struct Introspector<'a> {
    catalog: &'a dyn TypeCatalog,
    docs: &'a dyn DocumentationStore,
    ignored: HashSet<String>,
}

impl<'a> Introspector<'a> {
    pub fn new(catalog: &'a dyn TypeCatalog, docs: &'a dyn DocumentationStore) -> Self {
        Self {
            catalog,
            docs,
            ignored: DEFAULT_IGNORED_METHODS.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Replace the ignore-list
    pub fn with_ignored<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored = names.into_iter().map(Into::into).collect();
        self
    }

    /// Every type in `namespaces`, in namespace order, each type once.
    ///
    /// A namespace the catalog cannot enumerate is logged and skipped.
    pub fn introspect<I, S>(&self, namespaces: I) -> Vec<TypeInfo>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut types: IndexMap<String, TypeInfo> = IndexMap::new();
        let mut enumerated = 0;

        for namespace in namespaces {
            let namespace = namespace.as_ref();
            enumerated += 1;
            let descriptors = match self.catalog.types_in(namespace) {
                Ok(descriptors) => descriptors,
                Err(e) => {
                    warn!(namespace = %namespace, error = %e, "Could not enumerate types");
                    continue;
                }
            };
            debug!(namespace = %namespace, types = descriptors.len(), "Enumerated namespace");

            for descriptor in descriptors {
                if !types.contains_key(&descriptor.qualified_name) {
                    let info = self.describe(&descriptor);
                    types.insert(descriptor.qualified_name, info);
                }
            }
        }

        info!(namespaces = enumerated, types = types.len(), "Introspected types");
        types.into_values().collect()
    }

    /// Autocomplete entry for a single type
    pub fn describe(&self, ty: &TypeDescriptor) -> TypeInfo {
        let doc = self.docs.lookup(&ty.qualified_name);
        let doc = doc.as_ref();

        let operations = ty
            .operations
            .iter()
            .filter(|op| self.is_offered(op, &ty.qualified_name))
            .map(|op| {
                let member = doc.and_then(|d| d.member(&op.name));
                describe_operation(op, member, None)
            })
            .collect();

        let constructors = ty
            .constructors
            .iter()
            .map(|ctor| describe_operation(ctor, constructor_doc(doc, ty), Some(ty.simple_name())))
            .collect();

        TypeInfo {
            qualified_name: ty.qualified_name.clone(),
            display_name: split_camel_case(ty.simple_name()),
            operations,
            constructors,
        }
    }

    fn is_offered(&self, op: &OperationDescriptor, qualified_name: &str) -> bool {
        !self.ignored.contains(&op.name) || op.is_declared_by(qualified_name)
    }
}

/// Constructors are documented under the type's simple name or `<init>`
fn constructor_doc<'d>(doc: Option<&'d TypeDoc>, ty: &TypeDescriptor) -> Option<&'d MemberDoc> {
    let doc = doc?;
    doc.member(ty.simple_name()).or_else(|| doc.member("<init>"))
}

/// `constructor_of` is the owning type's simple name when `op` is a
/// constructor; catalogs may name constructors `<init>`.
fn describe_operation(
    op: &OperationDescriptor,
    doc: Option<&MemberDoc>,
    constructor_of: Option<&str>,
) -> OperationInfo {
    let type_names: Vec<&str> = op.parameters.iter().map(|p| simple_name(p)).collect();

    // Documented names replace type names only when they line up one to one
    let documented: Option<Vec<&str>> = doc
        .map(MemberDoc::param_names)
        .filter(|names| !names.is_empty() && names.len() == type_names.len());
    let labels = documented.as_deref().unwrap_or(type_names.as_slice());

    let display_name = split_camel_case(constructor_of.unwrap_or_else(|| simple_name(&op.name)));
    let usage_template = match constructor_of {
        Some(type_name) => usage::constructor_usage(type_name, labels),
        None => usage::method_usage(&display_name, labels),
    };
    let wiki_text = usage::wiki_text(&usage_template).to_string();

    OperationInfo {
        name: op.name.clone(),
        display_name,
        parameters: type_names
            .iter()
            .enumerate()
            .map(|(i, type_name)| ParameterInfo {
                type_name: type_name.to_string(),
                name: documented.as_ref().map(|names| names[i].to_string()),
            })
            .collect(),
        thrown_errors: op.thrown.iter().map(|t| simple_name(t).to_string()).collect(),
        markers: op.markers.iter().map(|m| simple_name(m).to_string()).collect(),
        context_help: usage::context_help(&wiki_text),
        wiki_text,
        usage_template,
        documentation: doc.cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::docs::NoDocs;
    use crate::catalog::InMemoryCatalog;
    use crate::core::error::{Error, Result};
    use std::collections::BTreeMap;

    fn op(name: &str, params: &[&str]) -> OperationDescriptor {
        OperationDescriptor {
            name: name.to_string(),
            parameters: params.iter().map(|p| p.to_string()).collect(),
            thrown: vec![],
            markers: vec![],
            declared_by: None,
        }
    }

    fn inherited(name: &str) -> OperationDescriptor {
        OperationDescriptor {
            declared_by: Some("java.lang.Object".to_string()),
            ..op(name, &[])
        }
    }

    fn echo_fixture() -> TypeDescriptor {
        TypeDescriptor {
            qualified_name: "nl.example.EchoFixture".to_string(),
            operations: vec![
                op("setValue", &["int"]),
                op("echo", &["java.lang.String"]),
                inherited("toString"),
                inherited("hashCode"),
                op("equals", &["java.lang.Object"]),
            ],
            constructors: vec![op("nl.example.EchoFixture", &["java.lang.String", "int"])],
        }
    }

    struct DocsFor(TypeDoc);

    impl DocumentationStore for DocsFor {
        fn lookup(&self, qualified_name: &str) -> Option<TypeDoc> {
            (qualified_name == "nl.example.EchoFixture").then(|| self.0.clone())
        }
    }

    struct FailingCatalog;

    impl TypeCatalog for FailingCatalog {
        fn types_in(&self, namespace: &str) -> Result<Vec<TypeDescriptor>> {
            Err(Error::Catalog {
                namespace: namespace.to_string(),
                message: "unreadable".to_string(),
            })
        }
    }

    #[test]
    fn test_describe_type() {
        let catalog = InMemoryCatalog::default();
        let introspector = Introspector::new(&catalog, &NoDocs);
        let info = introspector.describe(&echo_fixture());

        assert_eq!(info.display_name, "echo fixture");
        let names: Vec<_> = info.operations.iter().map(|o| o.name.as_str()).collect();
        // Inherited plumbing is dropped; an own `equals` is kept
        assert_eq!(names, vec!["setValue", "echo", "equals"]);

        let set_value = &info.operations[0];
        assert_eq!(set_value.display_name, "set value");
        assert_eq!(set_value.usage_template, "| set | [int] | value |");
        assert_eq!(set_value.wiki_text, "set | [int] | value |");
        assert_eq!(set_value.context_help, "set &lt;int&gt; value");
        assert!(set_value.documentation.is_none());

        let echo = &info.operations[1];
        assert_eq!(echo.parameters[0].type_name, "String");
        assert_eq!(echo.usage_template, "| [String] | echo |");

        let ctor = &info.constructors[0];
        assert_eq!(ctor.display_name, "echo fixture");
        assert_eq!(ctor.usage_template, "| echo fixture | [String] | [int] |");
    }

    #[test]
    fn test_constructor_named_init_uses_type_name() {
        let ty = TypeDescriptor {
            constructors: vec![op("<init>", &["java.lang.String", "int"]), op("<init>", &[])],
            ..echo_fixture()
        };
        let catalog = InMemoryCatalog::default();
        let info = Introspector::new(&catalog, &NoDocs).describe(&ty);

        let ctor = &info.constructors[0];
        assert_eq!(ctor.name, "<init>");
        assert_eq!(ctor.display_name, "echo fixture");
        assert_eq!(ctor.usage_template, "| echo fixture | [String] | [int] |");
        assert_eq!(info.constructors[1].usage_template, "| echo fixture |");
    }

    #[test]
    fn test_custom_ignore_list() {
        let catalog = InMemoryCatalog::default();
        let introspector = Introspector::new(&catalog, &NoDocs).with_ignored(["echo"]);
        let info = introspector.describe(&echo_fixture());
        let names: Vec<_> = info.operations.iter().map(|o| o.name.as_str()).collect();
        // `echo` is declared by the fixture itself, so it survives anyway
        assert!(names.contains(&"echo"));
        assert!(names.contains(&"toString"));
    }

    #[test]
    fn test_documentation_names_placeholders() {
        let mut members = BTreeMap::new();
        members.insert(
            "setValue".to_string(),
            MemberDoc {
                body: Some("Stores the value".to_string()),
                params: vec!["amount: how much".to_string()],
                ..Default::default()
            },
        );
        members.insert(
            "echo".to_string(),
            MemberDoc {
                params: vec!["a".to_string(), "b".to_string()],
                ..Default::default()
            },
        );
        members.insert(
            "EchoFixture".to_string(),
            MemberDoc {
                params: vec!["greeting: text".to_string(), "times".to_string()],
                ..Default::default()
            },
        );
        let docs = DocsFor(TypeDoc::new(members));
        let catalog = InMemoryCatalog::default();
        let info = Introspector::new(&catalog, &docs).describe(&echo_fixture());

        let set_value = &info.operations[0];
        assert_eq!(set_value.usage_template, "| set | [amount] | value |");
        assert_eq!(set_value.context_help, "set &lt;amount&gt; value");
        assert_eq!(set_value.parameters[0].name.as_deref(), Some("amount"));
        assert_eq!(
            set_value.documentation.as_ref().and_then(|d| d.body.as_deref()),
            Some("Stores the value")
        );

        // Documented count does not match: type names stay, doc still attached
        let echo = &info.operations[1];
        assert_eq!(echo.usage_template, "| [String] | echo |");
        assert!(echo.parameters[0].name.is_none());
        assert!(echo.documentation.is_some());

        assert_eq!(
            info.constructors[0].usage_template,
            "| echo fixture | [greeting] | [times] |"
        );
    }

    #[test]
    fn test_introspect_dedups_across_namespaces() {
        let catalog = InMemoryCatalog::new(vec![
            echo_fixture(),
            TypeDescriptor {
                qualified_name: "nl.other.Clock".to_string(),
                operations: vec![op("now", &[])],
                constructors: vec![],
            },
        ]);
        let introspector = Introspector::new(&catalog, &NoDocs);
        let namespaces = vec![
            "nl.other".to_string(),
            "nl.example".to_string(),
            "nl.other".to_string(),
        ];
        let types = introspector.introspect(&namespaces);
        let names: Vec<_> = types.iter().map(|t| t.qualified_name.as_str()).collect();
        assert_eq!(names, vec!["nl.other.Clock", "nl.example.EchoFixture"]);
        assert_eq!(types[0].operations[0].usage_template, "| now |");
    }

    #[test]
    fn test_catalog_failure_is_skipped() {
        let introspector = Introspector::new(&FailingCatalog, &NoDocs);
        assert!(introspector.introspect(&["nl.example".to_string()]).is_empty());
    }
}
