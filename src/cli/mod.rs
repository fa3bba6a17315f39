//! CLI command definitions and handlers

pub mod generate;
pub mod tables;
pub mod usage;

use crate::core::error::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::Path;

const LONG_ABOUT: &str = r#"
Autocomplete metadata for table-based wiki test pages.

Reads a page, finds the scenarios, table templates and variables it
declares, describes the fixture types its import/library tables bring
into scope, and prints it all as one JSON document for an editor widget.

QUICK START:
    fitcomplete generate MyPage/content.txt -c build/manifests
    fitcomplete tables MyPage/content.txt
    fitcomplete usage setValueOf int String

CONFIGURATION:
    $FITCOMPLETE_HOME/config.toml (or the platform config directory):

    [catalog]
    classpath = ["build/manifests"]

    [docs]
    paths = ["build/docs"]

    [introspect]
    ignore_methods = ["toString", "equals", "hashCode"]

LOGGING:
    FITCOMPLETE_LOG=debug fitcomplete generate page.txt
"#;

/// Autocomplete metadata for table-based wiki test pages
#[derive(Parser, Debug)]
#[command(name = "fitcomplete")]
#[command(author, version)]
#[command(about = "Autocomplete metadata for table-based wiki test pages")]
#[command(long_about = LONG_ABOUT)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the autocomplete JSON document for a page
    #[command(visible_alias = "g")]
    Generate(generate::GenerateArgs),

    /// List a page's tables and how each is classified
    #[command(visible_alias = "t")]
    Tables(tables::TablesArgs),

    /// Print the usage row synthesized for an operation name
    #[command(visible_alias = "u")]
    Usage(usage::UsageArgs),
}

/// Read a page file
pub(crate) fn read_page(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(Error::PageNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}
