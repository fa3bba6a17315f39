//! Generate command

use crate::catalog::{DirDocStore, Introspector, ManifestCatalog};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::grid::PageFormat;
use crate::output::{self, JsonFormatter};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

/// Arguments for the generate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:
    fitcomplete generate page.txt                    Page declarations only
    fitcomplete generate page.txt -c build/manifests Include fixture types
    fitcomplete generate page.html --html --compact  Rendered page, one-line JSON")]
pub struct GenerateArgs {
    /// Page to read
    pub page: PathBuf,

    /// Treat the page as rendered HTML (detected automatically otherwise)
    #[arg(long)]
    pub html: bool,

    /// Directory to load type manifests from (repeatable, added to config)
    #[arg(short = 'c', long)]
    pub classpath: Vec<PathBuf>,

    /// Directory to load documentation from (repeatable, added to config)
    #[arg(long)]
    pub docs: Vec<PathBuf>,

    /// Single-line JSON output
    #[arg(long)]
    pub compact: bool,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let config = Config::load()?;
    let content = super::read_page(&args.page)?;

    let format = if args.html {
        PageFormat::Html
    } else {
        PageFormat::detect(&content)
    };
    debug!(page = %args.page.display(), ?format, "Reading page");

    let mut classpath = config.catalog.classpath.clone();
    classpath.extend(args.classpath);
    let mut doc_paths = config.docs.paths.clone();
    doc_paths.extend(args.docs);

    let catalog = ManifestCatalog::load(&classpath);
    let docs = DirDocStore::new(doc_paths);
    let introspector =
        Introspector::new(&catalog, &docs).with_ignored(config.introspect.ignore_methods.clone());

    let document = output::generate(&content, format, &introspector);

    let formatter = JsonFormatter::with_pretty(config.general.pretty && !args.compact);
    println!("{}", formatter.format(&document));
    Ok(())
}
