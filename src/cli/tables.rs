//! Tables command

use crate::core::error::Result;
use crate::grid::{self, PageFormat};
use crate::output::human;
use clap::Parser;
use std::path::PathBuf;

/// Arguments for the tables command
#[derive(Parser, Debug)]
pub struct TablesArgs {
    /// Page to read
    pub page: PathBuf,

    /// Treat the page as rendered HTML (detected automatically otherwise)
    #[arg(long)]
    pub html: bool,
}

pub fn run(args: TablesArgs) -> Result<()> {
    let content = super::read_page(&args.page)?;
    let format = if args.html {
        PageFormat::Html
    } else {
        PageFormat::detect(&content)
    };

    let tables = grid::scan(&content, format);
    print!("{}", human::format_tables(&tables));
    Ok(())
}
