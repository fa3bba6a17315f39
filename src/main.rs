//! fitcomplete CLI entry point

use clap::Parser;
use fitcomplete::cli::{Cli, Commands};
use fitcomplete::core::error::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging; stdout carries the JSON document
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_env("FITCOMPLETE_LOG"))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => fitcomplete::cli::generate::run(args),
        Commands::Tables(args) => fitcomplete::cli::tables::run(args),
        Commands::Usage(args) => fitcomplete::cli::usage::run(args),
    }
}
