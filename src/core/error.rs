//! Error types for fitcomplete

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using fitcomplete's Error
pub type Result<T> = std::result::Result<T, Error>;

/// fitcomplete error types
///
/// Only the I/O boundary (reading pages, config, manifests) produces these.
/// Table extraction never fails; malformed tables are skipped.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Page not found: {path}")]
    PageNotFound { path: PathBuf },

    #[error("Catalog error for namespace '{namespace}': {message}")]
    Catalog { namespace: String, message: String },

    #[error("Invalid manifest {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    #[error("Documentation error: {message}")]
    Documentation { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}
