//! Configuration management

use crate::core::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub catalog: CatalogConfig,
    pub docs: DocsConfig,
    pub introspect: IntrospectConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Pretty-print the JSON document
    pub pretty: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Roots scanned for type manifests
    pub classpath: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Roots holding `<qualified name>.json` documentation files
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntrospectConfig {
    /// Inherited operations hidden unless the type re-declares them
    pub ignore_methods: Vec<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Default for IntrospectConfig {
    fn default() -> Self {
        Self {
            ignore_methods: DEFAULT_IGNORED_METHODS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Load configuration from default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            // No home directory at all: run with defaults
            Err(_) => Ok(Config::default()),
        }
    }

    /// Load configuration from an explicit file, defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::fitcomplete_home()?.join("config.toml"))
    }

    /// Get the fitcomplete home directory
    pub fn fitcomplete_home() -> Result<PathBuf> {
        if let Ok(home) = std::env::var("FITCOMPLETE_HOME") {
            return Ok(PathBuf::from(home));
        }

        ProjectDirs::from("dev", "fitcomplete", "fitcomplete")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| Error::ConfigError {
                message: "Could not determine fitcomplete home directory".to_string(),
            })
    }
}

/// Operations every fixture inherits from the common base, plus the
/// slim lifecycle hook
pub const DEFAULT_IGNORED_METHODS: &[&str] = &[
    "toString",
    "aroundSlimInvoke",
    "getClass",
    "equals",
    "notify",
    "notifyAll",
    "wait",
    "hashCode",
];
