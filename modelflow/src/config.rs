//! Generator configuration.
//!
//! One `GeneratorConfig` holds the base directories and a list of API
//! units; each unit maps one source package to one output document.

use crate::error::ExecutionError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Configuration for one API unit.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Dotted package path under the source root, scanned recursively.
    pub package: String,
    /// File suffixes treated as model sources.
    #[serde(default = "default_suffixes")]
    pub suffixes: Vec<String>,
    /// Output document path, relative to the target base directory.
    pub output: PathBuf,
    /// Explicit descriptor-to-Flow overrides, merged over the built-in
    /// type map.
    #[serde(default)]
    pub types: HashMap<String, String>,
    /// Named toggles enabling optional verification rules.
    #[serde(default)]
    pub verifications: HashMap<String, bool>,
}

fn default_suffixes() -> Vec<String> {
    vec![".java".to_string()]
}

/// Top-level generator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Base source directory holding the package tree.
    pub source_directory: PathBuf,
    /// Base output directory; created if absent.
    pub target_directory: PathBuf,
    /// API units, executed independently.
    #[serde(default)]
    pub apis: Vec<ApiConfig>,
}

impl GeneratorConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    /// Returns `ExecutionError::Config` on malformed TOML.
    pub fn from_toml_str(text: &str) -> Result<Self, ExecutionError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    /// Returns `ExecutionError` if the file is unreadable or malformed.
    pub fn load(path: &Path) -> Result<Self, ExecutionError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

impl ApiConfig {
    /// Resolves the source root of this unit under the base directory.
    #[must_use]
    pub fn source_root(&self, source_directory: &Path) -> PathBuf {
        source_directory.join(self.package.replace('.', "/"))
    }
}
