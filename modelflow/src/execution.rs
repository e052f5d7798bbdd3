//! Per-unit pipeline execution.
//!
//! Runs one API unit end to end: discover sources, parse, generate,
//! post-process, and write the output document. Units share no mutable
//! state; a failed unit never aborts its siblings.

use crate::config::{ApiConfig, GeneratorConfig};
use crate::discover;
use crate::error::ExecutionError;
use modelflow_model::{ClassSet, Registry, TypeMap, parse_model};
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

/// Result of one successfully executed unit.
#[derive(Debug, Clone)]
pub struct UnitReport {
    /// Number of type declarations written.
    pub types_written: usize,
    /// Absolute (or config-relative) output path.
    pub output: PathBuf,
}

/// Outcome of one unit within a full run.
#[derive(Debug)]
pub struct UnitOutcome {
    /// Package name identifying the unit.
    pub package: String,
    /// The unit's result; errors are per-unit, never cross-unit.
    pub result: Result<UnitReport, ExecutionError>,
}

/// Executes configured API units.
pub struct Execution<'a> {
    config: &'a GeneratorConfig,
    version: String,
}

impl<'a> Execution<'a> {
    /// Creates an execution over a configuration, stamping output
    /// headers with this crate's version.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self::with_version(config, env!("CARGO_PKG_VERSION"))
    }

    /// Creates an execution with an explicit generator version for the
    /// output header.
    #[must_use]
    pub fn with_version(config: &'a GeneratorConfig, version: impl Into<String>) -> Self {
        Self {
            config,
            version: version.into(),
        }
    }

    /// Runs every configured unit; a failed unit is logged and the run
    /// continues with the remaining ones.
    pub fn run_all(&self) -> Vec<UnitOutcome> {
        self.config
            .apis
            .iter()
            .map(|api| {
                let result = self.run_unit(api);
                if let Err(e) = &result {
                    tracing::error!("unit '{}' failed: {}", api.package, e);
                    if let ExecutionError::Verification { violations } = e {
                        for violation in violations {
                            tracing::error!("  {violation}");
                        }
                    }
                }
                UnitOutcome {
                    package: api.package.clone(),
                    result,
                }
            })
            .collect()
    }

    /// Runs one unit's pipeline.
    ///
    /// # Errors
    /// Returns `ExecutionError` if the source directory is missing, a
    /// source fails to parse, verification reports violations, or the
    /// output cannot be written.
    pub fn run_unit(&self, api: &ApiConfig) -> Result<UnitReport, ExecutionError> {
        let root = api.source_root(&self.config.source_directory);
        let files = discover::find_model_files(&root, &api.package, &api.suffixes)?;

        let mut set = ClassSet::new();
        for path in &files {
            let source = fs::read_to_string(path)?;
            let unit = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            set.add(parse_model(&source, &unit)?)?;
        }

        let map = TypeMap::with_overrides(api.types.clone());
        let registry = Registry::with_toggles(&api.verifications);

        let document = modelflow_codegen::generate(&set, &map, &registry)?;
        let document = modelflow_codegen::postprocess::standard_header(&document, &self.version);

        let output = self.config.target_directory.join(&api.output);
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)?;
        }
        write_document(&output, &document)?;

        tracing::info!(
            "wrote {} types to {}",
            set.len(),
            output.display()
        );

        Ok(UnitReport {
            types_written: set.len(),
            output,
        })
    }
}

/// Writes the document through a scoped handle, flushed on every path.
fn write_document(path: &std::path::Path, document: &str) -> Result<(), ExecutionError> {
    let mut file = File::create(path)?;
    file.write_all(document.as_bytes())?;
    file.flush()?;
    Ok(())
}

/// Loads a configuration file and runs every unit in it.
///
/// # Errors
/// Returns `ExecutionError` only for configuration-level failures;
/// per-unit failures are carried in the returned outcomes.
pub fn run_from_config_file(path: &std::path::Path) -> Result<Vec<UnitOutcome>, ExecutionError> {
    let config = GeneratorConfig::load(path)?;
    Ok(Execution::new(&config).run_all())
}
