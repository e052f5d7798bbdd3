//! Source file discovery.
//!
//! Recursive directory scan filtered by suffix, with a deterministic
//! (sorted) result order. A missing root is a configuration error
//! surfaced before any pipeline stage runs.

use crate::error::ExecutionError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Finds model source files under `root` whose names end with one of
/// the given suffixes.
///
/// # Errors
/// Returns `ExecutionError::SourceDirectoryNotFound` if `root` is not a
/// directory, or `ExecutionError::Walk` on traversal failure.
pub fn find_model_files(
    root: &Path,
    package: &str,
    suffixes: &[String],
) -> Result<Vec<PathBuf>, ExecutionError> {
    if !root.is_dir() {
        return Err(ExecutionError::SourceDirectoryNotFound {
            package: package.to_string(),
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if suffixes.iter().any(|suffix| name.ends_with(suffix.as_str())) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
