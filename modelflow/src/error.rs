//! Error types for unit execution.

use modelflow_model::Verification;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for one API unit's execution.
///
/// Every variant is fatal to its own unit only; sibling units keep
/// running.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// Malformed generator configuration.
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// The configured source package directory does not exist.
    #[error("source directory for package '{package}' not found: {path}")]
    SourceDirectoryNotFound {
        /// Dotted package name from the configuration.
        package: String,
        /// Resolved directory path.
        path: PathBuf,
    },

    /// Model parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] modelflow_model::ParseError),

    /// Model resolution error.
    #[error("model error: {0}")]
    Model(#[from] modelflow_model::ModelError),

    /// Aggregated verification failure; carries the whole list.
    #[error("verification failed with {} violation(s)", .violations.len())]
    Verification {
        /// All collected violations.
        violations: Vec<Verification>,
    },

    /// Directory traversal error during source discovery.
    #[error("source discovery error: {0}")]
    Walk(#[from] walkdir::Error),

    /// IO error reading a source or writing the output document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<modelflow_codegen::CodegenError> for ExecutionError {
    fn from(err: modelflow_codegen::CodegenError) -> Self {
        match err {
            modelflow_codegen::CodegenError::Parse(e) => Self::Parse(e),
            modelflow_codegen::CodegenError::Model(e) => Self::Model(e),
            modelflow_codegen::CodegenError::Verification { violations } => {
                Self::Verification { violations }
            }
            modelflow_codegen::CodegenError::Io(e) => Self::Io(e),
        }
    }
}
