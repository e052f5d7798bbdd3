//! Error types for Flow generation.

use modelflow_model::Verification;
use thiserror::Error;

/// Error type for document generation.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Model parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] modelflow_model::ParseError),

    /// Model resolution error (duplicate model, inheritance cycle).
    #[error("model error: {0}")]
    Model(#[from] modelflow_model::ModelError),

    /// One or more semantic rule violations; the full list is carried.
    #[error("verification failed with {} violation(s)", .violations.len())]
    Verification {
        /// Every collected violation, in rule order.
        violations: Vec<Verification>,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
