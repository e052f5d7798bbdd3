//! Error types for model parsing and resolution.

use thiserror::Error;

/// Error type for Java model parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// No class declaration found in the source unit.
    #[error("no class declaration found in '{unit}'")]
    MissingClassDeclaration {
        /// Source unit (file name or identifier).
        unit: String,
    },

    /// Malformed declaration inside an otherwise recognizable class.
    #[error("malformed declaration in '{unit}': {message}")]
    MalformedDeclaration {
        /// Source unit (file name or identifier).
        unit: String,
        /// Description of the problem.
        message: String,
    },

    /// IO error while reading a source unit.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for class-set resolution.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Two models share a fully qualified name within one set.
    #[error("duplicate model definition: '{name}'")]
    DuplicateModel {
        /// Fully qualified name of the duplicate.
        name: String,
    },

    /// A superclass chain cycles back onto itself.
    #[error("inheritance cycle detected: {path}")]
    InheritanceCycle {
        /// Names along the cycle, joined with ` -> `.
        path: String,
    },
}

impl ParseError {
    /// Creates a missing class declaration error.
    pub fn missing_class(unit: impl Into<String>) -> Self {
        Self::MissingClassDeclaration { unit: unit.into() }
    }

    /// Creates a malformed declaration error.
    pub fn malformed(unit: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedDeclaration {
            unit: unit.into(),
            message: message.into(),
        }
    }
}
