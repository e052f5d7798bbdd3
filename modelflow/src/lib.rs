//! # Modelflow
//!
//! Flow type generation for Java model classes.
//!
//! Modelflow keeps a JS-ecosystem type layer synchronized with
//! server-side Java models: it parses model classes, flattens their
//! inheritance chains, orders declarations so that no type is referenced
//! before it is declared, verifies that every field type resolves, and
//! renders one Flow document per configured API unit.
//!
//! ## Quick Start
//!
//! ```ignore
//! use modelflow::prelude::*;
//!
//! let config = GeneratorConfig::load("modelflow.toml".as_ref())?;
//! for outcome in Execution::new(&config).run_all() {
//!     outcome.result?;
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`model`] - Java parsing, class models, flattening, ordering,
//!   verification
//! - [`codegen`] - Flow conversion, document rendering, post-processing
//! - [`config`] / [`execution`] - per-API configuration and pipeline runs

pub mod config;
pub mod discover;
pub mod error;
pub mod execution;
pub mod prelude;

/// Java model parsing and class-graph representation.
pub mod model {
    pub use modelflow_model::*;
}

/// Flow type generation from class models.
pub mod codegen {
    pub use modelflow_codegen::*;
}

pub use config::{ApiConfig, GeneratorConfig};
pub use error::ExecutionError;
pub use execution::{Execution, UnitOutcome, UnitReport, run_from_config_file};
