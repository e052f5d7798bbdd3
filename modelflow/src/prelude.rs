//! Prelude module for convenient imports.
//!
//! ```ignore
//! use modelflow::prelude::*;
//! ```

pub use crate::config::{ApiConfig, GeneratorConfig};
pub use crate::discover::find_model_files;
pub use crate::error::ExecutionError;
pub use crate::execution::{Execution, UnitOutcome, UnitReport, run_from_config_file};

pub use modelflow_codegen::{CodegenError, FlowConverter, FlowWriter, generate};
pub use modelflow_model::{
    ClassModel, ClassSet, Field, ModelError, ParseError, Registry, TypeMap, Verification,
    flatten, parse_model, sort_types,
};
