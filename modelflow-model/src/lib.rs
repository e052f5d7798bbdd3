//! # Modelflow Model
//!
//! Java model parsing and class-graph representation.
//!
//! This crate provides:
//! - Java source parsing into class models
//! - Inheritance flattening with cycle detection
//! - Dependency-safe emission ordering
//! - Descriptor-to-Flow type mapping
//! - Pluggable semantic verification rules

pub mod descriptor;
pub mod error;
pub mod inheritance;
pub mod ordering;
pub mod parser;
pub mod typemap;
pub mod types;
pub mod verify;

pub use error::{ModelError, ParseError};
pub use inheritance::flatten;
pub use ordering::sort_types;
pub use parser::parse_model;
pub use typemap::{ContainerKind, TypeMap};
pub use types::{ClassModel, ClassSet, Field};
pub use verify::{Registry, Verification};
