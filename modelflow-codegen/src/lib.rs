//! # Modelflow Codegen
//!
//! Flow type generation from Java class models.
//!
//! This crate provides:
//! - Recursive descriptor-to-Flow type conversion
//! - Flow document rendering in emission order
//! - Textual post-processing (header and pragma lines)
//! - A pipeline entry point running flatten, sort, verify, and write

pub mod converter;
pub mod error;
pub mod postprocess;
pub mod writer;

pub use converter::FlowConverter;
pub use error::CodegenError;
pub use writer::FlowWriter;

use modelflow_model::{ClassSet, Registry, TypeMap};

/// Generates a Flow document from a parsed class set.
///
/// Runs inheritance flattening, emission ordering, the verification
/// gate, and document rendering. Verification runs before any output is
/// produced; every violation is collected and carried in the error.
///
/// # Errors
/// Returns `CodegenError` on an inheritance cycle or when any enabled
/// verification rule reports a violation.
pub fn generate(
    set: &ClassSet,
    map: &TypeMap,
    registry: &Registry,
) -> Result<String, CodegenError> {
    let flattened = modelflow_model::flatten(set)?;
    let sorted = modelflow_model::sort_types(&flattened);

    let violations = registry.run(&sorted, map);
    if !violations.is_empty() {
        return Err(CodegenError::Verification { violations });
    }

    let writer = FlowWriter::new(FlowConverter::new(map));
    Ok(writer.write(&sorted))
}

/// Parses `(unit, source)` pairs and generates a Flow document from
/// them in one call.
///
/// # Errors
/// Returns `CodegenError` on a parse failure, a duplicate model, an
/// inheritance cycle, or verification violations.
pub fn generate_from_sources<'s>(
    sources: impl IntoIterator<Item = (&'s str, &'s str)>,
    map: &TypeMap,
    registry: &Registry,
) -> Result<String, CodegenError> {
    let mut set = ClassSet::new();
    for (unit, source) in sources {
        set.add(modelflow_model::parse_model(source, unit)?)?;
    }
    generate(&set, map, registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelflow_model::{ClassModel, Field};

    fn model(name: &str, superclass: Option<&str>, fields: &[(&str, &str)]) -> ClassModel {
        let mut m = ClassModel::new("m", name);
        m.superclass = superclass.map(String::from);
        m.fields = fields.iter().map(|(n, d)| Field::new(*n, *d)).collect();
        m
    }

    #[test]
    fn test_full_pipeline() {
        let set = ClassSet::from_models([
            model("Order", None, &[("customer", "Customer"), ("total", "long")]),
            model("Customer", Some("Person"), &[("email", "String")]),
            model("Person", None, &[("name", "String")]),
        ])
        .unwrap();

        let doc = generate(&set, &TypeMap::new(), &Registry::new()).unwrap();

        // Customer is declared before the Order that references it, and
        // inherits Person's name field.
        let customer = doc.find("export type Customer").unwrap();
        let order = doc.find("export type Order").unwrap();
        assert!(customer < order);
        assert!(doc.contains("export type Customer = {\n  name: string,\n  email: string,\n};"));
    }

    #[test]
    fn test_verification_gate_blocks_output() {
        let set =
            ClassSet::from_models([model("Order", None, &[("placed", "Instant")])]).unwrap();

        let result = generate(&set, &TypeMap::new(), &Registry::new());
        match result {
            Err(CodegenError::Verification { violations }) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].class_name, "Order");
            }
            other => panic!("expected verification failure, got {other:?}"),
        }
    }

    #[test]
    fn test_determinism() {
        let set = ClassSet::from_models([
            model("A", None, &[("b", "B")]),
            model("B", None, &[("a", "A")]),
            model("C", None, &[("n", "int")]),
        ])
        .unwrap();

        let first = generate(&set, &TypeMap::new(), &Registry::new()).unwrap();
        let second = generate(&set, &TypeMap::new(), &Registry::new()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_set_generates_empty_document() {
        let doc = generate(&ClassSet::new(), &TypeMap::new(), &Registry::new()).unwrap();
        assert_eq!(doc, "");
    }

    #[test]
    fn test_generate_from_sources() {
        let sources = [(
            "Customer.java",
            "package m;\npublic class Customer {\n  private String name;\n}\n",
        )];
        let doc =
            generate_from_sources(sources, &TypeMap::new(), &Registry::new()).unwrap();
        assert_eq!(doc, "export type Customer = {\n  name: string,\n};\n");
    }

    #[test]
    fn test_generate_from_sources_parse_failure() {
        let sources = [("Broken.java", "package m;\n")];
        let result = generate_from_sources(sources, &TypeMap::new(), &Registry::new());
        assert!(matches!(result, Err(CodegenError::Parse(_))));
    }
}
