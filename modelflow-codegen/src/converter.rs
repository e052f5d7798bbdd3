//! Flow type conversion.
//!
//! Converts one raw Java type descriptor into Flow syntax, recursing
//! through generic parameters to arbitrary depth.

use modelflow_model::descriptor;
use modelflow_model::typemap::ContainerKind;
use modelflow_model::{ClassSet, TypeMap};

/// Converter from raw type descriptors to Flow type text.
pub struct FlowConverter<'a> {
    map: &'a TypeMap,
}

impl<'a> FlowConverter<'a> {
    /// Creates a converter over the given type map.
    #[must_use]
    pub fn new(map: &'a TypeMap) -> Self {
        Self { map }
    }

    /// Converts a descriptor to Flow syntax.
    ///
    /// Resolution order: explicit override (exact, then by generic
    /// head), model in the set (an intra-document reference by declared
    /// type name), built-in primitive, then collection heads with
    /// recursive argument conversion. An unresolvable descriptor passes
    /// through unchanged; the verifier rejects such descriptors before
    /// conversion runs.
    #[must_use]
    pub fn convert(&self, raw: &str, set: &ClassSet) -> String {
        let raw = raw.trim();

        if let Some(mapped) = self.map.lookup(raw) {
            if self.map.has_override(raw) {
                return mapped.to_string();
            }
            if set.contains(raw) {
                return raw.to_string();
            }
            return mapped.to_string();
        }
        if set.contains(raw) {
            return raw.to_string();
        }

        let (head, args) = descriptor::split(raw);
        if !args.is_empty() {
            let converted: Vec<String> =
                args.iter().map(|arg| self.convert(arg, set)).collect();
            if let Some(template) = self.map.head_override(head) {
                return TypeMap::expand(template, &converted);
            }
            match TypeMap::container(head) {
                Some(ContainerKind::Sequence) => {
                    return format!("Array<{}>", converted[0]);
                }
                Some(ContainerKind::Keyed) if converted.len() >= 2 => {
                    return format!("{{ [key: {}]: {} }}", converted[0], converted[1]);
                }
                _ => {}
            }
        }
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelflow_model::{ClassModel, ClassSet, Field};
    use std::collections::HashMap;

    fn empty_set() -> ClassSet {
        ClassSet::new()
    }

    #[test]
    fn test_primitive_conversion() {
        let map = TypeMap::new();
        let converter = FlowConverter::new(&map);
        let set = empty_set();

        assert_eq!(converter.convert("int", &set), "number");
        assert_eq!(converter.convert("String", &set), "string");
        assert_eq!(converter.convert("Boolean", &set), "boolean");
    }

    #[test]
    fn test_list_conversion() {
        let map = TypeMap::new();
        let converter = FlowConverter::new(&map);
        let set = empty_set();

        assert_eq!(converter.convert("List<String>", &set), "Array<string>");
    }

    #[test]
    fn test_map_conversion() {
        let map = TypeMap::new();
        let converter = FlowConverter::new(&map);
        let set = empty_set();

        assert_eq!(
            converter.convert("Map<String, Integer>", &set),
            "{ [key: string]: number }"
        );
    }

    #[test]
    fn test_nested_generic_conversion() {
        let map = TypeMap::new();
        let converter = FlowConverter::new(&map);
        let set = empty_set();

        assert_eq!(
            converter.convert("List<Map<String,Integer>>", &set),
            "Array<{ [key: string]: number }>"
        );
    }

    #[test]
    fn test_depth_three_nesting() {
        let map = TypeMap::new();
        let converter = FlowConverter::new(&map);
        let set = empty_set();

        assert_eq!(
            converter.convert("Map<String, List<Map<String, Long>>>", &set),
            "{ [key: string]: Array<{ [key: string]: number }> }"
        );
    }

    #[test]
    fn test_model_reference_by_name() {
        let map = TypeMap::new();
        let converter = FlowConverter::new(&map);
        let mut set = ClassSet::new();
        let mut customer = ClassModel::new("m", "Customer");
        customer.fields.push(Field::new("name", "String"));
        set.add(customer).unwrap();

        assert_eq!(converter.convert("Customer", &set), "Customer");
        assert_eq!(
            converter.convert("List<Customer>", &set),
            "Array<Customer>"
        );
    }

    #[test]
    fn test_override_wins_over_model_and_builtin() {
        let mut overrides = HashMap::new();
        overrides.insert("String".to_string(), "?string".to_string());
        overrides.insert("Customer".to_string(), "ExternalCustomer".to_string());
        let map = TypeMap::with_overrides(overrides);
        let converter = FlowConverter::new(&map);

        let mut set = ClassSet::new();
        set.add(ClassModel::new("m", "Customer")).unwrap();

        assert_eq!(converter.convert("String", &set), "?string");
        assert_eq!(converter.convert("Customer", &set), "ExternalCustomer");
    }

    #[test]
    fn test_generic_head_override_template() {
        let mut overrides = HashMap::new();
        overrides.insert("Optional".to_string(), "?{0}".to_string());
        let map = TypeMap::with_overrides(overrides);
        let converter = FlowConverter::new(&map);
        let set = empty_set();

        assert_eq!(converter.convert("Optional<String>", &set), "?string");
        assert_eq!(
            converter.convert("List<Optional<Integer>>", &set),
            "Array<?number>"
        );
    }

    #[test]
    fn test_generic_head_override_beats_builtin_container() {
        let mut overrides = HashMap::new();
        overrides.insert("List".to_string(), "$ReadOnlyArray".to_string());
        let map = TypeMap::with_overrides(overrides);
        let converter = FlowConverter::new(&map);
        let set = empty_set();

        assert_eq!(
            converter.convert("List<String>", &set),
            "$ReadOnlyArray<string>"
        );
    }

    #[test]
    fn test_unresolved_passes_through() {
        let map = TypeMap::new();
        let converter = FlowConverter::new(&map);
        let set = empty_set();

        // The verifier gate rejects these before a writer ever runs.
        assert_eq!(converter.convert("Instant", &set), "Instant");
    }
}
