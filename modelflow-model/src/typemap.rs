//! Descriptor-to-Flow type mapping.
//!
//! Two layers: built-in defaults for Java primitives, boxes, and
//! collection heads, overridden by explicit per-API entries. Lookup is
//! descriptor-exact for plain types; generic descriptors are matched by
//! head, with arguments resolved recursively by the converter. An
//! override keyed on a generic head is a template: `{0}`, `{1}`, ...
//! stand for the converted arguments, and a template without
//! placeholders gets them appended in angle brackets.

use std::collections::HashMap;

/// The built-in collection shapes recognized by head matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// Ordered collection (`List<T>`-shaped), emitted as `Array<T>`.
    Sequence,
    /// Keyed collection (`Map<K,V>`-shaped), emitted as an indexed type.
    Keyed,
}

/// Mapping from raw Java type descriptors to Flow type text.
#[derive(Debug, Clone, Default)]
pub struct TypeMap {
    overrides: HashMap<String, String>,
}

impl TypeMap {
    /// Creates a type map with no explicit overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a type map with per-API overrides merged over the
    /// built-in defaults.
    #[must_use]
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Resolves a descriptor to Flow text, overrides first, then the
    /// built-in primitive table. Container heads are not resolved here;
    /// the converter recurses into their arguments.
    #[must_use]
    pub fn lookup(&self, descriptor: &str) -> Option<&str> {
        if let Some(mapped) = self.overrides.get(descriptor) {
            return Some(mapped);
        }
        Self::builtin(descriptor)
    }

    /// Returns true if an explicit override exists for the descriptor.
    #[must_use]
    pub fn has_override(&self, descriptor: &str) -> bool {
        self.overrides.contains_key(descriptor)
    }

    /// Returns the override template keyed on a generic head, if any.
    /// Matched before the built-in collection heads.
    #[must_use]
    pub fn head_override(&self, head: &str) -> Option<&str> {
        self.overrides.get(head).map(String::as_str)
    }

    /// Expands a head-override template against already-converted
    /// generic arguments. `{0}`, `{1}`, ... substitute positionally; a
    /// template with no placeholders keeps the arguments as a trailing
    /// `<...>` list, so a plain head rename stays generic.
    #[must_use]
    pub fn expand(template: &str, args: &[String]) -> String {
        let mut out = String::new();
        let mut rest = template;
        let mut substituted = false;
        while let Some(open) = rest.find('{') {
            let close = rest[open..].find('}').map(|c| open + c);
            let index = close.and_then(|c| rest[open + 1..c].parse::<usize>().ok());
            match (close, index) {
                (Some(close), Some(index)) => {
                    out.push_str(&rest[..open]);
                    if let Some(arg) = args.get(index) {
                        out.push_str(arg);
                    }
                    substituted = true;
                    rest = &rest[close + 1..];
                }
                _ => {
                    // A '{' that is not a placeholder stays verbatim.
                    out.push_str(&rest[..=open]);
                    rest = &rest[open + 1..];
                }
            }
        }
        out.push_str(rest);
        if !substituted && !args.is_empty() {
            out.push('<');
            out.push_str(&args.join(", "));
            out.push('>');
        }
        out
    }

    /// Built-in primitive and box mappings.
    #[must_use]
    pub fn builtin(descriptor: &str) -> Option<&'static str> {
        match descriptor {
            "byte" | "Byte" | "short" | "Short" | "int" | "Integer" | "long" | "Long"
            | "float" | "Float" | "double" | "Double" | "BigDecimal" | "BigInteger" => {
                Some("number")
            }
            "boolean" | "Boolean" => Some("boolean"),
            "char" | "Character" | "String" => Some("string"),
            _ => None,
        }
    }

    /// Recognizes a collection head for head-matched generic lookup.
    #[must_use]
    pub fn container(head: &str) -> Option<ContainerKind> {
        match head {
            "List" | "Set" | "Collection" | "Iterable" | "ArrayList" | "LinkedList"
            | "HashSet" | "TreeSet" => Some(ContainerKind::Sequence),
            "Map" | "HashMap" | "TreeMap" | "LinkedHashMap" => Some(ContainerKind::Keyed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_numeric() {
        let map = TypeMap::new();
        assert_eq!(map.lookup("int"), Some("number"));
        assert_eq!(map.lookup("Long"), Some("number"));
        assert_eq!(map.lookup("double"), Some("number"));
    }

    #[test]
    fn test_builtin_text_and_boolean() {
        let map = TypeMap::new();
        assert_eq!(map.lookup("String"), Some("string"));
        assert_eq!(map.lookup("char"), Some("string"));
        assert_eq!(map.lookup("boolean"), Some("boolean"));
        assert_eq!(map.lookup("Boolean"), Some("boolean"));
    }

    #[test]
    fn test_unknown_descriptor() {
        let map = TypeMap::new();
        assert_eq!(map.lookup("UUID"), None);
    }

    #[test]
    fn test_override_precedes_builtin() {
        let mut overrides = HashMap::new();
        overrides.insert("String".to_string(), "?string".to_string());
        overrides.insert("Instant".to_string(), "number".to_string());
        let map = TypeMap::with_overrides(overrides);

        assert_eq!(map.lookup("String"), Some("?string"));
        assert_eq!(map.lookup("Instant"), Some("number"));
        // Untouched defaults still resolve.
        assert_eq!(map.lookup("int"), Some("number"));
    }

    #[test]
    fn test_head_override_lookup() {
        let mut overrides = HashMap::new();
        overrides.insert("Optional".to_string(), "?{0}".to_string());
        let map = TypeMap::with_overrides(overrides);

        assert_eq!(map.head_override("Optional"), Some("?{0}"));
        assert_eq!(map.head_override("List"), None);
    }

    #[test]
    fn test_expand_substitutes_placeholders() {
        assert_eq!(
            TypeMap::expand("?{0}", &["string".to_string()]),
            "?string"
        );
        assert_eq!(
            TypeMap::expand("{ [id: {0}]: {1} }", &["string".to_string(), "number".to_string()]),
            "{ [id: string]: number }"
        );
    }

    #[test]
    fn test_expand_appends_args_without_placeholders() {
        assert_eq!(
            TypeMap::expand("$ReadOnlyArray", &["string".to_string()]),
            "$ReadOnlyArray<string>"
        );
    }

    #[test]
    fn test_container_heads() {
        assert_eq!(TypeMap::container("List"), Some(ContainerKind::Sequence));
        assert_eq!(TypeMap::container("Set"), Some(ContainerKind::Sequence));
        assert_eq!(TypeMap::container("Map"), Some(ContainerKind::Keyed));
        assert_eq!(TypeMap::container("Optional"), None);
    }
}
