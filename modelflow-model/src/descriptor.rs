//! Raw type descriptor parsing.
//!
//! Descriptors follow the shape `Head` or `Head<Arg, Arg, ...>` with
//! arbitrary nesting. Splitting happens on top-level commas only, so
//! `Map<String, List<Integer>>` yields two arguments.

/// Splits a descriptor into its head and top-level generic arguments.
///
/// `List<Map<String,Integer>>` yields `("List", ["Map<String,Integer>"])`.
/// A non-generic descriptor yields itself with no arguments.
#[must_use]
pub fn split(descriptor: &str) -> (&str, Vec<&str>) {
    let descriptor = descriptor.trim();
    let Some(open) = descriptor.find('<') else {
        return (descriptor, Vec::new());
    };
    let Some(close) = descriptor.rfind('>') else {
        return (descriptor, Vec::new());
    };
    if close <= open {
        return (descriptor, Vec::new());
    }

    let head = descriptor[..open].trim();
    let args = top_level_args(&descriptor[open + 1..close]);
    (head, args)
}

/// Splits a generic argument list on top-level commas.
#[must_use]
pub fn top_level_args(args: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (i, c) in args.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                let arg = args[start..i].trim();
                if !arg.is_empty() {
                    out.push(arg);
                }
                start = i + 1;
            }
            _ => {}
        }
    }

    let last = args[start..].trim();
    if !last.is_empty() {
        out.push(last);
    }
    out
}

/// Iterates every identifier mentioned anywhere in a descriptor,
/// including inside generic arguments.
#[must_use]
pub fn identifiers(descriptor: &str) -> Vec<&str> {
    descriptor
        .split(|c: char| !c.is_alphanumeric() && c != '_' && c != '$')
        .filter(|s| !s.is_empty())
        .collect()
}

/// Returns true if the descriptor mentions `name` as a standalone
/// identifier, at any nesting depth.
#[must_use]
pub fn references(descriptor: &str, name: &str) -> bool {
    identifiers(descriptor).iter().any(|&id| id == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain() {
        let (head, args) = split("String");
        assert_eq!(head, "String");
        assert!(args.is_empty());
    }

    #[test]
    fn test_split_generic() {
        let (head, args) = split("Map<String, Integer>");
        assert_eq!(head, "Map");
        assert_eq!(args, ["String", "Integer"]);
    }

    #[test]
    fn test_split_nested() {
        let (head, args) = split("List<Map<String,Integer>>");
        assert_eq!(head, "List");
        assert_eq!(args, ["Map<String,Integer>"]);
    }

    #[test]
    fn test_top_level_commas_only() {
        let args = top_level_args("Map<String,Long>, List<Integer>");
        assert_eq!(args, ["Map<String,Long>", "List<Integer>"]);
    }

    #[test]
    fn test_references_through_generics() {
        assert!(references("List<Map<String,Address>>", "Address"));
        assert!(!references("List<Map<String,Address>>", "Addr"));
        assert!(!references("AddressBook", "Address"));
    }
}
