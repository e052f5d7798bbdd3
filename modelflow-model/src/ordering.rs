//! Emission ordering.
//!
//! Computes the sequence in which type declarations are written so that
//! no declaration references an as-yet-undeclared type. The dependency
//! graph is built fresh from field descriptors and discarded after use.

use crate::descriptor;
use crate::types::ClassSet;

/// Sorts the set so that every model a field references precedes the
/// referencing model.
///
/// Stable topological sort: among the models whose dependencies are all
/// emitted, the one earliest in declaration order goes next, keeping the
/// output deterministic across runs. When a genuine cycle blocks
/// progress, the first cycle participant in declaration order is emitted
/// anyway and a single warning names the forced types; forward references
/// inside a cycle are an accepted limitation of the output format.
/// Models outside the cycle keep waiting for their dependencies, so every
/// acyclic edge is respected even when a cycle is present.
#[must_use]
pub fn sort_types(set: &ClassSet) -> ClassSet {
    let models: Vec<_> = set.iter().collect();
    let n = models.len();

    // deps[i] holds indices of models that model i references.
    let mut deps: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (i, model) in models.iter().enumerate() {
        for field in &model.fields {
            for (j, other) in models.iter().enumerate() {
                if i != j
                    && !deps[i].contains(&j)
                    && descriptor::references(&field.descriptor, &other.name)
                {
                    deps[i].push(j);
                }
            }
        }
    }

    let mut emitted = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut forced: Vec<&str> = Vec::new();

    while order.len() < n {
        let ready = (0..n)
            .find(|&i| !emitted[i] && deps[i].iter().all(|&d| emitted[d]));

        let next = match ready {
            Some(i) => i,
            None => {
                // Cycle: fall back to declaration order, but only among
                // the models actually on a cycle. A model merely blocked
                // by an acyclic edge into the cycle stays queued until
                // its dependencies are out.
                let i = (0..n)
                    .find(|&i| !emitted[i] && on_cycle(i, &deps, &emitted))
                    .or_else(|| (0..n).find(|&i| !emitted[i]))
                    .unwrap_or(0);
                forced.push(&models[i].name);
                i
            }
        };
        emitted[next] = true;
        order.push(next);
    }

    if !forced.is_empty() {
        tracing::warn!(
            "cyclic type references, falling back to declaration order for: {}",
            forced.join(", ")
        );
    }

    let sorted = order.into_iter().map(|i| models[i].clone());
    // Re-insertion cannot collide; the models came from a valid set.
    ClassSet::from_models(sorted).unwrap_or_default()
}

/// Whether a dependency path over still-unemitted models leads from
/// `start` back to itself.
fn on_cycle(start: usize, deps: &[Vec<usize>], emitted: &[bool]) -> bool {
    let mut seen = vec![false; deps.len()];
    let mut stack: Vec<usize> = deps[start]
        .iter()
        .copied()
        .filter(|&d| !emitted[d])
        .collect();
    while let Some(i) = stack.pop() {
        if i == start {
            return true;
        }
        if seen[i] {
            continue;
        }
        seen[i] = true;
        stack.extend(deps[i].iter().copied().filter(|&d| !emitted[d]));
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClassModel, Field};

    fn model(name: &str, fields: &[(&str, &str)]) -> ClassModel {
        let mut m = ClassModel::new("m", name);
        m.fields = fields.iter().map(|(n, d)| Field::new(*n, *d)).collect();
        m
    }

    fn order(set: &ClassSet) -> Vec<String> {
        sort_types(set).iter().map(|m| m.name.clone()).collect()
    }

    #[test]
    fn test_dependency_precedes_referencer() {
        let set = ClassSet::from_models([
            model("Order", &[("customer", "Customer")]),
            model("Customer", &[("name", "String")]),
        ])
        .unwrap();

        assert_eq!(order(&set), ["Customer", "Order"]);
    }

    #[test]
    fn test_reference_through_generics() {
        let set = ClassSet::from_models([
            model("Inventory", &[("items", "List<Map<String, Item>>")]),
            model("Item", &[("sku", "String")]),
        ])
        .unwrap();

        assert_eq!(order(&set), ["Item", "Inventory"]);
    }

    #[test]
    fn test_independent_models_keep_declaration_order() {
        let set = ClassSet::from_models([
            model("Zebra", &[("name", "String")]),
            model("Aardvark", &[("name", "String")]),
        ])
        .unwrap();

        assert_eq!(order(&set), ["Zebra", "Aardvark"]);
    }

    #[test]
    fn test_cycle_terminates_deterministically() {
        let set = ClassSet::from_models([
            model("A", &[("b", "B")]),
            model("B", &[("a", "A")]),
        ])
        .unwrap();

        let first = order(&set);
        let second = order(&set);
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
        assert_eq!(first, ["A", "B"]);
    }

    #[test]
    fn test_acyclic_edges_respected_around_cycle() {
        let set = ClassSet::from_models([
            model("A", &[("b", "B"), ("leaf", "Leaf")]),
            model("B", &[("a", "A")]),
            model("Leaf", &[("n", "int")]),
            model("Summary", &[("b", "B")]),
        ])
        .unwrap();

        let sorted = order(&set);
        let pos = |name: &str| sorted.iter().position(|n| n == name).unwrap();
        assert!(pos("Leaf") < pos("A"));
        // `Summary` is not on the cycle; its edge into `B` still holds.
        assert!(pos("B") < pos("Summary"));
    }

    #[test]
    fn test_dependent_on_cycle_waits_for_cycle() {
        // `Consumer` references a cycle member but is not itself cyclic,
        // so only `A` and `B` fall back to declaration order.
        let set = ClassSet::from_models([
            model("Consumer", &[("a", "A")]),
            model("A", &[("b", "B")]),
            model("B", &[("a", "A")]),
        ])
        .unwrap();

        assert_eq!(order(&set), ["A", "B", "Consumer"]);
    }

    #[test]
    fn test_substring_name_is_not_a_reference() {
        let set = ClassSet::from_models([
            model("AddressBook", &[("label", "String")]),
            model("Address", &[("book", "AddressBook")]),
        ])
        .unwrap();

        // `AddressBook` does not depend on `Address`.
        assert_eq!(order(&set), ["AddressBook", "Address"]);
    }

    #[test]
    fn test_empty_set() {
        let set = ClassSet::new();
        assert!(sort_types(&set).is_empty());
    }
}
