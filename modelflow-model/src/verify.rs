//! Semantic verification rules.
//!
//! Each rule is a pure function over the flattened class set, returning
//! zero or more violations. The registry is an ordered list of named
//! rules selected at configuration time; it aggregates every violation
//! so one run surfaces all problems, never just the first.

use crate::descriptor;
use crate::typemap::TypeMap;
use crate::types::{ClassModel, ClassSet};
use std::collections::HashMap;
use std::fmt;

/// One semantic rule violation. Collected, never thrown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// Name of the violated rule.
    pub rule: &'static str,
    /// Offending class (simple name).
    pub class_name: String,
    /// Offending field, when the rule applies to one.
    pub field: Option<String>,
    /// Human-readable message.
    pub message: String,
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(
                f,
                "[{}] {}.{}: {}",
                self.rule, self.class_name, field, self.message
            ),
            None => write!(f, "[{}] {}: {}", self.rule, self.class_name, self.message),
        }
    }
}

/// A verification rule: a named pure function over the class set.
pub type RuleFn = fn(&ClassSet, &TypeMap) -> Vec<Verification>;

/// Rule name for the mandatory member-type resolution check.
pub const MEMBER_TYPES_RESOLVE: &str = "member-types-resolve";
/// Rule name for the optional accessor naming check.
pub const GETTER_NAMING: &str = "getter-naming";

/// Config toggle enabling the accessor naming rule.
pub const VERIFY_GETTERS: &str = "verify_getters";

/// Ordered set of enabled verification rules.
#[derive(Debug, Clone)]
pub struct Registry {
    rules: Vec<(&'static str, RuleFn)>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates a registry with the mandatory rules only.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: vec![(MEMBER_TYPES_RESOLVE, member_types_resolve as RuleFn)],
        }
    }

    /// Creates a registry with optional rules enabled per named toggles.
    #[must_use]
    pub fn with_toggles(toggles: &HashMap<String, bool>) -> Self {
        let mut registry = Self::new();
        if toggles.get(VERIFY_GETTERS).copied().unwrap_or(false) {
            registry.rules.push((GETTER_NAMING, getter_naming as RuleFn));
        }
        registry
    }

    /// Names of the enabled rules, in run order.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|(name, _)| *name).collect()
    }

    /// Runs every enabled rule and aggregates all violations.
    #[must_use]
    pub fn run(&self, set: &ClassSet, map: &TypeMap) -> Vec<Verification> {
        self.rules
            .iter()
            .flat_map(|(_, rule)| rule(set, map))
            .collect()
    }
}

/// Mandatory rule: every field descriptor must resolve, recursively
/// through generic arguments, to a built-in mapping, an override, or a
/// model in the set.
pub fn member_types_resolve(set: &ClassSet, map: &TypeMap) -> Vec<Verification> {
    let mut violations = Vec::new();
    for model in set.iter() {
        for field in &model.fields {
            if !resolves(&field.descriptor, set, map) {
                violations.push(Verification {
                    rule: MEMBER_TYPES_RESOLVE,
                    class_name: model.name.clone(),
                    field: Some(field.name.clone()),
                    message: format!("type '{}' has no known mapping", field.descriptor),
                });
            }
        }
    }
    violations
}

/// Recursive descriptor resolution check, mirroring the converter's
/// resolution order.
fn resolves(desc: &str, set: &ClassSet, map: &TypeMap) -> bool {
    if map.has_override(desc) || set.contains(desc) || TypeMap::builtin(desc).is_some() {
        return true;
    }
    let (head, args) = descriptor::split(desc);
    if !args.is_empty() && (map.has_override(head) || TypeMap::container(head).is_some()) {
        return args.iter().all(|arg| resolves(arg, set, map));
    }
    false
}

/// Optional rule: every field must have a JavaBean accessor (`getX`, or
/// `isX` for booleans) declared in the source class.
pub fn getter_naming(set: &ClassSet, _map: &TypeMap) -> Vec<Verification> {
    let mut violations = Vec::new();
    for model in set.iter() {
        for field in &model.fields {
            if !has_accessor(model, &field.name, &field.descriptor) {
                violations.push(Verification {
                    rule: GETTER_NAMING,
                    class_name: model.name.clone(),
                    field: Some(field.name.clone()),
                    message: format!("missing accessor '{}'", getter_name(&field.name)),
                });
            }
        }
    }
    violations
}

fn has_accessor(model: &ClassModel, field: &str, descriptor: &str) -> bool {
    let getter = getter_name(field);
    if model.methods.iter().any(|m| *m == getter) {
        return true;
    }
    if matches!(descriptor, "boolean" | "Boolean") {
        let is_getter = format!("is{}", capitalize(field));
        return model.methods.iter().any(|m| *m == is_getter);
    }
    false
}

fn getter_name(field: &str) -> String {
    format!("get{}", capitalize(field))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
