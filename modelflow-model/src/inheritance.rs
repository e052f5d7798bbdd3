//! Inheritance flattening.
//!
//! Merges ancestor fields into each model's field list. The superclass
//! chain is walked only while the superclass resolves within the set; the
//! first unknown ancestor (an external or library class) ends the walk
//! silently, contributing no fields. This stop-at-unknown behavior is a
//! documented policy, not a lookup accident.

use crate::error::ModelError;
use crate::types::{ClassModel, ClassSet, Field};
use std::collections::HashSet;

/// Produces a new set in which every model's field list includes its
/// ancestors' fields, root-most ancestor first.
///
/// A descendant field sharing a name with an ancestor field overrides it;
/// the ancestor's duplicate is dropped.
///
/// # Errors
/// Returns `ModelError::InheritanceCycle` if a superclass chain cycles
/// back onto itself.
pub fn flatten(set: &ClassSet) -> Result<ClassSet, ModelError> {
    let mut flattened = Vec::with_capacity(set.len());
    for model in set.iter() {
        flattened.push(flatten_model(model, set)?);
    }
    ClassSet::from_models(flattened)
}

fn flatten_model(model: &ClassModel, set: &ClassSet) -> Result<ClassModel, ModelError> {
    let ancestors = ancestor_chain(model, set)?;
    if ancestors.is_empty() {
        return Ok(model.clone());
    }

    // Names declared by the model or a nearer ancestor win over
    // farther ones.
    let mut claimed: HashSet<&str> = model.fields.iter().map(|f| f.name.as_str()).collect();
    // Per ancestor, nearest first, the fields it still contributes.
    let mut contributions: Vec<Vec<&Field>> = Vec::with_capacity(ancestors.len());
    for ancestor in &ancestors {
        let mut fields = Vec::new();
        for field in &ancestor.fields {
            if claimed.insert(field.name.as_str()) {
                fields.push(field);
            }
        }
        contributions.push(fields);
    }

    // Assemble root-most first, then the model's own fields.
    let mut fields = Vec::new();
    for contribution in contributions.iter().rev() {
        fields.extend(contribution.iter().map(|&f| f.clone()));
    }
    fields.extend(model.fields.iter().cloned());

    Ok(model.with_fields(fields))
}

/// Walks the superclass chain, nearest ancestor first, stopping at the
/// first superclass not present in the set.
fn ancestor_chain<'a>(
    model: &ClassModel,
    set: &'a ClassSet,
) -> Result<Vec<&'a ClassModel>, ModelError> {
    let mut chain = Vec::new();
    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(model.qualified_name());

    let mut current = model.superclass.clone();
    while let Some(name) = current {
        let Some(ancestor) = set.get(&name) else {
            break;
        };
        if !visited.insert(ancestor.qualified_name()) {
            let mut path: Vec<&str> = std::iter::once(model.name.as_str())
                .chain(chain.iter().map(|m: &&ClassModel| m.name.as_str()))
                .collect();
            path.push(&name);
            return Err(ModelError::InheritanceCycle {
                path: path.join(" -> "),
            });
        }
        chain.push(ancestor);
        current = ancestor.superclass.clone();
    }

    Ok(chain)
}
