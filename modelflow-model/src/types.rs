//! Class model definitions.
//!
//! This module contains the data structures representing parsed Java model
//! classes: fields, class models, and the per-unit class set.

use crate::error::ModelError;
use std::collections::HashMap;

/// A single instance field of a model class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Raw type descriptor, generic parameters preserved verbatim
    /// (e.g. `List<Map<String,Integer>>`).
    pub descriptor: String,
}

impl Field {
    /// Creates a new field.
    #[must_use]
    pub fn new(name: impl Into<String>, descriptor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descriptor: descriptor.into(),
        }
    }
}

/// A parsed model class.
///
/// Never mutated after parsing; downstream stages derive new models
/// instead of editing in place.
#[derive(Debug, Clone)]
pub struct ClassModel {
    /// Package name (dotted).
    pub package: String,
    /// Simple class name.
    pub name: String,
    /// Superclass simple name, if the class declares `extends`.
    pub superclass: Option<String>,
    /// Instance fields in source declaration order.
    pub fields: Vec<Field>,
    /// Declared method names, kept for accessor verification.
    pub methods: Vec<String>,
}

impl ClassModel {
    /// Creates a new class model with no fields.
    #[must_use]
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            superclass: None,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Returns the fully qualified name (`package.Name`).
    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    /// Derives a copy of this model with a replacement field list.
    #[must_use]
    pub fn with_fields(&self, fields: Vec<Field>) -> Self {
        Self {
            package: self.package.clone(),
            name: self.name.clone(),
            superclass: self.superclass.clone(),
            fields,
            methods: self.methods.clone(),
        }
    }
}

/// The full collection of models produced for one API unit.
///
/// Preserves insertion (declaration) order and enforces uniqueness of
/// fully qualified names.
#[derive(Debug, Clone, Default)]
pub struct ClassSet {
    models: Vec<ClassModel>,
    /// Simple name -> index of the first model with that name.
    index: HashMap<String, usize>,
}

impl ClassSet {
    /// Creates an empty class set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a model to the set.
    ///
    /// # Errors
    /// Returns `ModelError::DuplicateModel` if a model with the same fully
    /// qualified name is already present.
    pub fn add(&mut self, model: ClassModel) -> Result<(), ModelError> {
        let qualified = model.qualified_name();
        if self.models.iter().any(|m| m.qualified_name() == qualified) {
            return Err(ModelError::DuplicateModel { name: qualified });
        }
        let idx = self.models.len();
        self.index.entry(model.name.clone()).or_insert(idx);
        self.models.push(model);
        Ok(())
    }

    /// Looks up a model by simple name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ClassModel> {
        self.index.get(name).map(|&idx| &self.models[idx])
    }

    /// Returns true if a model with the given simple name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates models in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassModel> {
        self.models.iter()
    }

    /// Number of models in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns true if the set holds no models.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Builds a set from models in order.
    ///
    /// # Errors
    /// Returns `ModelError::DuplicateModel` on a qualified-name collision.
    pub fn from_models(
        models: impl IntoIterator<Item = ClassModel>,
    ) -> Result<Self, ModelError> {
        let mut set = Self::new();
        for model in models {
            set.add(model)?;
        }
        Ok(set)
    }
}
