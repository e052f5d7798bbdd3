//! Flow document rendering.
//!
//! Renders one `export type` declaration per model, fields in
//! within-class declaration order, models in the order the set carries
//! (the emission orderer's sequence). The writer makes no semantic
//! decisions: types come from the converter, ordering from the sorter.

use crate::converter::FlowConverter;
use modelflow_model::ClassSet;

/// Writer producing one Flow document per class set.
pub struct FlowWriter<'a> {
    converter: FlowConverter<'a>,
}

impl<'a> FlowWriter<'a> {
    /// Creates a writer around a converter.
    #[must_use]
    pub fn new(converter: FlowConverter<'a>) -> Self {
        Self { converter }
    }

    /// Renders the set into a single document. An empty set yields an
    /// empty document.
    #[must_use]
    pub fn write(&self, set: &ClassSet) -> String {
        let declarations: Vec<String> = set
            .iter()
            .map(|model| {
                let mut out = format!("export type {} = {{\n", model.name);
                for field in &model.fields {
                    out.push_str(&format!(
                        "  {}: {},\n",
                        field.name,
                        self.converter.convert(&field.descriptor, set)
                    ));
                }
                out.push_str("};");
                out
            })
            .collect();

        if declarations.is_empty() {
            String::new()
        } else {
            declarations.join("\n\n") + "\n"
        }
    }
}
