//! Metadata exporter
//!
//! Produces the flat per-class metadata projection: every class in
//! declaration order with its parameter list (attributes first, then
//! contained classes) and its outbound multiplicity.

use serde::{Deserialize, Serialize};

use crate::export::{ExportError, ExportResult};
use crate::models::{split_multiplicity, ClassModel};

/// One `{name, type}` entry in a class's parameter list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
}

/// Flat metadata record for a single class
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassMeta {
    /// Class name
    pub class: String,
    pub documentation: String,
    #[serde(rename = "isRoot")]
    pub is_root: bool,
    /// Lower bound of the class's outbound multiplicity (how many instances
    /// may appear under its container), default "1"
    pub min: String,
    /// Upper bound of the class's outbound multiplicity, default "1"
    pub max: String,
    /// Attributes (declared order) followed by contained classes
    /// (edge-declaration order), the latter typed `"class"`
    pub parameters: Vec<Parameter>,
}

/// Metadata exporter
#[derive(Debug, Default)]
pub struct MetaExporter;

impl MetaExporter {
    /// Create a new MetaExporter
    pub fn new() -> Self {
        Self
    }

    /// Project the model into per-class metadata records.
    ///
    /// Records appear in class declaration order. Within each record the
    /// attributes always precede the child references, regardless of input
    /// order. `min`/`max` come from the first aggregation edge naming the
    /// class as source (1..1 when it is never a source); later edges with
    /// the same source do not override.
    pub fn project(&self, model: &ClassModel) -> Vec<ClassMeta> {
        model
            .classes()
            .map(|class| {
                let mut parameters: Vec<Parameter> = class
                    .attributes
                    .iter()
                    .map(|attr| Parameter {
                        name: attr.name.clone(),
                        param_type: attr.attr_type.clone(),
                    })
                    .collect();
                parameters.extend(class.children.iter().map(|child| Parameter {
                    name: child.name.clone(),
                    param_type: "class".to_string(),
                }));

                let (min, max) = outbound_multiplicity(model, &class.name);

                ClassMeta {
                    class: class.name.clone(),
                    documentation: class.documentation.clone(),
                    is_root: class.is_root,
                    min,
                    max,
                    parameters,
                }
            })
            .collect()
    }

    /// Export the metadata projection as an indented JSON document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use uml_modelling_sdk::export::MetaExporter;
    /// use uml_modelling_sdk::models::{ClassDef, ClassModel};
    ///
    /// let model = ClassModel::build(vec![ClassDef::new("Order".to_string())], Vec::new());
    /// let result = MetaExporter::new().export(&model).unwrap();
    /// assert_eq!(result.format, "json");
    /// ```
    pub fn export(&self, model: &ClassModel) -> Result<ExportResult, ExportError> {
        let records = self.project(model);
        let content = serde_json::to_string_pretty(&records).map_err(|e| {
            ExportError::SerializationError(format!("Failed to serialize metadata: {}", e))
        })?;
        Ok(ExportResult {
            content,
            format: "json".to_string(),
        })
    }
}

/// Outbound multiplicity of a class: the bounds of the first aggregation
/// edge naming it as source, `1..1` when it is never a source.
fn outbound_multiplicity(model: &ClassModel, name: &str) -> (String, String) {
    model
        .aggregations()
        .iter()
        .find(|edge| edge.source == name)
        .map(|edge| split_multiplicity(&edge.source_multiplicity))
        .unwrap_or_else(|| ("1".to_string(), "1".to_string()))
}
