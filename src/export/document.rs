//! Document template exporter
//!
//! Renders the nested XML skeleton implied by class containment: one element
//! per class, attribute elements carrying their declared type as text
//! content, contained classes nested recursively. This is a type-template,
//! not a data instance.

use tracing::warn;

use crate::export::{ExportError, ExportResult};
use crate::models::{ClassDef, ClassModel};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" ?>";
const INDENT: &str = "    ";

/// Document template exporter
#[derive(Debug, Default)]
pub struct DocumentExporter;

impl DocumentExporter {
    /// Create a new DocumentExporter
    pub fn new() -> Self {
        Self
    }

    /// Export the document template for the model's root class.
    ///
    /// # Example
    ///
    /// ```rust
    /// use uml_modelling_sdk::export::DocumentExporter;
    /// use uml_modelling_sdk::models::{ClassDef, ClassModel};
    ///
    /// let mut root = ClassDef::new("Order".to_string());
    /// root.is_root = true;
    /// let model = ClassModel::build(vec![root], Vec::new());
    ///
    /// let result = DocumentExporter::new().export(&model).unwrap();
    /// assert_eq!(result.format, "xml");
    /// ```
    pub fn export(&self, model: &ClassModel) -> Result<ExportResult, ExportError> {
        let content = self.render(model)?;
        Ok(ExportResult {
            content,
            format: "xml".to_string(),
        })
    }

    /// Render the document template as a string.
    ///
    /// The root class is the first class (in declaration order) flagged as
    /// root; the rendered tree is prefixed with a single XML declaration
    /// line. Without a root class the output is the fixed one-line error
    /// document instead of a tree; the metadata projection is unaffected by
    /// that condition.
    ///
    /// Containment cycles abort rendering with
    /// [`ExportError::CyclicContainment`] naming the offending path.
    pub fn render(&self, model: &ClassModel) -> Result<String, ExportError> {
        let root = match model.root_class() {
            Some(root) => root,
            None => return Ok("<error>No root class found</error>".to_string()),
        };

        let mut lines: Vec<String> = Vec::new();
        let mut path: Vec<String> = Vec::new();
        self.render_class(model, root, 0, &mut path, &mut lines)?;

        Ok(format!("{}\n{}", XML_DECLARATION, lines.join("\n")))
    }

    fn render_class(
        &self,
        model: &ClassModel,
        class: &ClassDef,
        depth: usize,
        path: &mut Vec<String>,
        lines: &mut Vec<String>,
    ) -> Result<(), ExportError> {
        // The guard is per-path: a class reachable along two disjoint paths
        // renders once per path, only a class recurring on its own
        // containment path is a cycle.
        if path.iter().any(|name| name == &class.name) {
            return Err(ExportError::CyclicContainment(format!(
                "{} -> {}",
                path.join(" -> "),
                class.name
            )));
        }
        path.push(class.name.clone());

        let pad = INDENT.repeat(depth);
        lines.push(format!("{}<{}>", pad, class.name));

        for attr in &class.attributes {
            lines.push(format!(
                "{}{}<{}>{}</{}>",
                pad, INDENT, attr.name, attr.attr_type, attr.name
            ));
        }

        for child in &class.children {
            match model.get(&child.name) {
                Some(child_class) => {
                    self.render_class(model, child_class, depth + 1, path, lines)?;
                }
                None => {
                    warn!(
                        "Contained class '{}' is not defined, skipping",
                        child.name
                    );
                }
            }
        }

        lines.push(format!("{}</{}>", pad, class.name));

        path.pop();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AggregationEdge, Attribute};

    fn edge(source: &str, target: &str) -> AggregationEdge {
        AggregationEdge {
            source: source.to_string(),
            target: target.to_string(),
            source_multiplicity: "1..1".to_string(),
            target_multiplicity: "1..1".to_string(),
        }
    }

    #[test]
    fn test_render_no_root_error_document() {
        let model = ClassModel::build(vec![ClassDef::new("A".to_string())], Vec::new());
        let rendered = DocumentExporter::new().render(&model).unwrap();
        assert_eq!(rendered, "<error>No root class found</error>");
    }

    #[test]
    fn test_render_nested_template() {
        let mut root = ClassDef::new("Order".to_string());
        root.is_root = true;
        let mut item = ClassDef::new("Item".to_string());
        item.attributes.push(Attribute {
            name: "sku".to_string(),
            attr_type: "string".to_string(),
        });

        let model = ClassModel::build(vec![root, item], vec![edge("Item", "Order")]);
        let rendered = DocumentExporter::new().render(&model).unwrap();

        let expected = [
            "<?xml version=\"1.0\" ?>",
            "<Order>",
            "    <Item>",
            "        <sku>string</sku>",
            "    </Item>",
            "</Order>",
        ]
        .join("\n");
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_cycle_is_error() {
        let mut a = ClassDef::new("A".to_string());
        a.is_root = true;
        let b = ClassDef::new("B".to_string());

        let model = ClassModel::build(vec![a, b], vec![edge("B", "A"), edge("A", "B")]);
        let result = DocumentExporter::new().render(&model);
        match result {
            Err(ExportError::CyclicContainment(cycle_path)) => {
                assert!(cycle_path.contains("A -> B -> A"), "got: {}", cycle_path);
            }
            other => panic!("expected cyclic containment error, got {:?}", other),
        }
    }

    #[test]
    fn test_render_diamond_is_not_a_cycle() {
        // Shared renders under both Left and Right; it repeats across
        // sibling paths without ever recurring on its own path
        let mut top = ClassDef::new("Top".to_string());
        top.is_root = true;
        let left = ClassDef::new("Left".to_string());
        let right = ClassDef::new("Right".to_string());
        let shared = ClassDef::new("Shared".to_string());

        let model = ClassModel::build(
            vec![top, left, right, shared],
            vec![
                edge("Left", "Top"),
                edge("Right", "Top"),
                edge("Shared", "Left"),
                edge("Shared", "Right"),
            ],
        );
        let rendered = DocumentExporter::new().render(&model).unwrap();
        assert_eq!(rendered.matches("<Shared>").count(), 2);
    }

    #[test]
    fn test_render_skips_unknown_child() {
        let mut root = ClassDef::new("Root".to_string());
        root.is_root = true;

        let model = ClassModel::build(vec![root], vec![edge("Ghost", "Root")]);
        let rendered = DocumentExporter::new().render(&model).unwrap();
        assert!(!rendered.contains("Ghost"));
        assert!(rendered.contains("<Root>"));
    }
}
