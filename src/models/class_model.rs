//! In-memory class model
//!
//! Owns the ordered class mapping and the aggregation edge list for the
//! lifetime of one conversion run. Both are built once and read-only
//! thereafter; the two projections only read.

use indexmap::IndexMap;
use tracing::warn;

use super::aggregation::{split_multiplicity, AggregationEdge};
use super::class_def::{ChildRef, ClassDef};

/// Class model built from loaded class definitions and aggregation edges.
///
/// The class mapping preserves declaration order (root selection and the
/// metadata projection both depend on it). Duplicate class names follow
/// mapping semantics: the later definition overwrites the earlier one and
/// keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct ClassModel {
    classes: IndexMap<String, ClassDef>,
    aggregations: Vec<AggregationEdge>,
}

impl ClassModel {
    /// Build a model by folding aggregation edges into the class mapping.
    ///
    /// Walks the edge list once, in declaration order: every edge whose
    /// `target` names a known class appends a [`ChildRef`] for its `source`
    /// to that class's `children`, bounds taken from the edge's source
    /// multiplicity. Edges targeting unknown classes are skipped (they stay
    /// in the edge list for multiplicity lookups but contribute no children).
    pub fn build(classes: Vec<ClassDef>, aggregations: Vec<AggregationEdge>) -> Self {
        let mut mapping: IndexMap<String, ClassDef> = IndexMap::with_capacity(classes.len());
        for class in classes {
            mapping.insert(class.name.clone(), class);
        }

        for edge in &aggregations {
            match mapping.get_mut(&edge.target) {
                Some(target) => {
                    let (min, max) = split_multiplicity(&edge.source_multiplicity);
                    target.children.push(ChildRef {
                        name: edge.source.clone(),
                        min,
                        max,
                    });
                }
                None => {
                    warn!(
                        "Aggregation {} -> {} targets an unknown class, skipping",
                        edge.source, edge.target
                    );
                }
            }
        }

        Self {
            classes: mapping,
            aggregations,
        }
    }

    /// Iterate over classes in declaration order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDef> {
        self.classes.values()
    }

    /// Look up a class by name.
    pub fn get(&self, name: &str) -> Option<&ClassDef> {
        self.classes.get(name)
    }

    /// Whether a class with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// The full aggregation edge list, in declaration order.
    pub fn aggregations(&self) -> &[AggregationEdge] {
        &self.aggregations
    }

    /// The first class (in declaration order) flagged as root, if any.
    pub fn root_class(&self) -> Option<&ClassDef> {
        self.classes.values().find(|class| class.is_root)
    }

    /// Number of classes in the model.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(source: &str, target: &str, source_mult: &str) -> AggregationEdge {
        AggregationEdge {
            source: source.to_string(),
            target: target.to_string(),
            source_multiplicity: source_mult.to_string(),
            target_multiplicity: "1..1".to_string(),
        }
    }

    #[test]
    fn test_build_links_children_in_edge_order() {
        let classes = vec![
            ClassDef::new("A".to_string()),
            ClassDef::new("B".to_string()),
            ClassDef::new("C".to_string()),
        ];
        let aggregations = vec![edge("B", "A", "0..5"), edge("C", "A", "1..*")];

        let model = ClassModel::build(classes, aggregations);
        let a = model.get("A").unwrap();
        assert_eq!(a.children.len(), 2);
        assert_eq!(a.children[0].name, "B");
        assert_eq!(a.children[0].min, "0");
        assert_eq!(a.children[0].max, "5");
        assert_eq!(a.children[1].name, "C");
        assert_eq!(a.children[1].max, "*");
    }

    #[test]
    fn test_build_skips_unknown_target() {
        let classes = vec![ClassDef::new("A".to_string())];
        let aggregations = vec![edge("A", "Nowhere", "0..1")];

        let model = ClassModel::build(classes, aggregations);
        assert!(model.get("A").unwrap().children.is_empty());
        // The edge itself is retained for multiplicity lookups
        assert_eq!(model.aggregations().len(), 1);
    }

    #[test]
    fn test_build_keeps_unknown_source_as_child() {
        let classes = vec![ClassDef::new("A".to_string())];
        let aggregations = vec![edge("Ghost", "A", "2..3")];

        let model = ClassModel::build(classes, aggregations);
        let a = model.get("A").unwrap();
        assert_eq!(a.children.len(), 1);
        assert_eq!(a.children[0].name, "Ghost");
        assert_eq!(a.children[0].min, "2");
    }

    #[test]
    fn test_duplicate_class_last_write_wins() {
        let mut first = ClassDef::new("A".to_string());
        first.documentation = "first".to_string();
        let mut second = ClassDef::new("A".to_string());
        second.documentation = "second".to_string();

        let model = ClassModel::build(vec![first, second], Vec::new());
        assert_eq!(model.len(), 1);
        assert_eq!(model.get("A").unwrap().documentation, "second");
    }

    #[test]
    fn test_root_class_first_declared_wins() {
        let mut a = ClassDef::new("A".to_string());
        a.is_root = true;
        let mut b = ClassDef::new("B".to_string());
        b.is_root = true;

        let model = ClassModel::build(vec![a, b], Vec::new());
        assert_eq!(model.root_class().unwrap().name, "A");
    }

    #[test]
    fn test_root_class_none() {
        let model = ClassModel::build(vec![ClassDef::new("A".to_string())], Vec::new());
        assert!(model.root_class().is_none());
    }
}
