//! Class definition model

use serde::{Deserialize, Serialize};

/// Scalar attribute owned by a class, order-preserving as declared
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attribute {
    /// Attribute name
    pub name: String,
    /// Declared type (e.g. "int", "string"); rendered as the template text
    /// of the attribute's element in the document projection
    #[serde(rename = "type")]
    pub attr_type: String,
}

/// Reference to a contained class.
///
/// `min`/`max` are the bounds of the contained class's own outbound
/// multiplicity as declared by the aggregation edge, not the container's.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChildRef {
    /// Name of the contained class; may not resolve to a known class
    pub name: String,
    pub min: String,
    pub max: String,
}

/// Class definition
///
/// One modeled class: identity, root flag, documentation, declared
/// attributes, and the derived list of contained classes. `children` is a
/// materialized view over the aggregation edges targeting this class and is
/// populated by [`ClassModel::build`](super::ClassModel::build), never by the
/// importer.
///
/// # Example
///
/// ```rust
/// use uml_modelling_sdk::models::ClassDef;
///
/// let class = ClassDef::new("Order".to_string());
/// assert!(!class.is_root);
/// assert!(class.children.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassDef {
    /// Class name; the key by which all other structures reference it
    pub name: String,
    /// Whether this class is the document root (default: false)
    #[serde(rename = "isRoot", default)]
    pub is_root: bool,
    /// Free-text description (default: empty)
    #[serde(default)]
    pub documentation: String,
    /// Declared attributes, in declaration order
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Contained classes, in aggregation declaration order
    #[serde(default)]
    pub children: Vec<ChildRef>,
}

impl ClassDef {
    /// Create a new class definition with the given name and default values
    /// (not root, empty documentation, no attributes, no children).
    pub fn new(name: String) -> Self {
        Self {
            name,
            is_root: false,
            documentation: String::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }
}
