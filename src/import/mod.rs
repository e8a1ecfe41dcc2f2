//! Import functionality
//!
//! Provides the parser for loading class models from the XML interchange
//! format: `Class` elements with nested `Attribute` elements, and
//! `Aggregation` elements describing containment.

pub mod xml;

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Missing attribute: {0}")]
    MissingAttribute(String),
}

// Re-export for convenience
pub use xml::XMLImporter;
