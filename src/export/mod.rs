//! Export functionality
//!
//! Provides the two projections of a class model:
//! - Metadata list: flat per-class summary with parameters and
//!   multiplicities, serialized as indented JSON
//! - Document template: nested XML skeleton mirroring containment
//!
//! Both projectors only read the model; they run independently and in any
//! order.

pub mod document;
pub mod meta;

/// Result of an export operation
#[derive(Debug)]
pub struct ExportResult {
    /// Exported content
    pub content: String,
    /// Format identifier
    pub format: String,
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Cyclic containment: {0}")]
    CyclicContainment(String),
}

// Re-export for convenience
pub use document::DocumentExporter;
pub use meta::{ClassMeta, MetaExporter, Parameter};
