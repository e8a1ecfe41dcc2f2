//! UML Modelling SDK - class model conversion library
//!
//! Converts a UML-like class-diagram model (classes, attributes, and
//! aggregation relationships in an XML interchange format) into two derived
//! artifacts:
//! - A flattened metadata description (per-class parameters and multiplicities, JSON)
//! - A nested document template mirroring the containment hierarchy (XML)
//!
//! The conversion core works on in-memory values only; file reading and
//! writing sit behind storage backends and are wired up by the caller (or
//! the bundled CLI).

pub mod export;
pub mod import;
pub mod model;
pub mod models;
pub mod storage;

// Re-export commonly used types
pub use storage::{StorageBackend, StorageError};
#[cfg(feature = "native-fs")]
pub use storage::filesystem::FileSystemStorageBackend;

pub use model::{ModelLoader, ModelSaver};
pub use import::{ImportError, XMLImporter};
pub use export::{ClassMeta, DocumentExporter, ExportError, ExportResult, MetaExporter, Parameter};

// Re-export models
pub use models::{split_multiplicity, AggregationEdge, Attribute, ChildRef, ClassDef, ClassModel};
