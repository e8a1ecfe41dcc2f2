//! Models module for the SDK
//!
//! Defines the core data structures of one conversion run: class definitions,
//! aggregation edges, and the order-preserving class model built from them.

pub mod aggregation;
pub mod class_def;
pub mod class_model;

pub use aggregation::{split_multiplicity, AggregationEdge};
pub use class_def::{Attribute, ChildRef, ClassDef};
pub use class_model::ClassModel;
