//! Model loading functionality
//!
//! Loads class model XML from a storage backend and hands it to the XML
//! importer. All path decisions stay with the caller; the core only ever
//! sees document text.

use crate::import::XMLImporter;
use crate::models::ClassModel;
use crate::storage::{StorageBackend, StorageError};
use anyhow::{Context, Result};
use tracing::{info, warn};

/// Model loader that uses a storage backend
pub struct ModelLoader<B: StorageBackend> {
    storage: B,
}

impl<B: StorageBackend> ModelLoader<B> {
    /// Create a new model loader with the given storage backend
    pub fn new(storage: B) -> Self {
        Self { storage }
    }

    /// Load a class model from an XML file in storage.
    ///
    /// Validates well-formedness first, then imports. Loader warnings
    /// (non-fatal anomalies in the input) are logged, not raised.
    pub async fn load_model(&self, input_path: &str) -> Result<ClassModel> {
        let content = self.storage.read_file(input_path).await?;
        let xml_content = String::from_utf8(content)
            .map_err(|e| StorageError::SerializationError(format!("Invalid UTF-8: {}", e)))?;

        let mut importer = XMLImporter::new();
        importer
            .validate(&xml_content)
            .with_context(|| format!("invalid model document: {}", input_path))?;
        let model = importer
            .import(&xml_content)
            .with_context(|| format!("failed to import model document: {}", input_path))?;

        for warning in &importer.warnings {
            warn!("{}: {}", input_path, warning);
        }

        info!(
            "Loaded {} classes and {} aggregations from {}",
            model.len(),
            model.aggregations().len(),
            input_path
        );
        Ok(model)
    }
}
