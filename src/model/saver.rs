//! Model saving functionality
//!
//! Persists the two derived artifacts through a storage backend.

use crate::export::ExportResult;
use crate::storage::{StorageBackend, StorageError};
use tracing::info;

/// File name of the metadata artifact within the output directory
pub const META_FILE: &str = "meta.json";
/// File name of the document template artifact within the output directory
pub const DOCUMENT_FILE: &str = "config.xml";

/// Model saver that uses a storage backend
pub struct ModelSaver<B: StorageBackend> {
    storage: B,
}

impl<B: StorageBackend> ModelSaver<B> {
    /// Create a new model saver with the given storage backend
    pub fn new(storage: B) -> Self {
        Self { storage }
    }

    /// Write both artifacts into the output directory, creating it first
    /// when absent.
    pub async fn save_artifacts(
        &self,
        out_dir: &str,
        meta: &ExportResult,
        document: &ExportResult,
    ) -> Result<(), StorageError> {
        if !self.storage.dir_exists(out_dir).await? {
            self.storage.create_dir(out_dir).await?;
        }

        let meta_path = format!("{}/{}", out_dir, META_FILE);
        self.storage
            .write_file(&meta_path, meta.content.as_bytes())
            .await?;
        info!("Saved metadata to {}", meta_path);

        let document_path = format!("{}/{}", out_dir, DOCUMENT_FILE);
        self.storage
            .write_file(&document_path, document.content.as_bytes())
            .await?;
        info!("Saved document template to {}", document_path);

        Ok(())
    }
}
