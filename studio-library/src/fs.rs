//! Filesystem-backed creative library.
//!
//! One JSON file per record under a data directory. Record IDs are
//! UUIDs, so the ID string doubles as a safe file stem.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use studio_core::{CreativeId, DocumentSnapshot, GatewayError, PersistenceGateway, SavePayload};

use crate::record::{current_timestamp_ms, CreativeRecord};

/// A creative library persisted as a directory of JSON files.
#[derive(Debug, Clone)]
pub struct FileLibrary {
    data_dir: PathBuf,
}

impl FileLibrary {
    /// Open (or create) a library at the given directory.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Io`] if the directory cannot be created.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, GatewayError> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    /// The library's data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn record_path(&self, id: &CreativeId) -> PathBuf {
        self.data_dir.join(format!("{id}.json"))
    }

    /// Load a full record by ID.
    ///
    /// Returns `Ok(None)` when no record with this ID exists.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Io`] on read failure and
    /// [`GatewayError::Serialization`] on a corrupt record file.
    pub fn load_record(&self, id: &CreativeId) -> Result<Option<CreativeRecord>, GatewayError> {
        let path = self.record_path(id);
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)?;
        let record = serde_json::from_str(&contents)
            .map_err(|e| GatewayError::Serialization(e.to_string()))?;
        Ok(Some(record))
    }

    /// IDs of all records found in the data directory.
    ///
    /// Files that are not `<uuid>.json` are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Io`] if the directory cannot be read.
    pub fn ids(&self) -> Result<Vec<CreativeId>, GatewayError> {
        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&self.data_dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    if let Ok(id) = CreativeId::parse(stem) {
                        ids.push(id);
                    }
                }
            }
        }
        Ok(ids)
    }

    /// Remove a record's file from disk.
    ///
    /// No-op if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Io`] if the file exists but cannot be
    /// removed.
    pub fn delete(&self, id: &CreativeId) -> Result<(), GatewayError> {
        let path = self.record_path(id);
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }

    fn write_record(&self, record: &CreativeRecord) -> Result<(), GatewayError> {
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| GatewayError::Serialization(e.to_string()))?;
        let path = self.record_path(&record.id);
        if let Err(e) = std::fs::write(&path, json) {
            tracing::warn!("Failed to persist creative {} to {}: {e}", record.id, path.display());
            return Err(GatewayError::Io(e));
        }
        Ok(())
    }
}

#[async_trait]
impl PersistenceGateway for FileLibrary {
    async fn load_document_snapshot(
        &self,
        id: &CreativeId,
    ) -> Result<Option<DocumentSnapshot>, GatewayError> {
        Ok(self.load_record(id)?.map(|record| record.snapshot))
    }

    async fn save_creative(&self, payload: SavePayload) -> Result<CreativeId, GatewayError> {
        let id = CreativeId::new();
        let record = CreativeRecord::from_payload(id, payload, current_timestamp_ms());
        self.write_record(&record)?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_core::{extract, Document, ImageRole, Layer};

    fn payload_for(doc: &Document) -> SavePayload {
        SavePayload {
            copy: extract(doc),
            snapshot: DocumentSnapshot::from(doc),
            meta: doc.meta.clone(),
        }
    }

    fn sample_document() -> Document {
        let mut doc = Document::new("Fox Lamp Promo");
        doc.add_layer(Layer::image("Fox Lamp", "fox.png", ImageRole::Product))
            .expect("add");
        doc.add_layer(
            Layer::text("Headline", "Level Up Your Setup", Some(80.0)).expect("layer"),
        )
        .expect("add");
        doc
    }

    #[tokio::test]
    async fn test_save_writes_a_json_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let library = FileLibrary::open(dir.path()).expect("library");

        let id = library
            .save_creative(payload_for(&sample_document()))
            .await
            .expect("save");

        let path = dir.path().join(format!("{id}.json"));
        assert!(path.exists(), "record file should be written on save");
    }

    #[tokio::test]
    async fn test_save_and_reload_record() {
        let dir = tempfile::tempdir().expect("tempdir");
        let library = FileLibrary::open(dir.path()).expect("library");
        let doc = sample_document();

        let id = library
            .save_creative(payload_for(&doc))
            .await
            .expect("save");

        // Reopen the directory as a fresh library instance.
        let library2 = FileLibrary::open(dir.path()).expect("library2");
        let record = library2
            .load_record(&id)
            .expect("read")
            .expect("record present");
        assert_eq!(record.name, "Fox Lamp Promo");
        assert_eq!(record.copy.headline, "Level Up Your Setup");
        assert_eq!(record.copy.thumbnail, Some("fox.png".to_string()));
    }

    #[tokio::test]
    async fn test_load_unknown_id_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let library = FileLibrary::open(dir.path()).expect("library");
        let result = library
            .load_document_snapshot(&CreativeId::new())
            .await
            .expect("load");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_record_is_a_serialization_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let library = FileLibrary::open(dir.path()).expect("library");
        let id = CreativeId::new();
        std::fs::write(dir.path().join(format!("{id}.json")), "not json").expect("write");

        let result = library.load_record(&id);
        assert!(matches!(result, Err(GatewayError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_ids_lists_saved_records() {
        let dir = tempfile::tempdir().expect("tempdir");
        let library = FileLibrary::open(dir.path()).expect("library");

        let mut saved = Vec::new();
        for _ in 0..3 {
            saved.push(
                library
                    .save_creative(payload_for(&sample_document()))
                    .await
                    .expect("save"),
            );
        }
        // A stray non-record file is ignored.
        std::fs::write(dir.path().join("notes.txt"), "ignore me").expect("write");

        let mut found = library.ids().expect("ids");
        found.sort_by_key(ToString::to_string);
        saved.sort_by_key(ToString::to_string);
        assert_eq!(found, saved);
    }

    #[tokio::test]
    async fn test_delete_removes_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let library = FileLibrary::open(dir.path()).expect("library");

        let id = library
            .save_creative(payload_for(&sample_document()))
            .await
            .expect("save");
        library.delete(&id).expect("delete");

        assert!(library.load_record(&id).expect("read").is_none());
    }
}
