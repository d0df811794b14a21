//! In-memory creative library.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use studio_core::{CreativeId, DocumentSnapshot, GatewayError, PersistenceGateway, SavePayload};

use crate::record::{current_timestamp_ms, CreativeRecord};

/// A creative library held entirely in memory.
///
/// Suitable for tests and ephemeral embedding. Each save creates a new
/// record under a fresh ID; saving the same unsaved document twice
/// therefore creates two entries, matching the gateway contract.
#[derive(Debug, Default)]
pub struct MemoryLibrary {
    records: RwLock<HashMap<CreativeId, CreativeRecord>>,
}

impl MemoryLibrary {
    /// Create an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a record by ID.
    #[must_use]
    pub fn record(&self, id: &CreativeId) -> Option<CreativeRecord> {
        let records = self
            .records
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        records.get(id).cloned()
    }

    /// IDs of all stored creatives.
    #[must_use]
    pub fn ids(&self) -> Vec<CreativeId> {
        let records = self
            .records
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        records.keys().copied().collect()
    }

    /// Number of stored creatives.
    #[must_use]
    pub fn len(&self) -> usize {
        let records = self
            .records
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        records.len()
    }

    /// Check if the library is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PersistenceGateway for MemoryLibrary {
    async fn load_document_snapshot(
        &self,
        id: &CreativeId,
    ) -> Result<Option<DocumentSnapshot>, GatewayError> {
        Ok(self.record(id).map(|record| record.snapshot))
    }

    async fn save_creative(&self, payload: SavePayload) -> Result<CreativeId, GatewayError> {
        let id = CreativeId::new();
        let record = CreativeRecord::from_payload(id, payload, current_timestamp_ms());
        let mut records = self
            .records
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        records.insert(id, record);
        Ok(id)
    }
}
