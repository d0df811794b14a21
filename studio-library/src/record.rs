//! The durable form of a saved creative.

use serde::{Deserialize, Serialize};
use studio_core::{AdCopy, CreativeId, DocumentMeta, DocumentSnapshot, SavePayload};

/// One persisted library entry.
///
/// Carries both the extracted ad-copy fields (for cards and search) and
/// the raw document snapshot (for reopening in a studio session).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreativeRecord {
    /// Library identifier.
    pub id: CreativeId,
    /// Human label, taken from the document name.
    pub name: String,
    /// Extracted ad-copy fields.
    pub copy: AdCopy,
    /// The reloadable document snapshot.
    pub snapshot: DocumentSnapshot,
    /// Document metadata at save time.
    pub meta: DocumentMeta,
    /// Save timestamp, milliseconds since the Unix epoch.
    pub saved_at_ms: u64,
}

impl CreativeRecord {
    /// Build a record from a save payload and its assigned ID.
    ///
    /// The stored snapshot is stamped with the assigned ID so a reload
    /// opens as the same library entry rather than a fresh document.
    #[must_use]
    pub fn from_payload(id: CreativeId, payload: SavePayload, saved_at_ms: u64) -> Self {
        let SavePayload {
            copy,
            mut snapshot,
            meta,
        } = payload;
        snapshot.creative_id = Some(id.to_string());
        Self {
            id,
            name: snapshot.name.clone(),
            copy,
            snapshot,
            meta,
            saved_at_ms,
        }
    }
}

/// Current Unix timestamp in milliseconds.
#[must_use]
pub fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| {
        // Timestamp will not exceed u64 max for millennia
        #[allow(clippy::cast_possible_truncation)]
        {
            d.as_millis() as u64
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_core::{extract, Document, ImageRole, Layer};

    #[test]
    fn test_record_stamps_assigned_id_into_snapshot() {
        let mut doc = Document::new("Stamped");
        doc.add_layer(Layer::image("Shot", "p.png", ImageRole::Product))
            .expect("add");
        let payload = SavePayload {
            copy: extract(&doc),
            snapshot: DocumentSnapshot::from(&doc),
            meta: doc.meta.clone(),
        };

        let id = CreativeId::new();
        let record = CreativeRecord::from_payload(id, payload, 1_700_000_000_000);

        assert_eq!(record.name, "Stamped");
        assert_eq!(record.snapshot.creative_id, Some(id.to_string()));
        let reopened = record.snapshot.into_document().expect("materialize");
        assert_eq!(reopened.id, Some(id));
    }
}
