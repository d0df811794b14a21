//! Canonical serialized representation of documents exchanged with the
//! persistence gateway.

use serde::{Deserialize, Serialize};

use crate::document::{Document, DocumentMeta};
use crate::layer::{Layer, LayerId, LayerKind};
use crate::{StudioError, StudioResult};

/// Snapshot-friendly layer description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSnapshot {
    /// Layer identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Layer content.
    pub kind: LayerKind,
    /// Z-order.
    #[serde(default)]
    pub z_index: i32,
}

impl From<&Layer> for LayerSnapshot {
    fn from(layer: &Layer) -> Self {
        Self {
            id: layer.id.to_string(),
            name: layer.name.clone(),
            kind: layer.kind.clone(),
            z_index: layer.z_index,
        }
    }
}

impl LayerSnapshot {
    /// Convert the snapshot back to a runtime layer.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::MalformedSnapshot`] if the ID is not a
    /// valid UUID, or [`StudioError::InvalidFontSize`] if a text layer
    /// carries a negative font size.
    pub fn into_layer(self) -> StudioResult<Layer> {
        let id = LayerId::parse(&self.id)
            .map_err(|e| StudioError::MalformedSnapshot(format!("layer id '{}': {e}", self.id)))?;
        let layer = Layer::new(self.name, self.kind)?;
        Ok(layer.with_id(id).with_z_index(self.z_index))
    }
}

/// Canonical document snapshot.
///
/// Layers are stored in document (insertion) order so a round trip
/// preserves the default z-order exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    /// Library identifier, if the document has been saved before.
    #[serde(default)]
    pub creative_id: Option<String>,
    /// Human label.
    pub name: String,
    /// Layers in document order.
    pub layers: Vec<LayerSnapshot>,
    /// Document metadata.
    #[serde(default)]
    pub meta: DocumentMeta,
}

impl From<&Document> for DocumentSnapshot {
    fn from(document: &Document) -> Self {
        Self {
            creative_id: document.id.map(|id| id.to_string()),
            name: document.name.clone(),
            layers: document.layers().map(LayerSnapshot::from).collect(),
            meta: document.meta.clone(),
        }
    }
}

impl DocumentSnapshot {
    /// Materialize the snapshot into an editable document, validating
    /// the model invariants on the way in.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::DuplicateLayer`] on colliding layer IDs,
    /// and propagates per-layer validation failures. Callers on the load
    /// path treat any of these as a malformed document.
    pub fn into_document(self) -> StudioResult<Document> {
        let creative_id = match &self.creative_id {
            Some(raw) => Some(crate::gateway::CreativeId::parse(raw).map_err(|e| {
                StudioError::MalformedSnapshot(format!("creative id '{raw}': {e}"))
            })?),
            None => None,
        };

        let mut document = Document::new(self.name).with_meta(self.meta);
        document.id = creative_id;
        for layer_snapshot in self.layers {
            let layer = layer_snapshot.into_layer()?;
            document.add_layer(layer)?;
        }
        Ok(document)
    }
}
