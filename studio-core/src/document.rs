//! The editable ad document: an ordered set of layers plus metadata.

use serde::{Deserialize, Serialize};

use crate::gateway::CreativeId;
use crate::layer::{Layer, LayerId};
use crate::{StudioError, StudioResult};

/// Document-level metadata carried through to the saved library record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Optional mood/style tag (e.g. "cozy_warm").
    #[serde(default)]
    pub mood: Option<String>,
    /// Identifier of the blueprint this document was instantiated from.
    #[serde(default)]
    pub blueprint_id: Option<String>,
    /// Quality score, 0-100. Filled at save time when unset.
    #[serde(default)]
    pub score: Option<u8>,
}

/// An in-session, editable creative.
///
/// Layers are kept in insertion order, which doubles as the default
/// z-order; [`Document::layers_by_z`] gives the explicit stacking view.
/// A document with zero layers is valid - it is a blank canvas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Library identifier, assigned by the persistence gateway on first
    /// save. `None` for an unsaved, freshly created document.
    pub id: Option<CreativeId>,
    /// Human label; may be empty.
    pub name: String,
    /// Layers in insertion order.
    layers: Vec<Layer>,
    /// Document metadata.
    pub meta: DocumentMeta,
}

impl Document {
    /// Create a new empty document.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            layers: Vec::new(),
            meta: DocumentMeta::default(),
        }
    }

    /// Set the metadata.
    #[must_use]
    pub fn with_meta(mut self, meta: DocumentMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Add a layer to the end of the document.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::DuplicateLayer`] if a layer with the same
    /// ID is already present. The document is left unchanged.
    pub fn add_layer(&mut self, layer: Layer) -> StudioResult<LayerId> {
        if self.layers.iter().any(|l| l.id == layer.id) {
            return Err(StudioError::DuplicateLayer(layer.id));
        }
        let id = layer.id;
        self.layers.push(layer);
        Ok(id)
    }

    /// Remove a layer by ID.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::LayerNotFound`] if no such layer exists.
    pub fn remove_layer(&mut self, id: &LayerId) -> StudioResult<Layer> {
        let position = self
            .layers
            .iter()
            .position(|l| l.id == *id)
            .ok_or(StudioError::LayerNotFound(*id))?;
        Ok(self.layers.remove(position))
    }

    /// Get a layer by ID.
    #[must_use]
    pub fn layer(&self, id: &LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == *id)
    }

    /// Get a mutable reference to a layer by ID.
    pub fn layer_mut(&mut self, id: &LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id == *id)
    }

    /// Layers in document (insertion) order.
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    /// Layers sorted by z-index; the sort is stable, so layers sharing a
    /// z-index keep their insertion order.
    #[must_use]
    pub fn layers_by_z(&self) -> Vec<&Layer> {
        let mut sorted: Vec<&Layer> = self.layers.iter().collect();
        sorted.sort_by_key(|l| l.z_index);
        sorted
    }

    /// Number of layers in the document.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Check if the document has no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Serialize the document to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> StudioResult<String> {
        serde_json::to_string(self).map_err(StudioError::Serialization)
    }

    /// Deserialize a document from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the payload violates
    /// the unique-layer-id invariant.
    pub fn from_json(json: &str) -> StudioResult<Self> {
        let doc: Self = serde_json::from_str(json).map_err(StudioError::Serialization)?;
        for (i, layer) in doc.layers.iter().enumerate() {
            if doc.layers[..i].iter().any(|l| l.id == layer.id) {
                return Err(StudioError::DuplicateLayer(layer.id));
            }
        }
        Ok(doc)
    }
}
