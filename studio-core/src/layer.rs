//! Creative layers - the building blocks of ad documents.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{StudioError, StudioResult};

/// Unique identifier for a layer within its owning document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerId(Uuid);

impl LayerId {
    /// Create a new unique layer ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a layer ID from its string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid UUID.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }
}

impl Default for LayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Semantic role hint for an image layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageRole {
    /// The advertised product itself.
    Product,
    /// A scene-setting backdrop.
    Background,
    /// No particular role.
    #[default]
    Generic,
}

/// The content a layer carries.
///
/// This is a closed set: extraction and auditing match it exhaustively,
/// so adding a kind is a compile-checked decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum LayerKind {
    /// A text block.
    Text {
        /// Text content.
        content: String,
        /// Font size in size-units. `None` means unknown, not zero.
        font_size: Option<f32>,
    },

    /// A 2D image.
    Image {
        /// Image source URI or opaque asset handle.
        src: String,
        /// Role hint used for thumbnail selection.
        role: ImageRole,
    },

    /// A call-to-action button.
    Cta {
        /// Button label.
        label: String,
    },
}

/// A single visual element of an ad document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Unique identifier within the owning document.
    pub id: LayerId,
    /// Display name; may carry semantic hints ("Headline", "CTA Button").
    pub name: String,
    /// Layer content.
    pub kind: LayerKind,
    /// Z-order. Ties are broken by insertion order.
    pub z_index: i32,
}

impl Layer {
    /// Create a layer with the given name and kind.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::InvalidFontSize`] if the kind is a text
    /// layer with a negative font size.
    pub fn new(name: impl Into<String>, kind: LayerKind) -> StudioResult<Self> {
        let name = name.into();
        if let LayerKind::Text {
            font_size: Some(size),
            ..
        } = kind
        {
            if !size.is_finite() || size < 0.0 {
                return Err(StudioError::InvalidFontSize { name, size });
            }
        }
        Ok(Self {
            id: LayerId::new(),
            name,
            kind,
            z_index: 0,
        })
    }

    /// Create a text layer.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::InvalidFontSize`] if `font_size` is negative.
    pub fn text(
        name: impl Into<String>,
        content: impl Into<String>,
        font_size: Option<f32>,
    ) -> StudioResult<Self> {
        Self::new(
            name,
            LayerKind::Text {
                content: content.into(),
                font_size,
            },
        )
    }

    /// Create an image layer.
    #[must_use]
    pub fn image(name: impl Into<String>, src: impl Into<String>, role: ImageRole) -> Self {
        Self {
            id: LayerId::new(),
            name: name.into(),
            kind: LayerKind::Image {
                src: src.into(),
                role,
            },
            z_index: 0,
        }
    }

    /// Create a call-to-action layer.
    #[must_use]
    pub fn cta(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: LayerId::new(),
            name: name.into(),
            kind: LayerKind::Cta {
                label: label.into(),
            },
            z_index: 0,
        }
    }

    /// Set the z-order.
    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Replace the generated ID. Used when rebuilding from a snapshot.
    #[must_use]
    pub fn with_id(mut self, id: LayerId) -> Self {
        self.id = id;
        self
    }

    /// The layer's textual payload, if it has one.
    #[must_use]
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            LayerKind::Text { content, .. } => Some(content),
            LayerKind::Cta { label } => Some(label),
            LayerKind::Image { .. } => None,
        }
    }

    /// Whether the display name contains `needle`, case-insensitively.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
