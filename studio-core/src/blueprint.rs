//! Starter blueprints - reusable document templates for the wizard flow.

use crate::document::{Document, DocumentMeta};
use crate::layer::{ImageRole, Layer, LayerKind};

/// A reusable starter document.
///
/// Instantiation regenerates every layer ID, so one blueprint can seed
/// any number of independent documents.
#[derive(Debug, Clone)]
pub struct Blueprint {
    /// Stable blueprint identifier, stamped into instantiated documents.
    pub id: &'static str,
    /// Display name, used as the document name.
    pub name: &'static str,
    /// Mood/style tag carried into the document metadata.
    pub mood: Option<&'static str>,
    layers: Vec<Layer>,
}

impl Blueprint {
    /// Produce a fresh document from this blueprint.
    ///
    /// Layer IDs are regenerated on every call; the blueprint's ID and
    /// mood are recorded in the document metadata.
    #[must_use]
    pub fn instantiate(&self) -> Document {
        let mut document = Document::new(self.name).with_meta(DocumentMeta {
            mood: self.mood.map(str::to_string),
            blueprint_id: Some(self.id.to_string()),
            score: None,
        });
        for layer in &self.layers {
            let fresh = Layer {
                id: crate::layer::LayerId::new(),
                name: layer.name.clone(),
                kind: layer.kind.clone(),
                z_index: layer.z_index,
            };
            // Freshly generated IDs cannot collide within one instantiation.
            let _ = document.add_layer(fresh);
        }
        document
    }

    /// Layers in stacking order, for preview surfaces.
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }
}

fn text(name: &str, content: &str, font_size: f32, z_index: i32) -> Layer {
    Layer {
        id: crate::layer::LayerId::new(),
        name: name.to_string(),
        kind: LayerKind::Text {
            content: content.to_string(),
            font_size: Some(font_size),
        },
        z_index,
    }
}

/// The built-in starter set.
#[must_use]
pub fn starter_blueprints() -> Vec<Blueprint> {
    vec![
        Blueprint {
            id: "product_spotlight",
            name: "Product Spotlight",
            mood: Some("cozy_warm"),
            layers: vec![
                Layer::image("Backdrop", "assets/backdrop-warm.jpg", ImageRole::Background),
                Layer::image("Product Shot", "assets/product.png", ImageRole::Product)
                    .with_z_index(10),
                text("Headline", "Level Up Your Setup", 80.0, 20),
                Layer::cta("CTA Button", "Shop Now").with_z_index(30),
            ],
        },
        Blueprint {
            id: "saas_trial",
            name: "SaaS Free Trial",
            mood: Some("minimal"),
            layers: vec![
                text("Headline", "Ship Faster Today", 72.0, 10),
                text(
                    "Feature List",
                    "Unlimited projects\nAI generation\nAuto export",
                    24.0,
                    20,
                ),
                Layer::cta("CTA Button", "Start Free Trial").with_z_index(30),
            ],
        },
        Blueprint {
            id: "minimal_text",
            name: "Minimal Text",
            mood: None,
            layers: vec![text("Headline", "Say It Plainly", 64.0, 10)],
        },
    ]
}
