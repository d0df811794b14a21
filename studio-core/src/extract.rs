//! Best-effort extraction of structured ad-copy fields from a document.
//!
//! The heuristic is pure and total: same document in, same payload out,
//! with fixed fallbacks for every field that has no candidate layer. It
//! exists so a library record can be indexed and rendered as a card
//! without requiring the author to have tagged fields explicitly.

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::layer::{ImageRole, Layer, LayerKind};

/// Font size above which a text layer is considered headline-salient.
pub const HEADLINE_FONT_THRESHOLD: f32 = 40.0;

/// Headline used when no candidate layer exists.
pub const FALLBACK_HEADLINE: &str = "Untitled Ad";

/// Call-to-action label used when no candidate layer exists.
pub const FALLBACK_CTA: &str = "Get Started";

/// Structured ad-copy payload derived from a document.
///
/// All four fields are always populated; `thumbnail` expresses its
/// missing state explicitly as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdCopy {
    /// Headline text.
    pub headline: String,
    /// Supporting description text.
    pub description: String,
    /// Call-to-action button text.
    pub call_to_action: String,
    /// Source reference of the representative image, if any.
    pub thumbnail: Option<String>,
}

/// Whether a layer qualifies as the headline.
///
/// A text layer qualifies when its name contains "headline"
/// (case-insensitive) or its font size exceeds
/// [`HEADLINE_FONT_THRESHOLD`]. Selection is first-match in document
/// order, not best-match: an earlier layer matching only on font size
/// wins over a later layer matching on name.
#[must_use]
pub fn is_headline_candidate(layer: &Layer) -> bool {
    match &layer.kind {
        LayerKind::Text { font_size, .. } => {
            layer.name_contains("headline")
                || font_size.is_some_and(|size| size > HEADLINE_FONT_THRESHOLD)
        }
        LayerKind::Image { .. } | LayerKind::Cta { .. } => false,
    }
}

/// Whether a layer qualifies as the call-to-action.
///
/// Either the dedicated CTA variant, or a text layer whose name contains
/// "cta" (case-insensitive).
#[must_use]
pub fn is_cta_candidate(layer: &Layer) -> bool {
    match &layer.kind {
        LayerKind::Cta { .. } => true,
        LayerKind::Text { .. } => layer.name_contains("cta"),
        LayerKind::Image { .. } => false,
    }
}

/// Whether a layer qualifies as the thumbnail source.
#[must_use]
pub fn is_thumbnail_candidate(layer: &Layer) -> bool {
    matches!(
        layer.kind,
        LayerKind::Image {
            role: ImageRole::Product | ImageRole::Background,
            ..
        }
    )
}

/// Derive the structured ad-copy payload for a document.
///
/// Deterministic and side-effect free; never fails. Each field falls
/// back to a fixed default when no candidate layer exists, so an empty
/// document yields a fully populated payload of defaults.
#[must_use]
pub fn extract(document: &Document) -> AdCopy {
    let headline_layer = document.layers().find(|l| is_headline_candidate(l));

    let description_layer = document.layers().find(|l| {
        matches!(l.kind, LayerKind::Text { .. })
            && headline_layer.is_none_or(|headline| headline.id != l.id)
    });

    let cta_layer = document.layers().find(|l| is_cta_candidate(l));

    let thumbnail_layer = document.layers().find(|l| is_thumbnail_candidate(l));

    AdCopy {
        headline: headline_layer
            .and_then(Layer::text_content)
            .unwrap_or(FALLBACK_HEADLINE)
            .to_string(),
        description: description_layer
            .and_then(Layer::text_content)
            .unwrap_or_default()
            .to_string(),
        call_to_action: cta_layer
            .and_then(Layer::text_content)
            .unwrap_or(FALLBACK_CTA)
            .to_string(),
        thumbnail: thumbnail_layer.and_then(|l| match &l.kind {
            LayerKind::Image { src, .. } => Some(src.clone()),
            LayerKind::Text { .. } | LayerKind::Cta { .. } => None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::ImageRole;

    fn text(name: &str, content: &str, font_size: Option<f32>) -> Layer {
        Layer::text(name, content, font_size).expect("valid layer")
    }

    #[test]
    fn test_empty_document_yields_all_fallbacks() {
        let copy = extract(&Document::new(""));
        assert_eq!(copy.headline, FALLBACK_HEADLINE);
        assert_eq!(copy.description, "");
        assert_eq!(copy.call_to_action, FALLBACK_CTA);
        assert_eq!(copy.thumbnail, None);
    }

    #[test]
    fn test_headline_by_name_match() {
        let mut doc = Document::new("Ad");
        doc.add_layer(text("Body", "Small print", Some(14.0)))
            .expect("add");
        doc.add_layer(text("Main Headline", "Level Up Your Setup", Some(30.0)))
            .expect("add");

        let copy = extract(&doc);
        assert_eq!(copy.headline, "Level Up Your Setup");
        assert_eq!(copy.description, "Small print");
    }

    #[test]
    fn test_headline_by_font_size_and_description_split() {
        let mut doc = Document::new("Ad");
        doc.add_layer(text("Hook", "Big hook text", Some(48.0)))
            .expect("add");
        doc.add_layer(text("Body", "Body copy", Some(14.0)))
            .expect("add");

        let copy = extract(&doc);
        assert_eq!(copy.headline, "Big hook text");
        assert_eq!(copy.description, "Body copy");
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut doc = Document::new("Ad");
        doc.add_layer(text("Body", "Exactly at threshold", Some(40.0)))
            .expect("add");

        let copy = extract(&doc);
        assert_eq!(copy.headline, FALLBACK_HEADLINE);
        assert_eq!(copy.description, "Exactly at threshold");
    }

    #[test]
    fn test_unknown_font_size_is_not_salient() {
        let mut doc = Document::new("Ad");
        doc.add_layer(text("Body", "No size known", None)).expect("add");

        let copy = extract(&doc);
        assert_eq!(copy.headline, FALLBACK_HEADLINE);
    }

    // First-match selection means an earlier font-size match wins over a
    // later name match. Pinned deliberately: selection is not best-match.
    #[test]
    fn test_headline_earlier_size_match_beats_later_name_match() {
        let mut doc = Document::new("Ad");
        doc.add_layer(text("Big Print", "Earlier and large", Some(64.0)))
            .expect("add");
        doc.add_layer(text("Headline", "Named but later", Some(20.0)))
            .expect("add");

        let copy = extract(&doc);
        assert_eq!(copy.headline, "Earlier and large");
        assert_eq!(copy.description, "Named but later");
    }

    #[test]
    fn test_lone_text_layer_named_cta() {
        let mut doc = Document::new("Ad");
        doc.add_layer(text("CTA Button", "Buy now", Some(18.0)))
            .expect("add");
        doc.add_layer(Layer::image("Shot", "p.png", ImageRole::Product))
            .expect("add");

        let copy = extract(&doc);
        // No headline candidate, so the lone text layer serves as the
        // description fallback and as the call-to-action by name.
        assert_eq!(copy.headline, FALLBACK_HEADLINE);
        assert_eq!(copy.description, "Buy now");
        assert_eq!(copy.call_to_action, "Buy now");
        assert_eq!(copy.thumbnail, Some("p.png".to_string()));
    }

    #[test]
    fn test_cta_variant_wins_by_document_order() {
        let mut doc = Document::new("Ad");
        doc.add_layer(Layer::cta("Button", "Shop Now")).expect("add");
        doc.add_layer(text("Secondary CTA", "Learn more", Some(12.0)))
            .expect("add");

        let copy = extract(&doc);
        assert_eq!(copy.call_to_action, "Shop Now");
    }

    #[test]
    fn test_generic_image_is_not_a_thumbnail() {
        let mut doc = Document::new("Ad");
        doc.add_layer(Layer::image("Decoration", "swirl.svg", ImageRole::Generic))
            .expect("add");

        let copy = extract(&doc);
        assert_eq!(copy.thumbnail, None);
    }

    #[test]
    fn test_extract_does_not_mutate_input() {
        let mut doc = Document::new("Ad");
        doc.add_layer(text("Headline", "Hello", Some(50.0))).expect("add");
        let before = doc.clone();

        let first = extract(&doc);
        let second = extract(&doc);
        assert_eq!(doc, before);
        assert_eq!(first, second);
    }
}
