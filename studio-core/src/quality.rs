//! Deterministic quality audit for ad documents.
//!
//! Flags structural issues (missing headline, missing call-to-action,
//! no product imagery, overlong headline copy) and condenses them into
//! a 0-100 score. The save path uses the score to fill the document's
//! quality metadata when the author has not supplied one.

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::extract::{is_cta_candidate, is_headline_candidate};
use crate::layer::{ImageRole, Layer, LayerKind};

/// Maximum headline length before readability suffers on small placements.
pub const MAX_HEADLINE_CHARS: usize = 40;

/// A single structural finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum QualityIssue {
    /// The document has no layers at all.
    EmptyDocument,
    /// No layer qualifies as a headline.
    MissingHeadline,
    /// No layer qualifies as a call-to-action.
    MissingCallToAction,
    /// No image layer carries the product role.
    MissingProductImage,
    /// The headline candidate's text exceeds [`MAX_HEADLINE_CHARS`].
    HeadlineTooLong {
        /// Actual character count.
        chars: usize,
    },
}

impl QualityIssue {
    /// Score deduction for this issue.
    #[must_use]
    pub const fn penalty(&self) -> u8 {
        match self {
            Self::EmptyDocument => 60,
            Self::MissingHeadline => 25,
            Self::MissingCallToAction => 20,
            Self::MissingProductImage => 15,
            Self::HeadlineTooLong { .. } => 10,
        }
    }
}

/// Outcome of a document audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    /// Condensed score, 0-100.
    pub score: u8,
    /// Individual findings, in detection order.
    pub issues: Vec<QualityIssue>,
}

impl QualityReport {
    /// Whether the audit found nothing to flag.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Audit a document and produce a score plus issue list.
///
/// Pure and deterministic; an empty document is valid but scores at the
/// floor of its deductions, never below zero.
#[must_use]
pub fn audit(document: &Document) -> QualityReport {
    let mut issues = Vec::new();

    if document.is_empty() {
        issues.push(QualityIssue::EmptyDocument);
    }

    let headline = document.layers().find(|l| is_headline_candidate(l));
    match headline.and_then(Layer::text_content) {
        None => issues.push(QualityIssue::MissingHeadline),
        Some(text) if text.chars().count() > MAX_HEADLINE_CHARS => {
            issues.push(QualityIssue::HeadlineTooLong {
                chars: text.chars().count(),
            });
        }
        Some(_) => {}
    }

    if !document.layers().any(|l| is_cta_candidate(l)) {
        issues.push(QualityIssue::MissingCallToAction);
    }

    let has_product = document.layers().any(|l| {
        matches!(
            l.kind,
            LayerKind::Image {
                role: ImageRole::Product,
                ..
            }
        )
    });
    if !has_product {
        issues.push(QualityIssue::MissingProductImage);
    }

    let deductions: u32 = issues.iter().map(|i| u32::from(i.penalty())).sum();
    // Result is always within 0..=100.
    #[allow(clippy::cast_possible_truncation)]
    let score = 100_u32.saturating_sub(deductions) as u8;
    QualityReport { score, issues }
}
