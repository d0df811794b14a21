//! The persistence contract the studio core consumes.
//!
//! The gateway's internal storage format is its own concern; the core
//! only depends on this narrow read/write surface. See the
//! `studio-library` crate for the provided implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::document::DocumentMeta;
use crate::extract::AdCopy;
use crate::snapshot::DocumentSnapshot;

/// Identifier of a persisted creative (library entry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreativeId(Uuid);

impl CreativeId {
    /// Create a new unique creative ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a creative ID from its string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid UUID.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }
}

impl Default for CreativeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CreativeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the gateway needs to persist one creative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavePayload {
    /// Extracted ad-copy fields for indexing and library cards.
    pub copy: AdCopy,
    /// The raw document snapshot, reloadable into an editing session.
    pub snapshot: DocumentSnapshot,
    /// Document metadata (mood, blueprint id, quality score).
    pub meta: DocumentMeta,
}

/// Errors surfaced by a persistence gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The backing store is unreachable or refused the request.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// An I/O error occurred while reading or writing a record.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Durable load/save of creatives.
///
/// `load_document_snapshot` is idempotent and has no side effects on the
/// caller's state. `save_creative` is not required to be idempotent:
/// repeated saves of a not-yet-persisted document may create distinct
/// library entries.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Load the document snapshot of a previously saved creative.
    ///
    /// Returns `Ok(None)` when no creative with this ID exists.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] when the store cannot answer.
    async fn load_document_snapshot(
        &self,
        id: &CreativeId,
    ) -> Result<Option<DocumentSnapshot>, GatewayError>;

    /// Persist a creative and return its library ID.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] when the record cannot be written.
    async fn save_creative(&self, payload: SavePayload) -> Result<CreativeId, GatewayError>;
}
