//! # Studio Core
//!
//! The creative-studio engine behind the ad library: a layered,
//! editable document model, the session lifecycle that carries a
//! creative from a blank canvas (or the AI wizard) to a persisted
//! library entry, and the heuristic that derives structured ad-copy
//! fields from an untagged stack of layers.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 studio-core                 │
//! ├─────────────────────────────────────────────┤
//! │  Document Model  │  Studio Session          │
//! │  - Layers        │  - boot / wizard / edit  │
//! │  - Metadata      │  - save / close          │
//! │  - Snapshots     │  - stale-response guard  │
//! ├─────────────────────────────────────────────┤
//! │  Extraction      │  Persistence Gateway     │
//! │  - Ad copy       │  - load snapshot         │
//! │  - Quality audit │  - save creative         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Rendering, canvas interaction, and the wizard's generation logic
//! live in the embedding shell; persistence lives behind the
//! [`PersistenceGateway`] trait (see the `studio-library` crate).

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod blueprint;
pub mod document;
pub mod error;
pub mod extract;
pub mod gateway;
pub mod layer;
pub mod quality;
pub mod session;
pub mod snapshot;

pub use blueprint::{starter_blueprints, Blueprint};
pub use document::{Document, DocumentMeta};
pub use error::{StudioError, StudioResult};
pub use extract::{extract, AdCopy};
pub use gateway::{CreativeId, GatewayError, PersistenceGateway, SavePayload};
pub use layer::{ImageRole, Layer, LayerId, LayerKind};
pub use quality::{audit, QualityIssue, QualityReport};
pub use session::{
    BootStep, LoadResolution, LoadTicket, SaveOutcome, SaveStep, SaveTicket, SessionParams,
    SessionState, StudioSession,
};
pub use snapshot::{DocumentSnapshot, LayerSnapshot};

/// Studio core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
