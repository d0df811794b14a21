//! Error types for studio operations.

use thiserror::Error;

use crate::gateway::GatewayError;
use crate::layer::LayerId;
use crate::session::SessionState;

/// Result type for studio operations.
pub type StudioResult<T> = Result<T, StudioError>;

/// Errors that can occur in studio operations.
#[derive(Debug, Error)]
pub enum StudioError {
    /// A layer with the same ID already exists in the document.
    #[error("Duplicate layer id: {0}")]
    DuplicateLayer(LayerId),

    /// Layer not found in the document.
    #[error("Layer not found: {0}")]
    LayerNotFound(LayerId),

    /// A text layer was given a negative or non-finite font size.
    #[error("Invalid font size {size} on layer '{name}'")]
    InvalidFontSize {
        /// Display name of the offending layer.
        name: String,
        /// The rejected size.
        size: f32,
    },

    /// A loaded snapshot could not be materialized into a document.
    #[error("Malformed document snapshot: {0}")]
    MalformedSnapshot(String),

    /// The session is closed; no further operations are possible.
    #[error("Session is closed")]
    SessionClosed,

    /// The requested transition is not valid from the current state.
    #[error("Cannot {action} while session is {state:?}")]
    InvalidTransition {
        /// Current session state.
        state: SessionState,
        /// The attempted action.
        action: &'static str,
    },

    /// The save operation failed at the persistence gateway.
    #[error("Save failed: {0}")]
    SaveFailed(#[from] GatewayError),

    /// Document serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
