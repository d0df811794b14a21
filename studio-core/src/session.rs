//! The studio session: one continuous editing interaction with exactly
//! one document, from boot to close.
//!
//! The controller is an event-driven state machine. Gateway exchanges
//! are split into a `begin`/`complete` pair carrying a generation
//! ticket, so a response that arrives after the session moved on (most
//! importantly, after `close`) is provably discarded instead of being
//! applied to a session that no longer exists. The async [`boot`] and
//! [`save`] methods drive the gateway and feed its answer back through
//! the same event core.
//!
//! [`boot`]: StudioSession::boot
//! [`save`]: StudioSession::save

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::extract;
use crate::gateway::{CreativeId, GatewayError, PersistenceGateway, SavePayload};
use crate::quality;
use crate::snapshot::DocumentSnapshot;
use crate::{StudioError, StudioResult};

/// Lifecycle state of a studio session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// Resolving the initial document.
    Booting,
    /// AI-assisted creation flow is active.
    Wizard,
    /// Direct editing flow is active.
    Editor,
    /// A save exchange is in flight.
    Saving,
    /// The session is over; the in-memory document is gone.
    Closed,
}

/// Explicit session-start parameters.
///
/// The controller never reads ambient state; whatever the embedding
/// shell knows (a URL query parameter, a route argument) it passes here.
#[derive(Debug, Clone, Default)]
pub struct SessionParams {
    /// Identifier of an existing creative to load, if any.
    pub document_id: Option<CreativeId>,
    /// Whether the AI wizard flow was explicitly requested. AI
    /// assistance is opt-in; without it the session boots straight into
    /// the editor.
    pub request_wizard: bool,
}

impl SessionParams {
    /// Parameters for a blank editor session.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Parameters for editing an existing creative.
    #[must_use]
    pub fn for_creative(id: CreativeId) -> Self {
        Self {
            document_id: Some(id),
            request_wizard: false,
        }
    }

    /// Parameters for a wizard-first session.
    #[must_use]
    pub fn with_wizard() -> Self {
        Self {
            document_id: None,
            request_wizard: true,
        }
    }
}

/// Ticket identifying one load exchange with the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct LoadTicket(u64);

/// Ticket identifying one save exchange with the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct SaveTicket(u64);

/// What [`StudioSession::begin_boot`] asks the caller to do next.
#[derive(Debug)]
pub enum BootStep {
    /// The session is already in its active state; no gateway call needed.
    Ready,
    /// Issue a load request to the gateway and feed the answer to
    /// [`StudioSession::complete_load`].
    Load {
        /// The creative to load.
        id: CreativeId,
        /// Ticket to present with the response.
        ticket: LoadTicket,
    },
}

/// How a load response was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadResolution {
    /// The response was applied; the session is now in the editor.
    Applied,
    /// The response was stale (superseded or the session closed) and was
    /// dropped without touching session state.
    Discarded,
}

/// What [`StudioSession::request_save`] decided.
#[derive(Debug)]
pub enum SaveStep {
    /// Dispatch this payload to the gateway and feed the answer to
    /// [`StudioSession::complete_save`].
    Dispatch {
        /// The assembled persistence payload.
        payload: SavePayload,
        /// Ticket to present with the response.
        ticket: SaveTicket,
    },
    /// A save is already in flight; this request is ignored.
    InFlight,
}

/// Outcome of a completed save exchange.
#[derive(Debug)]
pub enum SaveOutcome {
    /// The creative was persisted; the session is closed.
    Saved(CreativeId),
    /// The save failed; the session is back in the editor with the
    /// document unchanged, and the failure should be surfaced to the
    /// user. Retrying is safe.
    Failed(GatewayError),
    /// The response did not match the in-flight exchange and was dropped.
    Discarded,
}

/// Controller for one editing session.
pub struct StudioSession {
    state: SessionState,
    document: Option<Document>,
    gateway: Arc<dyn PersistenceGateway>,
    params: SessionParams,
    /// Request generation. Bumped when an exchange starts and when the
    /// session closes; a completion whose ticket does not match is stale.
    generation: u64,
    saved_id: Option<CreativeId>,
}

impl StudioSession {
    /// Create a session in the `Booting` state.
    #[must_use]
    pub fn new(params: SessionParams, gateway: Arc<dyn PersistenceGateway>) -> Self {
        Self {
            state: SessionState::Booting,
            document: None,
            gateway,
            params,
            generation: 0,
            saved_id: None,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The session's document, while the session is live.
    #[must_use]
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Mutable access for the editing surface. Only available in the
    /// editor state; the document must not change mid-save.
    pub fn document_mut(&mut self) -> Option<&mut Document> {
        match self.state {
            SessionState::Editor => self.document.as_mut(),
            _ => None,
        }
    }

    /// The library ID recorded by a successful save.
    #[must_use]
    pub fn saved_id(&self) -> Option<CreativeId> {
        self.saved_id
    }

    // -----------------------------------------------------------------------
    // Boot
    // -----------------------------------------------------------------------

    /// Start the boot transition.
    ///
    /// Without a document ID the session opens immediately (wizard if
    /// requested, editor otherwise). With one, the caller is handed a
    /// load request to dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::InvalidTransition`] unless the session is
    /// in the `Booting` state.
    pub fn begin_boot(&mut self) -> StudioResult<BootStep> {
        if self.state != SessionState::Booting {
            return Err(StudioError::InvalidTransition {
                state: self.state,
                action: "boot",
            });
        }

        if let Some(id) = self.params.document_id {
            self.generation += 1;
            return Ok(BootStep::Load {
                id,
                ticket: LoadTicket(self.generation),
            });
        }

        self.state = if self.params.request_wizard {
            SessionState::Wizard
        } else {
            SessionState::Editor
        };
        self.document = Some(Document::new(""));
        Ok(BootStep::Ready)
    }

    /// Apply the gateway's answer to an outstanding load request.
    ///
    /// Load failures never block editing: a missing, unreadable, or
    /// malformed snapshot degrades to a fresh empty document, logged for
    /// diagnostics. A stale ticket - the session closed or moved on
    /// while the request was in flight - is discarded outright.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<Option<DocumentSnapshot>, GatewayError>,
    ) -> LoadResolution {
        if self.state != SessionState::Booting || ticket.0 != self.generation {
            tracing::debug!("Discarding stale load response (ticket {})", ticket.0);
            return LoadResolution::Discarded;
        }

        let document = match outcome {
            Ok(Some(snapshot)) => match snapshot.into_document() {
                Ok(document) => document,
                Err(e) => {
                    tracing::warn!("Loaded snapshot is malformed, opening blank: {e}");
                    Document::new("")
                }
            },
            Ok(None) => {
                tracing::warn!("Creative not found, opening blank document");
                Document::new("")
            }
            Err(e) => {
                tracing::warn!("Load failed, opening blank document: {e}");
                Document::new("")
            }
        };

        self.state = SessionState::Editor;
        self.document = Some(document);
        LoadResolution::Applied
    }

    /// Boot the session, driving the gateway when a load is needed.
    ///
    /// Never fails on account of the gateway; load problems degrade to a
    /// blank document.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::InvalidTransition`] unless the session is
    /// in the `Booting` state.
    pub async fn boot(&mut self) -> StudioResult<()> {
        match self.begin_boot()? {
            BootStep::Ready => Ok(()),
            BootStep::Load { id, ticket } => {
                let outcome = self.gateway.load_document_snapshot(&id).await;
                self.complete_load(ticket, outcome);
                Ok(())
            }
        }
    }

    // -----------------------------------------------------------------------
    // Wizard
    // -----------------------------------------------------------------------

    /// Complete the wizard flow, carrying its produced document into the
    /// editor. Happens at most once per session.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::InvalidTransition`] unless the session is
    /// in the `Wizard` state.
    pub fn complete_wizard(&mut self, document: Document) -> StudioResult<()> {
        if self.state != SessionState::Wizard {
            return Err(StudioError::InvalidTransition {
                state: self.state,
                action: "complete wizard",
            });
        }
        self.state = SessionState::Editor;
        self.document = Some(document);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Save
    // -----------------------------------------------------------------------

    /// Start a save transition for the current document.
    ///
    /// Runs the field extraction and quality audit, assembles the
    /// persistence payload, and hands it to the caller for dispatch. A
    /// request arriving while a save is already in flight returns
    /// [`SaveStep::InFlight`] and changes nothing - one user action, one
    /// library entry.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::SessionClosed`] after close, and
    /// [`StudioError::InvalidTransition`] outside the editor state.
    pub fn request_save(&mut self) -> StudioResult<SaveStep> {
        match self.state {
            SessionState::Saving => return Ok(SaveStep::InFlight),
            SessionState::Closed => return Err(StudioError::SessionClosed),
            SessionState::Editor => {}
            SessionState::Booting | SessionState::Wizard => {
                return Err(StudioError::InvalidTransition {
                    state: self.state,
                    action: "save",
                });
            }
        }

        let document = self
            .document
            .as_ref()
            .ok_or(StudioError::SessionClosed)?;

        let copy = extract::extract(document);
        let mut meta = document.meta.clone();
        if meta.score.is_none() {
            meta.score = Some(quality::audit(document).score);
        }
        let payload = SavePayload {
            copy,
            snapshot: DocumentSnapshot::from(document),
            meta,
        };

        self.state = SessionState::Saving;
        self.generation += 1;
        Ok(SaveStep::Dispatch {
            payload,
            ticket: SaveTicket(self.generation),
        })
    }

    /// Apply the gateway's answer to an outstanding save request.
    ///
    /// Success closes the session and records the assigned library ID.
    /// Failure returns to the editor with the document untouched; the
    /// error is handed back for user surfacing and the save can be
    /// retried.
    pub fn complete_save(
        &mut self,
        ticket: SaveTicket,
        result: Result<CreativeId, GatewayError>,
    ) -> SaveOutcome {
        if self.state != SessionState::Saving || ticket.0 != self.generation {
            tracing::debug!("Discarding stale save response (ticket {})", ticket.0);
            return SaveOutcome::Discarded;
        }

        match result {
            Ok(id) => {
                tracing::info!("Creative saved as {id}");
                self.saved_id = Some(id);
                self.state = SessionState::Closed;
                self.document = None;
                SaveOutcome::Saved(id)
            }
            Err(e) => {
                tracing::warn!("Save failed, staying in editor: {e}");
                self.state = SessionState::Editor;
                SaveOutcome::Failed(e)
            }
        }
    }

    /// Save the current document, driving the gateway.
    ///
    /// On success the session is closed and the assigned ID returned.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::SaveFailed`] when the gateway rejects the
    /// payload (the session stays in the editor and the call may be
    /// retried), plus the transition errors of [`Self::request_save`].
    pub async fn save(&mut self) -> StudioResult<CreativeId> {
        match self.request_save()? {
            SaveStep::InFlight => Err(StudioError::InvalidTransition {
                state: self.state,
                action: "save",
            }),
            SaveStep::Dispatch { payload, ticket } => {
                let result = self.gateway.save_creative(payload).await;
                match self.complete_save(ticket, result) {
                    SaveOutcome::Saved(id) => Ok(id),
                    SaveOutcome::Failed(e) => Err(StudioError::SaveFailed(e)),
                    SaveOutcome::Discarded => Err(StudioError::SessionClosed),
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Close
    // -----------------------------------------------------------------------

    /// Close the session without saving, discarding the in-memory
    /// document. Idempotent. Any gateway response still in flight will
    /// be discarded when it arrives.
    pub fn close(&mut self) {
        if self.state == SessionState::Closed {
            return;
        }
        self.generation += 1;
        self.state = SessionState::Closed;
        self.document = None;
    }
}

impl std::fmt::Debug for StudioSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudioSession")
            .field("state", &self.state)
            .field("document", &self.document)
            .field("generation", &self.generation)
            .field("saved_id", &self.saved_id)
            .finish_non_exhaustive()
    }
}
