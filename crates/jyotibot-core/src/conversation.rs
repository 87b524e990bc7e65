//! Per-turn conversation state machine.
//!
//! A turn is one user input and its single eventual AI reply, correlated by
//! a shared id. The controller appends the user message optimistically,
//! issues exactly one request through the [`ChatResponder`] seam, and
//! reconciles the response into the store under the same id. One turn may
//! be outstanding at a time; further input is rejected until it resolves.

use tracing::{debug, warn};

use jyotibot_types::error::ChatError;
use jyotibot_types::message::ChatMessage;

use crate::payload::ChatPayload;
use crate::profile_provider::ProfileProvider;
use crate::responder::ChatResponder;
use crate::store::MessageStore;

/// Where the controller is in the current turn.
///
/// The UI renders relative to this enum; there is no separate loading flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// No request outstanding; input is accepted.
    Idle,
    /// The identified turn is awaiting its reply; input is rejected.
    Pending(i64),
}

/// A turn that has been opened but not yet resolved.
#[derive(Debug)]
pub struct PendingTurn {
    pub turn_id: i64,
    pub payload: ChatPayload,
}

/// Result of attempting to open a turn.
#[derive(Debug)]
pub enum BeginTurn {
    /// Input was empty or whitespace; nothing appended, nothing to send.
    Ignored,
    /// Another turn is still pending; nothing appended.
    Rejected,
    /// User message appended, outstanding slot taken, payload ready.
    Started(PendingTurn),
}

/// Result of a full submit (open, send, resolve).
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Ignored,
    Rejected,
    /// The turn ran to resolution: a reply bubble or an error bubble.
    Completed { turn_id: i64 },
}

/// Drives the message lifecycle for one conversation.
///
/// Generic over the responder and profile seams so tests can run without a
/// network or a filesystem; the CLI pins these to the infra implementations.
pub struct ConversationController<R, P> {
    store: MessageStore,
    responder: R,
    profiles: P,
    session_id: String,
    phase: TurnPhase,
}

impl<R: ChatResponder, P: ProfileProvider> ConversationController<R, P> {
    pub fn new(responder: R, profiles: P, session_id: impl Into<String>) -> Self {
        Self {
            store: MessageStore::new(),
            responder,
            profiles,
            session_id: session_id.into(),
            phase: TurnPhase::Idle,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.store.messages()
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, TurnPhase::Pending(_))
    }

    /// Open a turn: validate input, append the user message, take the
    /// outstanding slot, and build the outbound payload.
    ///
    /// The profile is read once per turn. A storage failure degrades to an
    /// absent profile rather than blocking the turn.
    pub async fn begin_turn(&mut self, input: &str) -> BeginTurn {
        let input = input.trim();
        if input.is_empty() {
            return BeginTurn::Ignored;
        }
        if let TurnPhase::Pending(id) = self.phase {
            debug!(turn_id = id, "submission rejected while turn pending");
            return BeginTurn::Rejected;
        }

        let turn_id = MessageStore::assign_id(None);
        self.store
            .append_or_update(ChatMessage::new(turn_id, input, false));
        self.phase = TurnPhase::Pending(turn_id);

        let profile = match self.profiles.load().await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(error = %e, "profile unavailable, sending turn without it");
                None
            }
        };
        let payload = ChatPayload::build(input, &self.session_id, profile.as_ref());

        debug!(turn_id, has_profile = payload.name.is_some(), "turn opened");
        BeginTurn::Started(PendingTurn { turn_id, payload })
    }

    /// Close a turn: reconcile the response into the store under the turn
    /// id and free the outstanding slot.
    ///
    /// Failure is terminal for the turn and becomes a normal AI bubble.
    pub fn resolve_turn(&mut self, turn_id: i64, result: Result<String, ChatError>) {
        let text = match result {
            Ok(reply) => reply,
            Err(e) => {
                debug!(turn_id, error = %e, "turn failed");
                format!("Oops ! {e}")
            }
        };
        self.store
            .append_or_update(ChatMessage::new(turn_id, text, true));
        if self.phase == TurnPhase::Pending(turn_id) {
            self.phase = TurnPhase::Idle;
        }
    }

    /// Run one full turn: open, send the single request, resolve.
    pub async fn submit(&mut self, input: &str) -> SubmitOutcome {
        match self.begin_turn(input).await {
            BeginTurn::Ignored => SubmitOutcome::Ignored,
            BeginTurn::Rejected => SubmitOutcome::Rejected,
            BeginTurn::Started(turn) => {
                let result = self.responder.send(&turn.payload).await;
                self.resolve_turn(turn.turn_id, result);
                SubmitOutcome::Completed {
                    turn_id: turn.turn_id,
                }
            }
        }
    }
}
