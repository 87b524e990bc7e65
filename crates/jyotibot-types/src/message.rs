//! Chat message type for the conversation view.
//!
//! A `ChatMessage` is one bubble in the conversation: either user-authored
//! or produced by the remote responder. A user turn and its eventual reply
//! share the same `id`, which is how the reply replaces the right slot in
//! the ordered message sequence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single message in the conversation.
///
/// Messages are ordered by insertion in the store. Ids are Unix-millisecond
/// timestamps (plus a random offset for generated ids), unique within the
/// store's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Turn identifier. A reply reuses the id of the user message it answers.
    pub id: i64,
    /// When this message value was constructed. Refreshed on in-place update.
    pub created_at: DateTime<Utc>,
    /// Message body. For a failed turn this carries the error description.
    pub text: String,
    /// True if produced by the remote responder, false if user-authored.
    pub ai: bool,
}

impl ChatMessage {
    /// Build a message with `created_at` set to now.
    pub fn new(id: i64, text: impl Into<String>, ai: bool) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            text: text.into(),
            ai,
        }
    }
}
