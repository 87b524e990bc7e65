//! Ordered message store with a single mutation entry point.
//!
//! The store is an append/update collection: messages are never removed or
//! reordered. A reply replaces the placeholder for its turn by id, keeping
//! its position in the sequence.

use chrono::Utc;
use rand::Rng;

use jyotibot_types::message::ChatMessage;

/// The ordered sequence of conversation messages.
///
/// Consumers render [`MessageStore::messages`] in store order, which equals
/// insertion order. All mutation goes through [`MessageStore::append_or_update`].
#[derive(Debug, Default)]
pub struct MessageStore {
    messages: Vec<ChatMessage>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only snapshot of the current sequence.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Insert `message`, replacing in place if a message with the same
    /// identity is already present.
    ///
    /// Identity is the (id, authorship) pair: a turn's user message and its
    /// AI reply share an id but occupy distinct slots, so the reply lands
    /// after the user message instead of overwriting it. Replacement
    /// preserves position; the incoming value carries the refreshed
    /// `created_at`.
    pub fn append_or_update(&mut self, message: ChatMessage) {
        match self
            .messages
            .iter_mut()
            .find(|m| m.id == message.id && m.ai == message.ai)
        {
            Some(existing) => *existing = message,
            None => self.messages.push(message),
        }
    }

    /// Resolve a message id: the explicit id if given, otherwise a fresh one
    /// derived from the current time plus a random offset.
    pub fn assign_id(explicit: Option<i64>) -> i64 {
        explicit.unwrap_or_else(|| {
            Utc::now().timestamp_millis() + rand::thread_rng().gen_range(0..1_000_000)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_id_appends() {
        let mut store = MessageStore::new();
        store.append_or_update(ChatMessage::new(1, "first", false));
        store.append_or_update(ChatMessage::new(2, "second", false));
        assert_eq!(store.len(), 2);
        assert_eq!(store.messages()[0].text, "first");
        assert_eq!(store.messages()[1].text, "second");
    }

    #[test]
    fn test_existing_id_replaces_in_place() {
        let mut store = MessageStore::new();
        store.append_or_update(ChatMessage::new(1, "first", false));
        store.append_or_update(ChatMessage::new(2, "second", false));
        store.append_or_update(ChatMessage::new(3, "third", false));

        store.append_or_update(ChatMessage::new(2, "revised", false));

        assert_eq!(store.len(), 3);
        assert_eq!(store.messages()[1].id, 2);
        assert_eq!(store.messages()[1].text, "revised");
        // Neighbors untouched.
        assert_eq!(store.messages()[0].text, "first");
        assert_eq!(store.messages()[2].text, "third");
    }

    #[test]
    fn test_reply_shares_id_without_overwriting_user_message() {
        let mut store = MessageStore::new();
        store.append_or_update(ChatMessage::new(5, "what about Saturn?", false));
        store.append_or_update(ChatMessage::new(5, "Saturn is retrograde.", true));

        assert_eq!(store.len(), 2);
        assert_eq!(store.messages()[0].id, 5);
        assert!(!store.messages()[0].ai);
        assert_eq!(store.messages()[1].id, 5);
        assert!(store.messages()[1].ai);

        // A second AI update for the same turn replaces the reply slot.
        store.append_or_update(ChatMessage::new(5, "Correction: direct.", true));
        assert_eq!(store.len(), 2);
        assert_eq!(store.messages()[1].text, "Correction: direct.");
    }

    #[test]
    fn test_replacement_refreshes_created_at() {
        let mut store = MessageStore::new();
        let mut original = ChatMessage::new(7, "pending", false);
        original.created_at -= chrono::Duration::seconds(30);
        let original_at = original.created_at;
        store.append_or_update(original);

        // Same identity (id and authorship): replaces slot 0 in place.
        store.append_or_update(ChatMessage::new(7, "done", false));
        assert_eq!(store.len(), 1);
        assert_eq!(store.messages()[0].text, "done");
        assert!(store.messages()[0].created_at > original_at);
    }

    #[test]
    fn test_assign_id_prefers_explicit() {
        assert_eq!(MessageStore::assign_id(Some(99)), 99);
    }

    #[test]
    fn test_assign_id_generates_near_now() {
        let now = Utc::now().timestamp_millis();
        let id = MessageStore::assign_id(None);
        assert!(id >= now);
        assert!(id < now + 1_000_000 + 1_000);
    }
}
