//! ChatResponder trait definition.
//!
//! The single seam between the conversation controller and the network.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition); the concrete
//! reqwest-backed implementation lives in `jyotibot-infra`.

use jyotibot_types::error::ChatError;

use crate::payload::ChatPayload;

/// One outbound request per chat turn.
///
/// `send` returns the text to show in the AI bubble: the reply extracted
/// from the response body, or the body's own error string when the service
/// answered without a reply. Transport and protocol failures come back as
/// [`ChatError`] and are rendered by the controller, never propagated.
pub trait ChatResponder: Send + Sync {
    fn send(
        &self,
        payload: &ChatPayload,
    ) -> impl std::future::Future<Output = Result<String, ChatError>> + Send;
}
