//! HttpChatResponder -- concrete [`ChatResponder`] over the inference endpoint.
//!
//! Sends one JSON POST per turn and extracts the reply from the nested
//! `response.message` field, falling back to the body's top-level `error`
//! string when the service answered without a reply.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use jyotibot_core::payload::ChatPayload;
use jyotibot_core::responder::ChatResponder;
use jyotibot_types::error::ChatError;

/// Reqwest-backed responder for the deployed inference endpoint.
pub struct HttpChatResponder {
    client: reqwest::Client,
    endpoint_url: String,
}

/// Wire shape of the endpoint's reply.
#[derive(Debug, Deserialize)]
struct InferenceBody {
    #[serde(default)]
    response: Option<InferenceResponse>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InferenceResponse {
    #[serde(default)]
    message: Option<String>,
}

impl HttpChatResponder {
    /// Create a responder for the given endpoint URL.
    pub fn new(endpoint_url: String) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| ChatError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint_url,
        })
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Pick the displayable text out of a parsed body.
    fn extract_reply(body: InferenceBody) -> Result<String, ChatError> {
        if let Some(message) = body.response.and_then(|r| r.message) {
            return Ok(message);
        }
        // The service sometimes reports a problem in-band; show it as the
        // reply rather than treating the turn as a transport failure.
        if let Some(error) = body.error {
            return Ok(error);
        }
        Err(ChatError::MalformedResponse(
            "body carries neither response.message nor error".to_string(),
        ))
    }
}

impl ChatResponder for HttpChatResponder {
    async fn send(&self, payload: &ChatPayload) -> Result<String, ChatError> {
        debug!(endpoint = %self.endpoint_url, "sending chat turn");

        let response = self
            .client
            .post(&self.endpoint_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: InferenceBody = response
            .json()
            .await
            .map_err(|e| ChatError::MalformedResponse(e.to_string()))?;

        Self::extract_reply(body)
    }
}
