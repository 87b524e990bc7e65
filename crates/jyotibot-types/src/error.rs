use thiserror::Error;

/// Errors related to profile collection and persistence.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("required field '{0}' is missing")]
    MissingField(&'static str),

    #[error("invalid {field}: '{value}'")]
    InvalidField { field: &'static str, value: String },

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors from the address-search lookup.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("address not found")]
    NotFound,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected response: {0}")]
    Deserialization(String),
}

/// Errors from a chat turn's outbound request.
///
/// These are caught at the controller boundary and rendered as a normal
/// AI-authored message; they never propagate out of the conversation.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response: {0}")]
    MalformedResponse(String),
}
