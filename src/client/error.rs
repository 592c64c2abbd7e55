//! Client error types

use std::fmt;

/// Errors surfaced by an events client.
///
/// Builders and transformers never produce these; they pass through from the
/// client to the caller unchanged.
#[derive(Debug)]
pub enum ClientError {
    /// The request never produced a response
    Transport(String),
    /// The API answered with a non-success status
    Status {
        code: u16,
        detail: String,
    },
    /// The response body was not valid JSON
    Decode(serde_json::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "Request failed: {}", msg),
            Self::Status { code, detail } => {
                write!(f, "Events API returned {}: {}", code, detail)
            }
            Self::Decode(source) => write!(f, "Invalid response body: {}", source),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(source) => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err)
    }
}
