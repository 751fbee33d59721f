use std::fmt;

// =========================================================
// Error taxonomy
// =========================================================

/// Client-side request errors.
///
/// Two cases cover everything this layer can observe:
/// - `Transport`: the request never reached the server or never returned
///   (network failure, request construction failure).
/// - `Api`: the server answered with a non-2xx status; carries the status
///   code and the raw response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    Transport { message: String },
    Api { status: u16, body: String },
}

impl ClientError {
    pub fn transport(message: impl Into<String>) -> Self {
        ClientError::Transport {
            message: message.into(),
        }
    }

    pub fn api(status: u16, body: impl Into<String>) -> Self {
        ClientError::Api {
            status,
            body: body.into(),
        }
    }

    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Transport { .. } => None,
            ClientError::Api { status, .. } => Some(*status),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport { message } => write!(f, "[TRANSPORT] {}", message),
            ClientError::Api { status, body } => write!(f, "[API {}] {}", status, body),
        }
    }
}

impl std::error::Error for ClientError {}

pub type ClientResult<T> = std::result::Result<T, ClientError>;
