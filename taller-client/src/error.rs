//! Client error types

use http::StatusCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// No usable session token; the request was never issued
    #[error("Session expired")]
    MissingSession,

    /// Network-level failure (connect, TLS, body read)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status from the server, with its message when present
    #[error("Server error {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Server {
        status: StatusCode,
        message: Option<String>,
    },

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client-side validation rejected the input
    #[error("Validation error on {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Request dropped because its owner was torn down
    #[error("Request cancelled")]
    Cancelled,

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// User-facing message: the server-provided text when there is one,
    /// otherwise the given localized fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::MissingSession => {
                "Sesión expirada. Por favor, inicia sesión nuevamente.".to_string()
            }
            ClientError::Server {
                message: Some(msg), ..
            } if !msg.is_empty() => msg.clone(),
            _ => fallback.to_string(),
        }
    }

    /// True when the failure was resolved before any network call
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ClientError::MissingSession | ClientError::Validation { .. }
        )
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
