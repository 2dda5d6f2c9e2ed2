//! Error types for the danmaku service client.
//!
//! Two layers live here:
//! - `RemoteError`: the wire-level error object the service embeds in
//!   response bodies (`errors` array) and that we also build locally for
//!   5xx responses.
//! - `Error`: the crate-wide error enum covering validation, configuration,
//!   transport, decode and remote failures.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error object used by the remote service.
///
/// Appears as entries of the `errors` array on entity responses. A
/// non-empty array means the call failed at the application level even when
/// the HTTP status reports success, and the first entry is the
/// authoritative cause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteError {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl RemoteError {
    /// Builds the local stand-in for a 5xx response, e.g.
    /// `"Application: Status code error"` with the observed status.
    #[must_use]
    pub fn status(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code: Some(status_code),
        }
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "{} (status {})", self.message, code),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for RemoteError {}

#[derive(Error, Debug)]
pub enum Error {
    /// Local precondition failure, raised before any network call.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    /// Identifier is not a 24-character hex string.
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// Client-credentials token exchange failed.
    #[error("Token exchange failed: {0}")]
    TokenExchange(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP middleware error: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failure reported by the remote service, either embedded in the
    /// response body or synthesized from a 5xx status.
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl Error {
    /// HTTP-like status carried by a remote failure, if any.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Remote(remote) => remote.status_code,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_display_includes_status() {
        let err = RemoteError::status("Post: Status code error", 502);
        assert_eq!(err.to_string(), "Post: Status code error (status 502)");
    }

    #[test]
    fn remote_error_display_without_status() {
        let err = RemoteError {
            message: "uri is invalid".to_string(),
            status_code: None,
        };
        assert_eq!(err.to_string(), "uri is invalid");
    }

    #[test]
    fn remote_error_json_round_trip() {
        let err = RemoteError::status("boom", 500);
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"message":"boom","status_code":500}"#);
        let back: RemoteError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn status_code_accessor_only_for_remote_errors() {
        let remote: Error = RemoteError::status("x", 503).into();
        assert_eq!(remote.status_code(), Some(503));
        let local = Error::InvalidParams("ID is required".to_string());
        assert_eq!(local.status_code(), None);
    }
}
