//! Error-reporting policy for synchronization failures
//!
//! Two failure classes exist: the service rejecting an operation through its
//! envelope (`resultCode != 0`), and transport-level trouble (connection
//! failures, bad statuses, unparseable bodies). Both surface to the user as
//! text in the app slice; the reducer keeps local state untouched otherwise.

use thiserror::Error;
use todoflow_client::{ClientError, ServerResponse};

/// Fallback text when a rejection arrives without any message
pub const GENERIC_ERROR: &str = "Some error occurred";

/// A failed synchronization attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The service rejected the operation via its response envelope
    #[error("{0}")]
    App(String),

    /// The request never produced a usable envelope
    #[error("{0}")]
    Network(String),
}

impl SyncError {
    /// Build an error from a rejection envelope
    ///
    /// Uses the first server message, falling back to [`GENERIC_ERROR`] when
    /// the envelope carries none.
    #[must_use]
    pub fn from_envelope<T>(response: &ServerResponse<T>) -> Self {
        Self::App(
            response
                .first_message()
                .unwrap_or(GENERIC_ERROR)
                .to_string(),
        )
    }

    /// The text surfaced to the user
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::App(message) | Self::Network(message) => message,
        }
    }
}

impl From<ClientError> for SyncError {
    fn from(error: ClientError) -> Self {
        Self::Network(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

    use super::*;
    use todoflow_client::EmptyResponse;

    #[test]
    fn envelope_error_uses_first_message() {
        let response: EmptyResponse =
            serde_json::from_str(r#"{"resultCode":1,"messages":["title required","second"]}"#)
                .unwrap();
        let error = SyncError::from_envelope(&response);
        assert_eq!(error, SyncError::App("title required".into()));
        assert_eq!(error.message(), "title required");
    }

    #[test]
    fn envelope_error_falls_back_to_generic_text() {
        let response: EmptyResponse =
            serde_json::from_str(r#"{"resultCode":1,"messages":[]}"#).unwrap();
        assert_eq!(
            SyncError::from_envelope(&response).message(),
            "Some error occurred"
        );
    }

    #[test]
    fn client_error_becomes_network_error() {
        let error: SyncError = ClientError::Unauthorized.into();
        assert!(matches!(error, SyncError::Network(_)));
    }
}
