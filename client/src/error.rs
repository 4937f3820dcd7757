//! Error types for the todo service client

use thiserror::Error;

/// Errors that can occur when talking to the remote todo service
///
/// These cover the transport layer only. Application-level failures travel
/// inside a well-formed response envelope (`resultCode != 0`) and are not
/// errors at this level.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection refused, DNS, timeout, ...)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be parsed
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// Unauthorized - missing or invalid credentials
    #[error("Unauthorized - missing or invalid credentials")]
    Unauthorized,

    /// Service returned a non-success HTTP status
    #[error("HTTP error (status {status}): {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },
}
