//! Error types for the todo API client.
//!
//! # Design
//! The service never answers 404: validation failures and unknown ids both
//! arrive as a 400 with the same structured body, so there is no status to
//! hang a `NotFound` variant on. `Rejected` carries that parsed body instead
//! and lets the caller inspect the failures. Any other non-expected status
//! lands in `HttpError` with the raw status code and body for debugging.

use thiserror::Error;

use crate::types::ErrorBody;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the request with a 400 and a parseable
    /// `{message, failures}` body.
    #[error("request rejected: {}", .0.message)]
    Rejected(ErrorBody),

    /// The server returned a status the operation does not expect, with a
    /// body that is not the standard rejection shape.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
