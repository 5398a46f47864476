//! Error taxonomy and the central error mapper.
//!
//! # Design
//! Handlers return `Result<_, ValidationError>` instead of building error
//! responses inline. The `IntoResponse` impl is the single place a failure
//! becomes HTTP: always status 400 with the `{message, failures}` body, no
//! matter whether a validation rule or a lookup failed. The API
//! deliberately never answers 404.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::messages;

/// One field-level validation problem.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationFailure {
    pub message: String,
    pub field: String,
}

impl ValidationFailure {
    pub fn new(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: field.into(),
        }
    }
}

/// Aggregate request error: one top-level message plus field failures.
///
/// Every handler failure is normalized into this shape before it leaves the
/// handler; serializing it yields the error body the API promises.
#[derive(Debug, Clone, Error, Serialize, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub failures: Vec<ValidationFailure>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, failures: Vec<ValidationFailure>) -> Self {
        Self {
            message: message.into(),
            failures,
        }
    }

    /// Body validation failed; wraps the failures the rule set reported.
    pub fn insufficient_request(failures: Vec<ValidationFailure>) -> Self {
        Self::new(messages::INSUFFICIENT_REQUEST, failures)
    }

    /// Lookup failed for `id`. Unknown and malformed ids both end up here.
    pub fn resource_not_found(id: &str) -> Self {
        Self::new(
            messages::RESOURCE_NOT_FOUND,
            vec![ValidationFailure::new(
                format!("todo item not found: {id}"),
                "id",
            )],
        )
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}
