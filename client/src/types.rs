//! Wire types for the todo API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently, so
//! the client crate never depends on the server's internals. Integration
//! tests catch any schema drift between the two crates. Timestamps cross the
//! wire in camelCase (`createdAt`, `updatedAt`) as RFC 3339 strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Request payload for updating an existing todo. PUT replaces the title;
/// there are no partial-update semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub title: String,
}

/// One field-level problem inside a rejection body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldFailure {
    pub message: String,
    pub field: String,
}

/// The structured body every 400 response carries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
    pub failures: Vec<FieldFailure>,
}
