//! Validation rule sets for request bodies.
//!
//! A rule set takes the parsed request body and returns the field-level
//! failures it finds; an empty list means the body passed. Rules are pure
//! checks and never touch the store.

use serde_json::Value;

use crate::error::ValidationFailure;
use crate::messages;

/// The rule shared by create and update: `title` must be present and a
/// non-empty JSON string.
///
/// Bodies that are not objects at all (an array, say, or bytes that failed
/// to parse as JSON) have no `title` and fail the same way.
pub fn require_title(body: &Value) -> Vec<ValidationFailure> {
    match body.get("title").and_then(Value::as_str) {
        Some(title) if !title.is_empty() => Vec::new(),
        _ => vec![ValidationFailure::new(messages::NOT_VALID_TITLE, "title")],
    }
}
