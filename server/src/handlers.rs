//! One handler per endpoint.
//!
//! # Design
//! Every handler runs the same linear pipeline: validate the input, call
//! the repository, then shape the result. Handlers return
//! `Result<_, ValidationError>` so the error mapper renders all failures
//! uniformly. The shared pipeline stages live at the bottom of this module;
//! the handlers themselves stay short and identical in structure.
//!
//! Path ids are taken as raw strings and parsed leniently: a malformed id
//! is indistinguishable from an unknown one and takes the same not-found
//! path (status 400, never 404).

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::model::Todo;
use crate::repo::TodoRepository;
use crate::validators;

/// POST /todos — create a todo from `{"title": ...}`.
pub async fn create_todo(
    State(repo): State<TodoRepository>,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), ValidationError> {
    let payload = parse_json(&body);
    let title = validated_title(&payload)?;
    let todo = repo.save(title).await;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /todos/{id} — fetch one todo.
pub async fn get_todo(
    State(repo): State<TodoRepository>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ValidationError> {
    let todo = match parse_id(&id) {
        Some(key) => repo.find_by_id(&key).await,
        None => None,
    };
    found(todo, &id).map(Json)
}

/// GET /todos — fetch every todo. The only endpoint without a failure case.
pub async fn list_todos(State(repo): State<TodoRepository>) -> Json<Vec<Todo>> {
    Json(repo.get_all().await)
}

/// PUT /todos/{id} — replace a todo's title.
///
/// Body validation runs before the id is looked at, so a bad title on an
/// unknown id reports the validation failure, not the missing record.
pub async fn update_todo(
    State(repo): State<TodoRepository>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Todo>, ValidationError> {
    let payload = parse_json(&body);
    let title = validated_title(&payload)?;
    let todo = match parse_id(&id) {
        Some(key) => repo.update(&key, &title).await,
        None => None,
    };
    found(todo, &id).map(Json)
}

/// DELETE /todos/{id} — remove a todo; 204 with an empty body on success.
pub async fn delete_todo(
    State(repo): State<TodoRepository>,
    Path(id): Path<String>,
) -> Result<StatusCode, ValidationError> {
    let deleted = match parse_id(&id) {
        Some(key) => repo.delete_many(&key).await,
        None => 0,
    };
    if deleted == 0 {
        debug!(%id, "delete matched no todo item");
        return Err(ValidationError::resource_not_found(&id));
    }
    Ok(StatusCode::NO_CONTENT)
}

// --- shared pipeline stages ---

/// Lenient body parse; bytes that are not valid JSON become `Null` and fall
/// through validation as "title missing".
fn parse_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}

/// Runs the title rule set and hands back the validated title.
fn validated_title(payload: &Value) -> Result<String, ValidationError> {
    let failures = validators::require_title(payload);
    match payload.get("title").and_then(Value::as_str) {
        Some(title) if failures.is_empty() => Ok(title.to_owned()),
        _ => Err(ValidationError::insufficient_request(failures)),
    }
}

/// Lenient id parse; anything that is not a UUID reads as "no such record".
fn parse_id(raw: &str) -> Option<Uuid> {
    raw.parse().ok()
}

/// Shapes a lookup result: present → the record, absent → not-found 400.
fn found(todo: Option<Todo>, id: &str) -> Result<Todo, ValidationError> {
    todo.ok_or_else(|| {
        debug!(%id, "todo item not found");
        ValidationError::resource_not_found(id)
    })
}
