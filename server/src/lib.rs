//! HTTP CRUD API for a single todo resource.
//!
//! # Overview
//! Five endpoints over one record type, backed by an in-process document
//! store. Requests flow router → handler → validators → repository, and
//! every handler failure (a bad body as much as an unknown or malformed id)
//! is normalized into the same 400 error body by [`error::ValidationError`].
//!
//! # Design
//! - Routes are registered in [`app`] as a plain list at startup.
//! - Handlers return `Result<_, ValidationError>`; the `IntoResponse` impl
//!   on the error type is the only place failures become HTTP.
//! - The repository is the only state shared across requests; the store
//!   guards itself with an async `RwLock`.

pub mod error;
pub mod handlers;
pub mod messages;
pub mod model;
pub mod repo;
pub mod validators;

pub use error::{ValidationError, ValidationFailure};
pub use model::Todo;
pub use repo::TodoRepository;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

/// Builds the router with a fresh, empty repository.
pub fn app() -> Router {
    let repo = TodoRepository::new();
    Router::new()
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .with_state(repo)
}

/// Serves [`app`] on the given listener until the process ends.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
