//! Repository over the in-process document store.
//!
//! # Design
//! Documents live in a `HashMap` behind an async `RwLock`; cloning the
//! repository clones the `Arc`, so every handler works against the same
//! store. The store owns record identity: `save` stamps a fresh id plus
//! both timestamps, and `update` refreshes `updatedAt`. Nothing in this
//! module knows about HTTP.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::model::Todo;

/// Persistence gateway for todo records.
#[derive(Debug, Clone, Default)]
pub struct TodoRepository {
    todos: Arc<RwLock<HashMap<Uuid, Todo>>>,
}

impl TodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persists a new record with the given title.
    pub async fn save(&self, title: String) -> Todo {
        let now = Utc::now();
        let todo = Todo {
            id: Uuid::new_v4(),
            title,
            created_at: now,
            updated_at: now,
        };
        self.todos.write().await.insert(todo.id, todo.clone());
        todo
    }

    pub async fn find_by_id(&self, id: &Uuid) -> Option<Todo> {
        self.todos.read().await.get(id).cloned()
    }

    pub async fn get_all(&self) -> Vec<Todo> {
        self.todos.read().await.values().cloned().collect()
    }

    /// Replaces the record's title and refreshes `updatedAt`. Returns the
    /// updated record, or `None` when no record matches `id`.
    pub async fn update(&self, id: &Uuid, title: &str) -> Option<Todo> {
        let mut todos = self.todos.write().await;
        let todo = todos.get_mut(id)?;
        todo.title = title.to_owned();
        todo.updated_at = Utc::now();
        Some(todo.clone())
    }

    /// Deletes the records matching `id` and returns how many were removed.
    pub async fn delete_many(&self, id: &Uuid) -> u64 {
        match self.todos.write().await.remove(id) {
            Some(_) => 1,
            None => 0,
        }
    }
}
