//! The shared store handle and its write primitives.
//!
//! # Design
//! Records live in a `HashMap` keyed by id. Each insert also receives a
//! monotonic sequence number: `created_at` alone cannot totally order two
//! inserts that land on the same clock tick, and list pagination needs a
//! stable creation order. The sequence never leaves the crate.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::query::FindQuery;
use crate::types::{NewTodo, Todo, UpdateFields};

pub(crate) struct Document {
    pub(crate) seq: u64,
    pub(crate) todo: Todo,
}

#[derive(Default)]
pub(crate) struct Inner {
    pub(crate) documents: HashMap<Uuid, Document>,
    next_seq: u64,
}

/// Handle to the in-memory todo collection. Clones share the same data.
#[derive(Clone, Default)]
pub struct TodoStore {
    pub(crate) inner: Arc<RwLock<Inner>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a deferred query over the collection. Nothing runs until the
    /// caller invokes [`FindQuery::exec`].
    pub fn find(&self) -> FindQuery {
        FindQuery::new(self.clone())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<Todo> {
        let inner = self.inner.read().await;
        inner.documents.get(&id).map(|doc| doc.todo.clone())
    }

    /// Persists a new record, assigning its id and creation timestamp.
    pub async fn insert(&self, new: NewTodo) -> Todo {
        let todo = Todo {
            id: Uuid::new_v4(),
            username: new.username,
            title: new.title,
            category: new.category,
            created_at: Utc::now(),
        };
        let mut inner = self.inner.write().await;
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.documents.insert(todo.id, Document { seq, todo: todo.clone() });
        todo
    }

    /// Overwrites the fields present in `fields` and returns the post-update
    /// record, or `None` if the id is absent. Last write wins; there is no
    /// version check.
    pub async fn update(&self, id: Uuid, fields: UpdateFields) -> Option<Todo> {
        let mut inner = self.inner.write().await;
        let doc = inner.documents.get_mut(&id)?;
        if let Some(username) = fields.username {
            doc.todo.username = username;
        }
        if let Some(title) = fields.title {
            doc.todo.title = title;
        }
        if let Some(category) = fields.category {
            doc.todo.category = category;
        }
        Some(doc.todo.clone())
    }

    /// Removes the record and returns it, or `None` if the id is absent.
    pub async fn remove(&self, id: Uuid) -> Option<Todo> {
        let mut inner = self.inner.write().await;
        inner.documents.remove(&id).map(|doc| doc.todo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_todo(username: &str, title: &str, category: &str) -> NewTodo {
        NewTodo {
            username: username.to_string(),
            title: title.to_string(),
            category: category.to_string(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_and_timestamp() {
        let store = TodoStore::new();
        let before = Utc::now();
        let created = store.insert(new_todo("alice", "Buy milk", "groceries")).await;
        assert_eq!(created.username, "alice");
        assert!(created.created_at >= before);

        let fetched = store.find_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn find_by_id_missing_returns_none() {
        let store = TodoStore::new();
        assert!(store.find_by_id(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn update_overwrites_only_present_fields() {
        let store = TodoStore::new();
        let created = store.insert(new_todo("alice", "Buy milk", "groceries")).await;

        let updated = store
            .update(
                created.id,
                UpdateFields {
                    title: Some("Buy oat milk".to_string()),
                    ..UpdateFields::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Buy oat milk");
        assert_eq!(updated.username, "alice");
        assert_eq!(updated.category, "groceries");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_is_idempotent_for_identical_fields() {
        let store = TodoStore::new();
        let created = store.insert(new_todo("alice", "Buy milk", "groceries")).await;
        let fields = UpdateFields {
            title: Some("Done".to_string()),
            category: Some("archive".to_string()),
            ..UpdateFields::default()
        };

        let once = store.update(created.id, fields.clone()).await.unwrap();
        let twice = store.update(created.id, fields).await.unwrap();
        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn update_missing_returns_none() {
        let store = TodoStore::new();
        let result = store.update(Uuid::new_v4(), UpdateFields::default()).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn remove_returns_record_once() {
        let store = TodoStore::new();
        let created = store.insert(new_todo("alice", "Buy milk", "groceries")).await;

        let removed = store.remove(created.id).await.unwrap();
        assert_eq!(removed.id, created.id);
        assert!(store.remove(created.id).await.is_none());
        assert!(store.find_by_id(created.id).await.is_none());
    }

    #[tokio::test]
    async fn clones_share_the_same_collection() {
        let store = TodoStore::new();
        let handle = store.clone();
        let created = handle.insert(new_todo("alice", "Shared", "misc")).await;
        assert!(store.find_by_id(created.id).await.is_some());
    }
}
