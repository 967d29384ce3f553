//! Record types for the todo store.
//!
//! # Design
//! `Todo` is the persisted shape; `NewTodo` and `UpdateFields` are the write
//! inputs. The store assigns `id` and `created_at` on insert, so neither
//! appears in the input types. `created_at` serializes as `createdAt` to keep
//! the wire format document-store flavored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted todo record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub username: String,
    pub title: String,
    pub category: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Input for inserting a new record. The store assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub username: String,
    pub title: String,
    pub category: String,
}

/// Partial update: fields present are overwritten, absent fields keep their
/// stored value. No validation runs on update.
#[derive(Debug, Clone, Default)]
pub struct UpdateFields {
    pub username: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
}
