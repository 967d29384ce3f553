//! In-memory document store for the todo service.
//!
//! # Overview
//! Holds todo records in a process-wide map behind an async lock and exposes
//! the primitives the HTTP layer composes: point lookups, inserts, partial
//! updates, removals, and a deferred [`FindQuery`] builder for filtered,
//! sorted, paginated reads.
//!
//! # Design
//! - [`TodoStore`] is a cheaply clonable handle; every clone shares the same
//!   underlying map. Handlers receive it as injected state rather than
//!   reaching for a module-level singleton.
//! - Reads and writes go through a `tokio::sync::RwLock`, so concurrent
//!   requests interleave at `.await` points without blocking the runtime.
//! - No cross-operation coordination: two concurrent updates to the same id
//!   race with last-write-wins, matching the document-store backends this
//!   crate stands in for.
//! - Queries are plain data until `exec()` runs, so callers can chain
//!   configuration (filters, sort, skip, limit) before committing to I/O.

pub mod query;
pub mod store;
pub mod types;

pub use query::FindQuery;
pub use store::TodoStore;
pub use types::{NewTodo, Todo, UpdateFields};
