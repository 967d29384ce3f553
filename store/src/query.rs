//! Deferred read queries over the todo collection.
//!
//! # Design
//! A [`FindQuery`] is plain data until `exec()` runs: callers chain filters,
//! sort, skip and limit, and only the final `exec()` takes the store's read
//! lock. Filters are string equality on named fields; a filter on a field no
//! document carries matches nothing, mirroring how schemaless backends treat
//! queries on absent fields. Filter values are not validated or coerced —
//! a value that cannot match simply yields no documents.

use crate::store::TodoStore;
use crate::types::Todo;

/// A pending query: configuration is chained, execution is deferred.
pub struct FindQuery {
    store: TodoStore,
    filters: Vec<(String, String)>,
    newest_first: bool,
    skip: usize,
    limit: Option<usize>,
}

impl FindQuery {
    pub(crate) fn new(store: TodoStore) -> Self {
        Self {
            store,
            filters: Vec::new(),
            newest_first: false,
            skip: 0,
            limit: None,
        }
    }

    /// Adds an equality filter on a named field. Unknown field names match
    /// no document.
    pub fn filter(mut self, key: &str, value: &str) -> Self {
        self.filters.push((key.to_string(), value.to_string()));
        self
    }

    /// Sorts by creation time, newest first. Ties on the timestamp fall back
    /// to insert order.
    pub fn sort_created_desc(mut self) -> Self {
        self.newest_first = true;
        self
    }

    /// Skips the first `n` matching records. Applied after filtering and
    /// sorting.
    pub fn skip(mut self, n: usize) -> Self {
        self.skip = n;
        self
    }

    /// Caps the result set at `n` records.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    fn matches(&self, todo: &Todo) -> bool {
        self.filters.iter().all(|(key, value)| match key.as_str() {
            "username" => todo.username == *value,
            "title" => todo.title == *value,
            "category" => todo.category == *value,
            _ => false,
        })
    }

    /// Runs the query and returns a snapshot of the matching records.
    pub async fn exec(self) -> Vec<Todo> {
        let inner = self.store.inner.read().await;
        let mut matched: Vec<_> = inner
            .documents
            .values()
            .filter(|doc| self.matches(&doc.todo))
            .collect();
        if self.newest_first {
            matched.sort_by(|a, b| {
                (b.todo.created_at, b.seq).cmp(&(a.todo.created_at, a.seq))
            });
        } else {
            matched.sort_by_key(|doc| doc.seq);
        }
        matched
            .into_iter()
            .skip(self.skip)
            .take(self.limit.unwrap_or(usize::MAX))
            .map(|doc| doc.todo.clone())
            .collect()
    }
}
