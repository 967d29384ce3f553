//! Query-string adapter: turns request parameters into store filters.
//!
//! # Design
//! `ApiFeatures` pairs a pending [`FindQuery`] with the raw query-string map.
//! `filter()` copies the map, strips the reserved control-plane keys
//! (pagination, sort, field selection), and forwards whatever remains as
//! equality filters. The pending query is only configured here — execution
//! stays with the caller, which takes the query back via `into_query()`.
//! Filter values are forwarded untouched; the store decides what they match.

use std::collections::HashMap;

use todo_store::FindQuery;

/// Query-string keys with control-plane meaning, never treated as filters.
const RESERVED_KEYS: [&str; 4] = ["page", "limit", "sort", "fields"];

/// Wraps a pending query together with the raw request parameters.
pub struct ApiFeatures {
    query: FindQuery,
    params: HashMap<String, String>,
}

impl ApiFeatures {
    pub fn new(query: FindQuery, params: HashMap<String, String>) -> Self {
        Self { query, params }
    }

    /// Applies every non-reserved parameter as an equality filter and returns
    /// the adapter for further chaining.
    pub fn filter(mut self) -> Self {
        let mut data_params = self.params.clone();
        for key in RESERVED_KEYS {
            data_params.remove(key);
        }
        for (key, value) in &data_params {
            self.query = self.query.filter(key, value);
        }
        self
    }

    /// Hands the configured query back to the caller for execution.
    pub fn into_query(self) -> FindQuery {
        self.query
    }
}
