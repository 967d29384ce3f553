//! HTTP surface for the todo service.
//!
//! # Overview
//! A single CRUD resource ("todo") over the in-memory document store in the
//! `todo-store` crate: list (paginated, filterable), get by id, get by owning
//! user, create, update, delete.
//!
//! # Design
//! - The store handle is injected into [`app`] and carried as axum state, so
//!   tests can drive the router with their own store.
//! - Handlers return `Result<_, ApiError>`; the error type's `IntoResponse`
//!   impl is the one place error responses are rendered.
//! - Query-string filtering and pagination are delegated to [`ApiFeatures`].

pub mod error;
pub mod features;
pub mod handlers;

pub use error::ApiError;
pub use features::ApiFeatures;

use axum::routing::get;
use axum::Router;
use todo_store::TodoStore;
use tokio::net::TcpListener;

/// Builds the router over the given store.
///
/// `/todo/user` must be a static route; axum gives it precedence over the
/// `/todo/{id}` capture.
pub fn app(store: TodoStore) -> Router {
    Router::new()
        .route("/todo", get(handlers::list_todos).post(handlers::create_todo))
        .route("/todo/user", get(handlers::get_user_todos))
        .route(
            "/todo/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .with_state(store)
}

pub async fn run(listener: TcpListener, store: TodoStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}
