//! The six todo resource handlers.
//!
//! # Design
//! Each handler is a single-shot request/response with no cross-request
//! state: parse the request, run one or two store primitives, shape the JSON
//! envelope. Failures are returned as [`ApiError`] and rendered centrally by
//! its `IntoResponse` impl — no handler builds an error response by hand.
//! Malformed JSON bodies surface through the `Result<Json<_>, _>` extractors
//! and are treated as unexpected failures.
//!
//! Two quirks are inherited from the service this replaces and kept on
//! purpose: an empty list page is a 404, while an empty per-user result is a
//! 200 with an empty array; and the per-user lookup reads its id from the
//! request body rather than the path.

use std::collections::HashMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use todo_store::{NewTodo, Todo, TodoStore, UpdateFields};
use uuid::Uuid;

use crate::error::ApiError;
use crate::features::ApiFeatures;

const DEFAULT_PAGE: usize = 1;
const DEFAULT_LIMIT: usize = 5;

#[derive(Serialize)]
pub struct TodoListBody {
    pub success: bool,
    pub todos: Vec<Todo>,
}

#[derive(Serialize)]
pub struct TodoBody {
    pub success: bool,
    pub todo: Todo,
}

/// Per-user listing keeps the singular `todo` key for an array of records,
/// matching the wire format of the service this replaces.
#[derive(Serialize)]
pub struct UserTodosBody {
    pub success: bool,
    pub todo: Vec<Todo>,
}

#[derive(Serialize)]
pub struct MessageBody {
    pub success: bool,
    pub message: String,
}

/// Creation input. All fields are optional at the serde layer so that a
/// missing field becomes a 400 validation error instead of a deserialization
/// rejection.
#[derive(Deserialize)]
pub struct CreateTodoBody {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Update input: absent fields leave the stored value untouched. Values are
/// applied as-is; validation does not re-run on update.
#[derive(Deserialize)]
pub struct UpdateTodoBody {
    pub username: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
}

/// Body of the per-user lookup: the owning username, labeled `id` on the
/// wire for compatibility.
#[derive(Deserialize)]
pub struct UserLookupBody {
    pub id: String,
}

fn not_found_by_id() -> ApiError {
    ApiError::NotFound("Todo not found with this id".to_string())
}

fn usize_param(params: &HashMap<String, String>, key: &str, default: usize) -> usize {
    params
        .get(key)
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// GET /todo — paginated, filterable listing, newest first.
pub async fn list_todos(
    State(store): State<TodoStore>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<TodoListBody>, ApiError> {
    let page = usize_param(&params, "page", DEFAULT_PAGE);
    let limit = usize_param(&params, "limit", DEFAULT_LIMIT);

    let query = store
        .find()
        .sort_created_desc()
        .limit(limit)
        .skip(page.saturating_sub(1) * limit);
    let todos = ApiFeatures::new(query, params)
        .filter()
        .into_query()
        .exec()
        .await;

    // An empty page is a 404, not an empty 200.
    if todos.is_empty() {
        return Err(ApiError::NotFound("Not found any todo data".to_string()));
    }

    Ok(Json(TodoListBody { success: true, todos }))
}

/// GET /todo/{id}
pub async fn get_todo(
    State(store): State<TodoStore>,
    Path(id): Path<Uuid>,
) -> Result<Json<TodoBody>, ApiError> {
    let todo = store.find_by_id(id).await.ok_or_else(not_found_by_id)?;
    Ok(Json(TodoBody { success: true, todo }))
}

/// GET /todo/user — the owning username arrives in the request body, and an
/// empty result is still a 200.
pub async fn get_user_todos(
    State(store): State<TodoStore>,
    Query(params): Query<HashMap<String, String>>,
    body: Result<Json<UserLookupBody>, JsonRejection>,
) -> Result<Json<UserTodosBody>, ApiError> {
    let Json(lookup) = body.map_err(|rejection| ApiError::Internal(rejection.to_string()))?;

    let query = store
        .find()
        .filter("username", &lookup.id)
        .sort_created_desc();
    let todo = ApiFeatures::new(query, params)
        .filter()
        .into_query()
        .exec()
        .await;

    Ok(Json(UserTodosBody { success: true, todo }))
}

/// POST /todo — all three fields must be present and non-empty.
pub async fn create_todo(
    State(store): State<TodoStore>,
    body: Result<Json<CreateTodoBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(input) = body.map_err(|rejection| ApiError::Internal(rejection.to_string()))?;

    let (Some(username), Some(title), Some(category)) = (
        non_empty(input.username),
        non_empty(input.title),
        non_empty(input.category),
    ) else {
        return Err(ApiError::Validation(
            "Please enter the appropriate fields".to_string(),
        ));
    };

    let created = store
        .insert(NewTodo {
            username,
            title,
            category,
        })
        .await;
    tracing::debug!(id = %created.id, "todo created");

    Ok((StatusCode::CREATED, Json(created)))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// PUT /todo/{id} — overwrites the fields present in the body and returns
/// the post-update record.
pub async fn update_todo(
    State(store): State<TodoStore>,
    Path(id): Path<Uuid>,
    body: Result<Json<UpdateTodoBody>, JsonRejection>,
) -> Result<Json<TodoBody>, ApiError> {
    let Json(input) = body.map_err(|rejection| ApiError::Internal(rejection.to_string()))?;

    let fields = UpdateFields {
        username: input.username,
        title: input.title,
        category: input.category,
    };
    let todo = store.update(id, fields).await.ok_or_else(not_found_by_id)?;

    Ok(Json(TodoBody { success: true, todo }))
}

/// DELETE /todo/{id}
pub async fn delete_todo(
    State(store): State<TodoStore>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageBody>, ApiError> {
    let removed = store.remove(id).await.ok_or_else(not_found_by_id)?;
    tracing::debug!(id = %removed.id, "todo deleted");

    Ok(Json(MessageBody {
        success: true,
        message: "Todo is deleted".to_string(),
    }))
}
