use axum::extract::{Path, State};
use axum::Json;
use lifesync_core::{Todo, TodoPatch};
use serde::Deserialize;

use super::ApiResult;
use crate::error::parse_id;
use crate::{ok, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct TodoInput {
    #[serde(default)]
    text: Option<String>,
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Todo>> {
    let repo = state.repo().await;
    Ok(ok(repo.todos.list().to_vec()))
}

pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<TodoInput>>,
) -> ApiResult<Todo> {
    let input = body.map(|Json(input)| input).unwrap_or_default();
    let mut repo = state.repo().await;
    let todo = repo.todos.add_raw(input.text.as_deref().unwrap_or(""));
    Ok(ok(todo))
}

/// Merge the given fields. `data` is `null` when no todo has that id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<TodoPatch>>,
) -> ApiResult<Option<Todo>> {
    let id = parse_id(&id)?;
    let patch = body.map(|Json(patch)| patch).unwrap_or_default();
    let mut repo = state.repo().await;
    Ok(ok(repo.todos.patch(id, patch)))
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<bool> {
    let id = parse_id(&id)?;
    let mut repo = state.repo().await;
    repo.todos.remove(id);
    Ok(ok(true))
}
