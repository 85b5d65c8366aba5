use axum::extract::{Path, State};
use axum::Json;
use lifesync_core::Note;
use serde::Deserialize;

use super::ApiResult;
use crate::error::parse_id;
use crate::{ok, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct NoteInput {
    #[serde(default)]
    text: Option<String>,
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Note>> {
    let repo = state.repo().await;
    Ok(ok(repo.notes.list().to_vec()))
}

/// Text is stored as sent; a missing body or field stores an empty note.
pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<NoteInput>>,
) -> ApiResult<Note> {
    let input = body.map(|Json(input)| input).unwrap_or_default();
    let mut repo = state.repo().await;
    let note = repo.notes.add_raw(input.text.as_deref().unwrap_or(""));
    Ok(ok(note))
}

/// Always succeeds once the id parses, whether or not a note was removed.
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<bool> {
    let id = parse_id(&id)?;
    let mut repo = state.repo().await;
    repo.notes.remove(id);
    Ok(ok(true))
}
