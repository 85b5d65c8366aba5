use axum::extract::State;
use axum::Json;
use lifesync_core::log::minutes_from_value;
use lifesync_core::{NewSession, Session, SessionType};
use serde::Deserialize;
use serde_json::Value;

use super::ApiResult;
use crate::{ok, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct SessionInput {
    #[serde(rename = "type", default)]
    session_type: Option<String>,
    /// Number or numeric string; anything else counts as 0.
    #[serde(default)]
    minutes: Value,
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Session>> {
    let repo = state.repo().await;
    Ok(ok(repo.sessions.list().to_vec()))
}

pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<SessionInput>>,
) -> ApiResult<Session> {
    let input = body.map(|Json(input)| input).unwrap_or_default();
    let session_type = input
        .session_type
        .filter(|t| !t.is_empty())
        .map(SessionType::from)
        .unwrap_or_default();
    let minutes = minutes_from_value(&input.minutes);

    let mut repo = state.repo().await;
    let session = repo.sessions.append(NewSession::new(session_type, minutes));
    Ok(ok(session))
}
