use axum::extract::State;
use lifesync_core::WeeklySummary;
use serde::Serialize;

use super::ApiResult;
use crate::{ok, AppState};

#[derive(Debug, Serialize)]
pub struct StreakBody {
    days: u32,
}

/// Last seven local calendar days, oldest first.
pub async fn weekly(State(state): State<AppState>) -> ApiResult<WeeklySummary> {
    let repo = state.repo().await;
    Ok(ok(repo.weekly()))
}

pub async fn streak(State(state): State<AppState>) -> ApiResult<StreakBody> {
    let repo = state.repo().await;
    Ok(ok(StreakBody { days: repo.streak() }))
}
