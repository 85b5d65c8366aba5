//! # LifeSync HTTP backend
//!
//! JSON API over a [`Repository`]. The binary keeps everything in memory,
//! so data lives only as long as the process. Every response has
//! the shape `{ "ok": true, "data": ... }`; failures use
//! `{ "ok": false, "error": ... }` with a 4xx status.

pub mod error;
mod handlers;

use std::sync::Arc;

use axum::routing::{delete, get, patch};
use axum::Router;
use lifesync_core::Repository;
use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    repo: Arc<Mutex<Repository>>,
}

impl AppState {
    pub fn new(repo: Repository) -> Self {
        Self {
            repo: Arc::new(Mutex::new(repo)),
        }
    }

    pub(crate) async fn repo(&self) -> MutexGuard<'_, Repository> {
        self.repo.lock().await
    }
}

/// Success envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

pub(crate) fn ok<T: Serialize>(data: T) -> axum::Json<ApiResponse<T>> {
    axum::Json(ApiResponse { ok: true, data })
}

/// Build the API router with permissive CORS and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/notes",
            get(handlers::notes::list).post(handlers::notes::create),
        )
        .route("/api/notes/:id", delete(handlers::notes::remove))
        .route(
            "/api/todos",
            get(handlers::todos::list).post(handlers::todos::create),
        )
        .route(
            "/api/todos/:id",
            patch(handlers::todos::update).delete(handlers::todos::remove),
        )
        .route(
            "/api/sessions",
            get(handlers::sessions::list).post(handlers::sessions::create),
        )
        .route("/api/stats/weekly", get(handlers::stats::weekly))
        .route("/api/stats/streak", get(handlers::stats::streak))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
