use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid id: {0}")]
    InvalidId(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    ok: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!("rejecting request: {self}");
        let body = ErrorBody {
            ok: false,
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Parse a `:id` path segment.
pub(crate) fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("1700000000000").unwrap(), 1_700_000_000_000);
        assert!(matches!(parse_id("abc"), Err(ApiError::InvalidId(_))));
        assert!(parse_id("1.5").is_err());
    }

    #[test]
    fn invalid_id_is_a_bad_request() {
        let resp = ApiError::InvalidId("x".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
