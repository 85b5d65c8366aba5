pub mod notes;
pub mod sessions;
pub mod stats;
pub mod todos;

use axum::Json;

use crate::{ApiError, ApiResponse};

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;
