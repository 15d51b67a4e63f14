use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::services::progress::ProgressError;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error("invalid answers: {0}")]
    InvalidAnswers(#[from] serde_json::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::Expired { .. }) => StatusCode::GONE,
            ApiError::Progress(ProgressError::UnknownWorkout(_)) => StatusCode::NOT_FOUND,
            ApiError::Progress(ProgressError::UnknownExercise { .. }) => StatusCode::BAD_REQUEST,
            ApiError::InvalidAnswers(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}
