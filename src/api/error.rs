use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::RepositoryError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Member not found")]
    MemberNotFound,
    #[error("Workout session not found")]
    WorkoutSessionNotFound,
    #[error("No workouts found for this member")]
    NoWorkoutsForMember,
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
    #[error("{}", .0.body_text())]
    InvalidPath(#[from] PathRejection),
    #[error("Email already exists")]
    EmailTaken,
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::EmailTaken => ApiError::EmailTaken,
            RepositoryError::Database(e) => ApiError::Database(e),
        }
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MemberNotFound
            | ApiError::WorkoutSessionNotFound
            | ApiError::NoWorkoutsForMember => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(_) | ApiError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            ApiError::EmailTaken => StatusCode::CONFLICT,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Driver messages stay in the log.
        let error_message = match &self {
            ApiError::Database(e) => {
                tracing::error!(error = %e, "database operation failed");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "error": error_message }))).into_response()
    }
}
