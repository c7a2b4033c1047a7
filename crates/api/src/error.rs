use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use engine::{ResultRejection, ScheduleRejection};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("database error")]
    Db(#[from] sqlx::Error),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Db(ref e) => {
                tracing::error!(error = %e, "Database error");
                StatusCode::SERVICE_UNAVAILABLE
            }
        };
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Failure of a league workflow. Rejections carry the engine's structured
/// detail; everything else is a lookup miss or an infrastructure fault.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Schedule(#[from] ScheduleRejection),

    #[error(transparent)]
    Result(#[from] ResultRejection),

    #[error("database error")]
    Db(#[from] sqlx::Error),
}

impl ServiceError {
    /// Machine-readable code surfaced to API clients.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => "NOT_FOUND",
            ServiceError::BadRequest(_) => "BAD_REQUEST",
            ServiceError::Schedule(rejection) => rejection.code(),
            ServiceError::Result(rejection) => rejection.code(),
            ServiceError::Db(_) => "INTERNAL",
        }
    }
}
