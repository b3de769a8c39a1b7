//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found")]
    NotFound,
    #[error("path id does not match body id")]
    IdMismatch,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            // 4xx responses carry no body.
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::IdMismatch => StatusCode::BAD_REQUEST.into_response(),
            AppError::Db(e) => {
                tracing::error!(error = %e, "database failure");
                let body = ErrorBody {
                    error: ErrorDetail {
                        code: "database_error".to_string(),
                        message: self.to_string(),
                    },
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
