use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::{ApiCallableError, ApiCallableErrorResponse};

/// Errors raised by the callable protocol itself.
///
/// Failures of the called function are never reported this way, they are part
/// of its result.
#[derive(Debug, Error)]
pub enum CallableError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("NOT_FOUND")]
    NotFound,
    #[error("INTERNAL")]
    Internal,
}

impl CallableError {
    fn status(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::NotFound => "NOT_FOUND",
            Self::Internal => "INTERNAL",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CallableError {
    fn into_response(self) -> Response {
        let body = ApiCallableErrorResponse {
            error: ApiCallableError {
                status: self.status(),
                message: self.to_string(),
            },
        };
        (self.status_code(), Json(body)).into_response()
    }
}

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err}");
    CallableError::Internal.into_response()
}
