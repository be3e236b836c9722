use axum::response::{IntoResponse, Response};

use crate::errors::CallableError;

pub mod otp;

pub async fn not_found() -> Response {
    CallableError::NotFound.into_response()
}
