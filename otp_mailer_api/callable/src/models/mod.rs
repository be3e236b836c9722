use serde::{Deserialize, Serialize};

pub mod otp;

/// Envelope of every callable request.
#[derive(Debug, Deserialize)]
pub struct ApiCallableRequest<T> {
    pub data: T,
}

/// Envelope of every successful callable response.
#[derive(Debug, Serialize)]
pub struct ApiCallableResponse<T> {
    pub result: T,
}

#[derive(Debug, Serialize)]
pub struct ApiCallableErrorResponse {
    pub error: ApiCallableError,
}

#[derive(Debug, Serialize)]
pub struct ApiCallableError {
    pub status: &'static str,
    pub message: String,
}
