use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use otp_mailer_core_otp_contracts::OtpEmailService;

use crate::{
    errors::CallableError,
    models::{
        otp::{ApiOtpEmailRequest, ApiOtpEmailResult},
        ApiCallableRequest, ApiCallableResponse,
    },
};

pub fn router(service: Arc<impl OtpEmailService>) -> Router<()> {
    Router::new()
        .route("/sendOtpEmail", routing::post(send_otp_email))
        .with_state(service)
}

async fn send_otp_email(
    service: State<Arc<impl OtpEmailService>>,
    request: Result<Json<ApiCallableRequest<ApiOtpEmailRequest>>, JsonRejection>,
) -> Response {
    let Json(ApiCallableRequest { data }) = match request {
        Ok(request) => request,
        Err(rejection) => {
            return CallableError::InvalidArgument(rejection.body_text()).into_response()
        }
    };

    let result = service.send_otp_email(data.into()).await;

    Json(ApiCallableResponse {
        result: ApiOtpEmailResult::from(result),
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use otp_mailer_core_otp_contracts::MockOtpEmailService;
    use otp_mailer_models::otp::{OtpEmailRequest, OtpEmailResult};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    async fn call(service: MockOtpEmailService, body: &str) -> (StatusCode, Value) {
        let request = Request::post("/sendOtpEmail")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap();

        let response = router(service.into()).oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn request(email: &str, otp: &str) -> OtpEmailRequest {
        OtpEmailRequest {
            email: email.into(),
            otp: otp.to_owned().into(),
        }
    }

    #[tokio::test]
    async fn ok() {
        let service = MockOtpEmailService::new()
            .with_send_otp_email(request("a@b.com", "123456"), OtpEmailResult::success());

        let (status, body) = call(
            service,
            r#"{"data": {"email": "a@b.com", "otp": "123456"}}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"result": {"success": true}}));
    }

    #[tokio::test]
    async fn delivery_failure_is_a_result() {
        let service = MockOtpEmailService::new().with_send_otp_email(
            request("bad", "000000"),
            OtpEmailResult::failure("invalid recipient"),
        );

        let (status, body) = call(
            service,
            r#"{"data": {"email": "bad", "otp": "000000"}}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"result": {"success": false, "error": "invalid recipient"}})
        );
    }

    #[tokio::test]
    async fn empty_values_are_passed_through() {
        let service = MockOtpEmailService::new()
            .with_send_otp_email(request("", ""), OtpEmailResult::success());

        let (status, _) = call(service, r#"{"data": {"email": "", "otp": ""}}"#).await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_field() {
        let (status, body) = call(
            MockOtpEmailService::new(),
            r#"{"data": {"email": "a@b.com"}}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["status"], "INVALID_ARGUMENT");
        assert!(body["error"]["message"].as_str().unwrap().contains("otp"));
    }

    #[tokio::test]
    async fn missing_envelope() {
        let (status, body) = call(
            MockOtpEmailService::new(),
            r#"{"email": "a@b.com", "otp": "123456"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["status"], "INVALID_ARGUMENT");
    }

    #[tokio::test]
    async fn not_json() {
        let (status, body) = call(MockOtpEmailService::new(), "email=a@b.com").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["status"], "INVALID_ARGUMENT");
    }
}
