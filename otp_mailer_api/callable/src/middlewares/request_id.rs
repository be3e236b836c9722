//! Tag each request with an id, echoed back in the `X-Request-Id` header.
//!
//! An id supplied by the caller (or a proxy in front of us) is kept so that
//! logs can be correlated across hops; otherwise a new one is generated.

use axum::{
    extract::Request,
    middleware::{from_fn, Next},
    response::{IntoResponse, Response},
    Router,
};
use base64::{display::Base64Display, engine::general_purpose::STANDARD_NO_PAD};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

const MAX_INCOMING_LEN: usize = 128;

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(from_fn(middleware))
}

async fn middleware(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::from_request(&request).unwrap_or_else(RequestId::generate);
    request.extensions_mut().insert(request_id.clone());
    let response = next.run(request).await;
    ([(REQUEST_ID_HEADER, request_id.0)], response).into_response()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    fn generate() -> Self {
        let uuid = Uuid::now_v7();
        Self(Base64Display::new(uuid.as_bytes(), &STANDARD_NO_PAD).to_string())
    }

    /// Only short ids of printable ascii are accepted, anything else would end
    /// up verbatim in our logs.
    fn from_request(request: &Request) -> Option<Self> {
        let value = request.headers().get(REQUEST_ID_HEADER)?.to_str().ok()?;
        let valid = !value.is_empty()
            && value.len() <= MAX_INCOMING_LEN
            && value.bytes().all(|b| b.is_ascii_graphic());
        valid.then(|| Self(value.into()))
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, routing, Extension};
    use tower::ServiceExt;

    use super::*;

    async fn call(request_id: Option<&str>) -> (String, String) {
        let router = add(Router::new().route(
            "/",
            routing::get(|Extension(id): Extension<RequestId>| async move { id.0 }),
        ));

        let mut request = Request::get("/");
        if let Some(request_id) = request_id {
            request = request.header(REQUEST_ID_HEADER, request_id);
        }
        let response = router
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let header = response.headers()[REQUEST_ID_HEADER]
            .to_str()
            .unwrap()
            .to_owned();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (header, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn generated() {
        let (header, seen_by_handler) = call(None).await;

        // 16 uuid bytes without padding
        assert_eq!(header.len(), 22);
        assert_eq!(header, seen_by_handler);
    }

    #[tokio::test]
    async fn incoming_is_kept() {
        let (header, seen_by_handler) = call(Some("lb-7f3a9c")).await;

        assert_eq!(header, "lb-7f3a9c");
        assert_eq!(seen_by_handler, "lb-7f3a9c");
    }

    #[tokio::test]
    async fn invalid_incoming_is_replaced() {
        let too_long = "x".repeat(MAX_INCOMING_LEN + 1);
        for incoming in ["", "with space", too_long.as_str()] {
            let (header, seen_by_handler) = call(Some(incoming)).await;

            assert_ne!(header, incoming);
            assert_eq!(header.len(), 22);
            assert_eq!(header, seen_by_handler);
        }
    }
}
