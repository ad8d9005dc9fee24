//! Response content-type enforcement.

use axum::extract::Request;
use axum::http::{header, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

pub const APPLICATION_JSON: &str = "application/json";

/// Warn when a client asks for anything other than JSON, then force the
/// response `Content-Type` to `application/json`.
///
/// The warning is advisory only; the request proceeds unchanged.
pub async fn enforce_json(request: Request, next: Next) -> Response {
    let accept = request
        .headers()
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok());
    if accept != Some(APPLICATION_JSON) {
        tracing::warn!(
            accept = accept.unwrap_or("<missing>"),
            "accept header is not application/json"
        );
    }

    let mut response = next.run(request).await;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(APPLICATION_JSON),
    );
    response
}
