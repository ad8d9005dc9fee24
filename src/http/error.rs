//! API error taxonomy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Per-request errors surfaced to clients.
///
/// Every variant is recovered at the request boundary; none affect process
/// state.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed id segment or request body; the message echoes the parse
    /// failure.
    #[error("{0}")]
    BadRequest(String),

    /// Lookup on an id the repository does not hold.
    #[error("user not found")]
    NotFound,

    /// Response serialization failed. Recovered per-request, but indicates a
    /// programming defect if it ever occurs.
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_codes() {
        assert_eq!(
            ApiError::BadRequest("x".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn bad_request_body_is_the_parse_message() {
        let err = ApiError::BadRequest("invalid digit found in string".to_string());
        assert_eq!(err.to_string(), "invalid digit found in string");
    }
}
