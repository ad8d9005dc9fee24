//! HTTP handlers for the user resource.
//!
//! Each handler is a thin translation layer: parse the request, call the
//! repository, serialize the outcome. Status-code policy lives in
//! [`ApiError`](crate::http::error::ApiError).

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::http::error::ApiError;
use crate::http::middleware::content_type::APPLICATION_JSON;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::users::types::User;

/// `GET /users`: every stored user as a JSON object keyed by id.
pub async fn list_users(State(state): State<AppState>) -> Result<Response, ApiError> {
    let users: HashMap<u64, User> = state.repo.list();
    let body = serde_json::to_string(&users).map_err(|_| ApiError::Internal)?;
    Ok(([(header::CONTENT_TYPE, APPLICATION_JSON)], body).into_response())
}

/// `GET /users/{id}`: point lookup.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&id)?;
    match state.repo.find(id) {
        Some(user) => Ok(Json(user)),
        None => Err(ApiError::NotFound),
    }
}

/// `POST /users`: create a user from a `{name}` body.
///
/// A caller-supplied id is accepted and ignored; the repository issues the
/// real one.
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let user: User =
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let user = state.repo.save(user);
    metrics::record_user_registered();
    tracing::debug!(id = user.id, "user created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// `DELETE /users/{id}`: remove unconditionally, 204 whether or not the id
/// existed.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.repo.delete(id);
    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse::<u64>()
        .map_err(|e| ApiError::BadRequest(e.to_string()))
}
