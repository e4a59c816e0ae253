//! User REST API handlers
//!
//! Each handler issues exactly one storage call. Handler futures own that
//! call, so a dropped request (client gone) drops the storage future too.

use crate::{ApiError, ApiResult, AppState, CreateUserRequest};

use users_core::User;

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use log::{error, info, warn};
use serde::Serialize;

const USER_NOT_FOUND: &str = "User not found";
const CREATE_FAILED: &str = "Failed to create user";
const SERIALIZE_FAILED: &str = "Failed to serialize user";

// =============================================================================
// Handlers
// =============================================================================

/// GET /user/{id}
///
/// A storage error is reported the same way as a miss.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let user = match state.users.find_by_id(&id).await {
        Ok(Some(user)) => user,
        Ok(None) => return Err(ApiError::not_found(USER_NOT_FOUND)),
        Err(e) => {
            warn!("Lookup of user {} failed: {}", id, e);
            return Err(ApiError::not_found(USER_NOT_FOUND));
        }
    };

    json_response(StatusCode::OK, &user)
}

/// POST /user
///
/// The body is decoded whatever its Content-Type. The id is always
/// assigned here.
pub async fn create_user(State(state): State<AppState>, body: Bytes) -> ApiResult<Response> {
    let request = CreateUserRequest::from_body(&body)?;

    let id = state.ids.next_id().map_err(|e| {
        error!("Failed to generate user id: {}", e);
        ApiError::internal(CREATE_FAILED)
    })?;

    let user = User::new(id, request.fields);

    state.users.insert(&user).await.map_err(|e| {
        error!("Failed to insert user {}: {}", user.id, e);
        ApiError::internal(CREATE_FAILED)
    })?;

    info!("Created user {}", user.id);

    json_response(StatusCode::CREATED, &user)
}

/// DELETE /user/{id}
///
/// Only a deletion that actually removed a document is confirmed; a miss
/// and a storage error are both 404.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<String> {
    match state.users.delete_by_id(&id).await {
        Ok(0) => Err(ApiError::not_found(USER_NOT_FOUND)),
        Ok(_) => {
            info!("Deleted user {}", id);
            Ok(format!("Deleted User: {}\n", id))
        }
        Err(e) => {
            warn!("Delete of user {} failed: {}", id, e);
            Err(ApiError::not_found(USER_NOT_FOUND))
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn json_response<T: Serialize>(status: StatusCode, value: &T) -> ApiResult<Response> {
    let body = serde_json::to_vec(value).map_err(|e| {
        error!("Failed to serialize response: {}", e);
        ApiError::internal(SERIALIZE_FAILED)
    })?;

    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}
