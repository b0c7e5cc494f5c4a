//! User handlers
//!
//! Endpoints for profile reads, updates, and account activation.

use axum::{
    extract::{Path, State},
    Json,
};
use telemed_service::{UpdateUserRequest, UserResponse, UserService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Get the currently authenticated user
///
/// GET /api/users/me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.me(auth.user_id).await?;
    Ok(Json(response))
}

/// List all users (admin only)
///
/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.list_all(auth.user_id).await?;
    Ok(Json(response))
}

/// Get a user by id (admin or self)
///
/// GET /api/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_by_id(auth.user_id, user_id).await?;
    Ok(Json(response))
}

/// Update a user's profile (admin or self)
///
/// PUT /api/users/:id
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update(auth.user_id, user_id, request).await?;
    Ok(Json(response))
}

/// Activate an account (admin only)
///
/// PATCH /api/users/:id/activate
pub async fn activate_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.set_active(auth.user_id, user_id, true).await?;
    Ok(NoContent)
}

/// Deactivate an account (admin only)
///
/// PATCH /api/users/:id/deactivate
pub async fn deactivate_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.set_active(auth.user_id, user_id, false).await?;
    Ok(NoContent)
}
