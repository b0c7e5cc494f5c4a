//! Public doctor directory handlers

use axum::{
    extract::{Path, State},
    Json,
};
use telemed_service::{DoctorResponse, UserService};

use crate::response::ApiResult;
use crate::state::AppState;

/// List all active doctors
///
/// GET /api/doctors/public
pub async fn list_public_doctors(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DoctorResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.list_public_doctors().await?;
    Ok(Json(response))
}

/// List active doctors whose specialty contains the given text
///
/// GET /api/doctors/public/specialty/:specialty
pub async fn list_doctors_by_specialty(
    State(state): State<AppState>,
    Path(specialty): Path<String>,
) -> ApiResult<Json<Vec<DoctorResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.list_doctors_by_specialty(&specialty).await?;
    Ok(Json(response))
}
