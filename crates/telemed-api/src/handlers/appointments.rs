//! Appointment handlers
//!
//! Endpoints for the booking workflow.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use telemed_core::entities::AppointmentStatus;
use telemed_service::{
    AppointmentResponse, AppointmentService, CreateAppointmentRequest, DateRangeQuery,
    UpdateAppointmentRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// List the authenticated user's appointments
///
/// GET /api/appointments
pub async fn list_my_appointments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<AppointmentResponse>>> {
    let service = AppointmentService::new(state.service_context());
    let response = service.list_mine(auth.user_id).await?;
    Ok(Json(response))
}

/// Get an appointment by id
///
/// GET /api/appointments/:id
pub async fn get_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(appointment_id): Path<i64>,
) -> ApiResult<Json<AppointmentResponse>> {
    let service = AppointmentService::new(state.service_context());
    let response = service.get_by_id(auth.user_id, appointment_id).await?;
    Ok(Json(response))
}

/// List the authenticated user's appointments with the given status
///
/// GET /api/appointments/status/:status
pub async fn list_by_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(status): Path<String>,
) -> ApiResult<Json<Vec<AppointmentResponse>>> {
    let status = AppointmentStatus::parse(&status)
        .ok_or_else(|| ApiError::invalid_path(format!("Unknown appointment status: {status}")))?;

    let service = AppointmentService::new(state.service_context());
    let response = service.list_by_status(auth.user_id, status).await?;
    Ok(Json(response))
}

/// List appointments within a date range (admins see everyone's)
///
/// GET /api/appointments/date-range?start=..&end=..
pub async fn list_by_date_range(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(range): Query<DateRangeQuery>,
) -> ApiResult<Json<Vec<AppointmentResponse>>> {
    let service = AppointmentService::new(state.service_context());
    let response = service
        .list_in_range(auth.user_id, range.start, range.end)
        .await?;
    Ok(Json(response))
}

/// Book a new appointment; the authenticated user becomes the patient
///
/// POST /api/appointments
pub async fn create_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateAppointmentRequest>,
) -> ApiResult<Created<Json<AppointmentResponse>>> {
    let service = AppointmentService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Update an appointment (partial semantics)
///
/// PUT /api/appointments/:id
pub async fn update_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(appointment_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateAppointmentRequest>,
) -> ApiResult<Json<AppointmentResponse>> {
    let service = AppointmentService::new(state.service_context());
    let response = service
        .update(auth.user_id, appointment_id, request)
        .await?;
    Ok(Json(response))
}

/// Cancel an appointment
///
/// PATCH /api/appointments/:id/cancel
pub async fn cancel_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(appointment_id): Path<i64>,
) -> ApiResult<Json<AppointmentResponse>> {
    let service = AppointmentService::new(state.service_context());
    let response = service.cancel(auth.user_id, appointment_id).await?;
    Ok(Json(response))
}

/// Confirm a scheduled appointment (assigned doctor only)
///
/// PATCH /api/appointments/:id/confirm
pub async fn confirm_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(appointment_id): Path<i64>,
) -> ApiResult<Json<AppointmentResponse>> {
    let service = AppointmentService::new(state.service_context());
    let response = service.confirm(auth.user_id, appointment_id).await?;
    Ok(Json(response))
}
