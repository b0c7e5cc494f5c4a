//! Plan handlers
//!
//! Public plan listings, admin-managed plan CRUD, and subscriptions.

use axum::{
    extract::{Path, State},
    Json,
};
use telemed_service::{CreatePlanRequest, PlanResponse, PlanService, UpdatePlanRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List active plans ordered by price
///
/// GET /api/plans/public
pub async fn list_public_plans(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PlanResponse>>> {
    let service = PlanService::new(state.service_context());
    let response = service.list_public().await?;
    Ok(Json(response))
}

/// Get a plan by id
///
/// GET /api/plans/public/:id
pub async fn get_public_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<i64>,
) -> ApiResult<Json<PlanResponse>> {
    let service = PlanService::new(state.service_context());
    let response = service.get_by_id(plan_id).await?;
    Ok(Json(response))
}

/// List all plans including inactive ones (admin only)
///
/// GET /api/plans
pub async fn list_plans(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<PlanResponse>>> {
    let service = PlanService::new(state.service_context());
    let response = service.list_all(auth.user_id).await?;
    Ok(Json(response))
}

/// Create a new plan (admin only)
///
/// POST /api/plans
pub async fn create_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePlanRequest>,
) -> ApiResult<Created<Json<PlanResponse>>> {
    let service = PlanService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Update a plan (admin only)
///
/// PUT /api/plans/:id
pub async fn update_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(plan_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdatePlanRequest>,
) -> ApiResult<Json<PlanResponse>> {
    let service = PlanService::new(state.service_context());
    let response = service.update(auth.user_id, plan_id, request).await?;
    Ok(Json(response))
}

/// Activate a plan (admin only)
///
/// PATCH /api/plans/:id/activate
pub async fn activate_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(plan_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = PlanService::new(state.service_context());
    service.set_active(auth.user_id, plan_id, true).await?;
    Ok(NoContent)
}

/// Deactivate a plan (admin only)
///
/// PATCH /api/plans/:id/deactivate
pub async fn deactivate_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(plan_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = PlanService::new(state.service_context());
    service.set_active(auth.user_id, plan_id, false).await?;
    Ok(NoContent)
}

/// Subscribe the authenticated user to a plan
///
/// POST /api/plans/:id/subscribe
pub async fn subscribe(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(plan_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = PlanService::new(state.service_context());
    service.subscribe(auth.user_id, plan_id).await?;
    Ok(NoContent)
}

/// Cancel the authenticated user's subscription
///
/// DELETE /api/plans/subscription
pub async fn cancel_subscription(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<NoContent> {
    let service = PlanService::new(state.service_context());
    service.cancel_subscription(auth.user_id).await?;
    Ok(NoContent)
}
