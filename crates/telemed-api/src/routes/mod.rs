//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{appointments, auth, doctors, health, plans, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(doctor_routes())
        .merge(plan_routes())
        .merge(appointment_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(users::get_current_user))
        .route("/users", get(users::list_users))
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id", put(users::update_user))
        .route("/users/:user_id/activate", patch(users::activate_user))
        .route("/users/:user_id/deactivate", patch(users::deactivate_user))
}

/// Public doctor directory routes
fn doctor_routes() -> Router<AppState> {
    Router::new()
        .route("/doctors/public", get(doctors::list_public_doctors))
        .route(
            "/doctors/public/specialty/:specialty",
            get(doctors::list_doctors_by_specialty),
        )
}

/// Plan routes
fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/plans/public", get(plans::list_public_plans))
        .route("/plans/public/:plan_id", get(plans::get_public_plan))
        .route("/plans", get(plans::list_plans))
        .route("/plans", post(plans::create_plan))
        .route("/plans/:plan_id", put(plans::update_plan))
        .route("/plans/:plan_id/activate", patch(plans::activate_plan))
        .route("/plans/:plan_id/deactivate", patch(plans::deactivate_plan))
        .route("/plans/:plan_id/subscribe", post(plans::subscribe))
        .route("/plans/subscription", delete(plans::cancel_subscription))
}

/// Appointment routes
fn appointment_routes() -> Router<AppState> {
    Router::new()
        .route("/appointments", get(appointments::list_my_appointments))
        .route("/appointments", post(appointments::create_appointment))
        .route(
            "/appointments/status/:status",
            get(appointments::list_by_status),
        )
        .route(
            "/appointments/date-range",
            get(appointments::list_by_date_range),
        )
        .route(
            "/appointments/:appointment_id",
            get(appointments::get_appointment),
        )
        .route(
            "/appointments/:appointment_id",
            put(appointments::update_appointment),
        )
        .route(
            "/appointments/:appointment_id/cancel",
            patch(appointments::cancel_appointment),
        )
        .route(
            "/appointments/:appointment_id/confirm",
            patch(appointments::confirm_appointment),
        )
}
