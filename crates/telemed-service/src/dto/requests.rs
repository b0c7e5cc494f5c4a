//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use telemed_core::entities::{AppointmentStatus, Role};
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    #[validate(length(min = 11, max = 14, message = "CPF must be 11-14 characters"))]
    pub cpf: String,

    pub phone_number: Option<String>,

    pub role: Role,

    /// Medical licence id, required for doctors
    pub crm: Option<String>,

    /// Required for doctors
    #[validate(length(max = 100, message = "Specialty must be at most 100 characters"))]
    pub specialty: Option<String>,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update user request (partial: `None` leaves the field untouched)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: Option<String>,

    pub phone_number: Option<String>,

    /// Only valid when the target user is a doctor
    #[validate(length(max = 100, message = "Specialty must be at most 100 characters"))]
    pub specialty: Option<String>,
}

// ============================================================================
// Plan Requests
// ============================================================================

fn default_true() -> bool {
    true
}

/// Create plan request (admin only)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlanRequest {
    #[validate(length(min = 1, max = 100, message = "Plan name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    /// Monthly price; must be positive
    pub price: Decimal,

    pub duration_months: Option<i32>,

    /// Monthly appointment cap; `None` means unlimited
    pub max_appointments_month: Option<i32>,

    #[serde(default = "default_true")]
    pub has_video_call: bool,

    #[serde(default = "default_true")]
    pub has_chat: bool,

    #[serde(default = "default_true")]
    pub has_prescription: bool,

    #[serde(default = "default_true")]
    pub has_medical_certificate: bool,

    #[serde(default)]
    pub features: Vec<String>,
}

/// Update plan request (partial: `None` leaves the field untouched)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePlanRequest {
    #[validate(length(min = 1, max = 100, message = "Plan name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    pub price: Option<Decimal>,

    pub duration_months: Option<i32>,

    pub max_appointments_month: Option<i32>,

    pub has_video_call: Option<bool>,

    pub has_chat: Option<bool>,

    pub has_prescription: Option<bool>,

    pub has_medical_certificate: Option<bool>,

    pub features: Option<Vec<String>>,
}

// ============================================================================
// Appointment Requests
// ============================================================================

/// Create appointment request; the acting user becomes the patient
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAppointmentRequest {
    pub doctor_id: i64,

    pub scheduled_at: DateTime<Utc>,

    #[validate(length(max = 1000, message = "Complaint must be at most 1000 characters"))]
    pub patient_complaint: Option<String>,
}

/// Update appointment request (partial: `None` leaves the field untouched)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAppointmentRequest {
    pub scheduled_at: Option<DateTime<Utc>>,

    pub status: Option<AppointmentStatus>,

    #[validate(length(max = 2000, message = "Notes must be at most 2000 characters"))]
    pub notes: Option<String>,

    #[validate(length(max = 2000, message = "Diagnosis must be at most 2000 characters"))]
    pub diagnosis: Option<String>,

    #[validate(length(max = 2000, message = "Prescription must be at most 2000 characters"))]
    pub prescription: Option<String>,
}

/// Date range query for appointment listings
#[derive(Debug, Clone, Deserialize)]
pub struct DateRangeQuery {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
