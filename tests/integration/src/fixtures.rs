//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A scheduling time guaranteed to be in the future and unique per call
pub fn future_slot() -> DateTime<Utc> {
    let suffix = unique_suffix() as i64;
    Utc::now() + Duration::days(7) + Duration::minutes(suffix * 30)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub cpf: String,
    pub phone_number: Option<String>,
    pub role: String,
    pub crm: Option<String>,
    pub specialty: Option<String>,
}

impl RegisterRequest {
    pub fn patient() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Patient {suffix}"),
            email: format!("patient{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            cpf: format!("{:011}", 10_000_000_000 + suffix),
            phone_number: Some("+5511999990000".to_string()),
            role: "PATIENT".to_string(),
            crm: None,
            specialty: None,
        }
    }

    pub fn doctor(specialty: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Dr Test {suffix}"),
            email: format!("doctor{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            cpf: format!("{:011}", 20_000_000_000 + suffix),
            phone_number: None,
            role: "DOCTOR".to_string(),
            crm: Some(format!("CRM-SP-{suffix}")),
            specialty: Some(specialty.to_string()),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub phone_number: Option<String>,
    pub role: String,
    pub crm: Option<String>,
    pub specialty: Option<String>,
    pub plan_id: Option<i64>,
    pub active: bool,
    pub created_at: String,
}

/// Public doctor directory entry
#[derive(Debug, Deserialize)]
pub struct DoctorResponse {
    pub id: i64,
    pub name: String,
    pub crm: Option<String>,
    pub specialty: Option<String>,
}

/// Create plan request
#[derive(Debug, Serialize)]
pub struct CreatePlanRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub duration_months: Option<i32>,
    pub max_appointments_month: Option<i32>,
}

impl CreatePlanRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Plan {suffix}"),
            description: Some("A test plan".to_string()),
            price: "49.90".to_string(),
            duration_months: Some(12),
            max_appointments_month: Some(4),
        }
    }
}

/// Plan response
#[derive(Debug, Deserialize)]
pub struct PlanResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub max_appointments_month: Option<i32>,
    pub active: bool,
}

/// Create appointment request
#[derive(Debug, Serialize)]
pub struct CreateAppointmentRequest {
    pub doctor_id: i64,
    pub scheduled_at: DateTime<Utc>,
    pub patient_complaint: Option<String>,
}

impl CreateAppointmentRequest {
    pub fn with_doctor(doctor_id: i64) -> Self {
        Self {
            doctor_id,
            scheduled_at: future_slot(),
            patient_complaint: Some("Persistent headaches".to_string()),
        }
    }
}

/// Update appointment request (all fields optional)
#[derive(Debug, Default, Serialize)]
pub struct UpdateAppointmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prescription: Option<String>,
}

/// Appointment response
#[derive(Debug, Deserialize)]
pub struct AppointmentResponse {
    pub id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    pub scheduled_at: String,
    pub started_at: Option<String>,
    pub ended_at: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub patient_complaint: Option<String>,
    pub diagnosis: Option<String>,
    pub prescription: Option<String>,
    pub video_room_id: String,
    pub duration_minutes: Option<i32>,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
