//! Appointment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the appointments table
#[derive(Debug, Clone, FromRow)]
pub struct AppointmentModel {
    pub id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    pub scheduled_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub status: String,
    pub notes: Option<String>,
    pub patient_complaint: Option<String>,
    pub diagnosis: Option<String>,
    pub prescription: Option<String>,
    pub video_room_id: String,
    pub duration_minutes: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
