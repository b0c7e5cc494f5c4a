//! Plan database model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for the plans table
#[derive(Debug, Clone, FromRow)]
pub struct PlanModel {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub duration_months: Option<i32>,
    pub max_appointments_month: Option<i32>,
    pub has_video_call: bool,
    pub has_chat: bool,
    pub has_prescription: bool,
    pub has_medical_certificate: bool,
    pub features: Vec<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
