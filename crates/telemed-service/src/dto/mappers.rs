//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use telemed_core::entities::{Appointment, Plan, User};

use super::responses::{AppointmentResponse, DoctorResponse, PlanResponse, UserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            cpf: user.cpf.clone(),
            phone_number: user.phone_number.clone(),
            role: user.role,
            crm: user.crm.clone(),
            specialty: user.specialty.clone(),
            plan_id: user.plan_id,
            active: user.active,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for DoctorResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            crm: user.crm.clone(),
            specialty: user.specialty.clone(),
        }
    }
}

impl From<User> for DoctorResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Plan Mappers
// ============================================================================

impl From<&Plan> for PlanResponse {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id,
            name: plan.name.clone(),
            description: plan.description.clone(),
            price: plan.price,
            duration_months: plan.duration_months,
            max_appointments_month: plan.max_appointments_month,
            has_video_call: plan.has_video_call,
            has_chat: plan.has_chat,
            has_prescription: plan.has_prescription,
            has_medical_certificate: plan.has_medical_certificate,
            features: plan.features.clone(),
            active: plan.active,
            created_at: plan.created_at,
        }
    }
}

impl From<Plan> for PlanResponse {
    fn from(plan: Plan) -> Self {
        Self::from(&plan)
    }
}

// ============================================================================
// Appointment Mappers
// ============================================================================

impl From<&Appointment> for AppointmentResponse {
    fn from(appt: &Appointment) -> Self {
        Self {
            id: appt.id,
            patient_id: appt.patient_id,
            doctor_id: appt.doctor_id,
            scheduled_at: appt.scheduled_at,
            started_at: appt.started_at,
            ended_at: appt.ended_at,
            status: appt.status,
            notes: appt.notes.clone(),
            patient_complaint: appt.patient_complaint.clone(),
            diagnosis: appt.diagnosis.clone(),
            prescription: appt.prescription.clone(),
            video_room_id: appt.video_room_id.clone(),
            duration_minutes: appt.duration_minutes,
            created_at: appt.created_at,
            updated_at: appt.updated_at,
        }
    }
}

impl From<Appointment> for AppointmentResponse {
    fn from(appt: Appointment) -> Self {
        Self::from(&appt)
    }
}
