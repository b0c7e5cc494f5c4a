//! Appointment entity <-> model mapper

use telemed_core::entities::{Appointment, AppointmentStatus};
use telemed_core::error::DomainError;

use crate::models::AppointmentModel;

/// Convert AppointmentModel to Appointment entity
///
/// The status column is written exclusively through
/// `AppointmentStatus::as_str`; an unknown value surfaces as a database
/// error instead of being coerced to some valid status.
impl TryFrom<AppointmentModel> for Appointment {
    type Error = DomainError;

    fn try_from(model: AppointmentModel) -> Result<Self, Self::Error> {
        let status = AppointmentStatus::parse(&model.status).ok_or_else(|| {
            DomainError::DatabaseError(format!(
                "appointment {} has unknown status '{}'",
                model.id, model.status
            ))
        })?;

        Ok(Appointment {
            id: model.id,
            patient_id: model.patient_id,
            doctor_id: model.doctor_id,
            scheduled_at: model.scheduled_at,
            started_at: model.started_at,
            ended_at: model.ended_at,
            status,
            notes: model.notes,
            patient_complaint: model.patient_complaint,
            diagnosis: model.diagnosis,
            prescription: model.prescription,
            video_room_id: model.video_room_id,
            duration_minutes: model.duration_minutes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
