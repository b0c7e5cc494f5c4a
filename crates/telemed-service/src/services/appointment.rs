//! Appointment service
//!
//! The booking workflow: creation with conflict and quota checks, partial
//! updates with status side effects, cancellation, and confirmation.

use chrono::{DateTime, Datelike, Utc};
use telemed_core::entities::{Appointment, AppointmentStatus, User};
use telemed_core::DomainError;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{AppointmentResponse, CreateAppointmentRequest, UpdateAppointmentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Appointment service
pub struct AppointmentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AppointmentService<'a> {
    /// Create a new AppointmentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn load_actor(&self, id: i64) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(id).into())
    }

    async fn load_appointment(&self, id: i64) -> ServiceResult<Appointment> {
        self.ctx
            .appointment_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::AppointmentNotFound(id).into())
    }

    /// Book a new appointment; the acting user becomes the patient
    #[instrument(skip(self, request), fields(doctor_id = request.doctor_id))]
    pub async fn create(
        &self,
        actor_id: i64,
        request: CreateAppointmentRequest,
    ) -> ServiceResult<AppointmentResponse> {
        let actor = self.load_actor(actor_id).await?;
        if actor.is_doctor() {
            return Err(ServiceError::validation(
                "Doctors cannot book appointments as patients",
            ));
        }

        if request.scheduled_at <= Utc::now() {
            return Err(DomainError::ScheduleInPast.into());
        }

        let doctor = self
            .ctx
            .user_repo()
            .find_by_id(request.doctor_id)
            .await?
            .ok_or(DomainError::UserNotFound(request.doctor_id))?;
        if !doctor.is_doctor() {
            return Err(DomainError::NotADoctor.into());
        }
        if !doctor.active {
            return Err(DomainError::DoctorUnavailable.into());
        }

        let conflicts = self
            .ctx
            .appointment_repo()
            .find_conflicts(doctor.id, request.scheduled_at)
            .await?;
        if !conflicts.is_empty() {
            warn!(doctor_id = doctor.id, "Booking rejected: slot taken");
            return Err(DomainError::TimeSlotTaken.into());
        }

        self.check_monthly_quota(&actor, request.scheduled_at).await?;

        let now = Utc::now();
        let appointment = Appointment {
            // Assigned by the database on insert
            id: 0,
            patient_id: actor.id,
            doctor_id: doctor.id,
            scheduled_at: request.scheduled_at,
            started_at: None,
            ended_at: None,
            status: AppointmentStatus::Scheduled,
            notes: None,
            patient_complaint: request.patient_complaint,
            diagnosis: None,
            prescription: None,
            video_room_id: Uuid::new_v4().to_string(),
            duration_minutes: None,
            created_at: now,
            updated_at: now,
        };

        let appointment = self.ctx.appointment_repo().create(&appointment).await?;

        info!(
            appointment_id = appointment.id,
            patient_id = appointment.patient_id,
            doctor_id = appointment.doctor_id,
            "Appointment booked"
        );
        Ok(AppointmentResponse::from(&appointment))
    }

    /// Quota check: counted in the calendar month of the requested time so a
    /// booking for next month does not burn this month's allowance
    async fn check_monthly_quota(
        &self,
        patient: &User,
        scheduled_at: DateTime<Utc>,
    ) -> ServiceResult<()> {
        let Some(plan_id) = patient.plan_id else {
            return Ok(());
        };
        let Some(plan) = self.ctx.plan_repo().find_by_id(plan_id).await? else {
            return Ok(());
        };

        if plan.max_appointments_month.is_some() {
            let used = self
                .ctx
                .appointment_repo()
                .count_patient_in_month(patient.id, scheduled_at.year(), scheduled_at.month())
                .await?;
            if plan.limit_reached(used) {
                warn!(
                    patient_id = patient.id,
                    plan_id, used, "Booking rejected: monthly plan limit reached"
                );
                return Err(DomainError::PlanLimitReached.into());
            }
        }

        Ok(())
    }

    /// Get an appointment by id, limited to the patient, the doctor, or admins
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, actor_id: i64, id: i64) -> ServiceResult<AppointmentResponse> {
        let actor = self.load_actor(actor_id).await?;
        let appointment = self.load_appointment(id).await?;
        if !appointment.accessible_by(&actor) {
            return Err(DomainError::AppointmentAccessDenied.into());
        }

        Ok(AppointmentResponse::from(&appointment))
    }

    /// List the acting user's appointments (doctors see their doctor side)
    #[instrument(skip(self))]
    pub async fn list_mine(&self, actor_id: i64) -> ServiceResult<Vec<AppointmentResponse>> {
        let actor = self.load_actor(actor_id).await?;

        let appointments = if actor.is_doctor() {
            self.ctx.appointment_repo().find_by_doctor(actor.id).await?
        } else {
            self.ctx.appointment_repo().find_by_patient(actor.id).await?
        };

        Ok(appointments.iter().map(AppointmentResponse::from).collect())
    }

    /// List the acting user's appointments with the given status
    #[instrument(skip(self))]
    pub async fn list_by_status(
        &self,
        actor_id: i64,
        status: AppointmentStatus,
    ) -> ServiceResult<Vec<AppointmentResponse>> {
        let actor = self.load_actor(actor_id).await?;

        let appointments = if actor.is_doctor() {
            self.ctx
                .appointment_repo()
                .find_by_doctor_and_status(actor.id, status)
                .await?
        } else {
            self.ctx
                .appointment_repo()
                .find_by_patient_and_status(actor.id, status)
                .await?
        };

        Ok(appointments.iter().map(AppointmentResponse::from).collect())
    }

    /// List appointments within a time range; admins see everyone's
    #[instrument(skip(self))]
    pub async fn list_in_range(
        &self,
        actor_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ServiceResult<Vec<AppointmentResponse>> {
        let actor = self.load_actor(actor_id).await?;

        let appointments = if actor.is_admin() {
            self.ctx.appointment_repo().find_in_range(start, end).await?
        } else if actor.is_doctor() {
            self.ctx
                .appointment_repo()
                .find_by_doctor_in_range(actor.id, start, end)
                .await?
        } else {
            self.ctx
                .appointment_repo()
                .find_by_patient_in_range(actor.id, start, end)
                .await?
        };

        Ok(appointments.iter().map(AppointmentResponse::from).collect())
    }

    /// Partial update; `None` fields are left untouched
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor_id: i64,
        id: i64,
        request: UpdateAppointmentRequest,
    ) -> ServiceResult<AppointmentResponse> {
        let actor = self.load_actor(actor_id).await?;
        let mut appointment = self.load_appointment(id).await?;
        if !appointment.accessible_by(&actor) {
            return Err(DomainError::AppointmentAccessDenied.into());
        }

        // Patients may only cancel through the generic update path
        if actor.is_patient() {
            if let Some(status) = request.status {
                if status != AppointmentStatus::Cancelled {
                    return Err(DomainError::PatientsMayOnlyCancel.into());
                }
            }
        }

        if let Some(scheduled_at) = request.scheduled_at {
            if scheduled_at != appointment.scheduled_at {
                let conflicts = self
                    .ctx
                    .appointment_repo()
                    .find_conflicts(appointment.doctor_id, scheduled_at)
                    .await?;
                if conflicts.iter().any(|c| c.id != appointment.id) {
                    return Err(DomainError::TimeSlotTaken.into());
                }
            }
            appointment.scheduled_at = scheduled_at;
        }

        if let Some(status) = request.status {
            let now = Utc::now();
            match status {
                AppointmentStatus::InProgress => appointment.begin(now),
                AppointmentStatus::Completed => appointment.complete(now),
                other => appointment.status = other,
            }
        }

        if let Some(notes) = request.notes {
            appointment.notes = Some(notes);
        }
        if let Some(diagnosis) = request.diagnosis {
            appointment.diagnosis = Some(diagnosis);
        }
        if let Some(prescription) = request.prescription {
            appointment.prescription = Some(prescription);
        }

        self.ctx.appointment_repo().update(&appointment).await?;

        info!(appointment_id = appointment.id, status = %appointment.status, "Appointment updated");
        Ok(AppointmentResponse::from(&appointment))
    }

    /// Cancel an appointment that is not completed or in progress
    #[instrument(skip(self))]
    pub async fn cancel(&self, actor_id: i64, id: i64) -> ServiceResult<AppointmentResponse> {
        let actor = self.load_actor(actor_id).await?;
        let mut appointment = self.load_appointment(id).await?;
        if !appointment.accessible_by(&actor) {
            return Err(DomainError::AppointmentAccessDenied.into());
        }

        match appointment.status {
            AppointmentStatus::Completed => return Err(DomainError::CancelCompleted.into()),
            AppointmentStatus::InProgress => return Err(DomainError::CancelInProgress.into()),
            _ => {}
        }

        appointment.status = AppointmentStatus::Cancelled;
        self.ctx.appointment_repo().update(&appointment).await?;

        info!(appointment_id = appointment.id, "Appointment cancelled");
        Ok(AppointmentResponse::from(&appointment))
    }

    /// Confirm a scheduled appointment; only the assigned doctor may confirm
    #[instrument(skip(self))]
    pub async fn confirm(&self, actor_id: i64, id: i64) -> ServiceResult<AppointmentResponse> {
        let mut appointment = self.load_appointment(id).await?;

        // Only the assigned doctor qualifies; an admin token does not
        if appointment.doctor_id != actor_id {
            return Err(DomainError::NotAssignedDoctor.into());
        }
        if appointment.status != AppointmentStatus::Scheduled {
            return Err(DomainError::NotConfirmable.into());
        }

        appointment.status = AppointmentStatus::Confirmed;
        self.ctx.appointment_repo().update(&appointment).await?;

        info!(appointment_id = appointment.id, "Appointment confirmed");
        Ok(AppointmentResponse::from(&appointment))
    }
}
