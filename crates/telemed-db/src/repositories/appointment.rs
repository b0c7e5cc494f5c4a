//! PostgreSQL implementation of AppointmentRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use telemed_core::entities::{Appointment, AppointmentStatus};
use telemed_core::error::DomainError;
use telemed_core::traits::{AppointmentRepository, RepoResult};

use crate::models::AppointmentModel;

use super::error::{appointment_not_found, map_db_error, map_unique_violation};

const APPOINTMENT_COLUMNS: &str = "id, patient_id, doctor_id, scheduled_at, started_at, \
                                   ended_at, status, notes, patient_complaint, diagnosis, \
                                   prescription, video_room_id, duration_minutes, created_at, \
                                   updated_at";

/// PostgreSQL implementation of AppointmentRepository
#[derive(Clone)]
pub struct PgAppointmentRepository {
    pool: PgPool,
}

impl PgAppointmentRepository {
    /// Create a new PgAppointmentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for PgAppointmentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Appointment>> {
        let result = sqlx::query_as::<_, AppointmentModel>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Appointment::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_patient(&self, patient_id: i64) -> RepoResult<Vec<Appointment>> {
        let rows = sqlx::query_as::<_, AppointmentModel>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments \
             WHERE patient_id = $1 ORDER BY scheduled_at DESC"
        ))
        .bind(patient_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Appointment::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_doctor(&self, doctor_id: i64) -> RepoResult<Vec<Appointment>> {
        let rows = sqlx::query_as::<_, AppointmentModel>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments \
             WHERE doctor_id = $1 ORDER BY scheduled_at DESC"
        ))
        .bind(doctor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Appointment::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_patient_and_status(
        &self,
        patient_id: i64,
        status: AppointmentStatus,
    ) -> RepoResult<Vec<Appointment>> {
        let rows = sqlx::query_as::<_, AppointmentModel>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments \
             WHERE patient_id = $1 AND status = $2 ORDER BY scheduled_at DESC"
        ))
        .bind(patient_id)
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Appointment::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_doctor_and_status(
        &self,
        doctor_id: i64,
        status: AppointmentStatus,
    ) -> RepoResult<Vec<Appointment>> {
        let rows = sqlx::query_as::<_, AppointmentModel>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments \
             WHERE doctor_id = $1 AND status = $2 ORDER BY scheduled_at DESC"
        ))
        .bind(doctor_id)
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Appointment::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_patient_in_range(
        &self,
        patient_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RepoResult<Vec<Appointment>> {
        let rows = sqlx::query_as::<_, AppointmentModel>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments \
             WHERE patient_id = $1 AND scheduled_at BETWEEN $2 AND $3 \
             ORDER BY scheduled_at"
        ))
        .bind(patient_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Appointment::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_doctor_in_range(
        &self,
        doctor_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RepoResult<Vec<Appointment>> {
        let rows = sqlx::query_as::<_, AppointmentModel>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments \
             WHERE doctor_id = $1 AND scheduled_at BETWEEN $2 AND $3 \
             ORDER BY scheduled_at"
        ))
        .bind(doctor_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Appointment::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RepoResult<Vec<Appointment>> {
        let rows = sqlx::query_as::<_, AppointmentModel>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments \
             WHERE scheduled_at BETWEEN $1 AND $2 ORDER BY scheduled_at"
        ))
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Appointment::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_conflicts(
        &self,
        doctor_id: i64,
        scheduled_at: DateTime<Utc>,
    ) -> RepoResult<Vec<Appointment>> {
        let rows = sqlx::query_as::<_, AppointmentModel>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments \
             WHERE doctor_id = $1 AND scheduled_at = $2 AND status <> 'CANCELLED'"
        ))
        .bind(doctor_id)
        .bind(scheduled_at)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Appointment::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn count_patient_in_month(
        &self,
        patient_id: i64,
        year: i32,
        month: u32,
    ) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM appointments \
             WHERE patient_id = $1 AND status <> 'CANCELLED' \
               AND EXTRACT(YEAR FROM scheduled_at)::int = $2 \
               AND EXTRACT(MONTH FROM scheduled_at)::int = $3",
        )
        .bind(patient_id)
        .bind(year)
        .bind(month as i32)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn create(&self, appointment: &Appointment) -> RepoResult<Appointment> {
        let model = sqlx::query_as::<_, AppointmentModel>(&format!(
            "INSERT INTO appointments (patient_id, doctor_id, scheduled_at, status, \
             patient_complaint, video_room_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {APPOINTMENT_COLUMNS}"
        ))
        .bind(appointment.patient_id)
        .bind(appointment.doctor_id)
        .bind(appointment.scheduled_at)
        .bind(appointment.status.as_str())
        .bind(&appointment.patient_complaint)
        .bind(&appointment.video_room_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TimeSlotTaken))?;

        Appointment::try_from(model)
    }

    #[instrument(skip(self))]
    async fn update(&self, appointment: &Appointment) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE appointments \
             SET scheduled_at = $2, started_at = $3, ended_at = $4, status = $5, notes = $6, \
                 patient_complaint = $7, diagnosis = $8, prescription = $9, \
                 duration_minutes = $10, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(appointment.id)
        .bind(appointment.scheduled_at)
        .bind(appointment.started_at)
        .bind(appointment.ended_at)
        .bind(appointment.status.as_str())
        .bind(&appointment.notes)
        .bind(&appointment.patient_complaint)
        .bind(&appointment.diagnosis)
        .bind(&appointment.prescription)
        .bind(appointment.duration_minutes)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TimeSlotTaken))?;

        if result.rows_affected() == 0 {
            return Err(appointment_not_found(appointment.id));
        }

        Ok(())
    }
}
