//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Appointment, AppointmentStatus, Plan, Role, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if CPF is already registered
    async fn cpf_exists(&self, cpf: &str) -> RepoResult<bool>;

    /// List all users
    async fn find_all(&self) -> RepoResult<Vec<User>>;

    /// List active users with the given role
    async fn find_active_by_role(&self, role: Role) -> RepoResult<Vec<User>>;

    /// List active doctors whose specialty contains the given text
    /// (case-insensitive)
    async fn find_doctors_by_specialty(&self, specialty: &str) -> RepoResult<Vec<User>>;

    /// Persist a new user, returning it with its generated id
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<User>;

    /// Update mutable profile fields (name, phone, specialty)
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Set the active flag
    async fn set_active(&self, id: i64, active: bool) -> RepoResult<()>;

    /// Set or clear the plan subscription reference
    async fn set_plan(&self, id: i64, plan_id: Option<i64>) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;
}

// ============================================================================
// Plan Repository
// ============================================================================

#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Find plan by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Plan>>;

    /// List all plans
    async fn find_all(&self) -> RepoResult<Vec<Plan>>;

    /// List active plans ordered by price ascending
    async fn find_active_ordered_by_price(&self) -> RepoResult<Vec<Plan>>;

    /// Check if a plan name is already taken
    async fn name_exists(&self, name: &str) -> RepoResult<bool>;

    /// Persist a new plan, returning it with its generated id
    async fn create(&self, plan: &Plan) -> RepoResult<Plan>;

    /// Update an existing plan
    async fn update(&self, plan: &Plan) -> RepoResult<()>;

    /// Set the active flag
    async fn set_active(&self, id: i64, active: bool) -> RepoResult<()>;
}

// ============================================================================
// Appointment Repository
// ============================================================================

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Find appointment by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Appointment>>;

    /// List appointments where the user is the patient
    async fn find_by_patient(&self, patient_id: i64) -> RepoResult<Vec<Appointment>>;

    /// List appointments where the user is the doctor
    async fn find_by_doctor(&self, doctor_id: i64) -> RepoResult<Vec<Appointment>>;

    /// List a patient's appointments with the given status
    async fn find_by_patient_and_status(
        &self,
        patient_id: i64,
        status: AppointmentStatus,
    ) -> RepoResult<Vec<Appointment>>;

    /// List a doctor's appointments with the given status
    async fn find_by_doctor_and_status(
        &self,
        doctor_id: i64,
        status: AppointmentStatus,
    ) -> RepoResult<Vec<Appointment>>;

    /// List a patient's appointments within a time range
    async fn find_by_patient_in_range(
        &self,
        patient_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RepoResult<Vec<Appointment>>;

    /// List a doctor's appointments within a time range
    async fn find_by_doctor_in_range(
        &self,
        doctor_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RepoResult<Vec<Appointment>>;

    /// List all appointments within a time range (admin view)
    async fn find_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RepoResult<Vec<Appointment>>;

    /// Non-cancelled appointments for a doctor at exactly the given time
    async fn find_conflicts(
        &self,
        doctor_id: i64,
        scheduled_at: DateTime<Utc>,
    ) -> RepoResult<Vec<Appointment>>;

    /// Count a patient's non-cancelled appointments scheduled in the given
    /// calendar month
    async fn count_patient_in_month(
        &self,
        patient_id: i64,
        year: i32,
        month: u32,
    ) -> RepoResult<i64>;

    /// Persist a new appointment, returning it with its generated id
    async fn create(&self, appointment: &Appointment) -> RepoResult<Appointment>;

    /// Update an existing appointment
    async fn update(&self, appointment: &Appointment) -> RepoResult<()>;
}
