//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Plan not found: {0}")]
    PlanNotFound(i64),

    #[error("Appointment not found: {0}")]
    AppointmentNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Selected professional is not a doctor")]
    NotADoctor,

    #[error("This doctor is not available")]
    DoctorUnavailable,

    #[error("Appointment must be scheduled for a future date")]
    ScheduleInPast,

    #[error("Monthly appointment limit for your plan has been reached")]
    PlanLimitReached,

    #[error("Cannot cancel a completed appointment")]
    CancelCompleted,

    #[error("Cannot cancel an appointment in progress")]
    CancelInProgress,

    #[error("Only scheduled appointments can be confirmed")]
    NotConfirmable,

    #[error("CRM is required for doctors")]
    CrmRequired,

    #[error("Specialty is required for doctors")]
    SpecialtyRequired,

    #[error("This plan is not available")]
    PlanInactive,

    #[error("Account is deactivated")]
    AccountDeactivated,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("You do not have permission to access this appointment")]
    AppointmentAccessDenied,

    #[error("Patients may only cancel appointments")]
    PatientsMayOnlyCancel,

    #[error("Only the assigned doctor can confirm an appointment")]
    NotAssignedDoctor,

    #[error("Administrator privileges required")]
    AdminRequired,

    #[error("You do not have permission to modify this user")]
    UserAccessDenied,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("CPF already registered")]
    CpfAlreadyExists,

    #[error("A plan with this name already exists")]
    PlanNameExists,

    #[error("This time slot is already taken")]
    TimeSlotTaken,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PlanNotFound(_) => "UNKNOWN_PLAN",
            Self::AppointmentNotFound(_) => "UNKNOWN_APPOINTMENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::NotADoctor => "NOT_A_DOCTOR",
            Self::DoctorUnavailable => "DOCTOR_UNAVAILABLE",
            Self::ScheduleInPast => "SCHEDULE_IN_PAST",
            Self::PlanLimitReached => "PLAN_LIMIT_REACHED",
            Self::CancelCompleted => "CANCEL_COMPLETED",
            Self::CancelInProgress => "CANCEL_IN_PROGRESS",
            Self::NotConfirmable => "NOT_CONFIRMABLE",
            Self::CrmRequired => "CRM_REQUIRED",
            Self::SpecialtyRequired => "SPECIALTY_REQUIRED",
            Self::PlanInactive => "PLAN_INACTIVE",
            Self::AccountDeactivated => "ACCOUNT_DEACTIVATED",

            // Authorization
            Self::AppointmentAccessDenied => "APPOINTMENT_ACCESS_DENIED",
            Self::PatientsMayOnlyCancel => "PATIENTS_MAY_ONLY_CANCEL",
            Self::NotAssignedDoctor => "NOT_ASSIGNED_DOCTOR",
            Self::AdminRequired => "ADMIN_REQUIRED",
            Self::UserAccessDenied => "USER_ACCESS_DENIED",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::CpfAlreadyExists => "CPF_ALREADY_EXISTS",
            Self::PlanNameExists => "PLAN_NAME_EXISTS",
            Self::TimeSlotTaken => "TIME_SLOT_TAKEN",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::PlanNotFound(_) | Self::AppointmentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::NotADoctor
                | Self::DoctorUnavailable
                | Self::ScheduleInPast
                | Self::PlanLimitReached
                | Self::CancelCompleted
                | Self::CancelInProgress
                | Self::NotConfirmable
                | Self::CrmRequired
                | Self::SpecialtyRequired
                | Self::PlanInactive
                | Self::AccountDeactivated
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::AppointmentAccessDenied
                | Self::PatientsMayOnlyCancel
                | Self::NotAssignedDoctor
                | Self::AdminRequired
                | Self::UserAccessDenied
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::CpfAlreadyExists
                | Self::PlanNameExists
                | Self::TimeSlotTaken
        )
    }
}
