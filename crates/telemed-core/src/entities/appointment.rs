//! Appointment entity and its status lifecycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

/// Appointment lifecycle status
///
/// ```text
/// SCHEDULED --confirm--> CONFIRMED
/// SCHEDULED/CONFIRMED --> IN_PROGRESS --> COMPLETED
/// {SCHEDULED, CONFIRMED} --cancel--> CANCELLED
/// any non-terminal --> NO_SHOW
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    /// Text code used in the database
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Confirmed => "CONFIRMED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::NoShow => "NO_SHOW",
        }
    }

    /// Parse the text code back into a status
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "SCHEDULED" => Some(Self::Scheduled),
            "CONFIRMED" => Some(Self::Confirmed),
            "IN_PROGRESS" => Some(Self::InProgress),
            "COMPLETED" => Some(Self::Completed),
            "CANCELLED" => Some(Self::Cancelled),
            "NO_SHOW" => Some(Self::NoShow),
            _ => None,
        }
    }

    /// Terminal states: no workflow operation leads out of them
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled | Self::NoShow)
    }

    /// Only upcoming appointments may be cancelled
    #[inline]
    pub fn can_be_cancelled(self) -> bool {
        !matches!(self, Self::Completed | Self::InProgress)
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Appointment entity - one scheduled patient/doctor interaction
///
/// Invariant: at most one non-cancelled appointment exists per
/// (doctor, scheduled_at) pair. `video_room_id` is an opaque session
/// identifier; only uniqueness matters.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    pub scheduled_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub patient_complaint: Option<String>,
    pub diagnosis: Option<String>,
    pub prescription: Option<String>,
    pub video_room_id: String,
    pub duration_minutes: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// Access predicate: admins, plus the patient and doctor on the record
    #[must_use]
    pub fn accessible_by(&self, user: &User) -> bool {
        user.is_admin() || self.patient_id == user.id || self.doctor_id == user.id
    }

    /// Mark the session as started
    pub fn begin(&mut self, now: DateTime<Utc>) {
        self.status = AppointmentStatus::InProgress;
        self.started_at = Some(now);
    }

    /// Mark the session as finished, computing the whole-minute duration
    /// when a start time was recorded
    pub fn complete(&mut self, now: DateTime<Utc>) {
        self.status = AppointmentStatus::Completed;
        self.ended_at = Some(now);
        if let Some(started) = self.started_at {
            let minutes = (now - started).num_minutes();
            self.duration_minutes = Some(minutes as i32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::user::Role;
    use chrono::Duration;

    fn appointment(patient_id: i64, doctor_id: i64) -> Appointment {
        let now = Utc::now();
        Appointment {
            id: 10,
            patient_id,
            doctor_id,
            scheduled_at: now + Duration::days(1),
            started_at: None,
            ended_at: None,
            status: AppointmentStatus::Scheduled,
            notes: None,
            patient_complaint: None,
            diagnosis: None,
            prescription: None,
            video_room_id: "room".to_string(),
            duration_minutes: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn user(id: i64, role: Role) -> User {
        let now = Utc::now();
        User {
            id,
            name: "u".to_string(),
            email: format!("u{id}@example.com"),
            cpf: format!("{id:011}"),
            phone_number: None,
            role,
            crm: None,
            specialty: None,
            plan_id: None,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            AppointmentStatus::Scheduled,
            AppointmentStatus::Confirmed,
            AppointmentStatus::InProgress,
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
            AppointmentStatus::NoShow,
        ] {
            assert_eq!(AppointmentStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(AppointmentStatus::parse("PENDING"), None);
    }

    #[test]
    fn test_terminal_states() {
        assert!(AppointmentStatus::Completed.is_terminal());
        assert!(AppointmentStatus::Cancelled.is_terminal());
        assert!(AppointmentStatus::NoShow.is_terminal());
        assert!(!AppointmentStatus::Scheduled.is_terminal());
        assert!(!AppointmentStatus::InProgress.is_terminal());
    }

    #[test]
    fn test_cancellable_states() {
        assert!(AppointmentStatus::Scheduled.can_be_cancelled());
        assert!(AppointmentStatus::Confirmed.can_be_cancelled());
        assert!(AppointmentStatus::NoShow.can_be_cancelled());
        assert!(!AppointmentStatus::InProgress.can_be_cancelled());
        assert!(!AppointmentStatus::Completed.can_be_cancelled());
    }

    #[test]
    fn test_accessible_by() {
        let appt = appointment(1, 2);
        assert!(appt.accessible_by(&user(1, Role::Patient)));
        assert!(appt.accessible_by(&user(2, Role::Doctor)));
        assert!(appt.accessible_by(&user(99, Role::Admin)));
        assert!(!appt.accessible_by(&user(3, Role::Patient)));
    }

    #[test]
    fn test_complete_computes_duration() {
        let mut appt = appointment(1, 2);
        let start = Utc::now();
        appt.begin(start);
        assert_eq!(appt.status, AppointmentStatus::InProgress);
        assert_eq!(appt.started_at, Some(start));

        let end = start + Duration::minutes(25) + Duration::seconds(40);
        appt.complete(end);
        assert_eq!(appt.status, AppointmentStatus::Completed);
        assert_eq!(appt.ended_at, Some(end));
        // Whole minutes only
        assert_eq!(appt.duration_minutes, Some(25));
    }

    #[test]
    fn test_complete_without_start_leaves_duration_unset() {
        let mut appt = appointment(1, 2);
        appt.complete(Utc::now());
        assert_eq!(appt.status, AppointmentStatus::Completed);
        assert!(appt.ended_at.is_some());
        assert_eq!(appt.duration_minutes, None);
    }
}
