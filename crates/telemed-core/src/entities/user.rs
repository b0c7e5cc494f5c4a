//! User entity - accounts for patients, doctors, and administrators

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role, stored as text and serialized SCREAMING_SNAKE_CASE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Doctor,
    Patient,
}

impl Role {
    /// Text code used in the database and JWT claims
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Doctor => "DOCTOR",
            Self::Patient => "PATIENT",
        }
    }

    /// Parse the text code back into a role
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ADMIN" => Some(Self::Admin),
            "DOCTOR" => Some(Self::Doctor),
            "PATIENT" => Some(Self::Patient),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity - a registered account
///
/// `crm` (licence id) and `specialty` are only meaningful for doctors and
/// are required at registration for the DOCTOR role. The plan reference is
/// non-owning: clearing it never deletes the plan.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub phone_number: Option<String>,
    pub role: Role,
    pub crm: Option<String>,
    pub specialty: Option<String>,
    pub plan_id: Option<i64>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    #[inline]
    pub fn is_doctor(&self) -> bool {
        self.role == Role::Doctor
    }

    #[inline]
    pub fn is_patient(&self) -> bool {
        self.role == Role::Patient
    }
}
