//! # telemed-core
//!
//! Domain layer containing entities, errors, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{Appointment, AppointmentStatus, Plan, Role, User};
pub use error::DomainError;
pub use traits::{AppointmentRepository, PlanRepository, RepoResult, UserRepository};
