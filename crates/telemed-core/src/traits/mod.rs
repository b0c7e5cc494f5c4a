//! Repository traits (ports)

pub mod repositories;

pub use repositories::{AppointmentRepository, PlanRepository, RepoResult, UserRepository};
