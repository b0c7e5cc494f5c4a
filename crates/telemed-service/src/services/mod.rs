//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod appointment;
pub mod auth;
pub mod context;
pub mod error;
pub mod plan;
pub mod user;

// Re-export all services for convenience
pub use appointment::AppointmentService;
pub use auth::AuthService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use plan::PlanService;
pub use user::UserService;
