//! PostgreSQL repository implementations

pub mod appointment;
pub mod error;
pub mod plan;
pub mod user;

pub use appointment::PgAppointmentRepository;
pub use plan::PgPlanRepository;
pub use user::PgUserRepository;
