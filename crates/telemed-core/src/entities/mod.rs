//! Domain entities

pub mod appointment;
pub mod plan;
pub mod user;

pub use appointment::{Appointment, AppointmentStatus};
pub use plan::Plan;
pub use user::{Role, User};
