//! Database models with SQLx `FromRow` derives

pub mod appointment;
pub mod plan;
pub mod user;

pub use appointment::AppointmentModel;
pub use plan::PlanModel;
pub use user::UserModel;
