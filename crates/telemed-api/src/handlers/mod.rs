//! Request handlers organized by domain

pub mod appointments;
pub mod auth;
pub mod doctors;
pub mod health;
pub mod plans;
pub mod users;
