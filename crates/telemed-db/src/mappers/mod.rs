//! Entity ↔ model mappers

pub mod appointment;
pub mod plan;
pub mod user;
