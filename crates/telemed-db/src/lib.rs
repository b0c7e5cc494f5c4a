//! # telemed-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! Provides:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//! - Embedded migrations

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

use telemed_core::DomainError;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{PgAppointmentRepository, PgPlanRepository, PgUserRepository};

/// Run embedded migrations against the given pool
///
/// # Errors
/// Returns a `DomainError::DatabaseError` if any migration fails
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))
}
