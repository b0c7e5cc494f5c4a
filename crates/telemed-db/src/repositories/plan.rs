//! PostgreSQL implementation of PlanRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use telemed_core::entities::Plan;
use telemed_core::error::DomainError;
use telemed_core::traits::{PlanRepository, RepoResult};

use crate::models::PlanModel;

use super::error::{map_db_error, map_unique_violation, plan_not_found};

const PLAN_COLUMNS: &str = "id, name, description, price, duration_months, \
                            max_appointments_month, has_video_call, has_chat, has_prescription, \
                            has_medical_certificate, features, active, created_at, updated_at";

/// PostgreSQL implementation of PlanRepository
#[derive(Clone)]
pub struct PgPlanRepository {
    pool: PgPool,
}

impl PgPlanRepository {
    /// Create a new PgPlanRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanRepository for PgPlanRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Plan>> {
        let result = sqlx::query_as::<_, PlanModel>(&format!(
            "SELECT {PLAN_COLUMNS} FROM plans WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Plan::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Plan>> {
        let rows = sqlx::query_as::<_, PlanModel>(&format!(
            "SELECT {PLAN_COLUMNS} FROM plans ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Plan::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_active_ordered_by_price(&self) -> RepoResult<Vec<Plan>> {
        let rows = sqlx::query_as::<_, PlanModel>(&format!(
            "SELECT {PLAN_COLUMNS} FROM plans WHERE active ORDER BY price"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Plan::from).collect())
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, name: &str) -> RepoResult<bool> {
        let result =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM plans WHERE name = $1)")
                .bind(name)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, plan: &Plan) -> RepoResult<Plan> {
        let model = sqlx::query_as::<_, PlanModel>(&format!(
            "INSERT INTO plans (name, description, price, duration_months, \
             max_appointments_month, has_video_call, has_chat, has_prescription, \
             has_medical_certificate, features, active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {PLAN_COLUMNS}"
        ))
        .bind(&plan.name)
        .bind(&plan.description)
        .bind(plan.price)
        .bind(plan.duration_months)
        .bind(plan.max_appointments_month)
        .bind(plan.has_video_call)
        .bind(plan.has_chat)
        .bind(plan.has_prescription)
        .bind(plan.has_medical_certificate)
        .bind(&plan.features)
        .bind(plan.active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::PlanNameExists))?;

        Ok(Plan::from(model))
    }

    #[instrument(skip(self))]
    async fn update(&self, plan: &Plan) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE plans \
             SET name = $2, description = $3, price = $4, duration_months = $5, \
                 max_appointments_month = $6, has_video_call = $7, has_chat = $8, \
                 has_prescription = $9, has_medical_certificate = $10, features = $11, \
                 updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(plan.id)
        .bind(&plan.name)
        .bind(&plan.description)
        .bind(plan.price)
        .bind(plan.duration_months)
        .bind(plan.max_appointments_month)
        .bind(plan.has_video_call)
        .bind(plan.has_chat)
        .bind(plan.has_prescription)
        .bind(plan.has_medical_certificate)
        .bind(&plan.features)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::PlanNameExists))?;

        if result.rows_affected() == 0 {
            return Err(plan_not_found(plan.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_active(&self, id: i64, active: bool) -> RepoResult<()> {
        let result = sqlx::query("UPDATE plans SET active = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(active)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(plan_not_found(id));
        }

        Ok(())
    }
}
