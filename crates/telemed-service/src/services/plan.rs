//! Plan service
//!
//! Public plan listings, admin-managed plan CRUD, and subscriptions.

use chrono::Utc;
use rust_decimal::Decimal;
use telemed_core::entities::{Plan, User};
use telemed_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CreatePlanRequest, PlanResponse, UpdatePlanRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Plan service
pub struct PlanService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PlanService<'a> {
    /// Create a new PlanService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn require_admin(&self, actor_id: i64) -> ServiceResult<User> {
        let actor = self
            .ctx
            .user_repo()
            .find_by_id(actor_id)
            .await?
            .ok_or(DomainError::UserNotFound(actor_id))?;
        if !actor.is_admin() {
            return Err(DomainError::AdminRequired.into());
        }
        Ok(actor)
    }

    async fn load_plan(&self, id: i64) -> ServiceResult<Plan> {
        self.ctx
            .plan_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::PlanNotFound(id).into())
    }

    /// Public listing: active plans ordered by price ascending
    #[instrument(skip(self))]
    pub async fn list_public(&self) -> ServiceResult<Vec<PlanResponse>> {
        let plans = self.ctx.plan_repo().find_active_ordered_by_price().await?;
        Ok(plans.iter().map(PlanResponse::from).collect())
    }

    /// Get a plan by id (public)
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> ServiceResult<PlanResponse> {
        let plan = self.load_plan(id).await?;
        Ok(PlanResponse::from(&plan))
    }

    /// List all plans including inactive ones (admin only)
    #[instrument(skip(self))]
    pub async fn list_all(&self, actor_id: i64) -> ServiceResult<Vec<PlanResponse>> {
        self.require_admin(actor_id).await?;
        let plans = self.ctx.plan_repo().find_all().await?;
        Ok(plans.iter().map(PlanResponse::from).collect())
    }

    /// Create a new plan (admin only)
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        actor_id: i64,
        request: CreatePlanRequest,
    ) -> ServiceResult<PlanResponse> {
        self.require_admin(actor_id).await?;

        if request.price <= Decimal::ZERO {
            return Err(ServiceError::validation("Price must be positive"));
        }
        if self.ctx.plan_repo().name_exists(&request.name).await? {
            return Err(DomainError::PlanNameExists.into());
        }

        let now = Utc::now();
        let plan = Plan {
            // Assigned by the database on insert
            id: 0,
            name: request.name,
            description: request.description,
            price: request.price,
            duration_months: request.duration_months,
            max_appointments_month: request.max_appointments_month,
            has_video_call: request.has_video_call,
            has_chat: request.has_chat,
            has_prescription: request.has_prescription,
            has_medical_certificate: request.has_medical_certificate,
            features: request.features,
            active: true,
            created_at: now,
            updated_at: now,
        };

        let plan = self.ctx.plan_repo().create(&plan).await?;

        info!(plan_id = plan.id, "Plan created");
        Ok(PlanResponse::from(&plan))
    }

    /// Update an existing plan (admin only, partial semantics)
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor_id: i64,
        plan_id: i64,
        request: UpdatePlanRequest,
    ) -> ServiceResult<PlanResponse> {
        self.require_admin(actor_id).await?;

        let mut plan = self.load_plan(plan_id).await?;

        if let Some(name) = request.name {
            if name != plan.name && self.ctx.plan_repo().name_exists(&name).await? {
                return Err(DomainError::PlanNameExists.into());
            }
            plan.name = name;
        }
        if let Some(price) = request.price {
            if price <= Decimal::ZERO {
                return Err(ServiceError::validation("Price must be positive"));
            }
            plan.price = price;
        }
        if let Some(description) = request.description {
            plan.description = Some(description);
        }
        if let Some(duration) = request.duration_months {
            plan.duration_months = Some(duration);
        }
        if let Some(cap) = request.max_appointments_month {
            plan.max_appointments_month = Some(cap);
        }
        if let Some(v) = request.has_video_call {
            plan.has_video_call = v;
        }
        if let Some(v) = request.has_chat {
            plan.has_chat = v;
        }
        if let Some(v) = request.has_prescription {
            plan.has_prescription = v;
        }
        if let Some(v) = request.has_medical_certificate {
            plan.has_medical_certificate = v;
        }
        if let Some(features) = request.features {
            plan.features = features;
        }

        self.ctx.plan_repo().update(&plan).await?;

        info!(plan_id = plan.id, "Plan updated");
        Ok(PlanResponse::from(&plan))
    }

    /// Activate or deactivate a plan (admin only)
    #[instrument(skip(self))]
    pub async fn set_active(&self, actor_id: i64, plan_id: i64, active: bool) -> ServiceResult<()> {
        self.require_admin(actor_id).await?;
        self.ctx.plan_repo().set_active(plan_id, active).await?;

        info!(plan_id, active, "Plan active flag changed");
        Ok(())
    }

    /// Subscribe the acting user to a plan
    #[instrument(skip(self))]
    pub async fn subscribe(&self, actor_id: i64, plan_id: i64) -> ServiceResult<()> {
        let plan = self.load_plan(plan_id).await?;
        if !plan.active {
            return Err(DomainError::PlanInactive.into());
        }

        self.ctx.user_repo().set_plan(actor_id, Some(plan_id)).await?;

        info!(user_id = actor_id, plan_id, "User subscribed to plan");
        Ok(())
    }

    /// Cancel the acting user's subscription, clearing the plan reference
    #[instrument(skip(self))]
    pub async fn cancel_subscription(&self, actor_id: i64) -> ServiceResult<()> {
        self.ctx.user_repo().set_plan(actor_id, None).await?;

        info!(user_id = actor_id, "Subscription cancelled");
        Ok(())
    }
}
