//! User service
//!
//! Profile reads and updates, account activation, and the public doctor
//! directory.

use telemed_core::entities::{Role, User};
use telemed_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{DoctorResponse, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn load_user(&self, id: i64) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(id).into())
    }

    /// Get the currently authenticated user
    #[instrument(skip(self))]
    pub async fn me(&self, actor_id: i64) -> ServiceResult<UserResponse> {
        let user = self.load_user(actor_id).await?;
        Ok(UserResponse::from(&user))
    }

    /// Get a user by id; admins may read anyone, others only themselves
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, actor_id: i64, target_id: i64) -> ServiceResult<UserResponse> {
        let actor = self.load_user(actor_id).await?;
        if !actor.is_admin() && actor_id != target_id {
            return Err(DomainError::UserAccessDenied.into());
        }

        let user = self.load_user(target_id).await?;
        Ok(UserResponse::from(&user))
    }

    /// List all users (admin only)
    #[instrument(skip(self))]
    pub async fn list_all(&self, actor_id: i64) -> ServiceResult<Vec<UserResponse>> {
        let actor = self.load_user(actor_id).await?;
        if !actor.is_admin() {
            return Err(DomainError::AdminRequired.into());
        }

        let users = self.ctx.user_repo().find_all().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Update a user's profile; admins may edit anyone, others only themselves
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor_id: i64,
        target_id: i64,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let actor = self.load_user(actor_id).await?;
        if !actor.is_admin() && actor_id != target_id {
            return Err(DomainError::UserAccessDenied.into());
        }

        let mut user = self.load_user(target_id).await?;

        if let Some(name) = request.name {
            user.name = name;
        }
        if let Some(phone) = request.phone_number {
            user.phone_number = Some(phone);
        }
        if let Some(specialty) = request.specialty {
            if !user.is_doctor() {
                return Err(ServiceError::validation(
                    "Specialty can only be set for doctors",
                ));
            }
            user.specialty = Some(specialty);
        }

        self.ctx.user_repo().update(&user).await?;

        info!(user_id = user.id, "User profile updated");
        Ok(UserResponse::from(&user))
    }

    /// Activate or deactivate an account (admin only)
    #[instrument(skip(self))]
    pub async fn set_active(
        &self,
        actor_id: i64,
        target_id: i64,
        active: bool,
    ) -> ServiceResult<()> {
        let actor = self.load_user(actor_id).await?;
        if !actor.is_admin() {
            return Err(DomainError::AdminRequired.into());
        }

        self.ctx.user_repo().set_active(target_id, active).await?;

        info!(user_id = target_id, active, "User active flag changed");
        Ok(())
    }

    /// Public doctor directory: all active doctors
    #[instrument(skip(self))]
    pub async fn list_public_doctors(&self) -> ServiceResult<Vec<DoctorResponse>> {
        let doctors = self.ctx.user_repo().find_active_by_role(Role::Doctor).await?;
        Ok(doctors.iter().map(DoctorResponse::from).collect())
    }

    /// Public doctor directory filtered by specialty substring
    #[instrument(skip(self))]
    pub async fn list_doctors_by_specialty(
        &self,
        specialty: &str,
    ) -> ServiceResult<Vec<DoctorResponse>> {
        let doctors = self
            .ctx
            .user_repo()
            .find_doctors_by_specialty(specialty)
            .await?;
        Ok(doctors.iter().map(DoctorResponse::from).collect())
    }
}
