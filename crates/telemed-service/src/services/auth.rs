//! Authentication service
//!
//! Handles user registration and login.

use chrono::Utc;
use telemed_common::auth::{hash_password, validate_password_strength, verify_password};
use telemed_common::AppError;
use telemed_core::entities::User;
use telemed_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email, role = %request.role))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        // Validate password strength before touching the database
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        // Doctors must carry licence and specialty
        if request.role == telemed_core::Role::Doctor {
            if request.crm.as_deref().unwrap_or("").trim().is_empty() {
                return Err(DomainError::CrmRequired.into());
            }
            if request.specialty.as_deref().unwrap_or("").trim().is_empty() {
                return Err(DomainError::SpecialtyRequired.into());
            }
        }

        // Uniqueness checks
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }
        if self.ctx.user_repo().cpf_exists(&request.cpf).await? {
            return Err(DomainError::CpfAlreadyExists.into());
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let now = Utc::now();
        let user = User {
            // Assigned by the database on insert
            id: 0,
            name: request.name,
            email: request.email,
            cpf: request.cpf,
            phone_number: request.phone_number,
            role: request.role,
            crm: request.crm,
            specialty: request.specialty,
            plan_id: None,
            active: true,
            created_at: now,
            updated_at: now,
        };

        let user = self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = user.id, "User registered successfully");

        let access = self
            .ctx
            .jwt_service()
            .issue_token(user.id, user.role)
            .map_err(ServiceError::from)?;

        Ok(AuthResponse::new(
            access.token,
            access.expires_in,
            UserResponse::from(&user),
        ))
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        if !user.active {
            warn!(user_id = user.id, "Login rejected: account deactivated");
            return Err(DomainError::AccountDeactivated.into());
        }

        info!(user_id = user.id, "User logged in successfully");

        let access = self
            .ctx
            .jwt_service()
            .issue_token(user.id, user.role)
            .map_err(ServiceError::from)?;

        Ok(AuthResponse::new(
            access.token,
            access.expires_in,
            UserResponse::from(&user),
        ))
    }
}
