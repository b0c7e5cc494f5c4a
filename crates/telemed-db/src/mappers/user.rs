//! User entity <-> model mapper

use telemed_core::entities::{Role, User};
use telemed_core::error::DomainError;

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// The role column is written exclusively through `Role::as_str`; an
/// unknown value surfaces as a database error instead of being coerced
/// to some valid role.
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = Role::parse(&model.role).ok_or_else(|| {
            DomainError::DatabaseError(format!(
                "user {} has unknown role '{}'",
                model.id, model.role
            ))
        })?;

        Ok(User {
            id: model.id,
            name: model.name,
            email: model.email,
            cpf: model.cpf,
            phone_number: model.phone_number,
            role,
            crm: model.crm,
            specialty: model.specialty,
            plan_id: model.plan_id,
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
