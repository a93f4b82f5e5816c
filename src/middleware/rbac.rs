// src/middleware/rbac.rs

use axum::{extract::FromRequestParts, http::request::Parts};
use std::marker::PhantomData;

use crate::{
    common::error::AppError,
    models::auth::{Profile, UserRole},
};

/// Define quais cargos passam por uma rota.
pub trait RoleRequirement: Send + Sync + 'static {
    fn allows(role: UserRole) -> bool;
}

/// Extrator guardião: `_guard: RequireRole<AdminOnly>` no handler.
pub struct RequireRole<T>(pub PhantomData<T>);

impl<T, S> FromRequestParts<S> for RequireRole<T>
where
    T: RoleRequirement,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // O auth_guard já colocou o perfil nas extensions
        let profile = parts
            .extensions
            .get::<Profile>()
            .ok_or(AppError::InvalidToken)?;

        if !T::allows(profile.role) {
            tracing::warn!("⛔ Perfil {} ({:?}) sem acesso à rota", profile.id, profile.role);
            return Err(AppError::Forbidden);
        }

        Ok(RequireRole(PhantomData))
    }
}

// ---
// DEFINIÇÃO DOS CARGOS (TIPOS)
// ---

pub struct AdminOnly;
impl RoleRequirement for AdminOnly {
    fn allows(role: UserRole) -> bool {
        role == UserRole::Admin
    }
}

// Admin ou encarregado
pub struct Staff;
impl RoleRequirement for Staff {
    fn allows(role: UserRole) -> bool {
        matches!(role, UserRole::Admin | UserRole::Manager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_only_rejects_everyone_else() {
        assert!(AdminOnly::allows(UserRole::Admin));
        assert!(!AdminOnly::allows(UserRole::Manager));
        assert!(!AdminOnly::allows(UserRole::Employee));
    }

    #[test]
    fn staff_is_admin_or_manager() {
        assert!(Staff::allows(UserRole::Admin));
        assert!(Staff::allows(UserRole::Manager));
        assert!(!Staff::allows(UserRole::Employee));
    }
}
