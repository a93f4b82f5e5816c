// src/models/user.rs

use serde::Deserialize;
use uuid::Uuid;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::auth::UserRole;

// Alta de pessoal pelo admin (pode definir cargo e predio)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserPayload {
    #[validate(email(message = "El e-mail no es válido."))]
    pub email: String,
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres."))]
    pub password: String,
    #[validate(length(min = 1, message = "El nombre es obligatorio."))]
    pub full_name: String,
    #[serde(default = "default_role")]
    pub role: UserRole,
    pub assigned_stadium_id: Option<Uuid>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub dni: Option<String>,
}

fn default_role() -> UserRole {
    UserRole::Employee
}

// Edição pelo admin: campos ausentes ficam como estão
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserPayload {
    #[validate(length(min = 1, message = "El nombre es obligatorio."))]
    pub full_name: Option<String>,
    pub role: Option<UserRole>,
    pub assigned_stadium_id: Option<Uuid>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub dni: Option<String>,
    pub avatar_url: Option<String>,
}

// Autogestão: só dados de contato
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMePayload {
    #[validate(length(min = 1, message = "El nombre es obligatorio."))]
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub avatar_url: Option<String>,
}
