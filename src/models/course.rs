// src/models/course.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use utoipa::ToSchema;
use validator::Validate;

// Capacitações disponíveis no portal do funcionário
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    #[schema(example = "Manejo seguro de agroquímicos")]
    pub title: String,
    pub description: Option<String>,
    pub content_url: Option<String>,
    #[schema(example = 6)]
    pub duration_hours: Option<i32>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCoursePayload {
    #[validate(length(min = 1, message = "El título es obligatorio."))]
    pub title: String,
    pub description: Option<String>,
    pub content_url: Option<String>,
    #[validate(range(min = 1, message = "La duración debe ser positiva."))]
    pub duration_hours: Option<i32>,
    #[serde(default = "active_by_default")]
    pub active: bool,
}

fn active_by_default() -> bool {
    true
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCoursePayload {
    #[validate(length(min = 1, message = "El título es obligatorio."))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub content_url: Option<String>,
    #[validate(range(min = 1, message = "La duración debe ser positiva."))]
    pub duration_hours: Option<i32>,
    pub active: Option<bool>,
}
