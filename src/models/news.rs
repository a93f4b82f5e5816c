// src/models/news.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use utoipa::ToSchema;
use validator::Validate;

// Notícias do site institucional
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: Uuid,
    #[schema(example = "Resembrado de invierno en el Predio Dock Sud")]
    pub title: String,
    pub summary: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
    pub published: bool,
    pub author_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNewsPayload {
    #[validate(length(min = 1, max = 200, message = "El título es obligatorio (máx. 200)."))]
    pub title: String,
    pub summary: Option<String>,
    #[validate(length(min = 1, message = "El contenido es obligatorio."))]
    pub content: String,
    pub image_url: Option<String>,
    #[serde(default = "published_by_default")]
    pub published: bool,
}

fn published_by_default() -> bool {
    true
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNewsPayload {
    #[validate(length(min = 1, max = 200, message = "El título es obligatorio (máx. 200)."))]
    pub title: Option<String>,
    pub summary: Option<String>,
    #[validate(length(min = 1, message = "El contenido es obligatorio."))]
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub published: Option<bool>,
}
