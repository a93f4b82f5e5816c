// src/models/stadium.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::geo::{GeoError, GeoPoint};

// Predio: o local cujo QR é escaneado no fichaje
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stadium {
    pub id: Uuid,
    #[schema(example = "Predio Dock Sud")]
    pub name: String,
    #[schema(example = "Av. Debenedetti 1550")]
    pub address: Option<String>,
    #[schema(example = "Avellaneda")]
    pub city: Option<String>,
    #[schema(example = -34.6692)]
    pub latitude: f64,
    #[schema(example = -58.3650)]
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Stadium {
    pub fn location(&self) -> Result<GeoPoint, GeoError> {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStadiumPayload {
    #[validate(length(min = 1, message = "El nombre es obligatorio."))]
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitud fuera de rango."))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "Longitud fuera de rango."))]
    pub longitude: f64,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStadiumPayload {
    #[validate(length(min = 1, message = "El nombre es obligatorio."))]
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitud fuera de rango."))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0, message = "Longitud fuera de rango."))]
    pub longitude: Option<f64>,
}
