// src/models/attendance.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "attendance_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AttendanceType {
    CheckIn,
    CheckOut,
}

// Um fichaje aceito (somente inserção)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub stadium_id: Uuid,
    pub record_type: AttendanceType,
    pub recorded_at: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    #[schema(example = 42.7)]
    pub distance_meters: f64,
}

// Escaneamento do QR do predio
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceScanPayload {
    /// Conteúdo lido do QR (o id do predio).
    #[validate(length(min = 1, message = "El código QR es obligatorio."))]
    #[schema(example = "6a1f9c1e-3b0a-4c55-9d7e-1c2b3a4d5e6f")]
    pub code: String,
    #[serde(rename = "type")]
    pub record_type: AttendanceType,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitud fuera de rango."))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "Longitud fuera de rango."))]
    pub longitude: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceFilter {
    pub user_id: Option<Uuid>,
    pub stadium_id: Option<Uuid>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}
