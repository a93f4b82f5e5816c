// src/models/asset.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::FromRow;
use uuid::Uuid;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

// --- Enums ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "asset_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    Available,
    InUse,
    Maintenance,
    OutOfService,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "movement_action", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MovementAction {
    Receive,
    Transfer,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: Uuid,
    #[schema(example = "Cortadora de césped Honda HRX")]
    pub name: String,
    #[schema(example = "cortadora")]
    pub asset_type: String,
    #[schema(example = "HRX-2021-00045")]
    pub serial_number: Option<String>,
    pub status: AssetStatus,
    pub current_stadium_id: Option<Uuid>,
    #[schema(value_type = Object, example = json!({"motor": "4T 190cc", "corte": "53 cm"}))]
    pub technical_specs: sqlx::types::Json<serde_json::Map<String, serde_json::Value>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Linha do histórico de custódia (nunca alterada)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetMovement {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub from_stadium_id: Option<Uuid>,
    pub to_stadium_id: Option<Uuid>,
    pub moved_by: Option<Uuid>,
    pub action: MovementAction,
    pub notes: Option<String>,
    pub moved_at: DateTime<Utc>,
}

/// O que uma ação de custódia faz com o ativo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustodyChange {
    pub status: AssetStatus,
    pub current_stadium_id: Option<Uuid>,
    pub from_stadium_id: Option<Uuid>,
    pub to_stadium_id: Uuid,
}

impl MovementAction {
    /// `receive` sempre deixa o ativo disponível no predio de destino.
    /// `transfer` marca em uso e não muda a localização até o próximo `receive`.
    pub fn plan(self, current_stadium_id: Option<Uuid>, target_stadium_id: Uuid) -> CustodyChange {
        match self {
            MovementAction::Receive => CustodyChange {
                status: AssetStatus::Available,
                current_stadium_id: Some(target_stadium_id),
                from_stadium_id: current_stadium_id,
                to_stadium_id: target_stadium_id,
            },
            MovementAction::Transfer => CustodyChange {
                status: AssetStatus::InUse,
                current_stadium_id,
                from_stadium_id: current_stadium_id,
                to_stadium_id: target_stadium_id,
            },
        }
    }
}

fn validate_specs_object(value: &serde_json::Value) -> Result<(), ValidationError> {
    if !value.is_object() {
        let mut err = ValidationError::new("object");
        err.message = Some("Las especificaciones técnicas deben ser un objeto clave/valor.".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetPayload {
    #[validate(length(min = 1, message = "El nombre es obligatorio."))]
    pub name: String,
    #[validate(length(min = 1, message = "El tipo es obligatorio."))]
    pub asset_type: String,
    pub serial_number: Option<String>,
    #[serde(default = "default_status")]
    pub status: AssetStatus,
    pub current_stadium_id: Option<Uuid>,
    #[validate(custom(function = "validate_specs_object"))]
    #[serde(default = "empty_specs")]
    #[schema(value_type = Object)]
    pub technical_specs: serde_json::Value,
    pub notes: Option<String>,
}

fn default_status() -> AssetStatus {
    AssetStatus::Available
}

fn empty_specs() -> serde_json::Value {
    json!({})
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssetPayload {
    #[validate(length(min = 1, message = "El nombre es obligatorio."))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "El tipo es obligatorio."))]
    pub asset_type: Option<String>,
    pub serial_number: Option<String>,
    pub status: Option<AssetStatus>,
    pub current_stadium_id: Option<Uuid>,
    #[validate(custom(function = "validate_specs_object"))]
    #[schema(value_type = Option<Object>)]
    pub technical_specs: Option<serde_json::Value>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFilter {
    pub status: Option<AssetStatus>,
    pub stadium_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receive_always_makes_asset_available_at_target() {
        let target = Uuid::new_v4();
        let elsewhere = Uuid::new_v4();

        for current in [None, Some(elsewhere), Some(target)] {
            let change = MovementAction::Receive.plan(current, target);
            assert_eq!(change.status, AssetStatus::Available);
            assert_eq!(change.current_stadium_id, Some(target));
            assert_eq!(change.from_stadium_id, current);
            assert_eq!(change.to_stadium_id, target);
        }
    }

    #[test]
    fn transfer_marks_in_use_without_moving() {
        let origin = Uuid::new_v4();
        let target = Uuid::new_v4();

        let change = MovementAction::Transfer.plan(Some(origin), target);
        assert_eq!(change.status, AssetStatus::InUse);
        assert_eq!(change.current_stadium_id, Some(origin));
        assert_eq!(change.from_stadium_id, Some(origin));
        assert_eq!(change.to_stadium_id, target);
    }

    #[test]
    fn technical_specs_must_be_an_object() {
        let payload: CreateAssetPayload = serde_json::from_value(json!({
            "name": "Bordeadora",
            "assetType": "bordeadora",
            "technicalSpecs": ["no", "es", "objeto"]
        }))
        .unwrap();
        assert!(payload.validate().is_err());

        let payload: CreateAssetPayload = serde_json::from_value(json!({
            "name": "Bordeadora",
            "assetType": "bordeadora"
        }))
        .unwrap();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.status, AssetStatus::Available);
        assert_eq!(payload.technical_specs, json!({}));
    }
}
