// src/models/request.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "request_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    Vacation,
    SickLeave,
    Personal,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "request_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

// Solicitação de licença / permissão
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub request_type: RequestType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
    pub status: RequestStatus,
    pub attachment_url: Option<String>,
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_date_range"))]
pub struct CreateRequestPayload {
    pub request_type: RequestType,
    #[schema(example = "2026-01-05")]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-19")]
    pub end_date: NaiveDate,
    pub reason: Option<String>,
    /// URL devolvida por `POST /api/upload`.
    pub attachment_url: Option<String>,
}

fn validate_date_range(payload: &CreateRequestPayload) -> Result<(), ValidationError> {
    if payload.end_date < payload.start_date {
        let mut err = ValidationError::new("date_range");
        err.message = Some("La fecha de fin no puede ser anterior a la de inicio.".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewRequestPayload {
    pub status: RequestStatus,
}

#[derive(Debug, Default, Deserialize)]
pub struct RequestFilter {
    pub status: Option<RequestStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn end_date_before_start_date_is_rejected() {
        let payload: CreateRequestPayload = serde_json::from_value(json!({
            "requestType": "vacation",
            "startDate": "2026-02-10",
            "endDate": "2026-02-01"
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.errors().contains_key("__all__"));
    }

    #[test]
    fn single_day_request_is_valid() {
        let payload: CreateRequestPayload = serde_json::from_value(json!({
            "requestType": "sick_leave",
            "startDate": "2026-02-10",
            "endDate": "2026-02-10",
            "reason": "turno médico"
        }))
        .unwrap();

        assert!(payload.validate().is_ok());
    }
}
