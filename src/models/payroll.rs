// src/models/payroll.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "payroll_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    Pending,
    Paid,
}

// Recibo de sueldo
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payroll {
    pub id: Uuid,
    pub user_id: Uuid,
    #[schema(example = 3)]
    pub month: i32,
    #[schema(example = 2026)]
    pub year: i32,
    #[schema(example = "850000.00")]
    pub gross_salary: Decimal,
    #[schema(example = "705500.00")]
    pub net_salary: Decimal,
    pub file_url: Option<String>,
    pub status: PayrollStatus,
    pub created_at: DateTime<Utc>,
}

fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("El valor no puede ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

fn validate_net_not_above_gross(payload: &CreatePayrollPayload) -> Result<(), ValidationError> {
    if payload.net_salary > payload.gross_salary {
        let mut err = ValidationError::new("net_above_gross");
        err.message = Some("El neto no puede superar al bruto.".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_net_not_above_gross"))]
pub struct CreatePayrollPayload {
    pub user_id: Uuid,
    #[validate(range(min = 1, max = 12, message = "El mes debe estar entre 1 y 12."))]
    pub month: i32,
    #[validate(range(min = 2000, max = 2100, message = "Año inválido."))]
    pub year: i32,
    #[validate(custom(function = "validate_not_negative"))]
    pub gross_salary: Decimal,
    #[validate(custom(function = "validate_not_negative"))]
    pub net_salary: Decimal,
    /// URL do PDF devolvida por `POST /api/upload`.
    pub file_url: Option<String>,
    #[serde(default = "default_status")]
    pub status: PayrollStatus,
}

fn default_status() -> PayrollStatus {
    PayrollStatus::Pending
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(month: i32, gross: f64, net: f64) -> CreatePayrollPayload {
        serde_json::from_value(json!({
            "userId": Uuid::new_v4(),
            "month": month,
            "year": 2026,
            "grossSalary": gross,
            "netSalary": net
        }))
        .unwrap()
    }

    #[test]
    fn accepts_a_regular_payslip() {
        let p = payload(3, 850000.0, 705500.0);
        assert!(p.validate().is_ok());
        assert_eq!(p.status, PayrollStatus::Pending);
    }

    #[test]
    fn rejects_bad_month_and_net_above_gross() {
        assert!(payload(13, 100.0, 90.0).validate().is_err());
        assert!(payload(0, 100.0, 90.0).validate().is_err());
        assert!(payload(5, 100.0, 120.0).validate().is_err());
        assert!(payload(5, -1.0, -2.0).validate().is_err());
    }
}
