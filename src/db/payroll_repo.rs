// src/db/payroll_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::payroll::{CreatePayrollPayload, Payroll},
};

#[derive(Clone)]
pub struct PayrollRepository {
    pool: PgPool,
}

impl PayrollRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // (user_id, month, year) é único: repetido vira 409
    pub async fn create(&self, payload: &CreatePayrollPayload) -> Result<Payroll, AppError> {
        let payroll = sqlx::query_as::<_, Payroll>(
            r#"
            INSERT INTO payrolls (user_id, month, year, gross_salary, net_salary, file_url, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(payload.user_id)
        .bind(payload.month)
        .bind(payload.year)
        .bind(payload.gross_salary)
        .bind(payload.net_salary)
        .bind(payload.file_url.as_deref())
        .bind(payload.status)
        .fetch_one(&self.pool)
        .await?;
        Ok(payroll)
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Payroll>, AppError> {
        let payrolls = sqlx::query_as::<_, Payroll>(
            "SELECT * FROM payrolls WHERE user_id = $1 ORDER BY year DESC, month DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(payrolls)
    }

    pub async fn list(&self) -> Result<Vec<Payroll>, AppError> {
        let payrolls = sqlx::query_as::<_, Payroll>(
            "SELECT * FROM payrolls ORDER BY year DESC, month DESC, created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(payrolls)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM payrolls WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
