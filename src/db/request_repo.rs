// src/db/request_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::request::{CreateRequestPayload, LeaveRequest, RequestStatus},
};

#[derive(Clone)]
pub struct RequestRepository {
    pool: PgPool,
}

impl RequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: Uuid, payload: &CreateRequestPayload) -> Result<LeaveRequest, AppError> {
        let request = sqlx::query_as::<_, LeaveRequest>(
            r#"
            INSERT INTO requests (user_id, request_type, start_date, end_date, reason, attachment_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(payload.request_type)
        .bind(payload.start_date)
        .bind(payload.end_date)
        .bind(payload.reason.as_deref())
        .bind(payload.attachment_url.as_deref())
        .fetch_one(&self.pool)
        .await?;
        Ok(request)
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<LeaveRequest>, AppError> {
        let requests = sqlx::query_as::<_, LeaveRequest>(
            "SELECT * FROM requests WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }

    pub async fn list(&self, status: Option<RequestStatus>) -> Result<Vec<LeaveRequest>, AppError> {
        let requests = sqlx::query_as::<_, LeaveRequest>(
            r#"
            SELECT * FROM requests
            WHERE ($1::request_status IS NULL OR status = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }

    pub async fn set_status(
        &self,
        id: Uuid,
        status: RequestStatus,
        reviewer_id: Uuid,
    ) -> Result<Option<LeaveRequest>, AppError> {
        let request = sqlx::query_as::<_, LeaveRequest>(
            r#"
            UPDATE requests SET
                status = $2,
                reviewed_by = $3,
                reviewed_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(reviewer_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(request)
    }
}
