// src/db/report_repo.rs

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::report::{AssetStatusCount, AttendanceReportRow, ReportSummary},
};

#[derive(Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_summary(&self) -> Result<ReportSummary, AppError> {
        // REPEATABLE READ: todos os contadores leem o mesmo snapshot
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await?;

        let employees: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profiles WHERE role = 'employee'")
            .fetch_one(&mut *tx)
            .await?;

        let stadiums: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stadiums")
            .fetch_one(&mut *tx)
            .await?;

        let assets_by_status = sqlx::query_as::<_, AssetStatusCount>(
            "SELECT status, COUNT(*) AS total FROM assets GROUP BY status ORDER BY status",
        )
        .fetch_all(&mut *tx)
        .await?;

        let check_ins_today: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM attendance_records
            WHERE record_type = 'check_in' AND recorded_at::date = CURRENT_DATE
            "#,
        )
        .fetch_one(&mut *tx)
        .await?;

        let pending_requests: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM requests WHERE status = 'pending'")
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(ReportSummary {
            employees,
            stadiums,
            assets_by_status,
            check_ins_today,
            pending_requests,
        })
    }

    pub async fn attendance_by_day(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<AttendanceReportRow>, AppError> {
        let rows = sqlx::query_as::<_, AttendanceReportRow>(
            r#"
            SELECT
                a.recorded_at::date AS day,
                s.id AS stadium_id,
                s.name AS stadium_name,
                COUNT(*) FILTER (WHERE a.record_type = 'check_in') AS check_ins,
                COUNT(*) FILTER (WHERE a.record_type = 'check_out') AS check_outs
            FROM attendance_records a
            JOIN stadiums s ON s.id = a.stadium_id
            WHERE a.recorded_at::date BETWEEN $1 AND $2
            GROUP BY day, s.id, s.name
            ORDER BY day DESC, s.name ASC
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
