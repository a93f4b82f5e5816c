// src/db/attendance_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::{error::AppError, geo::GeoPoint},
    models::attendance::{AttendanceFilter, AttendanceRecord, AttendanceType},
};

#[derive(Clone)]
pub struct AttendanceRepository {
    pool: PgPool,
}

impl AttendanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Somente inserção; não há checagem de fichaje repetido
    pub async fn insert(
        &self,
        user_id: Uuid,
        stadium_id: Uuid,
        record_type: AttendanceType,
        point: GeoPoint,
        distance_meters: f64,
    ) -> Result<AttendanceRecord, AppError> {
        let record = sqlx::query_as::<_, AttendanceRecord>(
            r#"
            INSERT INTO attendance_records (
                user_id, stadium_id, record_type, latitude, longitude, distance_meters
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(stadium_id)
        .bind(record_type)
        .bind(point.latitude())
        .bind(point.longitude())
        .bind(distance_meters)
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    pub async fn list(&self, filter: &AttendanceFilter) -> Result<Vec<AttendanceRecord>, AppError> {
        let records = sqlx::query_as::<_, AttendanceRecord>(
            r#"
            SELECT * FROM attendance_records
            WHERE ($1::uuid IS NULL OR user_id = $1)
              AND ($2::uuid IS NULL OR stadium_id = $2)
              AND ($3::date IS NULL OR recorded_at::date >= $3)
              AND ($4::date IS NULL OR recorded_at::date <= $4)
            ORDER BY recorded_at DESC
            "#,
        )
        .bind(filter.user_id)
        .bind(filter.stadium_id)
        .bind(filter.from)
        .bind(filter.to)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }
}
