// src/db/stadium_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::stadium::{CreateStadiumPayload, Stadium, UpdateStadiumPayload},
};

#[derive(Clone)]
pub struct StadiumRepository {
    pool: PgPool,
}

impl StadiumRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Stadium>, AppError> {
        let stadiums = sqlx::query_as::<_, Stadium>("SELECT * FROM stadiums ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(stadiums)
    }

    // Aceita executor para poder rodar dentro da transação de movimentação
    pub async fn find_by_id<'e, E>(&self, executor: E, id: Uuid) -> Result<Option<Stadium>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let stadium = sqlx::query_as::<_, Stadium>("SELECT * FROM stadiums WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(stadium)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Stadium>, AppError> {
        self.find_by_id(&self.pool, id).await
    }

    pub async fn create(&self, payload: &CreateStadiumPayload) -> Result<Stadium, AppError> {
        let stadium = sqlx::query_as::<_, Stadium>(
            r#"
            INSERT INTO stadiums (name, address, city, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&payload.name)
        .bind(payload.address.as_deref())
        .bind(payload.city.as_deref())
        .bind(payload.latitude)
        .bind(payload.longitude)
        .fetch_one(&self.pool)
        .await?;
        Ok(stadium)
    }

    pub async fn update(&self, id: Uuid, payload: &UpdateStadiumPayload) -> Result<Option<Stadium>, AppError> {
        let stadium = sqlx::query_as::<_, Stadium>(
            r#"
            UPDATE stadiums SET
                name = COALESCE($2, name),
                address = COALESCE($3, address),
                city = COALESCE($4, city),
                latitude = COALESCE($5, latitude),
                longitude = COALESCE($6, longitude),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payload.name.as_deref())
        .bind(payload.address.as_deref())
        .bind(payload.city.as_deref())
        .bind(payload.latitude)
        .bind(payload.longitude)
        .fetch_optional(&self.pool)
        .await?;
        Ok(stadium)
    }

    // Predio com fichajes ou ativos vinculados: a FK barra e vira 400
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM stadiums WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
