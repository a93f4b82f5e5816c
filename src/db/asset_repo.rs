// src/db/asset_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::asset::{
        Asset, AssetFilter, AssetMovement, CreateAssetPayload, CustodyChange, MovementAction,
        UpdateAssetPayload,
    },
};

#[derive(Clone)]
pub struct AssetRepository {
    pool: PgPool,
}

impl AssetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ---
    // Leitura
    // ---

    pub async fn list(&self, filter: &AssetFilter) -> Result<Vec<Asset>, AppError> {
        let assets = sqlx::query_as::<_, Asset>(
            r#"
            SELECT * FROM assets
            WHERE ($1::asset_status IS NULL OR status = $1)
              AND ($2::uuid IS NULL OR current_stadium_id = $2)
            ORDER BY name ASC
            "#,
        )
        .bind(filter.status)
        .bind(filter.stadium_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(assets)
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Asset>, AppError> {
        let asset = sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(asset)
    }

    /// Trava a linha até o fim da transação.
    pub async fn get_for_update<'e, E>(&self, executor: E, id: Uuid) -> Result<Option<Asset>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let asset = sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(asset)
    }

    pub async fn list_movements(&self, asset_id: Uuid) -> Result<Vec<AssetMovement>, AppError> {
        let movements = sqlx::query_as::<_, AssetMovement>(
            "SELECT * FROM asset_movements WHERE asset_id = $1 ORDER BY moved_at DESC",
        )
        .bind(asset_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(movements)
    }

    // ---
    // Escrita
    // ---

    pub async fn create(&self, payload: &CreateAssetPayload) -> Result<Asset, AppError> {
        let asset = sqlx::query_as::<_, Asset>(
            r#"
            INSERT INTO assets (
                name, asset_type, serial_number, status,
                current_stadium_id, technical_specs, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.asset_type)
        .bind(payload.serial_number.as_deref())
        .bind(payload.status)
        .bind(payload.current_stadium_id)
        .bind(sqlx::types::Json(&payload.technical_specs))
        .bind(payload.notes.as_deref())
        .fetch_one(&self.pool)
        .await?;
        Ok(asset)
    }

    pub async fn update(&self, id: Uuid, payload: &UpdateAssetPayload) -> Result<Option<Asset>, AppError> {
        let asset = sqlx::query_as::<_, Asset>(
            r#"
            UPDATE assets SET
                name = COALESCE($2, name),
                asset_type = COALESCE($3, asset_type),
                serial_number = COALESCE($4, serial_number),
                status = COALESCE($5, status),
                current_stadium_id = COALESCE($6, current_stadium_id),
                technical_specs = COALESCE($7, technical_specs),
                notes = COALESCE($8, notes),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(payload.name.as_deref())
        .bind(payload.asset_type.as_deref())
        .bind(payload.serial_number.as_deref())
        .bind(payload.status)
        .bind(payload.current_stadium_id)
        .bind(payload.technical_specs.as_ref().map(sqlx::types::Json))
        .bind(payload.notes.as_deref())
        .fetch_optional(&self.pool)
        .await?;
        Ok(asset)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn apply_custody_change<'e, E>(
        &self,
        executor: E,
        asset_id: Uuid,
        change: &CustodyChange,
    ) -> Result<Asset, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let asset = sqlx::query_as::<_, Asset>(
            r#"
            UPDATE assets SET
                status = $2,
                current_stadium_id = $3,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(asset_id)
        .bind(change.status)
        .bind(change.current_stadium_id)
        .fetch_one(executor)
        .await?;
        Ok(asset)
    }

    // Histórico: somente INSERT
    pub async fn record_movement<'e, E>(
        &self,
        executor: E,
        asset_id: Uuid,
        action: MovementAction,
        change: &CustodyChange,
        moved_by: Uuid,
        notes: Option<&str>,
    ) -> Result<AssetMovement, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let movement = sqlx::query_as::<_, AssetMovement>(
            r#"
            INSERT INTO asset_movements (
                asset_id, from_stadium_id, to_stadium_id, moved_by, action, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(asset_id)
        .bind(change.from_stadium_id)
        .bind(change.to_stadium_id)
        .bind(moved_by)
        .bind(action)
        .bind(notes)
        .fetch_one(executor)
        .await?;
        Ok(movement)
    }
}
