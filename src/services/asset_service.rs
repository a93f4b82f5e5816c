// src/services/asset_service.rs

use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{AssetRepository, StadiumRepository},
    models::asset::{Asset, AssetMovement, MovementAction},
};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoveOutcome {
    pub asset: Asset,
    pub movement: AssetMovement,
}

#[derive(Clone)]
pub struct AssetService {
    pool: PgPool,
    asset_repo: AssetRepository,
    stadium_repo: StadiumRepository,
}

impl AssetService {
    pub fn new(pool: PgPool, asset_repo: AssetRepository, stadium_repo: StadiumRepository) -> Self {
        Self { pool, asset_repo, stadium_repo }
    }

    /// Movimentação por QR do ativo: atualiza status/local e grava uma linha no histórico.
    pub async fn move_asset(
        &self,
        moved_by: Uuid,
        asset_code: &str,
        action: MovementAction,
        target_stadium_id: Uuid,
        notes: Option<&str>,
    ) -> Result<MoveOutcome, AppError> {
        // O QR do ativo carrega o próprio id
        let asset_id = Uuid::parse_str(asset_code.trim()).map_err(|_| AppError::AssetNotFound)?;

        // --- INÍCIO DA TRANSAÇÃO ---
        let mut tx = self.pool.begin().await?;

        let current = self
            .asset_repo
            .get_for_update(&mut *tx, asset_id)
            .await?
            .ok_or(AppError::AssetNotFound)?;

        self.stadium_repo
            .find_by_id(&mut *tx, target_stadium_id)
            .await?
            .ok_or(AppError::StadiumNotFound)?;

        let change = action.plan(current.current_stadium_id, target_stadium_id);

        let asset = self
            .asset_repo
            .apply_custody_change(&mut *tx, asset_id, &change)
            .await?;

        let movement = self
            .asset_repo
            .record_movement(&mut *tx, asset_id, action, &change, moved_by, notes)
            .await?;

        tx.commit().await?;
        // --- FIM DA TRANSAÇÃO ---

        tracing::info!(
            "🚚 Ativo {} {:?} por {} (destino {}, status {:?})",
            asset_id, action, moved_by, target_stadium_id, asset.status
        );

        Ok(MoveOutcome { asset, movement })
    }
}
