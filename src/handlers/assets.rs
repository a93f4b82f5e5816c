// src/handlers/assets.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{
        extract::{ApiJson, ApiPath, ApiQuery},
        i18n::Locale,
        rbac::{RequireRole, Staff},
    },
    models::asset::{Asset, AssetFilter, AssetMovement, CreateAssetPayload, UpdateAssetPayload},
};

// GET /api/assets?status=&stadiumId=
#[utoipa::path(
    get,
    path = "/api/assets",
    tag = "Assets",
    params(
        ("status" = Option<String>, Query, description = "available | in_use | maintenance | out_of_service"),
        ("stadiumId" = Option<Uuid>, Query, description = "Predio atual")
    ),
    responses((status = 200, description = "Ativos filtrados", body = Vec<Asset>)),
    security(("api_jwt" = []))
)]
pub async fn list_assets(
    State(app_state): State<AppState>,
    locale: Locale,
    ApiQuery(filter): ApiQuery<AssetFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let assets = app_state
        .asset_repo
        .list(&filter)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(assets))
}

// GET /api/assets/{id}
pub async fn get_asset(
    State(app_state): State<AppState>,
    locale: Locale,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let asset = app_state
        .asset_repo
        .get(id)
        .await
        .and_then(|a| a.ok_or(AppError::AssetNotFound))
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(asset))
}

// GET /api/assets/{id}/movements
#[utoipa::path(
    get,
    path = "/api/assets/{id}/movements",
    tag = "Assets",
    params(("id" = Uuid, Path, description = "ID do ativo")),
    responses(
        (status = 200, description = "Histórico de custódia (mais recente primeiro)", body = Vec<AssetMovement>),
        (status = 404, description = "Ativo não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_movements(
    State(app_state): State<AppState>,
    locale: Locale,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    // 404 explícito em vez de lista vazia para ativo inexistente
    app_state
        .asset_repo
        .get(id)
        .await
        .and_then(|a| a.ok_or(AppError::AssetNotFound))
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let movements = app_state
        .asset_repo
        .list_movements(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(movements))
}

// POST /api/assets
pub async fn create_asset(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<Staff>,
    ApiJson(payload): ApiJson<CreateAssetPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let asset = app_state
        .asset_repo
        .create(&payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(asset)))
}

// PUT /api/assets/{id}
pub async fn update_asset(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<Staff>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateAssetPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let asset = app_state
        .asset_repo
        .update(id, &payload)
        .await
        .and_then(|a| a.ok_or(AppError::AssetNotFound))
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(asset))
}

// DELETE /api/assets/{id}
pub async fn delete_asset(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<Staff>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = app_state
        .asset_repo
        .delete(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    if !deleted {
        return Err(AppError::AssetNotFound.to_api_error(&locale, &app_state.i18n_store));
    }
    Ok(StatusCode::NO_CONTENT)
}
