// src/handlers/qr.rs

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{
        auth::AuthenticatedUser,
        extract::{ApiJson, ApiPath},
        i18n::Locale,
        rbac::{RequireRole, Staff},
    },
    models::{
        asset::MovementAction,
        attendance::{AttendanceRecord, AttendanceScanPayload},
    },
    services::{asset_service::MoveOutcome, qr_service},
};

// POST /api/qr/attendance
#[utoipa::path(
    post,
    path = "/api/qr/attendance",
    tag = "QR",
    request_body = AttendanceScanPayload,
    responses(
        (status = 201, description = "Fichaje registrado", body = AttendanceRecord),
        (status = 400, description = "Coordenadas inválidas"),
        (status = 403, description = "Fora do raio; details.distance traz a distância calculada"),
        (status = 404, description = "Nenhum predio com esse código")
    ),
    security(("api_jwt" = []))
)]
pub async fn scan_attendance(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    ApiJson(payload): ApiJson<AttendanceScanPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let record = app_state
        .attendance_service
        .record(
            user.id,
            &payload.code,
            payload.record_type,
            payload.latitude,
            payload.longitude,
        )
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(record)))
}

// --- DTO: Movimentação de ativo por QR ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetMovePayload {
    /// Conteúdo lido do QR do ativo (o id do ativo).
    #[validate(length(min = 1, message = "El código QR es obligatorio."))]
    pub code: String,
    pub action: MovementAction,
    /// Predio de destino.
    pub stadium_id: Uuid,
    pub notes: Option<String>,
}

// POST /api/qr/asset-move
#[utoipa::path(
    post,
    path = "/api/qr/asset-move",
    tag = "QR",
    request_body = AssetMovePayload,
    responses(
        (status = 200, description = "Ativo atualizado e movimento registrado", body = MoveOutcome),
        (status = 404, description = "Ativo ou predio inexistente")
    ),
    security(("api_jwt" = []))
)]
pub async fn move_asset(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    ApiJson(payload): ApiJson<AssetMovePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let outcome = app_state
        .asset_service
        .move_asset(
            user.id,
            &payload.code,
            payload.action,
            payload.stadium_id,
            payload.notes.as_deref(),
        )
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(outcome))
}

fn png_response(id: Uuid, png: Vec<u8>) -> impl IntoResponse {
    let headers = [
        (header::CONTENT_TYPE, "image/png".to_string()),
        (header::CONTENT_DISPOSITION, format!("inline; filename=\"qr_{}.png\"", id)),
    ];
    (headers, png)
}

// GET /api/qr/stadiums/{id}
#[utoipa::path(
    get,
    path = "/api/qr/stadiums/{id}",
    tag = "QR",
    params(("id" = Uuid, Path, description = "ID do predio")),
    responses(
        (status = 200, description = "PNG do QR de fichaje (image/png)"),
        (status = 404, description = "Predio não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn stadium_qr(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<Staff>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let stadium = app_state
        .stadium_repo
        .get(id)
        .await
        .and_then(|s| s.ok_or(AppError::StadiumNotFound))
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let png = qr_service::render_png(&stadium.id.to_string())
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(png_response(stadium.id, png))
}

// GET /api/qr/assets/{id}
#[utoipa::path(
    get,
    path = "/api/qr/assets/{id}",
    tag = "QR",
    params(("id" = Uuid, Path, description = "ID do ativo")),
    responses(
        (status = 200, description = "PNG do QR do ativo (image/png)"),
        (status = 404, description = "Ativo não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn asset_qr(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<Staff>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let asset = app_state
        .asset_repo
        .get(id)
        .await
        .and_then(|a| a.ok_or(AppError::AssetNotFound))
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let png = qr_service::render_png(&asset.id.to_string())
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(png_response(asset.id, png))
}
