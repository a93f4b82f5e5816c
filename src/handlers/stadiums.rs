// src/handlers/stadiums.rs

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
        extract::{ApiJson, ApiPath},
        i18n::Locale,
        rbac::{AdminOnly, RequireRole},
    },
    models::stadium::{CreateStadiumPayload, Stadium, UpdateStadiumPayload},
};

// GET /api/stadiums
#[utoipa::path(
    get,
    path = "/api/stadiums",
    tag = "Stadiums",
    responses((status = 200, description = "Todos os predios", body = Vec<Stadium>)),
    security(("api_jwt" = []))
)]
pub async fn list_stadiums(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let stadiums = app_state
        .stadium_repo
        .list()
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(stadiums))
}

// GET /api/stadiums/{id}
pub async fn get_stadium(
    State(app_state): State<AppState>,
    locale: Locale,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let stadium = app_state
        .stadium_repo
        .get(id)
        .await
        .and_then(|s| s.ok_or(AppError::StadiumNotFound))
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(stadium))
}

// POST /api/stadiums
#[utoipa::path(
    post,
    path = "/api/stadiums",
    tag = "Stadiums",
    request_body = CreateStadiumPayload,
    responses(
        (status = 201, description = "Predio criado", body = Stadium),
        (status = 403, description = "Somente admin")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_stadium(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<AdminOnly>,
    ApiJson(payload): ApiJson<CreateStadiumPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let stadium = app_state
        .stadium_repo
        .create(&payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(stadium)))
}

// PUT /api/stadiums/{id}
pub async fn update_stadium(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<AdminOnly>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateStadiumPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let stadium = app_state
        .stadium_repo
        .update(id, &payload)
        .await
        .and_then(|s| s.ok_or(AppError::StadiumNotFound))
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(stadium))
}

// DELETE /api/stadiums/{id}
pub async fn delete_stadium(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<AdminOnly>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = app_state
        .stadium_repo
        .delete(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    if !deleted {
        return Err(AppError::StadiumNotFound.to_api_error(&locale, &app_state.i18n_store));
    }
    Ok(StatusCode::NO_CONTENT)
}
