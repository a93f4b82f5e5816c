// src/handlers/news.rs

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
        auth::AuthenticatedUser,
        extract::{ApiJson, ApiPath},
        i18n::Locale,
        rbac::{AdminOnly, RequireRole},
    },
    models::news::{CreateNewsPayload, News, UpdateNewsPayload},
};

// GET /api/news (público, só publicadas)
#[utoipa::path(
    get,
    path = "/api/news",
    tag = "News",
    responses((status = 200, description = "Notícias publicadas, mais recentes primeiro", body = Vec<News>))
)]
pub async fn list_news(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let news = app_state
        .content_repo
        .list_news(true)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(news))
}

// GET /api/news/all (inclui rascunhos)
pub async fn list_all_news(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<AdminOnly>,
) -> Result<impl IntoResponse, ApiError> {
    let news = app_state
        .content_repo
        .list_news(false)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(news))
}

// POST /api/news
pub async fn create_news(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(author): AuthenticatedUser,
    _guard: RequireRole<AdminOnly>,
    ApiJson(payload): ApiJson<CreateNewsPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let news = app_state
        .content_repo
        .create_news(author.id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(news)))
}

// PUT /api/news/{id}
pub async fn update_news(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<AdminOnly>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateNewsPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let news = app_state
        .content_repo
        .update_news(id, &payload)
        .await
        .and_then(|n| n.ok_or(AppError::NewsNotFound))
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(news))
}

// DELETE /api/news/{id}
pub async fn delete_news(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<AdminOnly>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = app_state
        .content_repo
        .delete_news(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    if !deleted {
        return Err(AppError::NewsNotFound.to_api_error(&locale, &app_state.i18n_store));
    }
    Ok(StatusCode::NO_CONTENT)
}
