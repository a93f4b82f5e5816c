// src/handlers/requests.rs

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
        extract::{ApiJson, ApiPath, ApiQuery},
        i18n::Locale,
        rbac::{RequireRole, Staff},
    },
    models::request::{CreateRequestPayload, LeaveRequest, RequestFilter, ReviewRequestPayload},
};

// POST /api/requests
#[utoipa::path(
    post,
    path = "/api/requests",
    tag = "Requests",
    request_body = CreateRequestPayload,
    responses(
        (status = 201, description = "Solicitação criada (pending)", body = LeaveRequest),
        (status = 400, description = "Datas inválidas")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_request(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    ApiJson(payload): ApiJson<CreateRequestPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let request = app_state
        .request_repo
        .create(user.id, &payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(request)))
}

// GET /api/requests/me
pub async fn my_requests(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let requests = app_state
        .request_repo
        .list_for_user(user.id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(requests))
}

// GET /api/requests?status=
pub async fn list_requests(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<Staff>,
    ApiQuery(filter): ApiQuery<RequestFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let requests = app_state
        .request_repo
        .list(filter.status)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(requests))
}

// PATCH /api/requests/{id}/status
pub async fn review_request(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(reviewer): AuthenticatedUser,
    _guard: RequireRole<Staff>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<ReviewRequestPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let request = app_state
        .request_repo
        .set_status(id, payload.status, reviewer.id)
        .await
        .and_then(|r| r.ok_or(AppError::RequestNotFound))
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    tracing::info!("📝 Solicitação {} marcada como {:?} por {}", id, request.status, reviewer.id);
    Ok(Json(request))
}
