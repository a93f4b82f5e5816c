// src/handlers/payroll.rs

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
    models::payroll::{CreatePayrollPayload, Payroll},
};

// GET /api/payroll/me
#[utoipa::path(
    get,
    path = "/api/payroll/me",
    tag = "Payroll",
    responses((status = 200, description = "Meus recibos de sueldo", body = Vec<Payroll>)),
    security(("api_jwt" = []))
)]
pub async fn my_payrolls(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let payrolls = app_state
        .payroll_repo
        .list_for_user(user.id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(payrolls))
}

// GET /api/payroll
pub async fn list_payrolls(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<AdminOnly>,
) -> Result<impl IntoResponse, ApiError> {
    let payrolls = app_state
        .payroll_repo
        .list()
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(payrolls))
}

// POST /api/payroll (o PDF já foi enviado por /api/upload)
pub async fn create_payroll(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<AdminOnly>,
    ApiJson(payload): ApiJson<CreatePayrollPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let payroll = app_state
        .payroll_repo
        .create(&payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(payroll)))
}

// DELETE /api/payroll/{id}
pub async fn delete_payroll(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<AdminOnly>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = app_state
        .payroll_repo
        .delete(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    if !deleted {
        return Err(AppError::PayrollNotFound.to_api_error(&locale, &app_state.i18n_store));
    }
    Ok(StatusCode::NO_CONTENT)
}
