// src/handlers/attendance.rs

use axum::{
    extract::State,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{
        auth::AuthenticatedUser,
        extract::ApiQuery,
        i18n::Locale,
        rbac::{RequireRole, Staff},
    },
    models::attendance::{AttendanceFilter, AttendanceRecord},
};

// GET /api/attendance/me
#[utoipa::path(
    get,
    path = "/api/attendance/me",
    tag = "Attendance",
    responses((status = 200, description = "Meus fichajes", body = Vec<AttendanceRecord>)),
    security(("api_jwt" = []))
)]
pub async fn my_attendance(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let records = app_state
        .attendance_service
        .list_for_user(user.id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(records))
}

// GET /api/attendance?userId=&stadiumId=&from=&to=
pub async fn list_attendance(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<Staff>,
    ApiQuery(filter): ApiQuery<AttendanceFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let records = app_state
        .attendance_service
        .list(&filter)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(records))
}
