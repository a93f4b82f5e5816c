// src/handlers/reports.rs

use axum::{
    extract::State,
    response::IntoResponse,
    Json,
};
use chrono::{Duration, Utc};

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{
        extract::ApiQuery,
        i18n::Locale,
        rbac::{RequireRole, Staff},
    },
    models::report::{AttendanceReportRow, ReportRange, ReportSummary},
};

const DEFAULT_REPORT_DAYS: i64 = 30;

// GET /api/reports/summary
#[utoipa::path(
    get,
    path = "/api/reports/summary",
    tag = "Reports",
    responses((status = 200, description = "Indicadores do painel", body = ReportSummary)),
    security(("api_jwt" = []))
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<Staff>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = app_state
        .report_repo
        .get_summary()
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(summary))
}

// GET /api/reports/attendance?from=&to=
#[utoipa::path(
    get,
    path = "/api/reports/attendance",
    tag = "Reports",
    params(
        ("from" = Option<String>, Query, description = "YYYY-MM-DD (padrão: 30 dias atrás)"),
        ("to" = Option<String>, Query, description = "YYYY-MM-DD (padrão: hoje)")
    ),
    responses((status = 200, description = "Fichajes por dia e predio", body = Vec<AttendanceReportRow>)),
    security(("api_jwt" = []))
)]
pub async fn attendance_report(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<Staff>,
    ApiQuery(range): ApiQuery<ReportRange>,
) -> Result<impl IntoResponse, ApiError> {
    let to = range.to.unwrap_or_else(|| Utc::now().date_naive());
    let from = range.from.unwrap_or(to - Duration::days(DEFAULT_REPORT_DAYS));

    if from > to {
        let mut errors = validator::ValidationErrors::new();
        let mut error = validator::ValidationError::new("range");
        error.message = Some("'from' no puede ser posterior a 'to'.".into());
        errors.add("from", error);
        return Err(AppError::ValidationError(errors).to_api_error(&locale, &app_state.i18n_store));
    }

    let rows = app_state
        .report_repo
        .attendance_by_day(from, to)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(rows))
}
