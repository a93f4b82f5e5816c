// src/handlers/courses.rs

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
    models::course::{Course, CreateCoursePayload, UpdateCoursePayload},
};

// GET /api/courses
// Funcionário vê só os ativos; admin vê o catálogo inteiro.
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = "Courses",
    responses((status = 200, description = "Cursos de capacitação", body = Vec<Course>)),
    security(("api_jwt" = []))
)]
pub async fn list_courses(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let only_active = !user.is_staff();
    let courses = app_state
        .content_repo
        .list_courses(only_active)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(courses))
}

// POST /api/courses
pub async fn create_course(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<AdminOnly>,
    ApiJson(payload): ApiJson<CreateCoursePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let course = app_state
        .content_repo
        .create_course(&payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(course)))
}

// PUT /api/courses/{id}
pub async fn update_course(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<AdminOnly>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateCoursePayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let course = app_state
        .content_repo
        .update_course(id, &payload)
        .await
        .and_then(|c| c.ok_or(AppError::CourseNotFound))
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(Json(course))
}

// DELETE /api/courses/{id}
pub async fn delete_course(
    State(app_state): State<AppState>,
    locale: Locale,
    _guard: RequireRole<AdminOnly>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = app_state
        .content_repo
        .delete_course(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    if !deleted {
        return Err(AppError::CourseNotFound.to_api_error(&locale, &app_state.i18n_store));
    }
    Ok(StatusCode::NO_CONTENT)
}
