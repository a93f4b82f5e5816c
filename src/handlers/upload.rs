// src/handlers/upload.rs

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
};

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub url: String,
}

// Lê o multipart: campo "file" (obrigatório) e "folder" (opcional)
async fn read_upload(mut multipart: Multipart) -> Result<(Option<String>, String, Vec<u8>), AppError> {
    let mut folder: Option<String> = None;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidUpload(e.body_text()))?
    {
        match field.name() {
            Some("folder") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::InvalidUpload(e.body_text()))?;
                let value = value.trim();
                if !value.is_empty() {
                    folder = Some(value.to_string());
                }
            }
            Some("file") => {
                let name = field.file_name().unwrap_or("arquivo").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::InvalidUpload(e.body_text()))?;
                file = Some((name, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let (name, bytes) = file.ok_or_else(|| AppError::InvalidUpload("campo 'file' ausente".into()))?;
    Ok((folder, name, bytes))
}

// POST /api/upload
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "Upload",
    request_body(content_type = "multipart/form-data", description = "Campos: file, folder"),
    responses(
        (status = 201, description = "Arquivo salvo", body = UploadResponse),
        (status = 400, description = "Arquivo ausente, vazio, grande demais ou pasta inválida")
    ),
    security(("api_jwt" = []))
)]
pub async fn upload_file(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let multipart = multipart
        .map_err(|rejection| AppError::InvalidUpload(rejection.body_text()).to_api_error(&locale, &app_state.i18n_store))?;
    let (folder, name, bytes) = read_upload(multipart)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let url = app_state
        .storage
        .save(folder.as_deref(), &name, &bytes)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    tracing::debug!("Upload de {} por {}", url, user.id);
    Ok((StatusCode::CREATED, Json(UploadResponse { url })))
}
