// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::common::{geo::GeoError, i18n::I18nStore};
use crate::middleware::i18n::Locale;

// Erro de domínio: repositórios e serviços devolvem sempre este tipo.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Coordenadas inválidas: {0}")]
    InvalidCoordinates(#[from] GeoError),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Token inválido")]
    InvalidToken,

    #[error("Acesso negado")]
    Forbidden,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Predio não encontrado")]
    StadiumNotFound,

    #[error("Ativo não encontrado")]
    AssetNotFound,

    #[error("Solicitação não encontrada")]
    RequestNotFound,

    #[error("Recibo não encontrado")]
    PayrollNotFound,

    #[error("Notícia não encontrada")]
    NewsNotFound,

    #[error("Curso não encontrado")]
    CourseNotFound,

    #[error("Fora do raio permitido: {distance:.2} m (máximo {max_distance} m)")]
    OutOfRange { distance: f64, max_distance: f64 },

    #[error("Upload inválido: {0}")]
    InvalidUpload(String),

    #[error("Rota não encontrada")]
    RouteNotFound,

    // Corpo, caminho ou query que o axum não conseguiu desserializar
    #[error("Requisição malformada: {0}")]
    BadRequest(String),

    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

// Erro "de fio": o que o cliente recebe.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.error, "details": details }),
            None => json!({ "error": self.error }),
        };
        (self.status, Json(body)).into_response()
    }
}

impl AppError {
    /// Status HTTP e chave do catálogo de mensagens.
    fn status_and_key(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::ValidationError(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::InvalidCoordinates(_) => (StatusCode::BAD_REQUEST, "invalid_coordinates"),
            AppError::EmailAlreadyExists => (StatusCode::CONFLICT, "email_already_exists"),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "invalid_credentials"),
            AppError::InvalidToken => (StatusCode::UNAUTHORIZED, "invalid_token"),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "forbidden"),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "user_not_found"),
            AppError::StadiumNotFound => (StatusCode::NOT_FOUND, "stadium_not_found"),
            AppError::AssetNotFound => (StatusCode::NOT_FOUND, "asset_not_found"),
            AppError::RequestNotFound => (StatusCode::NOT_FOUND, "request_not_found"),
            AppError::PayrollNotFound => (StatusCode::NOT_FOUND, "payroll_not_found"),
            AppError::NewsNotFound => (StatusCode::NOT_FOUND, "news_not_found"),
            AppError::CourseNotFound => (StatusCode::NOT_FOUND, "course_not_found"),
            AppError::OutOfRange { .. } => (StatusCode::FORBIDDEN, "out_of_range"),
            AppError::InvalidUpload(_) => (StatusCode::BAD_REQUEST, "invalid_upload"),
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, "route_not_found"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),

            // Códigos conhecidos do Postgres viram respostas estruturadas
            AppError::DatabaseError(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                (StatusCode::CONFLICT, "unique_violation")
            }
            AppError::DatabaseError(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                (StatusCode::BAD_REQUEST, "foreign_key_violation")
            }
            AppError::DatabaseError(sqlx::Error::Database(db_err)) if db_err.is_check_violation() => {
                (StatusCode::BAD_REQUEST, "check_violation")
            }
            AppError::DatabaseError(sqlx::Error::RowNotFound) => (StatusCode::NOT_FOUND, "record_not_found"),

            AppError::DatabaseError(_)
            | AppError::InternalServerError(_)
            | AppError::BcryptError(_)
            | AppError::JwtError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status_and_key().0
    }

    /// Converte para a resposta HTTP no idioma do cliente.
    pub fn to_api_error(self, locale: &Locale, i18n: &I18nStore) -> ApiError {
        let (status, key) = self.status_and_key();
        let mut error = i18n.translate(&locale.0, key);

        if status.is_server_error() {
            // O detalhe fica só no log
            tracing::error!("Erro Interno do Servidor: {}", self);
        }

        let details = match self {
            AppError::ValidationError(errors) => {
                let mut details = serde_json::Map::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| e.code.to_string())
                        })
                        .collect();
                    details.insert(field.to_string(), json!(messages));
                }
                Some(Value::Object(details))
            }
            AppError::OutOfRange { distance, max_distance } => {
                let rounded = (distance * 100.0).round() / 100.0;
                error = error.replace("{distance}", &format!("{:.2}", rounded));
                Some(json!({ "distance": rounded, "maxDistance": max_distance }))
            }
            AppError::InvalidUpload(reason) | AppError::BadRequest(reason) => Some(json!({ "reason": reason })),
            _ => None,
        };

        ApiError { status, error, details }
    }
}

// Usado pelos middlewares, onde não há Locale: responde no idioma padrão.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_api_error(&Locale::default(), &I18nStore::shared())
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use validator::Validate;

    async fn error_to_response(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn es() -> Locale {
        Locale("es".into())
    }

    #[tokio::test]
    async fn out_of_range_echoes_distance() {
        let err = AppError::OutOfRange { distance: 127.579_758, max_distance: 100.0 };
        let (status, json) = error_to_response(err.to_api_error(&es(), &I18nStore::shared())).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["details"]["distance"], 127.58);
        assert_eq!(json["details"]["maxDistance"], 100.0);
        assert!(json["error"].as_str().unwrap().contains("127.58"));
    }

    #[tokio::test]
    async fn not_found_variants_return_404() {
        for err in [AppError::StadiumNotFound, AppError::AssetNotFound, AppError::RouteNotFound] {
            let (status, json) = error_to_response(err.to_api_error(&es(), &I18nStore::shared())).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert!(json["error"].is_string());
            assert!(json.get("details").is_none());
        }
    }

    #[tokio::test]
    async fn internal_errors_are_sanitized() {
        let err = AppError::InternalServerError(anyhow::anyhow!("senha do banco: hunter2"));
        let (status, json) = error_to_response(err.to_api_error(&es(), &I18nStore::shared())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Ocurrió un error inesperado.");
        assert!(!json.to_string().contains("hunter2"));
    }

    #[tokio::test]
    async fn malformed_request_keeps_the_reason() {
        let err = AppError::BadRequest("missing field `latitude`".into());
        let (status, json) = error_to_response(err.to_api_error(&es(), &I18nStore::shared())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "La solicitud está mal formada.");
        assert_eq!(json["details"]["reason"], "missing field `latitude`");
    }

    #[tokio::test]
    async fn validation_errors_list_fields() {
        #[derive(Validate)]
        struct Payload {
            #[validate(email(message = "e-mail inválido"))]
            email: String,
        }

        let errors = Payload { email: "nope".into() }.validate().unwrap_err();
        let (status, json) = error_to_response(
            AppError::ValidationError(errors).to_api_error(&Locale("en".into()), &I18nStore::shared()),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "One or more fields are invalid.");
        assert_eq!(json["details"]["email"][0], "e-mail inválido");
    }

    #[test]
    fn auth_errors_map_to_401_and_403() {
        assert_eq!(AppError::InvalidToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::EmailAlreadyExists.status(), StatusCode::CONFLICT);
    }
}
