// src/middleware/extract.rs

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts, Path, Query, Request,
    },
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::{
    common::{
        error::{ApiError, AppError},
        i18n::I18nStore,
    },
    middleware::i18n::Locale,
};

// Os extratores do axum respondem texto puro; estes devolvem o JSON de erro da API.

fn malformed(reason: String, locale: &Locale) -> ApiError {
    AppError::BadRequest(reason).to_api_error(locale, &I18nStore::shared())
}

/// `Json<T>` cuja rejeição vira 400 `{ error, details.reason }`.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let locale = Locale::from_headers(req.headers());

        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| ApiJson(value))
            .map_err(|rejection: JsonRejection| malformed(rejection.body_text(), &locale))
    }
}

#[derive(Debug)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| ApiPath(value))
            .map_err(|rejection: PathRejection| malformed(rejection.body_text(), &Locale::from_headers(&parts.headers)))
    }
}

#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| ApiQuery(value))
            .map_err(|rejection: QueryRejection| malformed(rejection.body_text(), &Locale::from_headers(&parts.headers)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request as HttpRequest, StatusCode},
        routing::{get, post},
        Router,
    };
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use serde_json::Value;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::models::attendance::AttendanceScanPayload;

    #[derive(Deserialize)]
    struct Page {
        #[allow(dead_code)]
        page: u32,
    }

    fn app() -> Router {
        Router::new()
            .route("/items/{id}", get(|ApiPath(id): ApiPath<Uuid>| async move { id.to_string() }))
            .route("/items", get(|ApiQuery(_): ApiQuery<Page>| async { "ok" }))
            .route("/scan", post(|ApiJson(p): ApiJson<AttendanceScanPayload>| async move { p.code }))
    }

    async fn call(request: HttpRequest<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn post_scan(body: &str) -> HttpRequest<Body> {
        HttpRequest::post("/scan")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn non_uuid_path_is_json_400() {
        let (status, json) = call(HttpRequest::get("/items/nao-e-uuid").body(Body::empty()).unwrap()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "La solicitud está mal formada.");
        assert!(json["details"]["reason"].is_string());
    }

    #[tokio::test]
    async fn bad_query_is_json_400_in_client_language() {
        let request = HttpRequest::get("/items?page=muitas")
            .header(header::ACCEPT_LANGUAGE, "pt-BR")
            .body(Body::empty())
            .unwrap();
        let (status, json) = call(request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "A requisição está malformada.");
    }

    #[tokio::test]
    async fn unknown_attendance_type_is_json_400() {
        let (status, json) = call(post_scan(
            r#"{"code":"x","type":"bogus","latitude":-34.6,"longitude":-58.3}"#,
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["details"]["reason"].as_str().unwrap().contains("bogus"));
    }

    #[tokio::test]
    async fn missing_field_and_wrong_content_type_are_json_400() {
        let (status, json) = call(post_scan(r#"{"code":"x","type":"check_in","longitude":-58.3}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["details"]["reason"].as_str().unwrap().contains("latitude"));

        let request = HttpRequest::post("/scan").body(Body::from("{}")).unwrap();
        let (status, json) = call(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn valid_input_passes_through() {
        let id = Uuid::new_v4();
        let response = app()
            .oneshot(HttpRequest::get(format!("/items/{id}")).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(bytes, id.to_string());
    }
}
