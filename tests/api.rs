//! Comportamento HTTP que não depende do banco: saúde, 404, guarda de token,
//! validação de payload e idioma das mensagens.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::routing::{get as get_route, post as post_route};
use axum::{Extension, Router};
use common::{
    body_json, body_text, build_offline_app, get, get_auth, offline_state, post_json, sample_profile, send,
};
use predios_backend::handlers;
use predios_backend::models::auth::UserRole;
use serde_json::json;

/// Handler de fichaje com o perfil já autenticado, sem passar pela guarda.
fn scan_app() -> Router {
    Router::new()
        .route("/api/qr/attendance", post_route(handlers::qr::scan_attendance))
        .layer(Extension(sample_profile(UserRole::Employee)))
        .with_state(offline_state())
}

fn get_asset_app() -> Router {
    Router::new()
        .route("/api/assets/{id}", get_route(handlers::assets::get_asset))
        .layer(Extension(sample_profile(UserRole::Admin)))
        .with_state(offline_state())
}

#[tokio::test]
async fn health_returns_ok() {
    let response = get(build_offline_app(), "/api/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let response = get(build_offline_app(), "/api/nao-existe").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Ruta no encontrada.");
}

#[tokio::test]
async fn unknown_route_follows_accept_language() {
    let request = Request::get("/api/nao-existe")
        .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
        .body(Body::empty())
        .unwrap();
    let response = send(build_offline_app(), request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Route not found.");
}

#[tokio::test]
async fn protected_route_without_token_is_401() {
    for uri in ["/api/users", "/api/auth/me", "/api/assets", "/api/reports/summary"] {
        let response = get(build_offline_app(), uri).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "rota {uri}");
    }
}

#[tokio::test]
async fn missing_token_message_is_localized() {
    let request = Request::get("/api/attendance/me")
        .header(header::ACCEPT_LANGUAGE, "pt-BR")
        .body(Body::empty())
        .unwrap();
    let response = send(build_offline_app(), request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await["error"],
        "Token de autenticação inválido ou ausente."
    );
}

#[tokio::test]
async fn forged_token_is_rejected_before_touching_the_database() {
    let response = get_auth(build_offline_app(), "/api/stadiums", "nao.e.um.jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Token de autenticación inválido o ausente.");
}

#[tokio::test]
async fn qr_scan_requires_token() {
    let body = json!({
        "code": "00000000-0000-0000-0000-000000000000",
        "type": "check_in",
        "latitude": -34.6692,
        "longitude": -58.3650
    });
    let response = post_json(build_offline_app(), "/api/qr/attendance", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_with_invalid_payload_returns_field_details() {
    let body = json!({ "email": "nao-e-email", "password": "123" });
    let response = post_json(build_offline_app(), "/api/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Uno o más campos son inválidos.");
    assert!(json["details"]["email"].is_array());
    assert!(json["details"]["password"].is_array());
}

#[tokio::test]
async fn register_with_short_password_is_rejected() {
    let body = json!({ "email": "ana@predios.com", "password": "1", "fullName": "Ana" });
    let response = post_json(build_offline_app(), "/api/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["details"]["password"].is_array());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let response = get(build_offline_app(), "/api-docs/openapi.json").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["paths"]["/api/qr/attendance"]["post"].is_object());
    assert!(json["components"]["securitySchemes"]["api_jwt"].is_object());
    assert!(json["paths"]["/api/qr/assets/{id}"]["get"].is_object());
}

#[tokio::test]
async fn non_bearer_authorization_header_is_json_401() {
    for value in ["Basic dXNlcjpwYXNz", "Bearer", "abc.def.ghi"] {
        let request = Request::get("/api/assets")
            .header(header::AUTHORIZATION, value)
            .body(Body::empty())
            .unwrap();
        let response = send(build_offline_app(), request).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "cabeçalho {value}");
        assert_eq!(
            body_json(response).await["error"],
            "Token de autenticación inválido o ausente."
        );
    }
}

#[tokio::test]
async fn login_with_missing_fields_is_json_400() {
    let response = post_json(build_offline_app(), "/api/auth/login", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "La solicitud está mal formada.");
    assert!(json["details"]["reason"].is_string());
}

#[tokio::test]
async fn scan_with_unknown_type_is_json_400() {
    let body = json!({
        "code": "00000000-0000-0000-0000-000000000000",
        "type": "bogus",
        "latitude": -34.6692,
        "longitude": -58.3650
    });
    let response = post_json(scan_app(), "/api/qr/attendance", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "La solicitud está mal formada.");
    assert!(json["details"]["reason"].as_str().unwrap().contains("bogus"));
}

#[tokio::test]
async fn scan_without_latitude_is_json_400() {
    let body = json!({
        "code": "00000000-0000-0000-0000-000000000000",
        "type": "check_in",
        "longitude": -58.3650
    });
    let response = post_json(scan_app(), "/api/qr/attendance", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["details"]["reason"]
        .as_str()
        .unwrap()
        .contains("latitude"));
}

#[tokio::test]
async fn scan_with_latitude_out_of_range_reports_the_field() {
    let body = json!({
        "code": "00000000-0000-0000-0000-000000000000",
        "type": "check_in",
        "latitude": 91.0,
        "longitude": -58.3650
    });
    let response = post_json(scan_app(), "/api/qr/attendance", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Uno o más campos son inválidos.");
    assert_eq!(json["details"]["latitude"][0], "Latitud fuera de rango.");
}

#[tokio::test]
async fn non_uuid_path_id_is_json_400() {
    let response = get(get_asset_app(), "/api/assets/nao-e-uuid").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "La solicitud está mal formada.");
    assert!(json["details"]["reason"].is_string());
}
