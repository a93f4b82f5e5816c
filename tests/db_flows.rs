//! Fluxos de ponta a ponta contra um Postgres real (DATABASE_URL).
//! Rodar com: cargo test --test db_flows -- --ignored

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_state, get_auth, post_json_auth};
use predios_backend::build_router;
use predios_backend::config::AppState;
use predios_backend::models::asset::CreateAssetPayload;
use predios_backend::models::auth::UserRole;
use predios_backend::models::stadium::{CreateStadiumPayload, Stadium};
use predios_backend::models::user::CreateUserPayload;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

// Predio de referência em Dock Sud
const STADIUM_LAT: f64 = -34.6692;
const STADIUM_LNG: f64 = -58.3650;

async fn create_profile(state: &AppState, email: &str, role: UserRole) -> String {
    let payload = CreateUserPayload {
        email: email.to_string(),
        password: "senha-segura".to_string(),
        full_name: "Pessoa de Teste".to_string(),
        role,
        assigned_stadium_id: None,
        phone: None,
        address: None,
        dni: None,
    };
    let profile = state.auth_service.create_user(&payload).await.expect("perfil criado");
    state.auth_service.create_token(&profile).expect("token emitido")
}

async fn create_stadium(state: &AppState, name: &str) -> Stadium {
    let payload = CreateStadiumPayload {
        name: name.to_string(),
        address: None,
        city: Some("Avellaneda".to_string()),
        latitude: STADIUM_LAT,
        longitude: STADIUM_LNG,
    };
    state.stadium_repo.create(&payload).await.expect("predio criado")
}

fn scan(stadium_id: Uuid, latitude: f64, longitude: f64) -> serde_json::Value {
    json!({
        "code": stadium_id.to_string(),
        "type": "check_in",
        "latitude": latitude,
        "longitude": longitude
    })
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres em DATABASE_URL"]
async fn check_in_inside_radius_is_recorded_twice(pool: PgPool) {
    let state = build_test_state(pool.clone());
    let token = create_profile(&state, "emp@predios.com", UserRole::Employee).await;
    let stadium = create_stadium(&state, "Dock Sud").await;
    let app = build_router(state);

    for _ in 0..2 {
        let response = post_json_auth(
            app.clone(),
            "/api/qr/attendance",
            &token,
            scan(stadium.id, -34.6696, -58.3654),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["stadiumId"], stadium.id.to_string());
        assert!(json["distanceMeters"].as_f64().unwrap() < 100.0);
    }

    let response = get_auth(app, "/api/attendance/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres em DATABASE_URL"]
async fn check_in_outside_radius_is_rejected_with_distance(pool: PgPool) {
    let state = build_test_state(pool.clone());
    let token = create_profile(&state, "longe@predios.com", UserRole::Employee).await;
    let stadium = create_stadium(&state, "Dock Sud").await;
    let app = build_router(state);

    let response = post_json_auth(
        app,
        "/api/qr/attendance",
        &token,
        scan(stadium.id, -34.6700, -58.3660),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["details"]["distance"], 127.58);
    assert_eq!(json["details"]["maxDistance"], 100.0);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM attendance_records")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres em DATABASE_URL"]
async fn unknown_stadium_code_is_404(pool: PgPool) {
    let state = build_test_state(pool);
    let token = create_profile(&state, "perdido@predios.com", UserRole::Employee).await;
    let app = build_router(state);

    let response = post_json_auth(
        app.clone(),
        "/api/qr/attendance",
        &token,
        scan(Uuid::new_v4(), STADIUM_LAT, STADIUM_LNG),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let mut body = scan(Uuid::new_v4(), STADIUM_LAT, STADIUM_LNG);
    body["code"] = json!("qualquer-coisa");
    let response = post_json_auth(app, "/api/qr/attendance", &token, body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres em DATABASE_URL"]
async fn receive_then_transfer_updates_custody_and_history(pool: PgPool) {
    let state = build_test_state(pool);
    let token = create_profile(&state, "enc@predios.com", UserRole::Manager).await;
    let origin = create_stadium(&state, "Origem").await;
    let target = create_stadium(&state, "Destino").await;
    let asset = state
        .asset_repo
        .create(&CreateAssetPayload {
            name: "Cortadora de grama".to_string(),
            asset_type: "mower".to_string(),
            serial_number: Some("CG-001".to_string()),
            status: predios_backend::models::asset::AssetStatus::InUse,
            current_stadium_id: Some(origin.id),
            technical_specs: json!({ "potencia": "5hp" }),
            notes: None,
        })
        .await
        .expect("ativo criado");
    let app = build_router(state);

    // Recepção: passa a disponível no predio de destino
    let response = post_json_auth(
        app.clone(),
        "/api/qr/asset-move",
        &token,
        json!({ "code": asset.id.to_string(), "action": "receive", "stadiumId": target.id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["asset"]["status"], "available");
    assert_eq!(json["asset"]["currentStadiumId"], target.id.to_string());
    assert_eq!(json["movement"]["fromStadiumId"], origin.id.to_string());
    assert_eq!(json["movement"]["toStadiumId"], target.id.to_string());

    // Transferência: em uso, local atual não muda
    let response = post_json_auth(
        app.clone(),
        "/api/qr/asset-move",
        &token,
        json!({ "code": asset.id.to_string(), "action": "transfer", "stadiumId": origin.id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["asset"]["status"], "in_use");
    assert_eq!(json["asset"]["currentStadiumId"], target.id.to_string());
    assert_eq!(json["movement"]["toStadiumId"], origin.id.to_string());

    let response = get_auth(app, &format!("/api/assets/{}/movements", asset.id), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let history = body_json(response).await;
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["action"], "transfer");
    assert_eq!(history[1]["action"], "receive");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres em DATABASE_URL"]
async fn move_to_missing_stadium_leaves_asset_untouched(pool: PgPool) {
    let state = build_test_state(pool.clone());
    let token = create_profile(&state, "enc2@predios.com", UserRole::Employee).await;
    let asset = state
        .asset_repo
        .create(&CreateAssetPayload {
            name: "Rolo".to_string(),
            asset_type: "roller".to_string(),
            serial_number: None,
            status: predios_backend::models::asset::AssetStatus::Available,
            current_stadium_id: None,
            technical_specs: json!({}),
            notes: None,
        })
        .await
        .expect("ativo criado");
    let app = build_router(state);

    let response = post_json_auth(
        app,
        "/api/qr/asset-move",
        &token,
        json!({ "code": asset.id.to_string(), "action": "receive", "stadiumId": Uuid::new_v4() }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM asset_movements")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres em DATABASE_URL"]
async fn employee_cannot_reach_admin_routes(pool: PgPool) {
    let state = build_test_state(pool);
    let token = create_profile(&state, "so-emp@predios.com", UserRole::Employee).await;
    let app = build_router(state);

    let response = get_auth(app.clone(), "/api/users", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_json_auth(
        app,
        "/api/stadiums",
        &token,
        json!({ "name": "X", "latitude": 0.0, "longitude": 0.0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres em DATABASE_URL"]
async fn register_then_login_returns_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::post_json(
        app.clone(),
        "/api/auth/register",
        json!({ "email": "nova@predios.com", "password": "segredo1", "fullName": "Nova" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["user"]["role"], "employee");
    assert!(json["user"].get("passwordHash").is_none());

    let response = common::post_json(
        app.clone(),
        "/api/auth/register",
        json!({ "email": "nova@predios.com", "password": "segredo1", "fullName": "Nova" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = common::post_json(
        app,
        "/api/auth/login",
        json!({ "email": "nova@predios.com", "password": "segredo1" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["token"].is_string());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requer Postgres em DATABASE_URL"]
async fn summary_counts_employees_stadiums_and_todays_check_ins(pool: PgPool) {
    let state = build_test_state(pool);
    let admin = create_profile(&state, "chefe@predios.com", UserRole::Admin).await;
    let employee = create_profile(&state, "op@predios.com", UserRole::Employee).await;
    let stadium = create_stadium(&state, "Dock Sud").await;
    create_stadium(&state, "Sarandí").await;
    let app = build_router(state);

    let response = post_json_auth(
        app.clone(),
        "/api/qr/attendance",
        &employee,
        scan(stadium.id, STADIUM_LAT, STADIUM_LNG),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_auth(app, "/api/reports/summary", &admin).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["employees"], 1);
    assert_eq!(json["stadiums"], 2);
    assert_eq!(json["checkInsToday"], 1);
    assert_eq!(json["pendingRequests"], 0);
    assert!(json["assetsByStatus"].as_array().unwrap().is_empty());
}
