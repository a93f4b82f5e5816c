// src/lib.rs

use std::time::Duration;

use axum::{
    extract::{DefaultBodyLimit, State},
    http::{
        header::{ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware as axum_middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{auth::auth_guard, i18n::Locale},
};

// Folga para os cabeçalhos do multipart além do próprio arquivo
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

async fn route_not_found(State(app_state): State<AppState>, locale: Locale) -> ApiError {
    AppError::RouteNotFound.to_api_error(&locale, &app_state.i18n_store)
}

/// Monta o router completo da API a partir do estado já inicializado.
pub fn build_router(app_state: AppState) -> Router {
    let upload_limit = app_state.storage.max_bytes() + MULTIPART_OVERHEAD_BYTES;
    let upload_root = app_state.storage.root().clone();

    // Rotas públicas
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // Leitura de notícias é pública; criar exige token
    let news_root = post(handlers::news::create_news)
        .route_layer(axum_middleware::from_fn_with_state(app_state.clone(), auth_guard))
        .get(handlers::news::list_news);

    let public_routes = Router::new()
        .route("/api/health", get(handlers::health::health))
        .route("/api/health/db", get(handlers::health::health_db))
        .nest("/api/auth", auth_routes)
        .route("/api/news", news_root);

    // Rotas protegidas pelo Bearer
    let user_routes = Router::new()
        .route(
            "/",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route("/me", put(handlers::users::update_me))
        .route(
            "/{id}",
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        );

    let stadium_routes = Router::new()
        .route(
            "/",
            get(handlers::stadiums::list_stadiums).post(handlers::stadiums::create_stadium),
        )
        .route(
            "/{id}",
            get(handlers::stadiums::get_stadium)
                .put(handlers::stadiums::update_stadium)
                .delete(handlers::stadiums::delete_stadium),
        );

    let asset_routes = Router::new()
        .route(
            "/",
            get(handlers::assets::list_assets).post(handlers::assets::create_asset),
        )
        .route(
            "/{id}",
            get(handlers::assets::get_asset)
                .put(handlers::assets::update_asset)
                .delete(handlers::assets::delete_asset),
        )
        .route("/{id}/movements", get(handlers::assets::list_movements));

    let qr_routes = Router::new()
        .route("/attendance", post(handlers::qr::scan_attendance))
        .route("/asset-move", post(handlers::qr::move_asset))
        .route("/stadiums/{id}", get(handlers::qr::stadium_qr))
        .route("/assets/{id}", get(handlers::qr::asset_qr));

    let attendance_routes = Router::new()
        .route("/", get(handlers::attendance::list_attendance))
        .route("/me", get(handlers::attendance::my_attendance));

    let request_routes = Router::new()
        .route(
            "/",
            get(handlers::requests::list_requests).post(handlers::requests::create_request),
        )
        .route("/me", get(handlers::requests::my_requests))
        .route("/{id}/status", patch(handlers::requests::review_request));

    let payroll_routes = Router::new()
        .route(
            "/",
            get(handlers::payroll::list_payrolls).post(handlers::payroll::create_payroll),
        )
        .route("/me", get(handlers::payroll::my_payrolls))
        .route("/{id}", delete(handlers::payroll::delete_payroll));

    let news_routes = Router::new()
        .route("/all", get(handlers::news::list_all_news))
        .route(
            "/{id}",
            put(handlers::news::update_news).delete(handlers::news::delete_news),
        );

    let course_routes = Router::new()
        .route(
            "/",
            get(handlers::courses::list_courses).post(handlers::courses::create_course),
        )
        .route(
            "/{id}",
            put(handlers::courses::update_course).delete(handlers::courses::delete_course),
        );

    let report_routes = Router::new()
        .route("/summary", get(handlers::reports::get_summary))
        .route("/attendance", get(handlers::reports::attendance_report));

    let upload_routes = Router::new()
        .route("/", post(handlers::upload::upload_file))
        .layer(DefaultBodyLimit::max(upload_limit));

    let protected_routes = Router::new()
        .route("/api/auth/me", get(handlers::auth::get_me))
        .nest("/api/users", user_routes)
        .nest("/api/stadiums", stadium_routes)
        .nest("/api/assets", asset_routes)
        .nest("/api/qr", qr_routes)
        .nest("/api/attendance", attendance_routes)
        .nest("/api/requests", request_routes)
        .nest("/api/payroll", payroll_routes)
        .nest("/api/news", news_routes)
        .nest("/api/courses", course_routes)
        .nest("/api/reports", report_routes)
        .nest("/api/upload", upload_routes)
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, ACCEPT_LANGUAGE])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .nest_service("/uploads", ServeDir::new(upload_root))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
