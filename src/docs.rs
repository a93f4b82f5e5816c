// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Predios ---
        handlers::stadiums::list_stadiums,
        handlers::stadiums::create_stadium,

        // --- Ativos ---
        handlers::assets::list_assets,
        handlers::assets::list_movements,

        // --- QR ---
        handlers::qr::scan_attendance,
        handlers::qr::move_asset,
        handlers::qr::stadium_qr,
        handlers::qr::asset_qr,

        // --- Fichajes ---
        handlers::attendance::my_attendance,

        // --- RRHH ---
        handlers::requests::create_request,
        handlers::payroll::my_payrolls,

        // --- Conteúdo ---
        handlers::news::list_news,
        handlers::courses::list_courses,

        // --- Upload ---
        handlers::upload::upload_file,

        // --- Relatórios ---
        handlers::reports::get_summary,
        handlers::reports::attendance_report,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::UserRole,
            models::auth::Profile,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,

            // --- Usuários ---
            models::user::CreateUserPayload,
            models::user::UpdateUserPayload,
            models::user::UpdateMePayload,

            // --- Predios ---
            models::stadium::Stadium,
            models::stadium::CreateStadiumPayload,
            models::stadium::UpdateStadiumPayload,

            // --- Ativos ---
            models::asset::AssetStatus,
            models::asset::MovementAction,
            models::asset::Asset,
            models::asset::AssetMovement,
            models::asset::CreateAssetPayload,
            models::asset::UpdateAssetPayload,

            // --- QR / Fichajes ---
            models::attendance::AttendanceType,
            models::attendance::AttendanceRecord,
            models::attendance::AttendanceScanPayload,
            handlers::qr::AssetMovePayload,
            crate::services::asset_service::MoveOutcome,

            // --- RRHH ---
            models::request::RequestType,
            models::request::RequestStatus,
            models::request::LeaveRequest,
            models::request::CreateRequestPayload,
            models::request::ReviewRequestPayload,
            models::payroll::PayrollStatus,
            models::payroll::Payroll,
            models::payroll::CreatePayrollPayload,

            // --- Conteúdo ---
            models::news::News,
            models::news::CreateNewsPayload,
            models::news::UpdateNewsPayload,
            models::course::Course,
            models::course::CreateCoursePayload,
            models::course::UpdateCoursePayload,

            // --- Upload / Relatórios ---
            handlers::upload::UploadResponse,
            models::report::ReportSummary,
            models::report::AssetStatusCount,
            models::report::AttendanceReportRow,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Users", description = "Funcionários e Perfil"),
        (name = "Stadiums", description = "Predios e Coordenadas"),
        (name = "Assets", description = "Maquinário e Histórico de Custódia"),
        (name = "QR", description = "Fichaje por QR e Movimentação de Ativos"),
        (name = "Attendance", description = "Registros de Fichaje"),
        (name = "Requests", description = "Férias, Licenças e Afins"),
        (name = "Payroll", description = "Recibos de Sueldo"),
        (name = "News", description = "Notícias Internas"),
        (name = "Courses", description = "Cursos de Capacitação"),
        (name = "Upload", description = "Arquivos"),
        (name = "Reports", description = "Indicadores Gerenciais")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
