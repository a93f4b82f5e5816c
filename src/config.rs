// src/config.rs

use std::{env, str::FromStr, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    common::i18n::I18nStore,
    db::{
        AssetRepository, AttendanceRepository, ContentRepository, PayrollRepository,
        ReportRepository, RequestRepository, StadiumRepository, UserRepository,
    },
    services::{
        attendance_service::{GeofencePolicy, DEFAULT_CHECKIN_RADIUS_METERS},
        AssetService, AttendanceService, AuthService, FileStorage,
    },
};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_ttl_days: i64,
    pub bind_addr: String,
    pub checkin_radius_meters: f64,
    pub upload_dir: String,
    pub public_base_url: String,
    pub max_upload_bytes: usize,
    pub db_max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET deve ser definido")?,
            jwt_ttl_days: env_or("JWT_TTL_DAYS", 7)?,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            checkin_radius_meters: env_or("CHECKIN_RADIUS_METERS", DEFAULT_CHECKIN_RADIUS_METERS)?,
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string()),
            public_base_url: env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string()),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 5)?,
        };

        if !(config.checkin_radius_meters.is_finite() && config.checkin_radius_meters > 0.0) {
            anyhow::bail!("CHECKIN_RADIUS_METERS deve ser um número positivo");
        }

        Ok(config)
    }
}

// Variável opcional com valor padrão; presente mas inválida é erro
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{} inválida ('{}'): {}", key, raw, e)),
        Err(_) => Ok(default),
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub config: Arc<AppConfig>,
    pub i18n_store: I18nStore,

    pub user_repo: UserRepository,
    pub stadium_repo: StadiumRepository,
    pub asset_repo: AssetRepository,
    pub request_repo: RequestRepository,
    pub payroll_repo: PayrollRepository,
    pub content_repo: ContentRepository,
    pub report_repo: ReportRepository,

    pub auth_service: AuthService,
    pub attendance_service: AttendanceService,
    pub asset_service: AssetService,
    pub storage: FileStorage,
}

impl AppState {
    pub async fn new(config: AppConfig) -> anyhow::Result<Self> {
        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&config.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool, config))
    }

    // --- Monta o gráfico de dependências ---
    pub fn from_pool(db_pool: PgPool, config: AppConfig) -> Self {
        let user_repo = UserRepository::new(db_pool.clone());
        let stadium_repo = StadiumRepository::new(db_pool.clone());
        let asset_repo = AssetRepository::new(db_pool.clone());
        let attendance_repo = AttendanceRepository::new(db_pool.clone());

        let auth_service = AuthService::new(user_repo.clone(), config.jwt_secret.clone(), config.jwt_ttl_days);
        let attendance_service = AttendanceService::new(
            stadium_repo.clone(),
            attendance_repo,
            GeofencePolicy::new(config.checkin_radius_meters),
        );
        let asset_service = AssetService::new(db_pool.clone(), asset_repo.clone(), stadium_repo.clone());
        let storage = FileStorage::new(&config.upload_dir, &config.public_base_url, config.max_upload_bytes);

        Self {
            request_repo: RequestRepository::new(db_pool.clone()),
            payroll_repo: PayrollRepository::new(db_pool.clone()),
            content_repo: ContentRepository::new(db_pool.clone()),
            report_repo: ReportRepository::new(db_pool.clone()),
            user_repo,
            stadium_repo,
            asset_repo,
            auth_service,
            attendance_service,
            asset_service,
            storage,
            i18n_store: I18nStore::shared(),
            config: Arc::new(config),
            db_pool,
        }
    }
}
