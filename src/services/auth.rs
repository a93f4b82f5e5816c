// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    common::error::AppError,
    db::{user_repo::NewProfile, UserRepository},
    models::{
        auth::{Claims, Profile, UserRole},
        user::CreateUserPayload,
    },
};

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    jwt_secret: String,
    token_ttl_days: i64,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, jwt_secret: String, token_ttl_days: i64) -> Self {
        Self { user_repo, jwt_secret, token_ttl_days }
    }

    // Auto-cadastro: sempre 'employee', sem predio
    pub async fn register_user(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<(String, Profile), AppError> {
        let password_hash = Self::hash_password(password).await?;

        let profile = self
            .user_repo
            .create(NewProfile {
                email,
                password_hash: &password_hash,
                full_name,
                role: UserRole::Employee,
                assigned_stadium_id: None,
                phone: None,
                address: None,
                dni: None,
            })
            .await?;

        tracing::info!("👤 Novo perfil registrado: {}", profile.id);
        let token = self.create_token(&profile)?;
        Ok((token, profile))
    }

    // Alta feita pelo admin
    pub async fn create_user(&self, payload: &CreateUserPayload) -> Result<Profile, AppError> {
        let password_hash = Self::hash_password(&payload.password).await?;

        let profile = self
            .user_repo
            .create(NewProfile {
                email: &payload.email,
                password_hash: &password_hash,
                full_name: &payload.full_name,
                role: payload.role,
                assigned_stadium_id: payload.assigned_stadium_id,
                phone: payload.phone.as_deref(),
                address: payload.address.as_deref(),
                dni: payload.dni.as_deref(),
            })
            .await?;

        tracing::info!("👤 Perfil {} criado com cargo {:?}", profile.id, profile.role);
        Ok(profile)
    }

    pub async fn login_user(&self, email: &str, password: &str) -> Result<(String, Profile), AppError> {
        let profile = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = profile.password_hash.clone();

        // Executa a verificação em um thread separado
        let is_password_valid = tokio::task::spawn_blocking(move || verify(&password_clone, &password_hash_clone))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.create_token(&profile)?;
        Ok((token, profile))
    }

    /// Valida o token e carrega o perfil atual (o cargo pode ter mudado desde a emissão).
    pub async fn validate_token(&self, token: &str) -> Result<Profile, AppError> {
        let claims = self.decode_claims(token)?;

        self.user_repo
            .find_by_id(claims.sub)
            .await?
            .ok_or(AppError::InvalidToken)
    }

    pub fn decode_claims(&self, token: &str) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &Validation::default(),
        )
        .map_err(|_| AppError::InvalidToken)?;
        Ok(token_data.claims)
    }

    pub fn create_token(&self, profile: &Profile) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(self.token_ttl_days);

        let claims = Claims {
            sub: profile.id,
            role: profile.role,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }

    async fn hash_password(password: &str) -> Result<String, AppError> {
        let password_clone = password.to_owned();
        let hashed = tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;
        Ok(hashed)
    }
}
